use crate::utils::error::{Result, SalesError};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Branch codes are exactly 3 digits.
pub static BRANCH_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[0-9]{3}$").unwrap());

/// Commodity codes are exactly 8 alphanumeric characters.
pub static COMMODITY_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[a-zA-Z0-9]{8}$").unwrap());

/// Sales record files are named by an 8-digit sequence number.
pub static RECORD_FILE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{8}\.rcd$").unwrap());

/// Sales amounts are non-negative decimal integer literals.
pub static AMOUNT: LazyLock<Regex> = LazyLock::new(|| Regex::new("^[0-9]+$").unwrap());

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_directory(field_name: &str, path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(SalesError::ConfigError {
            message: format!("{}: directory {} does not exist", field_name, path.display()),
        });
    }
    if !path.is_dir() {
        return Err(SalesError::ConfigError {
            message: format!("{}: {} is not a directory", field_name, path.display()),
        });
    }
    Ok(())
}
