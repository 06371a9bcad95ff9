use crate::domain::model::ReferenceTable;
use crate::utils::error::{Result, SalesError};
use regex::Regex;
use std::path::Path;

/// Loads a `code,name` definition file into a reference table with
/// zero-initialized totals.
///
/// Every line must split into exactly two comma-separated fields: a code
/// matching `code_pattern` and a non-empty name. Blank lines are
/// malformed too. A missing file and a malformed line are distinct
/// errors, both fatal to the run.
pub fn load_reference(
    dir: &Path,
    file_name: &str,
    category: &'static str,
    code_pattern: &Regex,
) -> Result<ReferenceTable> {
    let path = dir.join(file_name);
    if !path.is_file() {
        return Err(SalesError::ReferenceNotFound { category });
    }

    let content = std::fs::read_to_string(&path)?;
    let mut table = ReferenceTable::new(category);
    for line in content.lines() {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != 2 || !code_pattern.is_match(fields[0]) || fields[1].is_empty() {
            return Err(SalesError::InvalidReferenceFormat { category });
        }
        table.insert(fields[0].to_string(), fields[1].to_string());
    }

    tracing::debug!("loaded {} {} entries from {}", table.len(), category, file_name);
    Ok(table)
}
