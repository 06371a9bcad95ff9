use thiserror::Error;

/// Every failure aborts the whole run; the display string is the single
/// user-facing message for that error kind.
#[derive(Error, Debug)]
pub enum SalesError {
    #[error("{category} definition file does not exist")]
    ReferenceNotFound { category: &'static str },

    #[error("{category} definition file has an invalid format")]
    InvalidReferenceFormat { category: &'static str },

    #[error("sales file names are not serial numbers")]
    NotSerialNumber,

    #[error("{file_name} has an invalid format")]
    InvalidRecordFormat { file_name: String },

    #[error("{file_name} contains an invalid branch code")]
    InvalidBranchCode { file_name: String },

    #[error("{file_name} contains an invalid commodity code")]
    InvalidCommodityCode { file_name: String },

    #[error("{file_name} contains a non-numeric sales amount")]
    NonNumericAmount { file_name: String },

    #[error("total amount exceeded 10 digits")]
    TotalExceeded,

    #[error("configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, SalesError>;
