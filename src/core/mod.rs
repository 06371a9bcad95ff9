pub mod aggregate;
pub mod discover;
pub mod engine;
pub mod pipeline;
pub mod reference;
pub mod summary;

pub use crate::domain::model::{
    Extraction, RecordFile, ReferenceTable, SalesRecord, SummaryTables,
};
pub use crate::domain::ports::Pipeline;
pub use crate::utils::error::Result;
