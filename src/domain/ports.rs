use crate::domain::model::{Extraction, SummaryTables};
use crate::utils::error::Result;

/// The batch run as three sequential stages. Any error aborts the run
/// before the next stage begins, so no output file exists unless every
/// earlier stage succeeded.
pub trait Pipeline {
    /// Load both reference tables and discover the record files.
    fn extract(&self) -> Result<Extraction>;

    /// Validate every record and accumulate totals.
    fn transform(&self, input: Extraction) -> Result<SummaryTables>;

    /// Write the branch and commodity summary files.
    fn load(&self, tables: &SummaryTables) -> Result<()>;
}
