use crate::core::aggregate::aggregate;
use crate::core::discover::discover_record_files;
use crate::core::reference::load_reference;
use crate::core::summary::write_summary;
use crate::domain::model::{Extraction, SummaryTables};
use crate::domain::ports::Pipeline;
use crate::utils::error::Result;
use crate::utils::validation::{BRANCH_CODE, COMMODITY_CODE};
use std::path::PathBuf;

pub const FILE_NAME_BRANCH_LST: &str = "branch.lst";
pub const FILE_NAME_COMMODITY_LST: &str = "commodity.lst";
pub const FILE_NAME_BRANCH_OUT: &str = "branch.out";
pub const FILE_NAME_COMMODITY_OUT: &str = "commodity.out";

/// The whole batch run against one directory: reference files, record
/// files, and summary files all live directly inside it.
pub struct SummaryPipeline {
    directory: PathBuf,
}

impl SummaryPipeline {
    pub fn new(directory: PathBuf) -> Self {
        Self { directory }
    }
}

impl Pipeline for SummaryPipeline {
    fn extract(&self) -> Result<Extraction> {
        let branches = load_reference(
            &self.directory,
            FILE_NAME_BRANCH_LST,
            "branch",
            &BRANCH_CODE,
        )?;
        let commodities = load_reference(
            &self.directory,
            FILE_NAME_COMMODITY_LST,
            "commodity",
            &COMMODITY_CODE,
        )?;
        let record_files = discover_record_files(&self.directory)?;
        Ok(Extraction {
            branches,
            commodities,
            record_files,
        })
    }

    fn transform(&self, input: Extraction) -> Result<SummaryTables> {
        let Extraction {
            mut branches,
            mut commodities,
            record_files,
        } = input;
        aggregate(&record_files, &mut branches, &mut commodities)?;
        Ok(SummaryTables {
            branches,
            commodities,
        })
    }

    fn load(&self, tables: &SummaryTables) -> Result<()> {
        write_summary(&self.directory, FILE_NAME_BRANCH_OUT, &tables.branches)?;
        write_summary(&self.directory, FILE_NAME_COMMODITY_OUT, &tables.commodities)?;
        Ok(())
    }
}
