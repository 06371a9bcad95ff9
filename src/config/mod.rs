use crate::utils::error::Result;
use crate::utils::validation::{validate_directory, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "sales-summary")]
#[command(about = "Aggregates daily sales record files into branch and commodity summaries")]
pub struct CliConfig {
    /// Directory holding branch.lst, commodity.lst and the NNNNNNNN.rcd files
    pub directory: PathBuf,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_directory("directory", &self.directory)
    }
}
