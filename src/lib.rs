pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::CliConfig;
pub use crate::core::engine::BatchEngine;
pub use crate::core::pipeline::SummaryPipeline;
pub use crate::utils::error::{Result, SalesError};
