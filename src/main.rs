use clap::Parser;
use sales_summary::utils::{logger, validation::Validate};
use sales_summary::{BatchEngine, CliConfig, SummaryPipeline};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting sales-summary");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let pipeline = SummaryPipeline::new(config.directory.clone());
    let engine = BatchEngine::new(pipeline);

    match engine.run() {
        Ok(()) => {
            tracing::info!(
                "Summary files written to {}",
                config.directory.display()
            );
        }
        Err(e) => {
            tracing::error!("Run failed: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
