use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

/// Runs a pipeline through its three stages in order, stopping at the
/// first error. Nothing is written to disk unless extract and transform
/// both succeeded.
pub struct BatchEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> BatchEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<()> {
        tracing::info!("loading reference tables and discovering record files");
        let extraction = self.pipeline.extract()?;
        tracing::info!(
            "loaded {} branches, {} commodities, {} record files",
            extraction.branches.len(),
            extraction.commodities.len(),
            extraction.record_files.len()
        );

        tracing::info!("aggregating sales records");
        let tables = self.pipeline.transform(extraction)?;

        tracing::info!("writing summary files");
        self.pipeline.load(&tables)?;

        Ok(())
    }
}
