use std::time::Instant;

use crate::core::Pipeline;
use crate::utils::error::Result;

/// Drives the three pipeline phases in sequence. No retries, no
/// checkpointing: the first error aborts the run before output exists.
pub struct BatchEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> BatchEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<String> {
        let started = Instant::now();

        tracing::info!("Enumerating input directory...");
        let entries = self.pipeline.extract()?;
        tracing::info!("Found {} entries", entries.len());

        tracing::info!("Running face detection...");
        let table = self.pipeline.transform(entries)?;
        tracing::info!(
            "Tabulated {} records ({} skipped)",
            table.records.len(),
            table.skipped.len()
        );

        tracing::info!("Writing summary...");
        let output_path = self.pipeline.load(table)?;
        tracing::info!(
            "Output saved to: {} (took {:?})",
            output_path,
            started.elapsed()
        );

        Ok(output_path)
    }
}
