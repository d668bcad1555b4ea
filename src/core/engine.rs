use crate::core::Pipeline;
use crate::utils::error::Result;
use std::time::Instant;

#[derive(Debug)]
pub struct RunOutcome<T> {
    pub output: T,
    pub export_path: Option<String>,
}

pub struct PlannerEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> PlannerEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<RunOutcome<P::Output>> {
        let started = Instant::now();

        tracing::debug!("Extracting input...");
        let input = self.pipeline.extract().await?;

        tracing::debug!("Computing result...");
        let output = self.pipeline.transform(input).await?;

        tracing::debug!("Writing export...");
        let export_path = self.pipeline.load(&output).await?;
        if let Some(path) = &export_path {
            tracing::info!("📁 Export saved to: {}", path);
        }

        tracing::debug!("Finished in {:?}", started.elapsed());
        Ok(RunOutcome {
            output,
            export_path,
        })
    }
}
