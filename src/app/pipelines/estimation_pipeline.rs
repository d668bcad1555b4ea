use crate::core::estimate::estimate;
use crate::core::export::{cost_breakdown_csv, COST_BREAKDOWN_FILE};
use crate::core::negotiate::negotiate;
use crate::core::{ConfigProvider, Pipeline, ServiceSelection, Storage};
use crate::domain::model::EstimationReport;
use crate::utils::error::Result;

/// Raw user input for one estimate, validated in `extract`.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimateRequest {
    pub services: Vec<String>,
    pub tier: String,
    pub guests: i64,
    pub quote: Option<f64>,
}

pub struct EstimationPipeline<S: Storage, C: ConfigProvider> {
    pub(crate) storage: S,
    pub(crate) config: C,
    pub(crate) request: EstimateRequest,
    pub(crate) export: bool,
}

impl<S: Storage, C: ConfigProvider> EstimationPipeline<S, C> {
    pub fn new(storage: S, config: C, request: EstimateRequest) -> Self {
        Self {
            storage,
            config,
            request,
            export: false,
        }
    }

    pub fn with_export(mut self, export: bool) -> Self {
        self.export = export;
        self
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for EstimationPipeline<S, C> {
    type Input = ServiceSelection;
    type Output = EstimationReport;

    async fn extract(&self) -> Result<ServiceSelection> {
        let request = &self.request;
        ServiceSelection::parse(&request.services, &request.tier, request.guests)
    }

    async fn transform(&self, selection: ServiceSelection) -> Result<EstimationReport> {
        let estimate = estimate(&selection);
        tracing::info!(
            "💰 Estimated total {:.0} ({} tier, {} guests)",
            estimate.total,
            estimate.tier,
            estimate.guests
        );

        let negotiation = self
            .request
            .quote
            .map(|quote| negotiate(estimate.total, quote))
            .transpose()?;

        Ok(EstimationReport {
            estimate,
            negotiation,
            generated_at: chrono::Utc::now(),
        })
    }

    async fn load(&self, report: &EstimationReport) -> Result<Option<String>> {
        if !self.export {
            return Ok(None);
        }

        let data = cost_breakdown_csv(&report.estimate)?;
        let output_path = format!("{}/{}", self.config.output_path(), COST_BREAKDOWN_FILE);
        self.storage.write_file(&output_path, &data).await?;

        Ok(Some(output_path))
    }
}
