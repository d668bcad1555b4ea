use crate::core::export::{recommendations_csv, RECOMMENDATIONS_FILE};
use crate::core::recommend::recommend;
use crate::core::vendor_store::VendorTable;
use crate::core::{ConfigProvider, FilterCriteria, Pipeline, Recommendation, Storage};
use crate::utils::error::{PlannerError, Result};

pub struct RecommendationPipeline<S: Storage, C: ConfigProvider> {
    pub(crate) storage: S,
    pub(crate) config: C,
    pub(crate) criteria: FilterCriteria,
    pub(crate) export: bool,
}

impl<S: Storage, C: ConfigProvider> RecommendationPipeline<S, C> {
    pub fn new(storage: S, config: C, criteria: FilterCriteria) -> Self {
        Self {
            storage,
            config,
            criteria,
            export: false,
        }
    }

    pub fn with_export(mut self, export: bool) -> Self {
        self.export = export;
        self
    }
}

/// Reads the vendor CSV through `storage`; every failure here is a load error.
pub async fn load_vendor_table<S: Storage>(storage: &S, path: &str) -> Result<VendorTable> {
    tracing::debug!("Reading vendor list from: {}", path);
    let data = storage.read_file(path).await.map_err(|e| match e {
        PlannerError::IoError(io) => PlannerError::load(path, io.to_string()),
        other => other,
    })?;
    VendorTable::from_csv_bytes(&data, path)
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for RecommendationPipeline<S, C> {
    type Input = VendorTable;
    type Output = Recommendation;

    async fn extract(&self) -> Result<VendorTable> {
        let table = load_vendor_table(&self.storage, self.config.vendors_file()).await?;
        tracing::info!("📥 Loaded {} vendors", table.len());
        Ok(table)
    }

    async fn transform(&self, table: VendorTable) -> Result<Recommendation> {
        let result = recommend(&table, &self.criteria);
        if result.is_empty() {
            tracing::warn!(
                "No vendors matched event type '{}' in '{}' under {}",
                self.criteria.event_type,
                self.criteria.city,
                self.criteria.max_budget
            );
        }
        Ok(result)
    }

    async fn load(&self, result: &Recommendation) -> Result<Option<String>> {
        if !self.export {
            return Ok(None);
        }

        let data = recommendations_csv(&result.vendors)?;
        let output_path = format!("{}/{}", self.config.output_path(), RECOMMENDATIONS_FILE);

        tracing::debug!("Writing {} bytes to {}", data.len(), output_path);
        self.storage.write_file(&output_path, &data).await?;

        Ok(Some(output_path))
    }
}
