use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 2] = ["table", "json"];

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "table" => Some(OutputFormat::Table),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

pub trait ConfigProvider: Send + Sync {
    fn vendors_file(&self) -> &str;
    fn output_path(&self) -> &str;
    fn output_format(&self) -> OutputFormat;
}

/// Extract, transform and load for one user action. `load` returns where the
/// export was written, if anything was written.
#[async_trait]
pub trait Pipeline: Send + Sync {
    type Input: Send;
    type Output: Send + Sync;

    async fn extract(&self) -> Result<Self::Input>;
    async fn transform(&self, data: Self::Input) -> Result<Self::Output>;
    async fn load(&self, result: &Self::Output) -> Result<Option<String>>;
}
