pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};
pub use config::{cli::LocalStorage, PlannerConfig};

pub use app::pipelines::estimation_pipeline::{EstimateRequest, EstimationPipeline};
pub use app::pipelines::recommendation_pipeline::RecommendationPipeline;
pub use core::engine::{PlannerEngine, RunOutcome};
pub use core::vendor_store::VendorTable;
pub use utils::error::{PlannerError, Result};
