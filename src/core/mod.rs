pub mod checklist;
pub mod engine;
pub mod estimate;
pub mod export;
pub mod negotiate;
pub mod recommend;
pub mod vendor_store;

pub use crate::domain::model::{
    CostEstimate, FilterCriteria, NegotiationResult, Recommendation, ServiceSelection, Vendor,
};
pub use crate::domain::ports::{ConfigProvider, OutputFormat, Pipeline, Storage};
pub use crate::utils::error::Result;
