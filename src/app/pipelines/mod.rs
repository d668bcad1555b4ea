pub mod estimation_pipeline;
pub mod recommendation_pipeline;
