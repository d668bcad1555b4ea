// Application layer: concrete pipelines wired to storage and config, plus terminal output.

pub mod pipelines;
pub mod render;
