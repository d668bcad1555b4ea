// Domain layer: records, derived results and the ports the pipelines depend on.

pub mod model;
pub mod ports;
