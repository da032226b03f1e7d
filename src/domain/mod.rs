// Domain layer: record models and ports (interfaces) consumed by the core.

pub mod model;
pub mod ports;
