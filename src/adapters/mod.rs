// Adapters layer: concrete implementations for external systems.

pub mod records;
pub mod zendesk;
