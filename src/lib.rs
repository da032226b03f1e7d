pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{records::JsonRecordStore, zendesk::ZendeskClient};
pub use crate::config::CliConfig;
pub use crate::core::sync::{SyncEngine, SyncOutcome};
pub use crate::utils::error::{Result, SyncError};
