use thiserror::Error;

use crate::domain::model::RecordKind;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("ZenDesk request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("{kind} not found: {id}")]
    NotFoundError { kind: RecordKind, id: String },

    #[error("Unexpected status {status} from ZenDesk while {context}")]
    StatusError { status: u16, context: String },

    #[error("Expected 201 Created from ZenDesk user create, got {status}")]
    UserCreateError { status: u16 },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, SyncError>;
