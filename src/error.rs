use crate::domain::types::{ErrorMessage, FieldName, ResourceId};
use thiserror::Error;

/// Drink ledger error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store rejected {collection} mutation: {message}")]
    Store {
        collection: &'static str,
        message: ErrorMessage,
    },

    #[error("Invalid input: {field}")]
    InvalidInput { field: FieldName },

    #[error("Not found: {resource}")]
    NotFound { resource: ResourceId },

    #[error("Record store closed: {0}")]
    StoreClosed(&'static str),
}

impl Error {
    pub fn store(collection: &'static str, message: impl Into<String>) -> Self {
        Self::Store {
            collection,
            message: ErrorMessage::new(message.into()),
        }
    }

    pub fn invalid_input(field: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: FieldName::new(field.into()),
        }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: ResourceId::new(resource.into()),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
