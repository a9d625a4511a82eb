//! Error types for gateway and registry record handling.

use thiserror::Error;

use crate::types::GatewayType;

/// Result type alias for record operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for record parsing, validation and catalog operations
#[derive(Debug, Error)]
pub enum Error {
    /// Gateway kind outside the closed set
    #[error("unknown gateway type: {0}")]
    UnknownGatewayType(String),

    /// Required field absent or empty
    #[error("missing required field: {0}")]
    MissingField(String),

    /// Populated config block does not match the gateway kind
    #[error("config does not match gateway type {gateway_type}: expected {expected}, found {found}")]
    ConfigTypeMismatch {
        gateway_type: GatewayType,
        expected: &'static str,
        found: String,
    },

    /// Timestamp in neither accepted representation
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// Field value rejected
    #[error("validation error: field={field} message={message}")]
    Validation { field: String, message: String },

    /// Record could not be decoded at all
    #[error("invalid record: {0}")]
    InvalidRecord(String),

    /// Gateway not present in the catalog
    #[error("gateway not found: {0}")]
    GatewayNotFound(String),

    /// Registry instance not present in the catalog
    #[error("nacos instance not found: {0}")]
    NacosInstanceNotFound(String),

    /// Record with the same id already registered
    #[error("{kind} already exists: {id}")]
    AlreadyExists { kind: &'static str, id: String },

    /// Another gateway already points at the same backend
    #[error("gateway connection already registered by {existing_id}")]
    DuplicateConnection { existing_id: String },

    /// Catalog has been closed
    #[error("catalog is closed")]
    CatalogClosed,

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Creates a new missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Error::MissingField(field.into())
    }

    /// Creates a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates a new config/type mismatch error
    pub fn config_type_mismatch(
        gateway_type: GatewayType,
        found: impl Into<String>,
    ) -> Self {
        Error::ConfigTypeMismatch {
            gateway_type,
            expected: gateway_type.config_key(),
            found: found.into(),
        }
    }

    /// Creates a new invalid timestamp error
    pub fn invalid_timestamp(message: impl Into<String>) -> Self {
        Error::InvalidTimestamp(message.into())
    }

    /// Creates a new invalid record error
    pub fn invalid_record(message: impl Into<String>) -> Self {
        Error::InvalidRecord(message.into())
    }

    /// Creates a new already exists error
    pub fn already_exists(kind: &'static str, id: impl Into<String>) -> Self {
        Error::AlreadyExists {
            kind,
            id: id.into(),
        }
    }

    /// Returns true for errors raised while validating a record
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::UnknownGatewayType(_)
                | Error::MissingField(_)
                | Error::ConfigTypeMismatch { .. }
                | Error::InvalidTimestamp(_)
                | Error::Validation { .. }
        )
    }
}
