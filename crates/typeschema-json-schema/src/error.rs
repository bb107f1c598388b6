use thiserror::Error;
use typeschema::{ProviderError, ResolveError};

/// Errors raised while building or generating JSON Schema
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Empty or malformed input, such as a blank type identifier
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The type identifier does not resolve to a schema
    #[error("Type {0:?} does not exist")]
    NotFound(String),

    /// A builtin type has no JSON Schema equivalent
    #[error("No support for type {0:?}")]
    UnsupportedType(String),

    /// A source schema node kind has no translation rule
    #[error("Schema of kind {kind:?} cannot be converted to JSON Schema directly")]
    UnsupportedSchema { kind: String },

    /// A JSON Schema node was constructed with conflicting keywords
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// serde_json refused the schema tree
    #[error("Failed to serialize JSON Schema: {0}")]
    Serialization(String),
}

impl From<ProviderError> for Error {
    fn from(error: ProviderError) -> Self {
        match error {
            ProviderError::InvalidArgument(type_id) => {
                Error::InvalidArgument(format!("invalid type identifier {type_id:?}"))
            }
            ProviderError::NotFound(type_id) => Error::NotFound(type_id),
            ProviderError::InvalidType(type_id) => Error::UnsupportedType(type_id),
        }
    }
}

impl From<ResolveError> for Error {
    fn from(error: ResolveError) -> Self {
        match error {
            ResolveError::UnsupportedBuiltin(name) => Error::UnsupportedType(name),
            ResolveError::Provider(error) => error.into(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Serialization(error.to_string())
    }
}
