//! Error types for the typeschema crate

use thiserror::Error;

/// Errors a [`SchemaProvider`](crate::SchemaProvider) reports when resolving a type id
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The type identifier is empty or malformed
    #[error("Invalid type identifier: {0:?}")]
    InvalidArgument(String),

    /// No schema is known for the type identifier
    #[error("Type {0:?} does not exist")]
    NotFound(String),

    /// The identifier names a type that does not carry a schema
    #[error("Type {0:?} has no schema")]
    InvalidType(String),
}
