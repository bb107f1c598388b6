//! Parameter descriptors
//!
//! A [`ParameterDescriptor`] is the reflected view of a single typed parameter:
//! its name, declared type and an optional description annotation.

use thiserror::Error;
use tracing::trace;

use crate::{ProviderError, Schema, SchemaProvider};

/// Access to a description attached to a declaration.
pub trait DescriptionLookup {
    fn description(&self) -> Option<&str>;
}

/// Builtin scalar types that map directly to a literal schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinType {
    Bool,
    Int,
    String,
    Float,
}

impl BuiltinType {
    /// Look up a builtin by its declared name (`bool`, `int`, `string`, `float`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "bool" => Some(BuiltinType::Bool),
            "int" => Some(BuiltinType::Int),
            "string" => Some(BuiltinType::String),
            "float" => Some(BuiltinType::Float),
            _ => None,
        }
    }

    pub fn schema(self) -> Schema {
        match self {
            BuiltinType::Bool => Schema::literal_boolean(),
            BuiltinType::Int => Schema::literal_integer(),
            BuiltinType::String => Schema::literal_string(),
            BuiltinType::Float => Schema::literal_float(),
        }
    }
}

/// Declared type of a parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    /// A type built into the host language, by name. Not every builtin has a schema.
    Builtin(String),
    /// A user-declared type, resolved through a [`SchemaProvider`].
    Named(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterDescriptor {
    pub name: String,
    pub type_ref: TypeRef,
    pub description: Option<String>,
}

impl ParameterDescriptor {
    pub fn new(name: impl Into<String>, type_ref: TypeRef) -> Self {
        Self {
            name: name.into(),
            type_ref,
            description: None,
        }
    }

    pub fn builtin(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::new(name, TypeRef::Builtin(type_name.into()))
    }

    pub fn named(name: impl Into<String>, type_id: impl Into<String>) -> Self {
        Self::new(name, TypeRef::Named(type_id.into()))
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl DescriptionLookup for ParameterDescriptor {
    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Why a [`TypeRef`] could not be turned into a schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Builtin type without a schema equivalent.
    #[error("No support for builtin type {0:?}")]
    UnsupportedBuiltin(String),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl TypeRef {
    /// Resolve the declared type to a source schema.
    pub fn resolve(&self, provider: &dyn SchemaProvider) -> Result<Schema, ResolveError> {
        match self {
            TypeRef::Builtin(name) => BuiltinType::from_name(name)
                .map(BuiltinType::schema)
                .ok_or_else(|| ResolveError::UnsupportedBuiltin(name.clone())),
            TypeRef::Named(type_id) => {
                trace!(type_id = type_id.as_str(), "resolving named parameter type");
                Ok(provider.get_schema(type_id)?)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SchemaRegistry, StringSchema};

    #[test]
    fn test_builtin_names() {
        assert_eq!(BuiltinType::from_name("bool"), Some(BuiltinType::Bool));
        assert_eq!(BuiltinType::from_name("float"), Some(BuiltinType::Float));
        assert_eq!(BuiltinType::from_name("iterable"), None);
    }

    #[test]
    fn test_resolve_builtin() {
        let registry = SchemaRegistry::new();
        let param = ParameterDescriptor::builtin("param", "int");
        assert_eq!(
            param.type_ref.resolve(&registry),
            Ok(Schema::literal_integer())
        );
    }

    #[test]
    fn test_resolve_unsupported_builtin() {
        let registry = SchemaRegistry::new();
        let param = ParameterDescriptor::builtin("param", "callable");
        assert_eq!(
            param.type_ref.resolve(&registry),
            Err(ResolveError::UnsupportedBuiltin("callable".to_string()))
        );
    }

    #[test]
    fn test_resolve_error_messages() {
        assert_eq!(
            ResolveError::UnsupportedBuiltin("callable".to_string()).to_string(),
            "No support for builtin type \"callable\""
        );
        assert_eq!(
            ResolveError::from(ProviderError::NotFound("Missing".to_string())).to_string(),
            "Type \"Missing\" does not exist"
        );
    }

    #[test]
    fn test_resolve_named_through_provider() {
        let mut registry = SchemaRegistry::new();
        registry.register("GivenName", StringSchema::new().min_length(3));

        let param = ParameterDescriptor::named("name", "GivenName").with_description("a name");
        assert_eq!(param.description(), Some("a name"));
        assert_eq!(
            param.type_ref.resolve(&registry),
            Ok(StringSchema::new().min_length(3).into())
        );
        assert_eq!(
            ParameterDescriptor::named("name", "Missing")
                .type_ref
                .resolve(&registry),
            Err(ResolveError::Provider(ProviderError::NotFound(
                "Missing".to_string()
            )))
        );
    }
}
