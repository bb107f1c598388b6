//! Resolution of type identifiers to schemas
//!
//! The [`SchemaProvider`] trait is the seam between the schema tree and whatever
//! discovers schemas in the first place. [`SchemaRegistry`] is the in-memory
//! implementation: schemas are registered under an identifier, either explicitly
//! or through a type implementing [`HasSchema`].

use indexmap::IndexMap;
use tracing::trace;

use crate::{ProviderError, Schema};

/// Resolves a type identifier to its source schema.
pub trait SchemaProvider {
    /// Fails with [`ProviderError::InvalidArgument`] for an empty identifier,
    /// [`ProviderError::NotFound`] for an unknown one and
    /// [`ProviderError::InvalidType`] when the identifier names a type without a schema.
    fn get_schema(&self, type_id: &str) -> Result<Schema, ProviderError>;
}

impl<F> SchemaProvider for F
where
    F: Fn(&str) -> Result<Schema, ProviderError>,
{
    fn get_schema(&self, type_id: &str) -> Result<Schema, ProviderError> {
        self(type_id)
    }
}

/// A type that knows its own schema.
///
/// # Example
///
/// ```
/// use typeschema::{HasSchema, Schema, StringSchema};
///
/// struct GivenName(String);
///
/// impl HasSchema for GivenName {
///     fn type_name() -> &'static str {
///         "GivenName"
///     }
///
///     fn schema() -> Schema {
///         StringSchema::new()
///             .description("First name of a person")
///             .min_length(3)
///             .max_length(20)
///             .into()
///     }
/// }
/// ```
pub trait HasSchema {
    /// Identifier the type is registered under.
    fn type_name() -> &'static str;

    fn schema() -> Schema;
}

#[derive(Debug, Clone, PartialEq)]
enum Entry {
    Schema(Schema),
    /// Known type that carries no schema.
    Opaque,
}

/// In-memory [`SchemaProvider`] keyed by type identifier.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    entries: IndexMap<String, Entry>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `schema` under `type_id`, replacing any previous entry.
    pub fn register(&mut self, type_id: impl Into<String>, schema: impl Into<Schema>) -> &mut Self {
        self.entries
            .insert(type_id.into(), Entry::Schema(schema.into()));
        self
    }

    pub fn register_type<T: HasSchema>(&mut self) -> &mut Self {
        self.register(T::type_name(), T::schema())
    }

    /// Record a type that exists but has no schema.
    pub fn register_opaque(&mut self, type_id: impl Into<String>) -> &mut Self {
        self.entries.insert(type_id.into(), Entry::Opaque);
        self
    }

    pub fn contains(&self, type_id: &str) -> bool {
        self.entries.contains_key(type_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered identifiers in registration order.
    pub fn type_ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl SchemaProvider for SchemaRegistry {
    fn get_schema(&self, type_id: &str) -> Result<Schema, ProviderError> {
        if type_id.trim().is_empty() {
            return Err(ProviderError::InvalidArgument(type_id.to_string()));
        }
        match self.entries.get(type_id) {
            Some(Entry::Schema(schema)) => Ok(schema.clone()),
            Some(Entry::Opaque) => Err(ProviderError::InvalidType(type_id.to_string())),
            None => {
                trace!(type_id, "type not registered");
                Err(ProviderError::NotFound(type_id.to_string()))
            }
        }
    }
}

impl FromIterator<(String, Schema)> for SchemaRegistry {
    fn from_iter<T: IntoIterator<Item = (String, Schema)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(type_id, schema)| (type_id, Entry::Schema(schema)))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{IntegerSchema, StringSchema};

    struct Age;

    impl HasSchema for Age {
        fn type_name() -> &'static str {
            "Age"
        }

        fn schema() -> Schema {
            IntegerSchema::new().minimum(1).maximum(120).into()
        }
    }

    #[test]
    fn test_register_and_resolve() {
        let mut registry = SchemaRegistry::new();
        registry
            .register("GivenName", StringSchema::new().min_length(3))
            .register_type::<Age>();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get_schema("Age"), Ok(Age::schema()));
        assert_eq!(
            registry.type_ids().collect::<Vec<_>>(),
            vec!["GivenName", "Age"]
        );
    }

    #[test]
    fn test_empty_identifier_is_invalid() {
        let registry = SchemaRegistry::new();
        assert_eq!(
            registry.get_schema(""),
            Err(ProviderError::InvalidArgument(String::new()))
        );
        assert!(matches!(
            registry.get_schema("   "),
            Err(ProviderError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_unknown_identifier_is_not_found() {
        let registry = SchemaRegistry::new();
        assert_eq!(
            registry.get_schema("not-a-class"),
            Err(ProviderError::NotFound("not-a-class".to_string()))
        );
    }

    #[test]
    fn test_opaque_type_is_invalid_type() {
        let mut registry = SchemaRegistry::new();
        registry.register_opaque("DateTimeImmutable");
        assert_eq!(
            registry.get_schema("DateTimeImmutable"),
            Err(ProviderError::InvalidType("DateTimeImmutable".to_string()))
        );
    }

    #[test]
    fn test_closure_provider() {
        let provider = |type_id: &str| match type_id {
            "Flag" => Ok(Schema::literal_boolean()),
            other => Err(ProviderError::NotFound(other.to_string())),
        };
        assert_eq!(provider.get_schema("Flag"), Ok(Schema::literal_boolean()));
        assert!(provider.get_schema("Other").is_err());
    }
}
