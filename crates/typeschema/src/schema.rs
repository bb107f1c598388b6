//! Source schema tree
//!
//! A [`Schema`] describes the shape of a value in the source type system:
//! constrained primitives, lists, enums, closed shapes, interfaces and explicit
//! unions. Every node carries an optional human-readable description.
//!
//! Nodes are plain data built bottom-up, either with struct literals or with the
//! chainable builder methods on each node type:
//!
//! ```
//! use typeschema::{Schema, ShapeSchema, StringSchema};
//!
//! let full_name: Schema = ShapeSchema::new()
//!     .description("First and last name of a person")
//!     .property("givenName", StringSchema::new().min_length(3).max_length(20))
//!     .optional_property("familyName", Schema::literal_string())
//!     .into();
//! assert_eq!(full_name.kind(), "Shape");
//! ```

use indexmap::IndexMap;

/// A node of the source schema tree.
///
/// The set of kinds may grow; consumers must handle unknown kinds.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Schema {
    LiteralBoolean(LiteralSchema),
    LiteralInteger(LiteralSchema),
    LiteralString(LiteralSchema),
    LiteralFloat(LiteralSchema),
    Integer(IntegerSchema),
    Float(FloatSchema),
    String(StringSchema),
    List(ListSchema),
    Enum(EnumSchema),
    Optional(OptionalSchema),
    Shape(ShapeSchema),
    Interface(InterfaceSchema),
    OneOf(OneOfSchema),
}

impl Schema {
    pub fn literal_boolean() -> Self {
        Schema::LiteralBoolean(LiteralSchema::default())
    }

    pub fn literal_integer() -> Self {
        Schema::LiteralInteger(LiteralSchema::default())
    }

    pub fn literal_string() -> Self {
        Schema::LiteralString(LiteralSchema::default())
    }

    pub fn literal_float() -> Self {
        Schema::LiteralFloat(LiteralSchema::default())
    }

    /// Wrap a schema to mark the property holding it as not required.
    pub fn optional(wrapped: impl Into<Schema>) -> Self {
        Schema::Optional(OptionalSchema::new(wrapped))
    }

    /// Name of the node kind, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Schema::LiteralBoolean(_) => "LiteralBoolean",
            Schema::LiteralInteger(_) => "LiteralInteger",
            Schema::LiteralString(_) => "LiteralString",
            Schema::LiteralFloat(_) => "LiteralFloat",
            Schema::Integer(_) => "Integer",
            Schema::Float(_) => "Float",
            Schema::String(_) => "String",
            Schema::List(_) => "List",
            Schema::Enum(_) => "Enum",
            Schema::Optional(_) => "Optional",
            Schema::Shape(_) => "Shape",
            Schema::Interface(_) => "Interface",
            Schema::OneOf(_) => "OneOf",
        }
    }

    /// The description declared on this node.
    ///
    /// `Optional` has no description of its own and reports the wrapped one.
    pub fn description(&self) -> Option<&str> {
        match self {
            Schema::LiteralBoolean(s)
            | Schema::LiteralInteger(s)
            | Schema::LiteralString(s)
            | Schema::LiteralFloat(s) => s.description.as_deref(),
            Schema::Integer(s) => s.description.as_deref(),
            Schema::Float(s) => s.description.as_deref(),
            Schema::String(s) => s.description.as_deref(),
            Schema::List(s) => s.description.as_deref(),
            Schema::Enum(s) => s.description.as_deref(),
            Schema::Optional(s) => s.wrapped.description(),
            Schema::Shape(s) => s.description.as_deref(),
            Schema::Interface(s) => s.description.as_deref(),
            Schema::OneOf(s) => s.description.as_deref(),
        }
    }
}

/// Unconstrained primitive (boolean, integer, string or float).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LiteralSchema {
    pub description: Option<String>,
}

impl LiteralSchema {
    pub fn described(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct IntegerSchema {
    pub description: Option<String>,
    pub minimum: Option<i64>,
    pub maximum: Option<i64>,
}

impl IntegerSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn minimum(mut self, minimum: i64) -> Self {
        self.minimum = Some(minimum);
        self
    }

    pub fn maximum(mut self, maximum: i64) -> Self {
        self.maximum = Some(maximum);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FloatSchema {
    pub description: Option<String>,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
}

impl FloatSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn minimum(mut self, minimum: f64) -> Self {
        self.minimum = Some(minimum);
        self
    }

    pub fn maximum(mut self, maximum: f64) -> Self {
        self.maximum = Some(maximum);
        self
    }
}

/// Well-known string formats a string-based type may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringFormat {
    DateTime,
    Time,
    Date,
    Duration,
    Email,
    IdnEmail,
    Hostname,
    IdnHostname,
    Ipv4,
    Ipv6,
    Uuid,
    Uri,
    UriReference,
    Iri,
    IriReference,
    UriTemplate,
    JsonPointer,
    RelativeJsonPointer,
    Regex,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct StringSchema {
    pub description: Option<String>,
    pub min_length: Option<u32>,
    pub max_length: Option<u32>,
    pub pattern: Option<String>,
    pub format: Option<StringFormat>,
}

impl StringSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn min_length(mut self, min_length: u32) -> Self {
        self.min_length = Some(min_length);
        self
    }

    pub fn max_length(mut self, max_length: u32) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn format(mut self, format: StringFormat) -> Self {
        self.format = Some(format);
        self
    }
}

/// Homogeneous ordered collection.
#[derive(Debug, Clone, PartialEq)]
pub struct ListSchema {
    pub description: Option<String>,
    pub item_schema: Box<Schema>,
    pub min_count: Option<u32>,
    pub max_count: Option<u32>,
}

impl ListSchema {
    pub fn new(item_schema: impl Into<Schema>) -> Self {
        Self {
            description: None,
            item_schema: Box::new(item_schema.into()),
            min_count: None,
            max_count: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn min_count(mut self, min_count: u32) -> Self {
        self.min_count = Some(min_count);
        self
    }

    pub fn max_count(mut self, max_count: u32) -> Self {
        self.max_count = Some(max_count);
        self
    }
}

/// Scalar type backing the cases of an enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackingType {
    Int,
    String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumCaseValue {
    Int(i64),
    String(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumCaseSchema {
    pub name: String,
    pub value: EnumCaseValue,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EnumSchema {
    pub description: Option<String>,
    pub backing_type: Option<BackingType>,
    pub cases: Vec<EnumCaseSchema>,
}

impl EnumSchema {
    /// An enum whose cases have no backing value; each case's value is its name.
    pub fn unbacked<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let cases = names
            .into_iter()
            .map(|name| {
                let name = name.into();
                EnumCaseSchema {
                    value: EnumCaseValue::String(name.clone()),
                    name,
                    description: None,
                }
            })
            .collect();
        Self {
            description: None,
            backing_type: None,
            cases,
        }
    }

    pub fn int_backed<I, S>(cases: I) -> Self
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
    {
        let cases = cases
            .into_iter()
            .map(|(name, value)| EnumCaseSchema {
                name: name.into(),
                value: EnumCaseValue::Int(value),
                description: None,
            })
            .collect();
        Self {
            description: None,
            backing_type: Some(BackingType::Int),
            cases,
        }
    }

    pub fn string_backed<I, S, V>(cases: I) -> Self
    where
        I: IntoIterator<Item = (S, V)>,
        S: Into<String>,
        V: Into<String>,
    {
        let cases = cases
            .into_iter()
            .map(|(name, value)| EnumCaseSchema {
                name: name.into(),
                value: EnumCaseValue::String(value.into()),
                description: None,
            })
            .collect();
        Self {
            description: None,
            backing_type: Some(BackingType::String),
            cases,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Marks a property as not required; the wrapped schema describes its type.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionalSchema {
    pub wrapped: Box<Schema>,
}

impl OptionalSchema {
    pub fn new(wrapped: impl Into<Schema>) -> Self {
        Self {
            wrapped: Box::new(wrapped.into()),
        }
    }
}

/// Closed product type: named properties in declaration order, no extras.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShapeSchema {
    pub description: Option<String>,
    pub properties: IndexMap<String, Schema>,
    pub property_description_overrides: IndexMap<String, String>,
}

impl ShapeSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn property(mut self, name: impl Into<String>, schema: impl Into<Schema>) -> Self {
        self.properties.insert(name.into(), schema.into());
        self
    }

    pub fn optional_property(self, name: impl Into<String>, schema: impl Into<Schema>) -> Self {
        self.property(name, Schema::optional(schema))
    }

    /// Describe a property differently than its type does.
    pub fn override_description(
        mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.property_description_overrides
            .insert(name.into(), description.into());
        self
    }

    pub fn overridden_property_description(&self, name: &str) -> Option<&str> {
        self.property_description_overrides
            .get(name)
            .map(String::as_str)
    }
}

/// Tag property plus tag-to-type mapping used to tell union members apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discriminator {
    pub property_name: String,
    pub mapping: Option<IndexMap<String, String>>,
}

impl Discriminator {
    pub fn new(property_name: impl Into<String>) -> Self {
        Self {
            property_name: property_name.into(),
            mapping: None,
        }
    }

    pub fn with_mapping<I, K, V>(property_name: impl Into<String>, mapping: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            property_name: property_name.into(),
            mapping: Some(
                mapping
                    .into_iter()
                    .map(|(tag, type_id)| (tag.into(), type_id.into()))
                    .collect(),
            ),
        }
    }
}

/// Polymorphic capability with a known set of implementations.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InterfaceSchema {
    pub description: Option<String>,
    pub properties: IndexMap<String, Schema>,
    pub property_description_overrides: IndexMap<String, String>,
    pub implementations: Vec<Schema>,
    pub discriminator: Option<Discriminator>,
}

impl InterfaceSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn property(mut self, name: impl Into<String>, schema: impl Into<Schema>) -> Self {
        self.properties.insert(name.into(), schema.into());
        self
    }

    pub fn optional_property(self, name: impl Into<String>, schema: impl Into<Schema>) -> Self {
        self.property(name, Schema::optional(schema))
    }

    pub fn override_description(
        mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.property_description_overrides
            .insert(name.into(), description.into());
        self
    }

    pub fn implementation(mut self, schema: impl Into<Schema>) -> Self {
        self.implementations.push(schema.into());
        self
    }

    pub fn discriminator(mut self, discriminator: Discriminator) -> Self {
        self.discriminator = Some(discriminator);
        self
    }

    /// Schemas of the concrete implementations, in registration order.
    pub fn implementation_schemas(&self) -> &[Schema] {
        &self.implementations
    }

    pub fn overridden_property_description(&self, name: &str) -> Option<&str> {
        self.property_description_overrides
            .get(name)
            .map(String::as_str)
    }
}

/// Explicit union of alternatives.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OneOfSchema {
    pub description: Option<String>,
    pub sub_schemas: Vec<Schema>,
    pub discriminator: Option<Discriminator>,
}

impl OneOfSchema {
    pub fn new<I, S>(sub_schemas: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Schema>,
    {
        Self {
            description: None,
            sub_schemas: sub_schemas.into_iter().map(Into::into).collect(),
            discriminator: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn discriminator(mut self, discriminator: Discriminator) -> Self {
        self.discriminator = Some(discriminator);
        self
    }
}

impl From<IntegerSchema> for Schema {
    fn from(schema: IntegerSchema) -> Self {
        Schema::Integer(schema)
    }
}

impl From<FloatSchema> for Schema {
    fn from(schema: FloatSchema) -> Self {
        Schema::Float(schema)
    }
}

impl From<StringSchema> for Schema {
    fn from(schema: StringSchema) -> Self {
        Schema::String(schema)
    }
}

impl From<ListSchema> for Schema {
    fn from(schema: ListSchema) -> Self {
        Schema::List(schema)
    }
}

impl From<EnumSchema> for Schema {
    fn from(schema: EnumSchema) -> Self {
        Schema::Enum(schema)
    }
}

impl From<OptionalSchema> for Schema {
    fn from(schema: OptionalSchema) -> Self {
        Schema::Optional(schema)
    }
}

impl From<ShapeSchema> for Schema {
    fn from(schema: ShapeSchema) -> Self {
        Schema::Shape(schema)
    }
}

impl From<InterfaceSchema> for Schema {
    fn from(schema: InterfaceSchema) -> Self {
        Schema::Interface(schema)
    }
}

impl From<OneOfSchema> for Schema {
    fn from(schema: OneOfSchema) -> Self {
        Schema::OneOf(schema)
    }
}
