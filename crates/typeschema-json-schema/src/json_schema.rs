//! JSON Schema representation as Rust ADT
//!
//! This module provides a strongly-typed representation of the JSON Schema
//! (2020-12 compatible) constructs produced by the generator. Typed schemas are
//! discriminated by their `type` keyword, combinators by their keyword
//! (`oneOf`, `allOf`, `anyOf`, `not`, `$ref`).
//!
//! Nodes are immutable values. Deriving a changed node goes through `with`,
//! which takes a patch of the same shape and keeps every field the patch leaves
//! unset:
//!
//! ```
//! use typeschema_json_schema::json_schema::{SchemaMetadata, StringSchema};
//!
//! let name = StringSchema {
//!     min_length: Some(3),
//!     ..Default::default()
//! };
//! let described = name.with(StringSchema {
//!     metadata: SchemaMetadata::described("First name"),
//!     ..Default::default()
//! });
//! assert_eq!(described.min_length, Some(3));
//! assert_eq!(described.metadata.description.as_deref(), Some("First name"));
//! ```

use indexmap::IndexMap;
use serde::ser::Error as _;
use serde::{Serialize, Serializer};
use serde_json::Value;
use thisisplural::Plural;

use crate::Error;

fn merge<T: Clone>(patch: Option<T>, current: &Option<T>) -> Option<T> {
    patch.or_else(|| current.clone())
}

/// Annotations shared by all description-bearing schema types
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_only: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,

    #[serde(rename = "$comment", skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl SchemaMetadata {
    pub fn described(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            ..Default::default()
        }
    }

    fn merged(&self, patch: SchemaMetadata) -> Self {
        Self {
            title: merge(patch.title, &self.title),
            description: merge(patch.description, &self.description),
            read_only: merge(patch.read_only, &self.read_only),
            write_only: merge(patch.write_only, &self.write_only),
            deprecated: merge(patch.deprecated, &self.deprecated),
            comment: merge(patch.comment, &self.comment),
        }
    }
}

/// Schema types that carry a description and can derive a re-described copy.
pub trait WithDescription: Sized {
    fn description(&self) -> Option<&str>;

    /// Copy of `self` with only the description replaced.
    fn with_description(&self, description: impl Into<String>) -> Self;
}

macro_rules! impl_with_description {
    ($($ty:ty),* $(,)?) => {$(
        impl WithDescription for $ty {
            fn description(&self) -> Option<&str> {
                self.metadata.description.as_deref()
            }

            fn with_description(&self, description: impl Into<String>) -> Self {
                let mut schema = self.clone();
                schema.metadata.description = Some(description.into());
                schema
            }
        }
    )*};
}

impl_with_description!(
    StringSchema,
    IntegerSchema,
    NumberSchema,
    BooleanSchema,
    ArraySchema,
    ObjectSchema,
);

/// JSON Schema root type
///
/// Serializes untagged. Every node is checked before it is written, so a tree
/// assembled through public fields can never emit an invalid node.
#[derive(Debug, Clone, PartialEq)]
#[allow(clippy::large_enum_variant)]
pub enum JsonSchema {
    /// Reference to another schema ($ref)
    Reference(ReferenceSchema),

    /// AllOf composition
    AllOf(AllOfSchema),

    /// AnyOf composition
    AnyOf(AnyOfSchema),

    /// OneOf composition, optionally with a discriminator
    OneOf(OneOfSchema),

    /// Not composition
    Not(NotSchema),

    /// Typed schema with type-specific constraints
    Typed(TypedSchema),
}

/// Typed schema (discriminated by "type" field)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum TypedSchema {
    #[serde(rename = "string")]
    String(StringSchema),

    #[serde(rename = "number")]
    Number(NumberSchema),

    #[serde(rename = "integer")]
    Integer(IntegerSchema),

    #[serde(rename = "boolean")]
    Boolean(BooleanSchema),

    #[serde(rename = "null")]
    Null(NullSchema),

    #[serde(rename = "array")]
    Array(ArraySchema),

    #[serde(rename = "object")]
    Object(ObjectSchema),
}

impl Serialize for JsonSchema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.validate_node().map_err(S::Error::custom)?;
        match self {
            JsonSchema::Reference(schema) => schema.serialize(serializer),
            JsonSchema::AllOf(schema) => schema.serialize(serializer),
            JsonSchema::AnyOf(schema) => schema.serialize(serializer),
            JsonSchema::OneOf(schema) => schema.serialize(serializer),
            JsonSchema::Not(schema) => schema.serialize(serializer),
            JsonSchema::Typed(schema) => schema.serialize(serializer),
        }
    }
}

fn validate_bool_or_schema(schema: &Option<BoolOrSchema>) -> Result<(), Error> {
    match schema {
        Some(BoolOrSchema::Schema(schema)) => schema.validate(),
        _ => Ok(()),
    }
}

impl JsonSchema {
    /// Serialize into a JSON value. Unset fields are omitted.
    ///
    /// Fails with [`Error::InvalidConfiguration`] when any node of the tree
    /// breaks its invariants.
    pub fn to_value(&self) -> Result<Value, Error> {
        self.validate()?;
        Ok(serde_json::to_value(self)?)
    }

    /// Check the invariants of this node and of every node below it.
    pub fn validate(&self) -> Result<(), Error> {
        self.validate_node()?;
        match self {
            JsonSchema::AllOf(schema) => schema.schemas.iter().try_for_each(JsonSchema::validate),
            JsonSchema::AnyOf(schema) => schema.schemas.iter().try_for_each(JsonSchema::validate),
            JsonSchema::OneOf(schema) => schema.schemas.iter().try_for_each(JsonSchema::validate),
            JsonSchema::Not(schema) => schema.not.validate(),
            JsonSchema::Typed(TypedSchema::Array(schema)) => {
                validate_bool_or_schema(&schema.items)?;
                validate_bool_or_schema(&schema.unevaluated_items)?;
                if let Some(contains) = &schema.contains {
                    contains.validate()?;
                }
                match &schema.prefix_items {
                    Some(items) => items.iter().try_for_each(JsonSchema::validate),
                    None => Ok(()),
                }
            }
            JsonSchema::Typed(TypedSchema::Object(schema)) => {
                validate_bool_or_schema(&schema.additional_properties)?;
                match &schema.properties {
                    Some(properties) => properties
                        .iter()
                        .try_for_each(|(_, property)| property.validate()),
                    None => Ok(()),
                }
            }
            _ => Ok(()),
        }
    }

    fn validate_node(&self) -> Result<(), Error> {
        match self {
            JsonSchema::Typed(TypedSchema::Number(schema)) => schema.validate(),
            JsonSchema::Typed(TypedSchema::Array(schema)) => schema.validate(),
            JsonSchema::Typed(TypedSchema::Object(schema)) => schema.validate(),
            _ => Ok(()),
        }
    }

    /// The `type` value or combinator keyword of this node.
    pub fn kind(&self) -> &'static str {
        match self {
            JsonSchema::Reference(_) => "$ref",
            JsonSchema::AllOf(_) => "allOf",
            JsonSchema::AnyOf(_) => "anyOf",
            JsonSchema::OneOf(_) => "oneOf",
            JsonSchema::Not(_) => "not",
            JsonSchema::Typed(TypedSchema::String(_)) => "string",
            JsonSchema::Typed(TypedSchema::Number(_)) => "number",
            JsonSchema::Typed(TypedSchema::Integer(_)) => "integer",
            JsonSchema::Typed(TypedSchema::Boolean(_)) => "boolean",
            JsonSchema::Typed(TypedSchema::Null(_)) => "null",
            JsonSchema::Typed(TypedSchema::Array(_)) => "array",
            JsonSchema::Typed(TypedSchema::Object(_)) => "object",
        }
    }

    pub fn supports_description(&self) -> bool {
        matches!(
            self,
            JsonSchema::Typed(
                TypedSchema::String(_)
                    | TypedSchema::Number(_)
                    | TypedSchema::Integer(_)
                    | TypedSchema::Boolean(_)
                    | TypedSchema::Array(_)
                    | TypedSchema::Object(_)
            )
        )
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            JsonSchema::Typed(TypedSchema::String(s)) => s.description(),
            JsonSchema::Typed(TypedSchema::Number(s)) => s.description(),
            JsonSchema::Typed(TypedSchema::Integer(s)) => s.description(),
            JsonSchema::Typed(TypedSchema::Boolean(s)) => s.description(),
            JsonSchema::Typed(TypedSchema::Array(s)) => s.description(),
            JsonSchema::Typed(TypedSchema::Object(s)) => s.description(),
            _ => None,
        }
    }

    /// Replace the description of description-bearing nodes.
    ///
    /// Nodes without a description keyword (combinators, `$ref`, `null`) are
    /// returned unchanged.
    pub fn with_description(self, description: impl Into<String>) -> Self {
        let description = description.into();
        match self {
            JsonSchema::Typed(TypedSchema::String(s)) => s.with_description(description).into(),
            JsonSchema::Typed(TypedSchema::Number(s)) => s.with_description(description).into(),
            JsonSchema::Typed(TypedSchema::Integer(s)) => {
                s.with_description(description).into()
            }
            JsonSchema::Typed(TypedSchema::Boolean(s)) => {
                s.with_description(description).into()
            }
            JsonSchema::Typed(TypedSchema::Array(s)) => {
                JsonSchema::Typed(TypedSchema::Array(s.with_description(description)))
            }
            JsonSchema::Typed(TypedSchema::Object(s)) => {
                JsonSchema::Typed(TypedSchema::Object(s.with_description(description)))
            }
            other => other,
        }
    }
}

/// Built-in string formats
///
/// See <https://json-schema.org/understanding-json-schema/reference/string#built-in-formats>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
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

/// String type schema
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StringSchema {
    #[serde(flatten)]
    pub metadata: SchemaMetadata,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<String>>,

    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,

    #[serde(rename = "const", skip_serializing_if = "Option::is_none")]
    pub const_value: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<StringFormat>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_media_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_encoding: Option<String>,
}

impl StringSchema {
    pub fn with(&self, patch: StringSchema) -> StringSchema {
        StringSchema {
            metadata: self.metadata.merged(patch.metadata),
            default: merge(patch.default, &self.default),
            examples: merge(patch.examples, &self.examples),
            enum_values: merge(patch.enum_values, &self.enum_values),
            const_value: merge(patch.const_value, &self.const_value),
            min_length: merge(patch.min_length, &self.min_length),
            max_length: merge(patch.max_length, &self.max_length),
            pattern: merge(patch.pattern, &self.pattern),
            format: merge(patch.format, &self.format),
            content_media_type: merge(patch.content_media_type, &self.content_media_type),
            content_encoding: merge(patch.content_encoding, &self.content_encoding),
        }
    }
}

/// Integer type schema
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegerSchema {
    #[serde(flatten)]
    pub metadata: SchemaMetadata,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<i64>>,

    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<i64>>,

    #[serde(rename = "const", skip_serializing_if = "Option::is_none")]
    pub const_value: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple_of: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_minimum: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_maximum: Option<i64>,
}

impl IntegerSchema {
    pub fn with(&self, patch: IntegerSchema) -> IntegerSchema {
        IntegerSchema {
            metadata: self.metadata.merged(patch.metadata),
            default: merge(patch.default, &self.default),
            examples: merge(patch.examples, &self.examples),
            enum_values: merge(patch.enum_values, &self.enum_values),
            const_value: merge(patch.const_value, &self.const_value),
            multiple_of: merge(patch.multiple_of, &self.multiple_of),
            minimum: merge(patch.minimum, &self.minimum),
            exclusive_minimum: merge(patch.exclusive_minimum, &self.exclusive_minimum),
            maximum: merge(patch.maximum, &self.maximum),
            exclusive_maximum: merge(patch.exclusive_maximum, &self.exclusive_maximum),
        }
    }
}

/// Number type schema (floating point)
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberSchema {
    #[serde(flatten)]
    pub metadata: SchemaMetadata,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<f64>>,

    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<f64>>,

    #[serde(rename = "const", skip_serializing_if = "Option::is_none")]
    pub const_value: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple_of: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_minimum: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_maximum: Option<f64>,
}

fn finite(keyword: &str, values: impl IntoIterator<Item = f64>) -> Result<(), Error> {
    if values.into_iter().all(f64::is_finite) {
        Ok(())
    } else {
        Err(Error::InvalidConfiguration(format!(
            "{keyword:?} must be a finite number"
        )))
    }
}

impl NumberSchema {
    /// NaN and infinities have no JSON representation.
    pub fn validate(&self) -> Result<(), Error> {
        finite("default", self.default)?;
        finite("examples", self.examples.iter().flatten().copied())?;
        finite("enum", self.enum_values.iter().flatten().copied())?;
        finite("const", self.const_value)?;
        finite("multipleOf", self.multiple_of)?;
        finite("minimum", self.minimum)?;
        finite("exclusiveMinimum", self.exclusive_minimum)?;
        finite("maximum", self.maximum)?;
        finite("exclusiveMaximum", self.exclusive_maximum)
    }

    pub fn with(&self, patch: NumberSchema) -> NumberSchema {
        NumberSchema {
            metadata: self.metadata.merged(patch.metadata),
            default: merge(patch.default, &self.default),
            examples: merge(patch.examples, &self.examples),
            enum_values: merge(patch.enum_values, &self.enum_values),
            const_value: merge(patch.const_value, &self.const_value),
            multiple_of: merge(patch.multiple_of, &self.multiple_of),
            minimum: merge(patch.minimum, &self.minimum),
            exclusive_minimum: merge(patch.exclusive_minimum, &self.exclusive_minimum),
            maximum: merge(patch.maximum, &self.maximum),
            exclusive_maximum: merge(patch.exclusive_maximum, &self.exclusive_maximum),
        }
    }
}

/// Boolean type schema
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct BooleanSchema {
    #[serde(flatten)]
    pub metadata: SchemaMetadata,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<bool>>,

    #[serde(rename = "const", skip_serializing_if = "Option::is_none")]
    pub const_value: Option<bool>,
}

impl BooleanSchema {
    pub fn with(&self, patch: BooleanSchema) -> BooleanSchema {
        BooleanSchema {
            metadata: self.metadata.merged(patch.metadata),
            default: merge(patch.default, &self.default),
            examples: merge(patch.examples, &self.examples),
            const_value: merge(patch.const_value, &self.const_value),
        }
    }
}

/// Null type schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct NullSchema;

impl NullSchema {
    /// `null` has no keywords besides its type.
    pub fn with(&self, _patch: NullSchema) -> NullSchema {
        *self
    }
}

/// Either a boolean (`true` allows everything, `false` nothing) or a sub-schema
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BoolOrSchema {
    Bool(bool),
    Schema(Box<JsonSchema>),
}

impl From<JsonSchema> for BoolOrSchema {
    fn from(schema: JsonSchema) -> Self {
        BoolOrSchema::Schema(Box::new(schema))
    }
}

impl From<bool> for BoolOrSchema {
    fn from(value: bool) -> Self {
        BoolOrSchema::Bool(value)
    }
}

macro_rules! impl_bool_or_schema_from {
    ($($ty:ty),* $(,)?) => {$(
        impl From<$ty> for BoolOrSchema {
            fn from(schema: $ty) -> Self {
                JsonSchema::from(schema).into()
            }
        }
    )*};
}

impl_bool_or_schema_from!(
    StringSchema,
    IntegerSchema,
    NumberSchema,
    BooleanSchema,
    NullSchema,
);

/// Ordered list of schemas, as used by `prefixItems`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Plural)]
#[serde(transparent)]
#[plural(len, is_empty, iter, into_iter, into_iter_ref, new, from_iter)]
pub struct ArrayItems(Vec<JsonSchema>);

/// Array type schema
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArraySchema {
    #[serde(flatten)]
    pub metadata: SchemaMetadata,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Vec<Value>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<Vec<Value>>>,

    #[serde(rename = "const", skip_serializing_if = "Option::is_none")]
    pub const_value: Option<Vec<Value>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<BoolOrSchema>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix_items: Option<ArrayItems>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub unevaluated_items: Option<BoolOrSchema>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains: Option<Box<JsonSchema>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_contains: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_contains: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_items: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_items: Option<bool>,
}

impl ArraySchema {
    /// `minContains` and `maxContains` are only meaningful next to `contains`.
    pub fn validate(&self) -> Result<(), Error> {
        if self.contains.is_none() {
            if self.min_contains.is_some() {
                return Err(Error::InvalidConfiguration(
                    "\"minContains\" can only be used if \"contains\" is defined".to_string(),
                ));
            }
            if self.max_contains.is_some() {
                return Err(Error::InvalidConfiguration(
                    "\"maxContains\" can only be used if \"contains\" is defined".to_string(),
                ));
            }
        }
        Ok(())
    }

    pub fn with(&self, patch: ArraySchema) -> Result<ArraySchema, Error> {
        let schema = ArraySchema {
            metadata: self.metadata.merged(patch.metadata),
            default: merge(patch.default, &self.default),
            examples: merge(patch.examples, &self.examples),
            const_value: merge(patch.const_value, &self.const_value),
            items: merge(patch.items, &self.items),
            prefix_items: merge(patch.prefix_items, &self.prefix_items),
            unevaluated_items: merge(patch.unevaluated_items, &self.unevaluated_items),
            contains: merge(patch.contains, &self.contains),
            min_contains: merge(patch.min_contains, &self.min_contains),
            max_contains: merge(patch.max_contains, &self.max_contains),
            min_items: merge(patch.min_items, &self.min_items),
            max_items: merge(patch.max_items, &self.max_items),
            unique_items: merge(patch.unique_items, &self.unique_items),
        };
        schema.validate()?;
        Ok(schema)
    }
}

/// Object properties in declaration order
#[derive(Debug, Clone, PartialEq, Default, Serialize, Plural)]
#[serde(transparent)]
#[plural(len, is_empty, iter, into_iter, into_iter_ref, new)]
pub struct ObjectProperties(IndexMap<String, JsonSchema>);

impl FromIterator<(String, JsonSchema)> for ObjectProperties {
    fn from_iter<T: IntoIterator<Item = (String, JsonSchema)>>(iter: T) -> Self {
        Self(IndexMap::from_iter(iter))
    }
}

impl ObjectProperties {
    pub fn insert(&mut self, name: impl Into<String>, schema: JsonSchema) -> Option<JsonSchema> {
        self.0.insert(name.into(), schema)
    }

    pub fn get(&self, name: &str) -> Option<&JsonSchema> {
        self.0.get(name)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }
}

/// Names listed under `required`; never empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Plural)]
#[serde(transparent)]
#[plural(len, iter, into_iter, into_iter_ref)]
pub struct RequiredProperties(Vec<String>);

impl RequiredProperties {
    pub fn new<I, S>(names: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(Error::InvalidConfiguration(
                "\"required\" must list at least one property".to_string(),
            ));
        }
        Ok(Self(names))
    }
}

/// Object type schema (with explicit type: "object")
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectSchema {
    #[serde(flatten)]
    pub metadata: SchemaMetadata,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<Value>>,

    #[serde(rename = "const", skip_serializing_if = "Option::is_none")]
    pub const_value: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<ObjectProperties>,

    // patternProperties and unevaluatedProperties are not supported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<BoolOrSchema>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<RequiredProperties>,

    /// Always written as a `string` node
    #[serde(
        serialize_with = "serialize_string_node",
        skip_serializing_if = "Option::is_none"
    )]
    pub property_names: Option<StringSchema>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_properties: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_properties: Option<u32>,

    /// Tag annotation for objects standing in for a polymorphic type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discriminator: Option<Discriminator>,
}

#[derive(Serialize)]
#[serde(tag = "type")]
enum StringNode<'a> {
    #[serde(rename = "string")]
    String(&'a StringSchema),
}

fn serialize_string_node<S: Serializer>(
    schema: &Option<StringSchema>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    schema.as_ref().map(StringNode::String).serialize(serializer)
}

impl ObjectSchema {
    /// Every `required` name must be declared under `properties`, when present.
    pub fn validate(&self) -> Result<(), Error> {
        if let (Some(properties), Some(required)) = (&self.properties, &self.required) {
            if let Some(missing) = required.iter().find(|name| !properties.contains_key(name)) {
                return Err(Error::InvalidConfiguration(format!(
                    "required property {missing:?} is not declared in \"properties\""
                )));
            }
        }
        Ok(())
    }

    pub fn with(&self, patch: ObjectSchema) -> Result<ObjectSchema, Error> {
        let schema = ObjectSchema {
            metadata: self.metadata.merged(patch.metadata),
            default: merge(patch.default, &self.default),
            examples: merge(patch.examples, &self.examples),
            const_value: merge(patch.const_value, &self.const_value),
            properties: merge(patch.properties, &self.properties),
            additional_properties: merge(patch.additional_properties, &self.additional_properties),
            required: merge(patch.required, &self.required),
            property_names: merge(patch.property_names, &self.property_names),
            min_properties: merge(patch.min_properties, &self.min_properties),
            max_properties: merge(patch.max_properties, &self.max_properties),
            discriminator: merge(patch.discriminator, &self.discriminator),
        };
        schema.validate()?;
        Ok(schema)
    }

    pub fn with_discriminator(&self, discriminator: Discriminator) -> ObjectSchema {
        let mut schema = self.clone();
        schema.discriminator = Some(discriminator);
        schema
    }
}

/// Property name and tag-to-type mapping that select a union member
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Discriminator {
    pub property_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mapping: Option<IndexMap<String, String>>,
}

impl Discriminator {
    pub fn new(property_name: impl Into<String>, mapping: Option<IndexMap<String, String>>) -> Self {
        Self {
            property_name: property_name.into(),
            mapping,
        }
    }
}

/// OneOf schema (exactly one schema must match)
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct OneOfSchema {
    #[serde(rename = "oneOf")]
    schemas: Vec<JsonSchema>,

    #[serde(skip_serializing_if = "Option::is_none")]
    discriminator: Option<Discriminator>,
}

impl OneOfSchema {
    pub fn new(schemas: impl IntoIterator<Item = JsonSchema>) -> Self {
        Self {
            schemas: schemas.into_iter().collect(),
            discriminator: None,
        }
    }

    pub fn schemas(&self) -> &[JsonSchema] {
        &self.schemas
    }

    pub fn discriminator(&self) -> Option<&Discriminator> {
        self.discriminator.as_ref()
    }

    /// Replace the alternatives, keeping the discriminator.
    pub fn with(&self, schemas: Option<Vec<JsonSchema>>) -> OneOfSchema {
        Self {
            schemas: schemas.unwrap_or_else(|| self.schemas.clone()),
            discriminator: self.discriminator.clone(),
        }
    }

    pub fn with_discriminator(&self, discriminator: Discriminator) -> OneOfSchema {
        Self {
            schemas: self.schemas.clone(),
            discriminator: Some(discriminator),
        }
    }
}

/// AllOf schema (all schemas must match)
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AllOfSchema {
    #[serde(rename = "allOf")]
    schemas: Vec<JsonSchema>,
}

impl AllOfSchema {
    pub fn new(schemas: impl IntoIterator<Item = JsonSchema>) -> Self {
        Self {
            schemas: schemas.into_iter().collect(),
        }
    }

    pub fn schemas(&self) -> &[JsonSchema] {
        &self.schemas
    }

    pub fn with(&self, schemas: Option<Vec<JsonSchema>>) -> AllOfSchema {
        Self {
            schemas: schemas.unwrap_or_else(|| self.schemas.clone()),
        }
    }
}

/// AnyOf schema (at least one schema must match)
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AnyOfSchema {
    #[serde(rename = "anyOf")]
    schemas: Vec<JsonSchema>,
}

impl AnyOfSchema {
    pub fn new(schemas: impl IntoIterator<Item = JsonSchema>) -> Self {
        Self {
            schemas: schemas.into_iter().collect(),
        }
    }

    pub fn schemas(&self) -> &[JsonSchema] {
        &self.schemas
    }

    pub fn with(&self, schemas: Option<Vec<JsonSchema>>) -> AnyOfSchema {
        Self {
            schemas: schemas.unwrap_or_else(|| self.schemas.clone()),
        }
    }
}

/// Not schema (must not match the schema)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotSchema {
    not: Box<JsonSchema>,
}

impl NotSchema {
    pub fn new(schema: JsonSchema) -> Self {
        Self {
            not: Box::new(schema),
        }
    }

    pub fn schema(&self) -> &JsonSchema {
        &self.not
    }

    pub fn with(&self, schema: Option<JsonSchema>) -> NotSchema {
        match schema {
            Some(schema) => NotSchema::new(schema),
            None => self.clone(),
        }
    }
}

/// Reference schema ($ref)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceSchema {
    #[serde(rename = "$ref")]
    reference: String,
}

impl ReferenceSchema {
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
        }
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn with(&self, reference: Option<String>) -> ReferenceSchema {
        match reference {
            Some(reference) => ReferenceSchema::new(reference),
            None => self.clone(),
        }
    }
}

impl From<StringSchema> for JsonSchema {
    fn from(schema: StringSchema) -> Self {
        JsonSchema::Typed(TypedSchema::String(schema))
    }
}

impl From<IntegerSchema> for JsonSchema {
    fn from(schema: IntegerSchema) -> Self {
        JsonSchema::Typed(TypedSchema::Integer(schema))
    }
}

impl From<NumberSchema> for JsonSchema {
    fn from(schema: NumberSchema) -> Self {
        JsonSchema::Typed(TypedSchema::Number(schema))
    }
}

impl From<BooleanSchema> for JsonSchema {
    fn from(schema: BooleanSchema) -> Self {
        JsonSchema::Typed(TypedSchema::Boolean(schema))
    }
}

impl From<NullSchema> for JsonSchema {
    fn from(schema: NullSchema) -> Self {
        JsonSchema::Typed(TypedSchema::Null(schema))
    }
}

impl TryFrom<ArraySchema> for JsonSchema {
    type Error = Error;

    fn try_from(schema: ArraySchema) -> Result<Self, Error> {
        schema.validate()?;
        Ok(JsonSchema::Typed(TypedSchema::Array(schema)))
    }
}

impl TryFrom<ObjectSchema> for JsonSchema {
    type Error = Error;

    fn try_from(schema: ObjectSchema) -> Result<Self, Error> {
        schema.validate()?;
        Ok(JsonSchema::Typed(TypedSchema::Object(schema)))
    }
}

impl From<OneOfSchema> for JsonSchema {
    fn from(schema: OneOfSchema) -> Self {
        JsonSchema::OneOf(schema)
    }
}

impl From<AllOfSchema> for JsonSchema {
    fn from(schema: AllOfSchema) -> Self {
        JsonSchema::AllOf(schema)
    }
}

impl From<AnyOfSchema> for JsonSchema {
    fn from(schema: AnyOfSchema) -> Self {
        JsonSchema::AnyOf(schema)
    }
}

impl From<NotSchema> for JsonSchema {
    fn from(schema: NotSchema) -> Self {
        JsonSchema::Not(schema)
    }
}

impl From<ReferenceSchema> for JsonSchema {
    fn from(schema: ReferenceSchema) -> Self {
        JsonSchema::Reference(schema)
    }
}
