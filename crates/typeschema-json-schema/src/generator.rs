//! Translation from source schemas to JSON Schema
//!
//! [`JsonSchemaGenerator`] walks a [`Schema`] tree bottom-up and produces the
//! matching [`JsonSchema`] tree. Every node, nested ones included, passes
//! through the configured middleware chain before reaching the core dispatch.

use indexmap::IndexMap;
use tracing::{debug, trace, warn};
use typeschema::{
    BackingType, DescriptionLookup, EnumCaseValue, EnumSchema, HasSchema, ListSchema,
    ParameterDescriptor, Schema, SchemaProvider,
};

use crate::json_schema::{
    ArraySchema, BoolOrSchema, BooleanSchema, Discriminator, IntegerSchema, JsonSchema,
    NumberSchema, ObjectProperties, ObjectSchema, OneOfSchema, RequiredProperties,
    SchemaMetadata, StringFormat, StringSchema,
};
use crate::middleware::Next;
use crate::{Error, GeneratorOptions, InterfaceMode};

/// Name of the tag property synthesized for interfaces rendered as objects.
pub const INTERFACE_TYPE_PROPERTY: &str = "__type";

const INTERFACE_TYPE_DESCRIPTION: &str = "interface type discriminator";

/// Converts source schemas into JSON Schema according to its options.
#[derive(Debug, Clone, Default)]
pub struct JsonSchemaGenerator {
    options: GeneratorOptions,
}

impl JsonSchemaGenerator {
    pub fn new(options: GeneratorOptions) -> Self {
        Self { options }
    }

    /// Translate a source schema tree.
    pub fn from_schema(&self, schema: &Schema) -> Result<JsonSchema, Error> {
        debug!(
            kind = schema.kind(),
            interface_mode = %self.options.interface_mode,
            middlewares = self.options.middlewares.len(),
            "generating JSON Schema"
        );
        self.generate(schema)
    }

    /// Resolve `type_id` through `provider` and translate its schema.
    pub fn from_type_id(
        &self,
        type_id: &str,
        provider: &dyn SchemaProvider,
    ) -> Result<JsonSchema, Error> {
        debug!(type_id, "generating JSON Schema for type");
        let schema = provider.get_schema(type_id)?;
        self.generate(&schema)
    }

    /// Translate the schema a Rust type declares for itself.
    pub fn from_type<T: HasSchema>(&self) -> Result<JsonSchema, Error> {
        debug!(type_id = T::type_name(), "generating JSON Schema for type");
        self.generate(&T::schema())
    }

    /// Translate the declared type of a parameter.
    ///
    /// A description attached to the parameter replaces the one of its type.
    pub fn from_parameter(
        &self,
        parameter: &ParameterDescriptor,
        provider: &dyn SchemaProvider,
    ) -> Result<JsonSchema, Error> {
        debug!(
            parameter = parameter.name.as_str(),
            "generating JSON Schema for parameter"
        );
        let schema = parameter.type_ref.resolve(provider)?;
        let generated = self.generate(&schema)?;
        Ok(match DescriptionLookup::description(parameter) {
            Some(description) if generated.supports_description() => {
                generated.with_description(description)
            }
            _ => generated,
        })
    }

    fn generate(&self, schema: &Schema) -> Result<JsonSchema, Error> {
        Next::new(&self.options.middlewares, self).run(schema)
    }

    /// Core translation of a single node, children going through the chain again.
    pub(crate) fn dispatch(&self, schema: &Schema) -> Result<JsonSchema, Error> {
        trace!(kind = schema.kind(), "translating schema node");
        match schema {
            Schema::LiteralBoolean(s) => Ok(BooleanSchema {
                metadata: metadata(&s.description),
                ..Default::default()
            }
            .into()),
            Schema::LiteralInteger(s) => Ok(IntegerSchema {
                metadata: metadata(&s.description),
                ..Default::default()
            }
            .into()),
            Schema::LiteralString(s) => Ok(StringSchema {
                metadata: metadata(&s.description),
                ..Default::default()
            }
            .into()),
            Schema::LiteralFloat(s) => Ok(NumberSchema {
                metadata: metadata(&s.description),
                ..Default::default()
            }
            .into()),
            Schema::Integer(s) => Ok(IntegerSchema {
                metadata: metadata(&s.description),
                minimum: s.minimum,
                maximum: s.maximum,
                ..Default::default()
            }
            .into()),
            Schema::Float(s) => Ok(NumberSchema {
                metadata: metadata(&s.description),
                minimum: finite_bound("minimum", s.minimum)?,
                maximum: finite_bound("maximum", s.maximum)?,
                ..Default::default()
            }
            .into()),
            Schema::String(s) => Ok(StringSchema {
                metadata: metadata(&s.description),
                min_length: s.min_length,
                max_length: s.max_length,
                pattern: s.pattern.clone(),
                format: s.format.map(convert_format),
                ..Default::default()
            }
            .into()),
            Schema::Enum(s) => convert_enum(s),
            Schema::List(s) => self.convert_list(s),
            Schema::Shape(s) => {
                let mut object = ClosedObject::default();
                self.convert_properties(&mut object, &s.properties, |name| {
                    s.overridden_property_description(name)
                })?;
                object.finish(&s.description, None)
            }
            Schema::Interface(s) => match self.options.interface_mode {
                InterfaceMode::Union => {
                    let schemas = s
                        .implementation_schemas()
                        .iter()
                        .map(|implementation| self.generate(implementation))
                        .collect::<Result<Vec<_>, _>>()?;
                    Ok(self
                        .union(OneOfSchema::new(schemas), s.discriminator.as_ref())
                        .into())
                }
                InterfaceMode::DiscriminatedObject => {
                    if s.properties.contains_key(INTERFACE_TYPE_PROPERTY) {
                        return Err(Error::InvalidArgument(format!(
                            "property {INTERFACE_TYPE_PROPERTY:?} is reserved for the interface type discriminator"
                        )));
                    }
                    let mut object = ClosedObject::default();
                    object.push(
                        INTERFACE_TYPE_PROPERTY,
                        StringSchema {
                            metadata: SchemaMetadata::described(INTERFACE_TYPE_DESCRIPTION),
                            ..Default::default()
                        }
                        .into(),
                        true,
                    )?;
                    self.convert_properties(&mut object, &s.properties, |name| {
                        s.overridden_property_description(name)
                    })?;
                    let discriminator = s
                        .discriminator
                        .as_ref()
                        .filter(|_| self.options.include_discriminator)
                        .map(Discriminator::from);
                    object.finish(&s.description, discriminator)
                }
            },
            Schema::OneOf(s) => {
                let schemas = s
                    .sub_schemas
                    .iter()
                    .map(|sub_schema| self.generate(sub_schema))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(self
                    .union(OneOfSchema::new(schemas), s.discriminator.as_ref())
                    .into())
            }
            // Optional is only meaningful as a property of a shape or interface
            other => {
                warn!(kind = other.kind(), "schema kind has no JSON Schema translation");
                Err(Error::UnsupportedSchema {
                    kind: other.kind().to_string(),
                })
            }
        }
    }

    fn convert_list(&self, schema: &ListSchema) -> Result<JsonSchema, Error> {
        let items = self.generate(&schema.item_schema)?;
        JsonSchema::try_from(ArraySchema {
            metadata: metadata(&schema.description),
            items: Some(BoolOrSchema::from(items)),
            min_items: schema.min_count,
            max_items: schema.max_count,
            ..Default::default()
        })
    }

    fn convert_properties<'s>(
        &self,
        object: &mut ClosedObject,
        properties: &IndexMap<String, Schema>,
        overridden_description: impl Fn(&str) -> Option<&'s str>,
    ) -> Result<(), Error> {
        for (name, property) in properties {
            let (property, required) = match property {
                Schema::Optional(optional) => (optional.wrapped.as_ref(), false),
                other => (other, true),
            };
            let mut generated = self.generate(property)?;
            if let Some(description) = overridden_description(name) {
                if generated.supports_description() {
                    generated = generated.with_description(description);
                }
            }
            object.push(name, generated, required)?;
        }
        Ok(())
    }

    fn union(
        &self,
        one_of: OneOfSchema,
        discriminator: Option<&typeschema::Discriminator>,
    ) -> OneOfSchema {
        match discriminator {
            Some(discriminator) if self.options.include_discriminator => {
                one_of.with_discriminator(discriminator.into())
            }
            _ => one_of,
        }
    }
}

/// Properties and required names collected for a closed object.
#[derive(Default)]
struct ClosedObject {
    properties: ObjectProperties,
    required: Vec<String>,
}

impl ClosedObject {
    fn push(&mut self, name: &str, schema: JsonSchema, required: bool) -> Result<(), Error> {
        if self.properties.contains_key(name) {
            return Err(Error::InvalidArgument(format!(
                "property {name:?} is declared twice"
            )));
        }
        if required {
            self.required.push(name.to_string());
        }
        self.properties.insert(name, schema);
        Ok(())
    }

    fn finish(
        self,
        description: &Option<String>,
        discriminator: Option<Discriminator>,
    ) -> Result<JsonSchema, Error> {
        let required = if self.required.is_empty() {
            None
        } else {
            Some(RequiredProperties::new(self.required)?)
        };
        JsonSchema::try_from(ObjectSchema {
            metadata: metadata(description),
            properties: Some(self.properties),
            additional_properties: Some(BoolOrSchema::Bool(false)),
            required,
            discriminator,
            ..Default::default()
        })
    }
}

/// Float bounds must be representable in JSON.
fn finite_bound(keyword: &str, bound: Option<f64>) -> Result<Option<f64>, Error> {
    match bound {
        Some(value) if !value.is_finite() => Err(Error::InvalidArgument(format!(
            "{keyword:?} bound {value} is not a finite number"
        ))),
        bound => Ok(bound),
    }
}

fn metadata(description: &Option<String>) -> SchemaMetadata {
    SchemaMetadata {
        description: description.clone(),
        ..Default::default()
    }
}

fn convert_enum(schema: &EnumSchema) -> Result<JsonSchema, Error> {
    if schema.backing_type == Some(BackingType::Int) {
        let values = schema
            .cases
            .iter()
            .map(|case| match &case.value {
                EnumCaseValue::Int(value) => Ok(*value),
                EnumCaseValue::String(value) => value.trim().parse::<i64>().map_err(|_| {
                    Error::InvalidArgument(format!(
                        "enum case {} has value {value:?}, which is not an integer",
                        case.name
                    ))
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        return Ok(IntegerSchema {
            metadata: metadata(&schema.description),
            enum_values: Some(values),
            ..Default::default()
        }
        .into());
    }

    let values = schema
        .cases
        .iter()
        .map(|case| match &case.value {
            EnumCaseValue::Int(value) => value.to_string(),
            EnumCaseValue::String(value) => value.clone(),
        })
        .collect();
    Ok(StringSchema {
        metadata: metadata(&schema.description),
        enum_values: Some(values),
        ..Default::default()
    }
    .into())
}

fn convert_format(format: typeschema::StringFormat) -> StringFormat {
    use typeschema::StringFormat as Source;

    match format {
        Source::DateTime => StringFormat::DateTime,
        Source::Time => StringFormat::Time,
        Source::Date => StringFormat::Date,
        Source::Duration => StringFormat::Duration,
        Source::Email => StringFormat::Email,
        Source::IdnEmail => StringFormat::IdnEmail,
        Source::Hostname => StringFormat::Hostname,
        Source::IdnHostname => StringFormat::IdnHostname,
        Source::Ipv4 => StringFormat::Ipv4,
        Source::Ipv6 => StringFormat::Ipv6,
        Source::Uuid => StringFormat::Uuid,
        Source::Uri => StringFormat::Uri,
        Source::UriReference => StringFormat::UriReference,
        Source::Iri => StringFormat::Iri,
        Source::IriReference => StringFormat::IriReference,
        Source::UriTemplate => StringFormat::UriTemplate,
        Source::JsonPointer => StringFormat::JsonPointer,
        Source::RelativeJsonPointer => StringFormat::RelativeJsonPointer,
        Source::Regex => StringFormat::Regex,
    }
}

impl From<&typeschema::Discriminator> for Discriminator {
    fn from(discriminator: &typeschema::Discriminator) -> Self {
        Discriminator::new(
            discriminator.property_name.clone(),
            discriminator.mapping.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use typeschema::{
        EnumCaseSchema, FloatSchema, InterfaceSchema, LiteralSchema, OptionalSchema, ShapeSchema,
        StringSchema as SourceString,
    };

    fn generate(schema: impl Into<Schema>) -> Result<serde_json::Value, Error> {
        JsonSchemaGenerator::default()
            .from_schema(&schema.into())?
            .to_value()
    }

    #[test]
    fn test_literals() {
        assert_eq!(
            generate(Schema::literal_boolean()).unwrap(),
            json!({ "type": "boolean" })
        );
        assert_eq!(
            generate(Schema::LiteralFloat(LiteralSchema::described("ratio"))).unwrap(),
            json!({ "type": "number", "description": "ratio" })
        );
    }

    #[test]
    fn test_all_formats_map_to_kebab_case() {
        let cases = [
            (typeschema::StringFormat::DateTime, "date-time"),
            (typeschema::StringFormat::IdnHostname, "idn-hostname"),
            (typeschema::StringFormat::Ipv4, "ipv4"),
            (typeschema::StringFormat::UriReference, "uri-reference"),
            (typeschema::StringFormat::RelativeJsonPointer, "relative-json-pointer"),
        ];
        for (format, expected) in cases {
            assert_eq!(
                generate(SourceString::new().format(format)).unwrap(),
                json!({ "type": "string", "format": expected })
            );
        }
    }

    #[test]
    fn test_int_backed_enum_with_string_value() {
        let schema = EnumSchema {
            description: None,
            backing_type: Some(BackingType::Int),
            cases: vec![
                EnumCaseSchema {
                    name: "ONE".to_string(),
                    value: EnumCaseValue::String("1".to_string()),
                    description: None,
                },
                EnumCaseSchema {
                    name: "TWO".to_string(),
                    value: EnumCaseValue::Int(2),
                    description: None,
                },
            ],
        };
        assert_eq!(
            generate(schema).unwrap(),
            json!({ "type": "integer", "enum": [1, 2] })
        );
    }

    #[test]
    fn test_int_backed_enum_with_non_numeric_value_fails() {
        let schema = EnumSchema {
            description: None,
            backing_type: Some(BackingType::Int),
            cases: vec![EnumCaseSchema {
                name: "ONE".to_string(),
                value: EnumCaseValue::String("one".to_string()),
                description: None,
            }],
        };
        assert!(matches!(generate(schema), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_bare_optional_is_unsupported() {
        assert_eq!(
            generate(OptionalSchema::new(Schema::literal_string())),
            Err(Error::UnsupportedSchema {
                kind: "Optional".to_string()
            })
        );
    }

    #[test]
    fn test_nested_optional_in_property_is_unsupported() {
        let shape = ShapeSchema::new().optional_property("a", Schema::optional(Schema::literal_string()));
        assert_eq!(
            generate(shape),
            Err(Error::UnsupportedSchema {
                kind: "Optional".to_string()
            })
        );
    }

    #[test]
    fn test_empty_shape() {
        assert_eq!(
            generate(ShapeSchema::new()).unwrap(),
            json!({ "type": "object", "properties": {}, "additionalProperties": false })
        );
    }

    #[test]
    fn test_override_is_ignored_for_unions() {
        let shape = ShapeSchema::new()
            .property(
                "name",
                typeschema::OneOfSchema::new([Schema::literal_string(), Schema::literal_integer()]),
            )
            .override_description("name", "ignored");
        assert_eq!(
            generate(shape).unwrap(),
            json!({
                "type": "object",
                "properties": {
                    "name": { "oneOf": [{ "type": "string" }, { "type": "integer" }] }
                },
                "additionalProperties": false,
                "required": ["name"]
            })
        );
    }

    #[test]
    fn test_discriminated_object_interface() {
        let interface = InterfaceSchema::new()
            .description("Something with a name")
            .property("name", SourceString::new().min_length(1))
            .optional_property("nickname", Schema::literal_string())
            .discriminator(typeschema::Discriminator::new("type"));

        let legacy = JsonSchemaGenerator::new(GeneratorOptions::legacy());
        assert_eq!(
            legacy
                .from_schema(&interface.clone().into())
                .unwrap()
                .to_value()
                .unwrap(),
            json!({
                "type": "object",
                "description": "Something with a name",
                "properties": {
                    "__type": { "type": "string", "description": "interface type discriminator" },
                    "name": { "type": "string", "minLength": 1 },
                    "nickname": { "type": "string" }
                },
                "additionalProperties": false,
                "required": ["__type", "name"]
            })
        );

        let tagged = JsonSchemaGenerator::new(
            GeneratorOptions::legacy().with_include_discriminator(true),
        );
        let value = tagged
            .from_schema(&interface.into())
            .unwrap()
            .to_value()
            .unwrap();
        assert_eq!(value["discriminator"], json!({ "propertyName": "type" }));
    }

    #[test]
    fn test_declared_type_property_clashes_with_discriminator() {
        let interface = InterfaceSchema::new()
            .property(INTERFACE_TYPE_PROPERTY, Schema::literal_string())
            .property("name", Schema::literal_string());

        let legacy = JsonSchemaGenerator::new(GeneratorOptions::legacy());
        assert!(matches!(
            legacy.from_schema(&interface.clone().into()),
            Err(Error::InvalidArgument(_))
        ));

        // A union has no synthesized tag, so the property is just a property.
        let union = JsonSchemaGenerator::default()
            .from_schema(&interface.implementation(Schema::literal_string()).into())
            .unwrap();
        assert_eq!(union.to_value().unwrap(), json!({ "oneOf": [{ "type": "string" }] }));
    }

    #[test]
    fn test_interface_property_override_in_object_mode() {
        let interface = InterfaceSchema::new()
            .property("name", SourceString::new().description("from type"))
            .override_description("name", "from interface");

        let legacy = JsonSchemaGenerator::new(GeneratorOptions::legacy());
        let value = legacy
            .from_schema(&interface.into())
            .unwrap()
            .to_value()
            .unwrap();
        assert_eq!(
            value["properties"]["name"],
            json!({ "type": "string", "description": "from interface" })
        );
    }

    #[test]
    fn test_non_finite_float_bounds_fail() {
        for schema in [
            FloatSchema::new().minimum(f64::NAN),
            FloatSchema::new().maximum(f64::INFINITY),
            FloatSchema::new().minimum(f64::NEG_INFINITY),
        ] {
            assert!(matches!(generate(schema), Err(Error::InvalidArgument(_))));
        }
        assert_eq!(
            generate(FloatSchema::new().minimum(-1.5).maximum(1.5)).unwrap(),
            json!({ "type": "number", "minimum": -1.5, "maximum": 1.5 })
        );
    }

    #[test]
    fn test_generator_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<JsonSchemaGenerator>();
        assert_send_sync::<GeneratorOptions>();
        assert_send_sync::<JsonSchema>();
    }
}
