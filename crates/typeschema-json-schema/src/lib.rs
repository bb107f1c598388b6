//! JSON Schema generation for typeschema source schemas
//!
//! [`JsonSchemaGenerator`] turns a [`typeschema::Schema`] tree into a
//! [`json_schema::JsonSchema`] tree, which serializes to a JSON Schema
//! (2020-12 compatible) document with [`json_schema::JsonSchema::to_value`].
//!
//! ```
//! use serde_json::json;
//! use typeschema::{SchemaRegistry, StringSchema};
//! use typeschema_json_schema::{GeneratorOptions, translate_type};
//!
//! let mut registry = SchemaRegistry::new();
//! registry.register(
//!     "GivenName",
//!     StringSchema::new()
//!         .description("First name of a person")
//!         .min_length(3)
//!         .max_length(20),
//! );
//!
//! let schema = translate_type("GivenName", &registry, &GeneratorOptions::default()).unwrap();
//! assert_eq!(
//!     schema.to_value().unwrap(),
//!     json!({
//!         "type": "string",
//!         "description": "First name of a person",
//!         "minLength": 3,
//!         "maxLength": 20
//!     })
//! );
//! ```

mod error;
pub mod generator;
pub mod json_schema;
pub mod middleware;
mod options;

pub use error::Error;
pub use generator::JsonSchemaGenerator;
pub use middleware::{Middleware, Next};
pub use options::{GeneratorOptions, InterfaceMode};

use typeschema::{ParameterDescriptor, Schema, SchemaProvider};

use crate::json_schema::JsonSchema;

/// Translate the schema registered under `type_id`.
pub fn translate_type(
    type_id: &str,
    provider: &dyn SchemaProvider,
    options: &GeneratorOptions,
) -> Result<JsonSchema, Error> {
    JsonSchemaGenerator::new(options.clone()).from_type_id(type_id, provider)
}

/// Translate the declared type of a parameter, applying its description.
pub fn translate_parameter(
    parameter: &ParameterDescriptor,
    provider: &dyn SchemaProvider,
    options: &GeneratorOptions,
) -> Result<JsonSchema, Error> {
    JsonSchemaGenerator::new(options.clone()).from_parameter(parameter, provider)
}

/// Translate an already resolved source schema tree.
pub fn translate_schema(schema: &Schema, options: &GeneratorOptions) -> Result<JsonSchema, Error> {
    JsonSchemaGenerator::new(options.clone()).from_schema(schema)
}
