//! Source type-schema model
//!
//! This crate describes types as a tree of [`Schema`] nodes (constrained
//! primitives, lists, enums, closed shapes, interfaces and unions), and the
//! seams used to obtain such trees: [`SchemaProvider`] for resolving type
//! identifiers and [`ParameterDescriptor`] for single typed parameters.

mod error;
mod parameter;
mod provider;
mod schema;

pub use error::ProviderError;
pub use parameter::{BuiltinType, DescriptionLookup, ParameterDescriptor, ResolveError, TypeRef};
pub use provider::{HasSchema, SchemaProvider, SchemaRegistry};
pub use schema::*;
