//! Middleware chain wrapped around schema dispatch
//!
//! Every source node, nested ones included, passes through the configured
//! middlewares before it reaches the core translation. A middleware may rewrite
//! the source node, call [`Next::run`] to delegate, post-process the result or
//! answer on its own without delegating at all.
//!
//! ```
//! use typeschema::{IntegerSchema, Schema};
//! use typeschema_json_schema::{GeneratorOptions, JsonSchemaGenerator, middleware};
//!
//! let options = GeneratorOptions::new().with_middleware(middleware::from_fn(|schema, next| {
//!     let generated = next.run(schema)?;
//!     Ok(match schema {
//!         Schema::Integer(_) => generated.with_description("counted"),
//!         _ => generated,
//!     })
//! }));
//! let generated = JsonSchemaGenerator::new(options)
//!     .from_schema(&IntegerSchema::new().minimum(0).into())
//!     .unwrap();
//! assert_eq!(generated.description(), Some("counted"));
//! ```

use std::sync::Arc;

use tracing::trace;
use typeschema::Schema;

use crate::Error;
use crate::generator::JsonSchemaGenerator;
use crate::json_schema::JsonSchema;

/// A step of the generation chain.
pub trait Middleware: Send + Sync {
    fn process(&self, schema: &Schema, next: Next<'_>) -> Result<JsonSchema, Error>;
}

impl<F> Middleware for F
where
    F: Fn(&Schema, Next<'_>) -> Result<JsonSchema, Error> + Send + Sync,
{
    fn process(&self, schema: &Schema, next: Next<'_>) -> Result<JsonSchema, Error> {
        self(schema, next)
    }
}

/// Pins the signature of a closure so it can be used as a [`Middleware`].
pub fn from_fn<F>(f: F) -> F
where
    F: Fn(&Schema, Next<'_>) -> Result<JsonSchema, Error> + Send + Sync,
{
    f
}

/// Remainder of the chain, ending in the core dispatch.
pub struct Next<'a> {
    middlewares: &'a [Arc<dyn Middleware>],
    generator: &'a JsonSchemaGenerator,
}

impl<'a> Next<'a> {
    pub(crate) fn new(
        middlewares: &'a [Arc<dyn Middleware>],
        generator: &'a JsonSchemaGenerator,
    ) -> Self {
        Self {
            middlewares,
            generator,
        }
    }

    /// Run the next middleware, or the core dispatch when none is left.
    pub fn run(self, schema: &Schema) -> Result<JsonSchema, Error> {
        match self.middlewares.split_first() {
            Some((first, rest)) => {
                trace!(
                    kind = schema.kind(),
                    remaining = rest.len(),
                    "entering middleware"
                );
                first.process(schema, Next::new(rest, self.generator))
            }
            None => self.generator.dispatch(schema),
        }
    }
}
