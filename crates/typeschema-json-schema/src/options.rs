//! Generator configuration

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::Error;
use crate::middleware::Middleware;

/// How an interface schema is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InterfaceMode {
    /// `oneOf` over the implementation schemas.
    #[default]
    Union,
    /// A closed object carrying the interface properties plus a required
    /// `__type` tag property.
    DiscriminatedObject,
}

impl InterfaceMode {
    pub fn as_str(self) -> &'static str {
        match self {
            InterfaceMode::Union => "union",
            InterfaceMode::DiscriminatedObject => "discriminatedObject",
        }
    }
}

impl fmt::Display for InterfaceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InterfaceMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "union" => Ok(InterfaceMode::Union),
            "discriminatedObject" => Ok(InterfaceMode::DiscriminatedObject),
            other => Err(Error::InvalidArgument(format!(
                "unknown interface mode {other:?}, expected \"union\" or \"discriminatedObject\""
            ))),
        }
    }
}

/// Options for [`JsonSchemaGenerator`](crate::JsonSchemaGenerator).
#[derive(Clone, Default)]
pub struct GeneratorOptions {
    /// Attach declared discriminators to the generated unions
    pub include_discriminator: bool,
    pub interface_mode: InterfaceMode,
    /// Run in registration order, first one outermost
    pub middlewares: Vec<Arc<dyn Middleware>>,
}

impl GeneratorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options reproducing the historical rendering of interfaces as tagged objects.
    pub fn legacy() -> Self {
        Self {
            interface_mode: InterfaceMode::DiscriminatedObject,
            ..Self::default()
        }
    }

    pub fn with_include_discriminator(mut self, include_discriminator: bool) -> Self {
        self.include_discriminator = include_discriminator;
        self
    }

    pub fn with_interface_mode(mut self, interface_mode: InterfaceMode) -> Self {
        self.interface_mode = interface_mode;
        self
    }

    pub fn with_middleware(mut self, middleware: impl Middleware + 'static) -> Self {
        self.middlewares.push(Arc::new(middleware));
        self
    }
}

impl fmt::Debug for GeneratorOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorOptions")
            .field("include_discriminator", &self.include_discriminator)
            .field("interface_mode", &self.interface_mode)
            .field("middlewares", &self.middlewares.len())
            .finish()
    }
}
