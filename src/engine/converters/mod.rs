//! Converters turn a caller-supplied value into a binding's target type.
//!
//! Converters are tried in registration order. The first one whose `accepts`
//! returns true commits: its result is final, success or failure, and later
//! converters are never consulted for that value.
//!
//! Default chain for resource handles:
//! 1. Identity - an existing handle of the binding's resource kind
//! 2. String   - a resource name, validated and turned into a handle

pub mod identity;
pub mod string;

pub use identity::IdentityConverter;
pub use string::StringToHandleConverter;

use super::{BindingValue, NamingPolicy, ResourceClient, ResourceHandle};
use crate::error::ConversionError;
use std::sync::Arc;
use tracing::trace;

pub trait Converter<T>: Send + Sync {
    fn name(&self) -> &'static str;
    fn accepts(&self, value: &BindingValue) -> bool;
    fn convert(&self, value: &BindingValue) -> Result<T, ConversionError>;
}

pub struct ConverterChain<T> {
    converters: Vec<Box<dyn Converter<T>>>,
}

impl<T> ConverterChain<T> {
    pub fn builder() -> ConverterChainBuilder<T> {
        ConverterChainBuilder::new()
    }

    /// `Ok(None)` when no converter accepts the value.
    pub fn try_convert(&self, value: &BindingValue) -> Result<Option<T>, ConversionError> {
        for converter in &self.converters {
            if converter.accepts(value) {
                trace!(
                    converter = converter.name(),
                    kind = value.kind(),
                    "converter accepted value"
                );
                return converter.convert(value).map(Some);
            }
            trace!(
                converter = converter.name(),
                kind = value.kind(),
                "converter declined value"
            );
        }
        Ok(None)
    }

    pub fn converter_count(&self) -> usize {
        self.converters.len()
    }

    pub fn converter_names(&self) -> Vec<&'static str> {
        self.converters.iter().map(|c| c.name()).collect()
    }
}

impl ConverterChain<ResourceHandle> {
    /// Identity first, then by-name construction through `client`.
    pub fn for_handles(client: Arc<dyn ResourceClient>, policy: Arc<dyn NamingPolicy>) -> Self {
        let kind = client.kind();
        Self::builder()
            .with_converter(IdentityConverter::new(kind))
            .with_converter(StringToHandleConverter::new(client, policy))
            .build()
    }
}

pub struct ConverterChainBuilder<T> {
    converters: Vec<Box<dyn Converter<T>>>,
}

impl<T> ConverterChainBuilder<T> {
    pub fn new() -> Self {
        Self {
            converters: Vec::new(),
        }
    }

    pub fn with_converter<C: Converter<T> + 'static>(mut self, converter: C) -> Self {
        self.converters.push(Box::new(converter));
        self
    }

    pub fn with_boxed(mut self, converter: Box<dyn Converter<T>>) -> Self {
        self.converters.push(converter);
        self
    }

    pub fn build(self) -> ConverterChain<T> {
        ConverterChain {
            converters: self.converters,
        }
    }
}

impl<T> Default for ConverterChainBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
