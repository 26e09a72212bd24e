//! Argument binders turn a resolved handle into a value provider for one
//! declared parameter type.

use super::provider::{HandleValueProvider, ReadOnlyValueProvider, ValueProvider, ValueType};
use super::{BindingContext, ResourceHandle};
use crate::error::BindingError;
use std::sync::Arc;
use tracing::trace;

pub trait ArgumentBinder: Send + Sync {
    /// Type of every provider this binder produces.
    fn value_type(&self) -> ValueType;

    fn bind(
        &self,
        handle: ResourceHandle,
        ctx: &BindingContext,
    ) -> Result<Box<dyn ValueProvider>, BindingError>;
}

pub struct HandleArgumentBinder;

impl Default for HandleArgumentBinder {
    fn default() -> Self {
        Self::new()
    }
}

impl HandleArgumentBinder {
    pub fn new() -> Self {
        Self
    }
}

impl ArgumentBinder for HandleArgumentBinder {
    fn value_type(&self) -> ValueType {
        ValueType::Handle
    }

    fn bind(
        &self,
        handle: ResourceHandle,
        ctx: &BindingContext,
    ) -> Result<Box<dyn ValueProvider>, BindingError> {
        trace!(invocation_id = ctx.invocation_id(), resource = handle.name(), "binding handle");
        Ok(Box::new(HandleValueProvider::new(handle)))
    }
}

pub struct ReadOnlyArgumentBinder {
    value_type: ValueType,
}

impl ReadOnlyArgumentBinder {
    pub fn reader() -> Self {
        Self {
            value_type: ValueType::Reader,
        }
    }

    pub fn query() -> Self {
        Self {
            value_type: ValueType::Query,
        }
    }
}

impl ArgumentBinder for ReadOnlyArgumentBinder {
    fn value_type(&self) -> ValueType {
        self.value_type
    }

    fn bind(
        &self,
        handle: ResourceHandle,
        ctx: &BindingContext,
    ) -> Result<Box<dyn ValueProvider>, BindingError> {
        trace!(
            invocation_id = ctx.invocation_id(),
            resource = handle.name(),
            value_type = %self.value_type,
            "binding read-only view"
        );
        Ok(Box::new(ReadOnlyValueProvider::new(handle, self.value_type)))
    }
}

/// Default binder for a declared parameter type.
pub fn binder_for(value_type: ValueType) -> Arc<dyn ArgumentBinder> {
    match value_type {
        ValueType::Handle => Arc::new(HandleArgumentBinder::new()),
        ValueType::Reader => Arc::new(ReadOnlyArgumentBinder::reader()),
        ValueType::Query => Arc::new(ReadOnlyArgumentBinder::query()),
    }
}
