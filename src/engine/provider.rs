//! Value providers: what a resolved binding hands to invocation code.

use super::ResourceHandle;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Declared type of a bound parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// The raw resource handle.
    #[default]
    Handle,
    /// Sequential reader over the resource's entities.
    Reader,
    /// Queryable view over the resource's entities.
    Query,
}

impl ValueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::Handle => "handle",
            ValueType::Reader => "reader",
            ValueType::Query => "query",
        }
    }

    /// Only the raw handle type grants write access.
    pub fn access(&self) -> Access {
        match self {
            ValueType::Handle => Access::ReadWrite,
            ValueType::Reader | ValueType::Query => Access::Read,
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Access {
    Read,
    ReadWrite,
}

impl Access {
    pub fn as_str(&self) -> &'static str {
        match self {
            Access::Read => "read",
            Access::ReadWrite => "read_write",
        }
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only projection of a handle. Exposes identity only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadOnlyView {
    handle: ResourceHandle,
    value_type: ValueType,
}

impl ReadOnlyView {
    fn new(handle: ResourceHandle, value_type: ValueType) -> Self {
        Self { handle, value_type }
    }

    pub fn name(&self) -> &str {
        self.handle.name()
    }

    pub fn account_name(&self) -> &str {
        self.handle.account_name()
    }

    pub fn uri(&self) -> &str {
        self.handle.uri()
    }

    pub fn value_type(&self) -> ValueType {
        self.value_type
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundValue {
    Handle(ResourceHandle),
    View(ReadOnlyView),
}

impl BoundValue {
    pub fn name(&self) -> &str {
        match self {
            BoundValue::Handle(handle) => handle.name(),
            BoundValue::View(view) => view.name(),
        }
    }

    pub fn uri(&self) -> &str {
        match self {
            BoundValue::Handle(handle) => handle.uri(),
            BoundValue::View(view) => view.uri(),
        }
    }

    pub fn as_handle(&self) -> Option<&ResourceHandle> {
        match self {
            BoundValue::Handle(handle) => Some(handle),
            BoundValue::View(_) => None,
        }
    }
}

pub trait ValueProvider: Send + Sync + fmt::Debug {
    fn value_type(&self) -> ValueType;

    fn access(&self) -> Access {
        self.value_type().access()
    }

    fn value(&self) -> BoundValue;

    /// Short rendering for invocation logs.
    fn to_invoke_string(&self) -> String;
}

#[derive(Debug, Clone)]
pub struct HandleValueProvider {
    handle: ResourceHandle,
}

impl HandleValueProvider {
    pub fn new(handle: ResourceHandle) -> Self {
        Self { handle }
    }
}

impl ValueProvider for HandleValueProvider {
    fn value_type(&self) -> ValueType {
        ValueType::Handle
    }

    fn value(&self) -> BoundValue {
        BoundValue::Handle(self.handle.clone())
    }

    fn to_invoke_string(&self) -> String {
        self.handle.name().to_string()
    }
}

/// Builds its view on first access.
#[derive(Debug)]
pub struct ReadOnlyValueProvider {
    handle: ResourceHandle,
    value_type: ValueType,
    view: OnceLock<ReadOnlyView>,
}

impl ReadOnlyValueProvider {
    pub(crate) fn new(handle: ResourceHandle, value_type: ValueType) -> Self {
        Self {
            handle,
            value_type,
            view: OnceLock::new(),
        }
    }

    pub fn is_materialized(&self) -> bool {
        self.view.get().is_some()
    }
}

impl ValueProvider for ReadOnlyValueProvider {
    fn value_type(&self) -> ValueType {
        self.value_type
    }

    fn value(&self) -> BoundValue {
        let view = self
            .view
            .get_or_init(|| ReadOnlyView::new(self.handle.clone(), self.value_type));
        BoundValue::View(view.clone())
    }

    fn to_invoke_string(&self) -> String {
        self.handle.name().to_string()
    }
}
