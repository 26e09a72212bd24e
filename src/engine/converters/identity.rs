use crate::engine::converters::Converter;
use crate::engine::{BindingValue, ResourceHandle, ResourceKind};
use crate::error::ConversionError;

/// Passes through a handle that already has the binding's resource kind.
pub struct IdentityConverter {
    kind: ResourceKind,
}

impl IdentityConverter {
    pub fn new(kind: ResourceKind) -> Self {
        Self { kind }
    }
}

impl Converter<ResourceHandle> for IdentityConverter {
    fn name(&self) -> &'static str {
        "identity"
    }

    fn accepts(&self, value: &BindingValue) -> bool {
        value.as_handle().is_some_and(|h| h.kind() == self.kind)
    }

    fn convert(&self, value: &BindingValue) -> Result<ResourceHandle, ConversionError> {
        match value {
            BindingValue::Handle(handle) => Ok(handle.clone()),
            other => Err(ConversionError::rejected(
                self.name(),
                format!("expected a handle, got {}", other.kind()),
            )),
        }
    }
}
