use crate::engine::converters::Converter;
use crate::engine::{BindingValue, NamingPolicy, ResourceClient, ResourceHandle, ResourceIdentifier};
use crate::error::ConversionError;
use std::sync::Arc;

/// Treats a string as a resource name. The name must satisfy the binding's
/// naming policy before a handle is built from it.
pub struct StringToHandleConverter {
    client: Arc<dyn ResourceClient>,
    policy: Arc<dyn NamingPolicy>,
}

impl StringToHandleConverter {
    pub fn new(client: Arc<dyn ResourceClient>, policy: Arc<dyn NamingPolicy>) -> Self {
        Self { client, policy }
    }
}

impl Converter<ResourceHandle> for StringToHandleConverter {
    fn name(&self) -> &'static str {
        "string"
    }

    fn accepts(&self, value: &BindingValue) -> bool {
        value.as_text().is_some()
    }

    fn convert(&self, value: &BindingValue) -> Result<ResourceHandle, ConversionError> {
        let Some(name) = value.as_text() else {
            return Err(ConversionError::rejected(
                self.name(),
                format!("expected a string, got {}", value.kind()),
            ));
        };
        let identifier = ResourceIdentifier::new(name, self.policy.as_ref())
            .map_err(|e| ConversionError::naming(self.name(), e))?;
        Ok(self.client.handle(identifier))
    }
}
