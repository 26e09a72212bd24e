//! Declared bindings and their per-invocation resolution.
//!
//! A `ResourceBinding` is built once per declared parameter and only holds
//! immutable, shared configuration. Every call resolves from scratch, so the
//! same binding can serve any number of concurrent invocations.

use super::binder::{binder_for, ArgumentBinder};
use super::converters::ConverterChain;
use super::descriptor::{self, ParameterDescriptor};
use super::provider::{Access, ValueProvider, ValueType};
use super::template::RouteTemplate;
use super::{
    BindingContext, BindingValue, NamingPolicy, ResourceClient, ResourceHandle,
    ResourceIdentifier,
};
use crate::error::{BindingError, DescriptorError};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, debug_span};

/// Immutable declaration of one bound parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingDescriptor {
    parameter_name: String,
    template: RouteTemplate,
    value_type: ValueType,
}

impl BindingDescriptor {
    pub fn new(
        parameter_name: impl Into<String>,
        resource_template: &str,
        value_type: ValueType,
    ) -> Result<Self, BindingError> {
        let parameter_name = parameter_name.into();
        if parameter_name.trim().is_empty() {
            return Err(BindingError::EmptyParameterName);
        }
        let template = RouteTemplate::parse(resource_template)
            .map_err(|e| BindingError::template(&parameter_name, e))?;

        Ok(Self {
            parameter_name,
            template,
            value_type,
        })
    }

    pub fn parameter_name(&self) -> &str {
        &self.parameter_name
    }

    pub fn template(&self) -> &RouteTemplate {
        &self.template
    }

    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    pub fn access(&self) -> Access {
        self.value_type.access()
    }
}

pub struct ResourceBinding {
    descriptor: BindingDescriptor,
    client: Arc<dyn ResourceClient>,
    account_name: String,
    policy: Arc<dyn NamingPolicy>,
    argument_binder: Arc<dyn ArgumentBinder>,
    converter: ConverterChain<ResourceHandle>,
}

impl ResourceBinding {
    /// Binding with the default policy, binder and converters for the
    /// client's resource kind.
    pub fn new(
        descriptor: BindingDescriptor,
        client: Arc<dyn ResourceClient>,
    ) -> Result<Self, BindingError> {
        Self::builder(descriptor, client).build()
    }

    pub fn builder(
        descriptor: BindingDescriptor,
        client: Arc<dyn ResourceClient>,
    ) -> ResourceBindingBuilder {
        ResourceBindingBuilder::new(descriptor, client)
    }

    pub fn descriptor(&self) -> &BindingDescriptor {
        &self.descriptor
    }

    pub fn parameter_name(&self) -> &str {
        self.descriptor.parameter_name()
    }

    /// The unresolved resource template.
    pub fn template(&self) -> &str {
        self.descriptor.template().as_str()
    }

    pub fn account_name(&self) -> &str {
        &self.account_name
    }

    pub fn access(&self) -> Access {
        self.descriptor.access()
    }

    /// Declared through a binding declaration rather than inferred.
    pub fn from_attribute(&self) -> bool {
        true
    }

    /// Trigger-time path: resolve the template against the context's
    /// binding data.
    pub fn bind_from_context(
        &self,
        ctx: &BindingContext,
    ) -> Result<Box<dyn ValueProvider>, BindingError> {
        let span = debug_span!(
            "bind",
            parameter = self.parameter_name(),
            invocation_id = ctx.invocation_id()
        );
        let _enter = span.enter();

        let resolved = self
            .descriptor
            .template()
            .resolve(ctx.binding_data())
            .map_err(|e| BindingError::template(self.parameter_name(), e))?;
        let identifier = ResourceIdentifier::new(&resolved, self.policy.as_ref())
            .map_err(|e| BindingError::naming(self.parameter_name(), e))?;
        let handle = self.client.handle(identifier);

        debug!(resource = handle.name(), "resolved binding from context");
        self.bind_handle(handle, ctx)
    }

    /// Manual invocation path: convert a caller-supplied value.
    pub fn bind_from_value(
        &self,
        value: &BindingValue,
        ctx: &BindingContext,
    ) -> Result<Box<dyn ValueProvider>, BindingError> {
        let span = debug_span!(
            "bind",
            parameter = self.parameter_name(),
            invocation_id = ctx.invocation_id()
        );
        let _enter = span.enter();

        let handle = match self.converter.try_convert(value) {
            Ok(Some(handle)) => handle,
            Ok(None) => {
                return Err(BindingError::unconvertible_value(
                    self.parameter_name(),
                    value.kind(),
                    value.describe(),
                ))
            }
            Err(e) => return Err(BindingError::conversion_failed(self.parameter_name(), e)),
        };

        debug!(resource = handle.name(), "resolved binding from value");
        self.bind_handle(handle, ctx)
    }

    pub fn to_parameter_descriptor(&self) -> Result<ParameterDescriptor, DescriptorError> {
        descriptor::project(
            &self.descriptor,
            self.client.kind(),
            &self.account_name,
            self.template(),
        )
    }

    fn bind_handle(
        &self,
        handle: ResourceHandle,
        ctx: &BindingContext,
    ) -> Result<Box<dyn ValueProvider>, BindingError> {
        let provider = self.argument_binder.bind(handle, ctx)?;
        if provider.value_type() != self.descriptor.value_type() {
            return Err(BindingError::value_type_mismatch(
                self.parameter_name(),
                self.descriptor.value_type().as_str(),
                provider.value_type().as_str(),
            ));
        }
        Ok(provider)
    }
}

impl fmt::Debug for ResourceBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceBinding")
            .field("descriptor", &self.descriptor)
            .field("account_name", &self.account_name)
            .field("policy", &self.policy)
            .field("converters", &self.converter.converter_names())
            .finish_non_exhaustive()
    }
}

pub struct ResourceBindingBuilder {
    descriptor: BindingDescriptor,
    client: Arc<dyn ResourceClient>,
    policy: Option<Arc<dyn NamingPolicy>>,
    argument_binder: Option<Arc<dyn ArgumentBinder>>,
    converter: Option<ConverterChain<ResourceHandle>>,
}

impl ResourceBindingBuilder {
    pub fn new(descriptor: BindingDescriptor, client: Arc<dyn ResourceClient>) -> Self {
        Self {
            descriptor,
            client,
            policy: None,
            argument_binder: None,
            converter: None,
        }
    }

    pub fn with_policy(mut self, policy: Arc<dyn NamingPolicy>) -> Self {
        self.policy = Some(policy);
        self
    }

    pub fn with_argument_binder(mut self, binder: Arc<dyn ArgumentBinder>) -> Self {
        self.argument_binder = Some(binder);
        self
    }

    /// Replaces the default identity + string chain.
    pub fn with_converter_chain(mut self, converter: ConverterChain<ResourceHandle>) -> Self {
        self.converter = Some(converter);
        self
    }

    pub fn build(self) -> Result<ResourceBinding, BindingError> {
        let policy = self
            .policy
            .unwrap_or_else(|| self.client.kind().default_policy());
        let argument_binder = self
            .argument_binder
            .unwrap_or_else(|| binder_for(self.descriptor.value_type()));

        if argument_binder.value_type() != self.descriptor.value_type() {
            return Err(BindingError::value_type_mismatch(
                self.descriptor.parameter_name(),
                self.descriptor.value_type().as_str(),
                argument_binder.value_type().as_str(),
            ));
        }

        let converter = match self.converter {
            Some(converter) => converter,
            None => ConverterChain::for_handles(self.client.clone(), policy.clone()),
        };

        Ok(ResourceBinding {
            account_name: self.client.account_name().to_string(),
            descriptor: self.descriptor,
            client: self.client,
            policy,
            argument_binder,
            converter,
        })
    }
}
