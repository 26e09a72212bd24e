//! Parameter descriptors: static metadata about a binding for tooling and
//! diagnostics. Projection never touches a client, policy or binding data.

use super::provider::{Access, ValueType};
use super::{BindingDescriptor, ResourceKind};
use crate::error::DescriptorError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    pub name: String,
    pub kind: ResourceKind,
    pub account_name: String,
    pub resource_name: String,
    pub value_type: ValueType,
    pub access: Access,
}

pub fn project(
    descriptor: &BindingDescriptor,
    kind: ResourceKind,
    account_name: &str,
    resource_name: &str,
) -> Result<ParameterDescriptor, DescriptorError> {
    if account_name.is_empty() {
        return Err(DescriptorError::missing_input("account name"));
    }
    if resource_name.is_empty() {
        return Err(DescriptorError::missing_input("resource name"));
    }

    Ok(ParameterDescriptor {
        name: descriptor.parameter_name().to_string(),
        kind,
        account_name: account_name.to_string(),
        resource_name: resource_name.to_string(),
        value_type: descriptor.value_type(),
        access: descriptor.access(),
    })
}
