use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

use crate::engine::{
    Access, BindingContext, BindingValue, ParameterDescriptor, ResourceBinding, ValueType,
};
use crate::manifest::LoadedManifest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionPath {
    Context,
    Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingOutcome {
    pub manifest: String,
    pub parameter: String,
    pub template: String,
    pub path: ResolutionPath,
    pub value_type: ValueType,
    pub access: Access,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BindingOutcome {
    pub fn is_bound(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub invocation_id: String,
    pub manifests_loaded: usize,
    pub total_bindings: usize,
    pub failed_bindings: usize,
    pub bindings: Vec<BindingOutcome>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<ParameterDescriptor>,
    /// Supplied values whose parameter matches no declared binding.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unmatched_values: Vec<String>,
}

impl Report {
    /// Resolve every binding of every manifest. Parameters present in
    /// `values` go through the value path, the rest through the context.
    pub fn build(
        manifests: &[LoadedManifest],
        ctx: &BindingContext,
        values: &HashMap<String, BindingValue>,
    ) -> Self {
        let mut bindings = Vec::new();
        let mut parameters = Vec::new();

        for loaded in manifests {
            let manifest = loaded.path.display().to_string();
            for binding in &loaded.bindings {
                bindings.push(resolve_one(&manifest, binding, ctx, values));
                match binding.to_parameter_descriptor() {
                    Ok(descriptor) => parameters.push(descriptor),
                    Err(e) => warn!(
                        parameter = binding.parameter_name(),
                        error = %e,
                        "skipping parameter descriptor"
                    ),
                }
            }
        }

        let mut unmatched_values: Vec<String> = values
            .keys()
            .filter(|name| !bindings.iter().any(|b| &b.parameter == *name))
            .cloned()
            .collect();
        unmatched_values.sort();
        for name in &unmatched_values {
            warn!(parameter = %name, "supplied value matches no declared binding");
        }

        let failed_bindings = bindings.iter().filter(|b| !b.is_bound()).count();
        Report {
            invocation_id: ctx.invocation_id().to_string(),
            manifests_loaded: manifests.len(),
            total_bindings: bindings.len(),
            failed_bindings,
            bindings,
            parameters,
            unmatched_values,
        }
    }

    pub fn has_failures(&self) -> bool {
        self.failed_bindings > 0
    }
}

fn resolve_one(
    manifest: &str,
    binding: &ResourceBinding,
    ctx: &BindingContext,
    values: &HashMap<String, BindingValue>,
) -> BindingOutcome {
    let (path, result) = match values.get(binding.parameter_name()) {
        Some(value) => (ResolutionPath::Value, binding.bind_from_value(value, ctx)),
        None => (ResolutionPath::Context, binding.bind_from_context(ctx)),
    };

    let mut outcome = BindingOutcome {
        manifest: manifest.to_string(),
        parameter: binding.parameter_name().to_string(),
        template: binding.template().to_string(),
        path,
        value_type: binding.descriptor().value_type(),
        access: binding.access(),
        resource: None,
        uri: None,
        error: None,
    };

    match result {
        Ok(provider) => {
            outcome.resource = Some(provider.to_invoke_string());
            outcome.uri = Some(provider.value().uri().to_string());
        }
        Err(e) => {
            warn!(parameter = binding.parameter_name(), error = %e, "binding failed");
            outcome.error = Some(e.to_string());
        }
    }
    outcome
}
