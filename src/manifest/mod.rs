//! Binding manifests: declarative binding configuration on disk.
//!
//! A manifest names one storage account and resource kind and lists the
//! parameters bound against it. JSON and YAML are both accepted, chosen by
//! file extension.

mod discovery;

pub use discovery::discover_manifests;

use crate::engine::{
    BindingDescriptor, LengthBounds, NamingPolicy, PatternPolicy, ResourceBinding, ResourceClient,
    ResourceKind, StorageClient, ValueType,
};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, trace};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub version: Option<String>,
    pub account: String,
    pub kind: ResourceKind,
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub naming: Option<NamingConfig>,
    pub bindings: Vec<BindingEntry>,
}

/// Overrides the resource kind's built-in naming rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingConfig {
    pub pattern: String,
    #[serde(default = "default_min_length")]
    pub min_length: usize,
    #[serde(default = "default_max_length")]
    pub max_length: usize,
}

fn default_min_length() -> usize {
    LengthBounds::STORAGE.min
}

fn default_max_length() -> usize {
    LengthBounds::STORAGE.max
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingEntry {
    pub parameter: String,
    pub template: String,
    #[serde(default, rename = "type")]
    pub value_type: ValueType,
}

impl Manifest {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        trace!(path = %path.display(), "loading manifest");

        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::read_error(path, e.to_string()))?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let manifest = match extension {
            "json" => Self::from_json_str(&content, path)?,
            "yaml" | "yml" => Self::from_yaml_str(&content, path)?,
            _ => return Err(ConfigError::unsupported_format(extension)),
        };

        debug!(
            path = %path.display(),
            bindings = manifest.bindings.len(),
            "loaded manifest"
        );
        Ok(manifest)
    }

    pub fn from_json_str(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let manifest: Manifest = serde_json::from_str(content)
            .map_err(|e| ConfigError::parse_error(path, e.to_string()))?;
        manifest.checked(path)
    }

    pub fn from_yaml_str(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let manifest: Manifest = serde_yaml::from_str(content)
            .map_err(|e| ConfigError::parse_error(path, e.to_string()))?;
        manifest.checked(path)
    }

    fn checked(self, path: &Path) -> Result<Self, ConfigError> {
        if self.account.trim().is_empty() {
            return Err(ConfigError::parse_error(path, "account must not be empty"));
        }
        Ok(self)
    }

    pub fn client(&self) -> StorageClient {
        let client = StorageClient::new(&self.account, self.kind);
        match &self.endpoint {
            Some(endpoint) => client.with_endpoint(endpoint),
            None => client,
        }
    }

    pub fn policy(&self) -> Result<Arc<dyn NamingPolicy>, ConfigError> {
        match &self.naming {
            Some(naming) => {
                if naming.min_length > naming.max_length {
                    return Err(ConfigError::invalid_bounds(
                        naming.min_length,
                        naming.max_length,
                    ));
                }
                let bounds = LengthBounds::new(naming.min_length, naming.max_length);
                let policy = PatternPolicy::new(self.kind.as_str(), &naming.pattern, bounds)?;
                Ok(Arc::new(policy))
            }
            None => Ok(self.kind.default_policy()),
        }
    }

    /// One binding per entry, sharing a single client and policy.
    pub fn build_bindings(&self, path: &Path) -> Result<Vec<ResourceBinding>, ConfigError> {
        let client: Arc<dyn ResourceClient> = Arc::new(self.client());
        let policy = self.policy()?;

        self.bindings
            .iter()
            .map(|entry| {
                let descriptor =
                    BindingDescriptor::new(&entry.parameter, &entry.template, entry.value_type)
                        .map_err(|e| ConfigError::invalid_binding(path, e))?;
                ResourceBinding::builder(descriptor, client.clone())
                    .with_policy(policy.clone())
                    .build()
                    .map_err(|e| ConfigError::invalid_binding(path, e))
            })
            .collect()
    }
}

/// A manifest together with the bindings it declares.
#[derive(Debug)]
pub struct LoadedManifest {
    pub path: PathBuf,
    pub manifest: Manifest,
    pub bindings: Vec<ResourceBinding>,
}

pub fn load_manifest<P: AsRef<Path>>(path: P) -> Result<LoadedManifest, ConfigError> {
    let path = path.as_ref();
    let manifest = Manifest::from_path(path)?;
    let bindings = manifest.build_bindings(path)?;
    Ok(LoadedManifest {
        path: path.to_path_buf(),
        manifest,
        bindings,
    })
}

/// Load every manifest under `root` (a file or a directory).
pub fn load_manifests<P: AsRef<Path>>(root: P) -> Result<Vec<LoadedManifest>, ConfigError> {
    discover_manifests(root.as_ref())?
        .iter()
        .map(load_manifest)
        .collect()
}
