//! Storage clients and the handles they hand out.
//!
//! Building a handle is local object construction. No request is sent until
//! the consumer of a value provider uses the handle.

use super::naming::{ContainerNamePolicy, NamingPolicy, ResourceIdentifier, TableNamePolicy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Table,
    Container,
    Queue,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Table => "table",
            ResourceKind::Container => "container",
            ResourceKind::Queue => "queue",
        }
    }

    /// Service segment of the default endpoint host.
    pub fn service(&self) -> &'static str {
        match self {
            ResourceKind::Table => "table",
            ResourceKind::Container => "blob",
            ResourceKind::Queue => "queue",
        }
    }

    pub fn default_policy(&self) -> Arc<dyn NamingPolicy> {
        match self {
            ResourceKind::Table => Arc::new(TableNamePolicy::new()),
            ResourceKind::Container => Arc::new(ContainerNamePolicy::container()),
            ResourceKind::Queue => Arc::new(ContainerNamePolicy::queue()),
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceHandle {
    account_name: String,
    kind: ResourceKind,
    identifier: ResourceIdentifier,
    uri: String,
}

impl ResourceHandle {
    pub fn new(
        account_name: impl Into<String>,
        kind: ResourceKind,
        identifier: ResourceIdentifier,
        uri: impl Into<String>,
    ) -> Self {
        Self {
            account_name: account_name.into(),
            kind,
            identifier,
            uri: uri.into(),
        }
    }

    pub fn account_name(&self) -> &str {
        &self.account_name
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn identifier(&self) -> &ResourceIdentifier {
        &self.identifier
    }

    pub fn name(&self) -> &str {
        self.identifier.as_str()
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }
}

impl fmt::Display for ResourceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uri)
    }
}

pub trait ResourceClient: Send + Sync + fmt::Debug {
    fn account_name(&self) -> &str;

    fn kind(&self) -> ResourceKind;

    fn handle(&self, identifier: ResourceIdentifier) -> ResourceHandle;
}

/// Client addressing one storage account endpoint.
#[derive(Debug, Clone)]
pub struct StorageClient {
    account_name: String,
    kind: ResourceKind,
    endpoint: String,
}

impl StorageClient {
    pub fn new(account_name: impl Into<String>, kind: ResourceKind) -> Self {
        let account_name = account_name.into();
        let endpoint = format!(
            "https://{}.{}.core.windows.net",
            account_name,
            kind.service()
        );
        Self {
            account_name,
            kind,
            endpoint,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        self.endpoint = endpoint.trim_end_matches('/').to_string();
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ResourceClient for StorageClient {
    fn account_name(&self) -> &str {
        &self.account_name
    }

    fn kind(&self) -> ResourceKind {
        self.kind
    }

    fn handle(&self, identifier: ResourceIdentifier) -> ResourceHandle {
        let uri = format!("{}/{}", self.endpoint, identifier);
        ResourceHandle::new(&self.account_name, self.kind, identifier, uri)
    }
}
