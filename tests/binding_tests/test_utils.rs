//! Shared test utilities for binding resolution tests

use bindflow::engine::{
    BindingDescriptor, ResourceBinding, ResourceClient, ResourceHandle, ResourceIdentifier,
    ResourceKind, StorageClient, ValueType,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub const ACCOUNT: &str = "devstore";

pub fn client(kind: ResourceKind) -> Arc<dyn ResourceClient> {
    Arc::new(StorageClient::new(ACCOUNT, kind))
}

/// Binding for parameter `param` with the kind's default policy and chain.
pub fn binding(
    param: &str,
    template: &str,
    value_type: ValueType,
    kind: ResourceKind,
) -> ResourceBinding {
    let descriptor = BindingDescriptor::new(param, template, value_type).unwrap();
    ResourceBinding::new(descriptor, client(kind)).unwrap()
}

/// A handle built the way a caller would build one outside a binding.
pub fn handle(kind: ResourceKind, name: &str) -> ResourceHandle {
    let policy = kind.default_policy();
    let identifier = ResourceIdentifier::new(name, policy.as_ref()).unwrap();
    client(kind).handle(identifier)
}

/// Storage client that counts how many handles it has built.
#[derive(Debug)]
pub struct CountingClient {
    inner: StorageClient,
    handles: AtomicUsize,
}

impl CountingClient {
    pub fn new(kind: ResourceKind) -> Self {
        Self {
            inner: StorageClient::new(ACCOUNT, kind),
            handles: AtomicUsize::new(0),
        }
    }

    pub fn handles_built(&self) -> usize {
        self.handles.load(Ordering::SeqCst)
    }
}

impl ResourceClient for CountingClient {
    fn account_name(&self) -> &str {
        self.inner.account_name()
    }

    fn kind(&self) -> ResourceKind {
        self.inner.kind()
    }

    fn handle(&self, identifier: ResourceIdentifier) -> ResourceHandle {
        self.handles.fetch_add(1, Ordering::SeqCst);
        self.inner.handle(identifier)
    }
}

/// Binding backed by a `CountingClient`, returned alongside it.
pub fn counted_binding(
    template: &str,
    value_type: ValueType,
    kind: ResourceKind,
) -> (ResourceBinding, Arc<CountingClient>) {
    let client = Arc::new(CountingClient::new(kind));
    let descriptor = BindingDescriptor::new("orders", template, value_type).unwrap();
    let binding = ResourceBinding::new(descriptor, client.clone()).unwrap();
    (binding, client)
}
