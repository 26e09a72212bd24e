/// Bindflow
///
/// Resolves declared parameter bindings against per-invocation data: route
/// templates are filled in, resource names validated against the resource
/// kind's naming rules, and the resulting handles wrapped in value providers.
pub mod cli;
pub mod engine;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod output;

pub use engine::{BindingContext, BindingDescriptor, ResourceBinding, ValueProvider};
pub use error::{Error, Result};
