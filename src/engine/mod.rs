pub mod binder;
pub mod binding;
pub mod client;
pub mod context;
pub mod converters;
pub mod descriptor;
pub mod naming;
pub mod provider;
pub mod template;
pub mod value;

pub use binder::{binder_for, ArgumentBinder, HandleArgumentBinder, ReadOnlyArgumentBinder};
pub use binding::{BindingDescriptor, ResourceBinding, ResourceBindingBuilder};
pub use client::{ResourceClient, ResourceHandle, ResourceKind, StorageClient};
pub use context::{BindingContext, BindingData};
pub use converters::{
    Converter, ConverterChain, ConverterChainBuilder, IdentityConverter, StringToHandleConverter,
};
pub use descriptor::{project, ParameterDescriptor};
pub use naming::{
    ContainerNamePolicy, LengthBounds, NamingPolicy, PatternPolicy, ResourceIdentifier,
    TableNamePolicy,
};
pub use provider::{
    Access, BoundValue, HandleValueProvider, ReadOnlyValueProvider, ReadOnlyView, ValueProvider,
    ValueType,
};
pub use template::RouteTemplate;
pub use value::BindingValue;
