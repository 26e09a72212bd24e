mod binding;
mod config;
mod conversion;
mod descriptor;
mod naming;
mod template;

pub use binding::BindingError;
pub use config::ConfigError;
pub use conversion::ConversionError;
pub use descriptor::DescriptorError;
pub use naming::NamingError;
pub use template::TemplateError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Naming(#[from] NamingError),

    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error(transparent)]
    Binding(#[from] BindingError),

    #[error(transparent)]
    Descriptor(#[from] DescriptorError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;
