use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DescriptorError {
    #[error("cannot project parameter descriptor: missing {field}")]
    MissingInput { field: &'static str },
}

impl DescriptorError {
    pub fn missing_input(field: &'static str) -> Self {
        Self::MissingInput { field }
    }
}
