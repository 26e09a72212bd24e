use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("no value for named parameter '{token}' in template '{template}'")]
    MissingBindingDatum { template: String, token: String },

    #[error("malformed template '{template}' at offset {offset}: {message}")]
    MalformedTemplate {
        template: String,
        offset: usize,
        message: String,
    },
}

impl TemplateError {
    pub fn missing_binding_datum(template: impl Into<String>, token: impl Into<String>) -> Self {
        Self::MissingBindingDatum {
            template: template.into(),
            token: token.into(),
        }
    }

    pub fn malformed(template: impl Into<String>, offset: usize, message: impl Into<String>) -> Self {
        Self::MalformedTemplate {
            template: template.into(),
            offset,
            message: message.into(),
        }
    }

    pub fn template(&self) -> &str {
        match self {
            Self::MissingBindingDatum { template, .. } => template,
            Self::MalformedTemplate { template, .. } => template,
        }
    }
}
