use super::NamingError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("converter '{converter}' failed: {source}")]
    Naming {
        converter: &'static str,
        source: NamingError,
    },

    #[error("converter '{converter}' rejected the value: {reason}")]
    Rejected {
        converter: &'static str,
        reason: String,
    },
}

impl ConversionError {
    pub fn naming(converter: &'static str, source: NamingError) -> Self {
        Self::Naming { converter, source }
    }

    pub fn rejected(converter: &'static str, reason: impl Into<String>) -> Self {
        Self::Rejected {
            converter,
            reason: reason.into(),
        }
    }

    pub fn converter(&self) -> &'static str {
        match self {
            Self::Naming { converter, .. } | Self::Rejected { converter, .. } => converter,
        }
    }
}
