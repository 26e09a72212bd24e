use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NamingError {
    #[error("invalid {kind} name '{identifier}': {violation}")]
    InvalidResourceIdentifier {
        kind: String,
        identifier: String,
        violation: String,
    },
}

impl NamingError {
    pub fn invalid(
        kind: impl Into<String>,
        identifier: impl Into<String>,
        violation: impl Into<String>,
    ) -> Self {
        Self::InvalidResourceIdentifier {
            kind: kind.into(),
            identifier: identifier.into(),
            violation: violation.into(),
        }
    }

    pub fn identifier(&self) -> &str {
        match self {
            Self::InvalidResourceIdentifier { identifier, .. } => identifier,
        }
    }
}
