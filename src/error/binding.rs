use super::{ConversionError, NamingError, TemplateError};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindingError {
    #[error("binding parameter name must not be empty")]
    EmptyParameterName,

    #[error("cannot bind parameter '{parameter}': {source}")]
    Template {
        parameter: String,
        source: TemplateError,
    },

    #[error("cannot bind parameter '{parameter}': {source}")]
    Naming {
        parameter: String,
        source: NamingError,
    },

    #[error("cannot bind parameter '{parameter}': unable to convert {value_kind} value '{value}' to a resource handle")]
    UnconvertibleValue {
        parameter: String,
        value_kind: &'static str,
        value: String,
    },

    #[error("cannot bind parameter '{parameter}': {source}")]
    ConversionFailed {
        parameter: String,
        source: ConversionError,
    },

    #[error("cannot bind parameter '{parameter}': declared type '{declared}' but binder provides '{provided}'")]
    ValueTypeMismatch {
        parameter: String,
        declared: String,
        provided: String,
    },
}

impl BindingError {
    pub fn template(parameter: impl Into<String>, source: TemplateError) -> Self {
        Self::Template {
            parameter: parameter.into(),
            source,
        }
    }

    pub fn naming(parameter: impl Into<String>, source: NamingError) -> Self {
        Self::Naming {
            parameter: parameter.into(),
            source,
        }
    }

    pub fn unconvertible_value(
        parameter: impl Into<String>,
        value_kind: &'static str,
        value: impl Into<String>,
    ) -> Self {
        Self::UnconvertibleValue {
            parameter: parameter.into(),
            value_kind,
            value: value.into(),
        }
    }

    pub fn conversion_failed(parameter: impl Into<String>, source: ConversionError) -> Self {
        Self::ConversionFailed {
            parameter: parameter.into(),
            source,
        }
    }

    pub fn value_type_mismatch(
        parameter: impl Into<String>,
        declared: impl Into<String>,
        provided: impl Into<String>,
    ) -> Self {
        Self::ValueTypeMismatch {
            parameter: parameter.into(),
            declared: declared.into(),
            provided: provided.into(),
        }
    }

    /// Parameter the failure belongs to, if any.
    pub fn parameter(&self) -> Option<&str> {
        match self {
            Self::EmptyParameterName => None,
            Self::Template { parameter, .. }
            | Self::Naming { parameter, .. }
            | Self::UnconvertibleValue { parameter, .. }
            | Self::ConversionFailed { parameter, .. }
            | Self::ValueTypeMismatch { parameter, .. } => Some(parameter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_display_carries_parameter() {
        let err = BindingError::template(
            "orders",
            TemplateError::missing_binding_datum("table-{env}", "env"),
        );
        assert_eq!(
            err.to_string(),
            "cannot bind parameter 'orders': no value for named parameter 'env' in template 'table-{env}'"
        );
        assert_eq!(err.parameter(), Some("orders"));
    }

    #[test]
    fn test_unconvertible_value_display() {
        let err = BindingError::unconvertible_value("orders", "integer", "42");
        assert_eq!(
            err.to_string(),
            "cannot bind parameter 'orders': unable to convert integer value '42' to a resource handle"
        );
    }

    #[test]
    fn test_empty_parameter_has_no_parameter() {
        assert_eq!(BindingError::EmptyParameterName.parameter(), None);
    }
}
