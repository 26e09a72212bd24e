/// Candidate values supplied on the manual invocation path.
///
/// Callers may hand a binding anything: an existing handle, a resource
/// name, or some unrelated value. The converter chain decides what it can use.
use super::ResourceHandle;

#[derive(Debug, Clone, PartialEq)]
pub enum BindingValue {
    Handle(ResourceHandle),
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Json(serde_json::Value),
    Null,
}

impl BindingValue {
    /// Short kind name used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Handle(_) => "handle",
            Self::Text(_) => "string",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Boolean(_) => "boolean",
            Self::Json(_) => "json",
            Self::Null => "null",
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_handle(&self) -> Option<&ResourceHandle> {
        match self {
            Self::Handle(handle) => Some(handle),
            _ => None,
        }
    }

    /// Render the value for error messages.
    pub fn describe(&self) -> String {
        match self {
            Self::Handle(handle) => handle.uri().to_string(),
            Self::Text(text) => text.clone(),
            Self::Integer(n) => n.to_string(),
            Self::Float(n) => n.to_string(),
            Self::Boolean(b) => b.to_string(),
            Self::Json(json) => json.to_string(),
            Self::Null => "null".to_string(),
        }
    }
}

impl From<ResourceHandle> for BindingValue {
    fn from(handle: ResourceHandle) -> Self {
        Self::Handle(handle)
    }
}

impl From<&str> for BindingValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for BindingValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<i64> for BindingValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<bool> for BindingValue {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<serde_json::Value> for BindingValue {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Boolean(b),
            serde_json::Value::String(s) => Self::Text(s),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Integer(i),
                None => n.as_f64().map(Self::Float).unwrap_or(Self::Null),
            },
            other => Self::Json(other),
        }
    }
}
