/// Per-invocation state handed to a binding.
///
/// A context carries:
/// - The invocation id, used to correlate log output
/// - The binding data extracted from the trigger payload
use std::collections::BTreeMap;

/// Token values supplied by the invocation host.
///
/// Keys are free-form strings declared by templates, so lookups return
/// `Option` and never assume presence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindingData {
    values: BTreeMap<String, String>,
}

impl BindingData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.values.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for BindingData
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct BindingContext {
    /// Correlates every log line of one invocation
    invocation_id: String,

    /// Trigger-time token values
    binding_data: BindingData,
}

impl BindingContext {
    /// Create a context with no binding data
    pub fn new(invocation_id: impl Into<String>) -> Self {
        Self {
            invocation_id: invocation_id.into(),
            binding_data: BindingData::new(),
        }
    }

    pub fn with_binding_data(mut self, binding_data: BindingData) -> Self {
        self.binding_data = binding_data;
        self
    }

    pub fn with_datum(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.binding_data.insert(key, value);
        self
    }

    /// Get the invocation id
    pub fn invocation_id(&self) -> &str {
        &self.invocation_id
    }

    /// Get the binding data
    pub fn binding_data(&self) -> &BindingData {
        &self.binding_data
    }
}
