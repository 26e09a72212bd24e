//! Naming policies and validated resource identifiers.
//!
//! Every resource kind has its own naming rules. A `ResourceIdentifier` can
//! only be obtained by passing a raw name through a policy, so any handle
//! built from one is known to carry a valid name.

use crate::error::{ConfigError, NamingError};
use regex::Regex;
use std::fmt;

/// Inclusive length limits, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBounds {
    pub min: usize,
    pub max: usize,
}

impl LengthBounds {
    pub const STORAGE: LengthBounds = LengthBounds { min: 3, max: 63 };

    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    fn check(&self, identifier: &str) -> Result<(), String> {
        let len = identifier.chars().count();
        if len < self.min || len > self.max {
            return Err(format!(
                "must be between {} and {} characters long",
                self.min, self.max
            ));
        }
        Ok(())
    }
}

impl Default for LengthBounds {
    fn default() -> Self {
        Self::STORAGE
    }
}

pub trait NamingPolicy: Send + Sync + fmt::Debug {
    /// Resource kind used in error messages ("table", "container", ...).
    fn kind_name(&self) -> &str;

    /// Returns a description of the first violated rule.
    fn check(&self, identifier: &str) -> Result<(), String>;

    fn is_valid(&self, identifier: &str) -> bool {
        self.check(identifier).is_ok()
    }
}

/// Table names: alphanumeric, starting with a letter. Case is preserved but
/// not significant, so the reserved name `tables` is rejected in any case.
#[derive(Debug, Clone, Default)]
pub struct TableNamePolicy {
    bounds: LengthBounds,
}

impl TableNamePolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bounds(bounds: LengthBounds) -> Self {
        Self { bounds }
    }
}

impl NamingPolicy for TableNamePolicy {
    fn kind_name(&self) -> &str {
        "table"
    }

    fn check(&self, identifier: &str) -> Result<(), String> {
        self.bounds.check(identifier)?;

        if !identifier.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err("may contain only letters and digits".to_string());
        }
        if !identifier
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic())
        {
            return Err("must start with a letter".to_string());
        }
        if identifier.eq_ignore_ascii_case("tables") {
            return Err("'tables' is a reserved name".to_string());
        }
        Ok(())
    }
}

/// Container and queue names: lowercase letters, digits and single hyphens,
/// starting and ending with a letter or digit.
#[derive(Debug, Clone)]
pub struct ContainerNamePolicy {
    kind: &'static str,
    bounds: LengthBounds,
}

impl ContainerNamePolicy {
    pub fn container() -> Self {
        Self {
            kind: "container",
            bounds: LengthBounds::STORAGE,
        }
    }

    pub fn queue() -> Self {
        Self {
            kind: "queue",
            bounds: LengthBounds::STORAGE,
        }
    }

    pub fn with_bounds(mut self, bounds: LengthBounds) -> Self {
        self.bounds = bounds;
        self
    }
}

impl Default for ContainerNamePolicy {
    fn default() -> Self {
        Self::container()
    }
}

impl NamingPolicy for ContainerNamePolicy {
    fn kind_name(&self) -> &str {
        self.kind
    }

    fn check(&self, identifier: &str) -> Result<(), String> {
        self.bounds.check(identifier)?;

        if !identifier
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err("may contain only lowercase letters, digits and hyphens".to_string());
        }
        if identifier.starts_with('-') || identifier.ends_with('-') {
            return Err("must start and end with a letter or digit".to_string());
        }
        if identifier.contains("--") {
            return Err("must not contain consecutive hyphens".to_string());
        }
        Ok(())
    }
}

/// Policy defined entirely by data: a regex plus length bounds.
#[derive(Debug, Clone)]
pub struct PatternPolicy {
    kind: String,
    pattern: Regex,
    bounds: LengthBounds,
}

impl PatternPolicy {
    pub fn new(
        kind: impl Into<String>,
        pattern: &str,
        bounds: LengthBounds,
    ) -> Result<Self, ConfigError> {
        let pattern =
            Regex::new(pattern).map_err(|e| ConfigError::invalid_pattern(pattern, e.to_string()))?;
        Ok(Self {
            kind: kind.into(),
            pattern,
            bounds,
        })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl NamingPolicy for PatternPolicy {
    fn kind_name(&self) -> &str {
        &self.kind
    }

    fn check(&self, identifier: &str) -> Result<(), String> {
        self.bounds.check(identifier)?;

        if !self.pattern.is_match(identifier) {
            return Err(format!("must match pattern '{}'", self.pattern.as_str()));
        }
        Ok(())
    }
}

/// A resource name that passed its kind's naming policy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceIdentifier(String);

impl ResourceIdentifier {
    pub fn new(identifier: &str, policy: &dyn NamingPolicy) -> Result<Self, NamingError> {
        policy
            .check(identifier)
            .map_err(|violation| NamingError::invalid(policy.kind_name(), identifier, violation))?;
        Ok(Self(identifier.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ResourceIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
