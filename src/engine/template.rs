//! Route templates: resource names with `{token}` placeholders.
//!
//! A template is parsed once when a binding is declared and resolved against
//! fresh binding data on every invocation. Substituted values are copied
//! verbatim and never re-scanned for tokens. A lone `}` outside a token is
//! ordinary text.

use super::BindingData;
use crate::error::TemplateError;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Token(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTemplate {
    source: String,
    segments: Vec<Segment>,
}

impl RouteTemplate {
    pub fn parse(template: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut literal_start = 0;
        let mut chars = template.char_indices();

        while let Some((open, ch)) = chars.next() {
            if ch != '{' {
                continue;
            }

            let mut close = None;
            for (i, c) in chars.by_ref() {
                match c {
                    '}' => {
                        close = Some(i);
                        break;
                    }
                    '{' => {
                        return Err(TemplateError::malformed(
                            template,
                            i,
                            "'{' inside a token",
                        ))
                    }
                    _ => {}
                }
            }

            let Some(close) = close else {
                return Err(TemplateError::malformed(template, open, "unterminated token"));
            };

            let name = &template[open + 1..close];
            if name.is_empty() {
                return Err(TemplateError::malformed(template, open, "empty token"));
            }

            if open > literal_start {
                segments.push(Segment::Literal(template[literal_start..open].to_string()));
            }
            segments.push(Segment::Token(name.to_string()));
            literal_start = close + 1;
        }

        if literal_start < template.len() {
            segments.push(Segment::Literal(template[literal_start..].to_string()));
        }

        Ok(Self {
            source: template.to_string(),
            segments,
        })
    }

    /// The unresolved template text.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// True when the template contains no tokens.
    pub fn is_static(&self) -> bool {
        !self
            .segments
            .iter()
            .any(|s| matches!(s, Segment::Token(_)))
    }

    /// Token names in order of first appearance, without duplicates.
    pub fn parameter_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for segment in &self.segments {
            if let Segment::Token(name) = segment {
                if !names.contains(&name.as_str()) {
                    names.push(name);
                }
            }
        }
        names
    }

    pub fn resolve(&self, data: &BindingData) -> Result<String, TemplateError> {
        if self.is_static() {
            return Ok(self.source.clone());
        }

        let mut resolved = String::with_capacity(self.source.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => resolved.push_str(text),
                Segment::Token(name) => {
                    let value = data.get(name).ok_or_else(|| {
                        TemplateError::missing_binding_datum(&self.source, name)
                    })?;
                    resolved.push_str(value);
                }
            }
        }
        Ok(resolved)
    }
}

impl fmt::Display for RouteTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Parse and resolve in one step.
pub fn resolve(template: &str, data: &BindingData) -> Result<String, TemplateError> {
    RouteTemplate::parse(template)?.resolve(data)
}
