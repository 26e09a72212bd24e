use super::BindingError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read manifest '{path}': {message}")]
    ReadError { path: PathBuf, message: String },

    #[error("failed to parse manifest '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("unsupported manifest format: {format} (expected json or yaml)")]
    UnsupportedFormat { format: String },

    #[error("failed to scan directory at {path}: {source}")]
    DirectoryScan {
        path: PathBuf,
        source: walkdir::Error,
    },

    #[error("invalid naming pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("invalid naming bounds: min_length {min} exceeds max_length {max}")]
    InvalidBounds { min: usize, max: usize },

    #[error("invalid binding in manifest '{path}': {source}")]
    InvalidBinding { path: PathBuf, source: BindingError },
}

impl ConfigError {
    pub fn read_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ReadError {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ParseError {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn unsupported_format(format: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            format: format.into(),
        }
    }

    pub fn invalid_pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    pub fn invalid_bounds(min: usize, max: usize) -> Self {
        Self::InvalidBounds { min, max }
    }

    pub fn invalid_binding(path: impl Into<PathBuf>, source: BindingError) -> Self {
        Self::InvalidBinding {
            path: path.into(),
            source,
        }
    }
}
