use anyhow::{Context as AnyhowContext, Result};
use clap::{Parser, ValueEnum};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::engine::{BindingData, BindingValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
}

#[derive(Parser, Debug)]
#[command(name = "bindflow")]
#[command(about = "Binding resolver - resolve declared resource bindings for one invocation", long_about = None)]
pub struct Args {
    /// Binding manifest, or a directory of manifests
    #[arg(long, value_name = "PATH")]
    pub path: PathBuf,

    /// Binding data token (e.g., env=prod). Can be specified multiple times.
    #[arg(short, long, value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub data: Vec<(String, String)>,

    /// Supply a value for a parameter instead of resolving its template
    #[arg(long, value_name = "PARAM=VALUE", value_parser = parse_key_value)]
    pub value: Vec<(String, String)>,

    /// Invocation id used to correlate log output
    #[arg(long, default_value = "cli")]
    pub invocation_id: String,

    /// Output file path (prints to stdout if not specified)
    #[arg(short = 'O', long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Output format (json, yaml)
    #[arg(short = 'f', long, default_value = "json")]
    pub format: OutputFormat,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        validate_path(&self.path)?;
        if self.invocation_id.trim().is_empty() {
            anyhow::bail!("Invocation id must not be empty");
        }
        Ok(())
    }

    pub fn binding_data(&self) -> BindingData {
        self.data.iter().cloned().collect()
    }

    /// Supplied values keyed by parameter. JSON scalars keep their type so
    /// that `42` arrives as a number; anything else is a string.
    pub fn supplied_values(&self) -> HashMap<String, BindingValue> {
        self.value
            .iter()
            .map(|(param, raw)| {
                let value = serde_json::from_str::<serde_json::Value>(raw)
                    .map(BindingValue::from)
                    .unwrap_or_else(|_| BindingValue::from(raw.as_str()));
                (param.clone(), value)
            })
            .collect()
    }
}

pub fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))?;
    if key.is_empty() {
        return Err(format!("empty key in '{raw}'"));
    }
    Ok((key.to_string(), value.to_string()))
}

pub fn validate_path(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("Path does not exist: {}", path.display());
    }

    if path.is_file() {
        std::fs::metadata(path).with_context(|| format!("Cannot read file: {}", path.display()))?;
    } else if path.is_dir() {
        std::fs::metadata(path)
            .with_context(|| format!("Cannot read directory: {}", path.display()))?;
    } else {
        anyhow::bail!("Path is neither a file nor a directory: {}", path.display());
    }

    Ok(())
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }
}
