use anyhow::Result;

use crate::cli::OutputFormat;

use super::Report;

pub struct OutputFormatter;

impl OutputFormatter {
    pub fn format(report: &Report, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(report)?),
        }
    }
}
