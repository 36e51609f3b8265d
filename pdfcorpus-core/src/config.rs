use crate::extraction::ExtractionMethod;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::warn;

// Default value functions for serde
fn default_true() -> bool {
    true
}

fn default_input_dir() -> PathBuf {
    PathBuf::from("data/raw")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("data/processed")
}

fn default_report_filename() -> String {
    "extraction_report.txt".to_string()
}

/// Ingestion settings, loadable from YAML
///
/// ```yaml
/// input_dir: data/raw
/// output_dir: data/processed
/// method: primary        # or: secondary
/// fallback: true         # retry blank primary output with the secondary backend
/// report_filename: extraction_report.txt
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestConfig {
    /// Directory scanned (non-recursively) for PDF files
    #[serde(default = "default_input_dir")]
    pub input_dir: PathBuf,
    /// Root of `texts/`, `metadata/` and the report
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default)]
    pub method: ExtractionMethod,
    #[serde(default = "default_true")]
    pub fallback: bool,
    #[serde(default = "default_report_filename")]
    pub report_filename: String,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            input_dir: default_input_dir(),
            output_dir: default_output_dir(),
            method: ExtractionMethod::default(),
            fallback: true,
            report_filename: default_report_filename(),
        }
    }
}

impl IngestConfig {
    /// Load config from YAML file
    pub fn load_from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {path}"))?;
        let config: IngestConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Invalid config file {path}"))?;
        Ok(config)
    }

    /// Load config with fallback to default
    pub fn load_with_fallback(path: Option<&str>) -> Self {
        match path {
            Some(p) => Self::load_from_file(p).unwrap_or_else(|e| {
                warn!(path = p, error = %e, "Failed to load config, using defaults");
                Self::default()
            }),
            None => Self::default(),
        }
    }
}
