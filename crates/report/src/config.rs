//! Configuration file support for report runs

use analytics::AnalysisConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete report configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Compute independent sections on the rayon thread pool
    pub parallel: bool,
    /// Stop-words, stop-languages and excluded years
    pub analysis: AnalysisConfig,
    /// How many rows each ranked section keeps
    pub limits: ReportLimits,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            analysis: AnalysisConfig::default(),
            limits: ReportLimits::default(),
        }
    }
}

/// Row limits for the ranked sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportLimits {
    pub top_companies: usize,
    pub top_movies: usize,
    pub top_words: usize,
    pub words_per_language: usize,
    pub words_per_year: usize,
    /// Number of release years in the per-year word section, newest first
    pub years_shown: usize,
}

impl Default for ReportLimits {
    fn default() -> Self {
        Self {
            top_companies: 10,
            top_movies: 10,
            top_words: 30,
            words_per_language: 5,
            words_per_year: 10,
            years_shown: 25,
        }
    }
}

impl ReportConfig {
    /// Load configuration from a file (YAML or TOML)
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("");

        match extension {
            "yaml" | "yml" => serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse YAML config: {}", path.display())),
            "toml" => toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display())),
            _ => Err(anyhow::anyhow!(
                "Unsupported config file format: {}. Use .yaml, .yml, or .toml",
                extension
            )),
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("");

        let content = match extension {
            "yaml" | "yml" => serde_yaml::to_string(self)?,
            "toml" => toml::to_string_pretty(self)?,
            _ => {
                return Err(anyhow::anyhow!(
                    "Unsupported config file format: {}. Use .yaml, .yml, or .toml",
                    extension
                ))
            }
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }
}
