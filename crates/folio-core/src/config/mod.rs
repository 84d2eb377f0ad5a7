mod defaults;


use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::FolioError;
use defaults::*;

/// Top-level folio configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub folio: FolioConfig,
    #[serde(default)]
    pub latency: LatencyConfig,
    #[serde(default)]
    pub playground: PlaygroundConfig,
    #[serde(default)]
    pub knowledge: KnowledgeConfig,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolioConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            log_level: default_log_level(),
        }
    }
}

/// Simulated "thinking" delay before a reply is delivered.
///
/// The delay is drawn from `[min_ms, max_ms)`; equal bounds give a fixed delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatencyConfig {
    #[serde(default = "default_min_latency_ms")]
    pub min_ms: u64,
    #[serde(default = "default_max_latency_ms")]
    pub max_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            min_ms: default_min_latency_ms(),
            max_ms: default_max_latency_ms(),
        }
    }
}

impl LatencyConfig {
    /// A delay that never varies.
    pub fn fixed(ms: u64) -> Self {
        Self {
            min_ms: ms,
            max_ms: ms,
        }
    }

    /// No delay at all.
    pub fn instant() -> Self {
        Self::fixed(0)
    }

    /// Width of the jitter window in milliseconds.
    pub fn span_ms(&self) -> u64 {
        self.max_ms.saturating_sub(self.min_ms)
    }

    /// Delay for a jitter offset already drawn from `0..span_ms()`.
    pub fn delay(&self, jitter_ms: u64) -> Duration {
        Duration::from_millis(self.min_ms + jitter_ms.min(self.span_ms()))
    }

    fn validate(&self) -> Result<(), FolioError> {
        if self.max_ms < self.min_ms {
            return Err(FolioError::Config(format!(
                "latency max_ms ({}) is below min_ms ({})",
                self.max_ms, self.min_ms
            )));
        }
        Ok(())
    }
}

/// Playground lab settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaygroundConfig {
    /// Fixed reply delay for lab demos.
    #[serde(default = "default_lab_latency_ms")]
    pub latency_ms: u64,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_lab_latency_ms(),
        }
    }
}

impl PlaygroundConfig {
    pub fn latency(&self) -> LatencyConfig {
        LatencyConfig::fixed(self.latency_ms)
    }
}

/// Where the knowledge base comes from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KnowledgeConfig {
    /// Path to a knowledge TOML file. Empty = bundled knowledge base.
    #[serde(default)]
    pub path: String,
}

impl KnowledgeConfig {
    /// Expanded override path, or `None` for the bundled data.
    pub fn override_path(&self) -> Option<String> {
        let trimmed = self.path.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(shellexpand(trimmed))
        }
    }
}

impl Config {
    /// Check cross-field constraints serde cannot express.
    pub fn validate(&self) -> Result<(), FolioError> {
        self.latency.validate()
    }
}

/// Expand `~` to home directory.
pub fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return format!("{}/{rest}", home.to_string_lossy());
        }
    }
    path.to_string()
}

/// Parse configuration from TOML text.
pub fn from_toml_str(content: &str) -> Result<Config, FolioError> {
    let config: Config = toml::from_str(content)
        .map_err(|e| FolioError::Config(format!("failed to parse config: {}", e)))?;
    config.validate()?;
    Ok(config)
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist.
pub fn load(path: &str) -> Result<Config, FolioError> {
    let expanded = shellexpand(path);
    let path = Path::new(&expanded);
    if !path.exists() {
        tracing::info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| FolioError::Config(format!("failed to read {}: {}", path.display(), e)))?;

    from_toml_str(&content)
}
