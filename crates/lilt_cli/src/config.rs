//! Lilt configuration file handling

use anyhow::{Context, Result};
use lilt_spring::SpringSection;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level Lilt configuration (lilt.toml)
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LiltConfig {
    #[serde(default)]
    pub spring: SpringSection,
    #[serde(default)]
    pub simulation: SimulationConfig,
}

/// Frame cadence for `lilt simulate`
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct SimulationConfig {
    /// Elapsed time fed to every frame
    #[serde(default = "default_frame_ms")]
    pub frame_ms: f32,
    /// Give up after this much simulated time
    #[serde(default = "default_max_ms")]
    pub max_ms: f32,
}

fn default_frame_ms() -> f32 {
    16.0
}

fn default_max_ms() -> f32 {
    5000.0
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            frame_ms: default_frame_ms(),
            max_ms: default_max_ms(),
        }
    }
}

impl LiltConfig {
    /// Load configuration from a file, or from `lilt.toml` inside a directory
    pub fn load(path: &Path) -> Result<Self> {
        let config_path = if path.is_dir() {
            path.join("lilt.toml")
        } else {
            path.to_path_buf()
        };

        if !config_path.exists() {
            anyhow::bail!("No config found at {}", config_path.display());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        Self::parse(&content).with_context(|| format!("Failed to parse {}", config_path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: LiltConfig = toml::from_str(content)?;
        Ok(config)
    }
}
