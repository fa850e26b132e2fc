use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::color::DEFAULT_TOLERANCE;
use crate::remove::Options;

/// Settings read from an optional TOML file passed with `--config`.
#[derive(Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Maximum RGB distance from the background color (default: 40)
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Apply alpha bleed to erased pixels (default: false)
    #[serde(default)]
    pub bleed: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            bleed: false,
        }
    }
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        if !config.tolerance.is_finite() || config.tolerance < 0.0 {
            bail!(
                "{}: tolerance must be a non-negative number, got {}",
                path.display(),
                config.tolerance
            );
        }

        Ok(config)
    }

    /// Merges command line overrides on top of the file values.
    pub fn options(&self, tolerance: Option<f64>, bleed: bool) -> Options {
        Options {
            tolerance: tolerance.unwrap_or(self.tolerance),
            bleed: bleed || self.bleed,
        }
    }
}
