//! TOML session configuration.
//!
//! A session describes one run of the calculator: the headline pricing inputs, the
//! heatmap range, an optional held position and where rendered output goes.
//!
//! ```toml
//! [pricing]
//! spot = 100.0
//! strike = 100.0
//! time_to_maturity = 1.0
//! volatility = 0.2
//! risk_free_rate = 0.05
//!
//! [heatmap]
//! min_spot = 80.0
//! max_spot = 120.0
//! min_volatility = 0.1
//! max_volatility = 0.3
//! volatility_sampling = "unrounded"
//!
//! [output]
//! directory = "out"
//! verbosity = 1
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::heatmap::{GridRange, Position, VolatilitySampling};
use crate::models::bs::PricingParameters;

/// Heatmap range plus the policy used to price its volatility rows.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct HeatmapSettings {
    pub min_spot: f64,
    pub max_spot: f64,
    #[serde(default = "default_min_volatility")]
    pub min_volatility: f64,
    #[serde(default = "default_max_volatility")]
    pub max_volatility: f64,
    #[serde(default)]
    pub volatility_sampling: VolatilitySampling,
}

impl HeatmapSettings {
    pub fn range(&self) -> GridRange {
        GridRange {
            min_spot: self.min_spot,
            max_spot: self.max_spot,
            min_volatility: self.min_volatility,
            max_volatility: self.max_volatility,
        }
    }
}

/// Where and what to write.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_directory")]
    pub directory: PathBuf,
    #[serde(default = "default_true")]
    pub write_svg: bool,
    #[serde(default = "default_true")]
    pub write_csv: bool,
    /// Log level when `RUST_LOG` is unset (0=warn, 1=info, 2+=debug)
    #[serde(default = "default_verbosity")]
    pub verbosity: u8,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            write_svg: true,
            write_csv: true,
            verbosity: default_verbosity(),
        }
    }
}

impl OutputConfig {
    /// Directive handed to the tracing filter when `RUST_LOG` is not set.
    pub fn log_directive(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

/// Main configuration struct for one calculator run
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SessionConfig {
    pub pricing: PricingParameters,
    pub heatmap: HeatmapSettings,
    #[serde(default)]
    pub position: Option<Position>,
    #[serde(default)]
    pub output: OutputConfig,
}

impl SessionConfig {
    /// At-the-money one-year option swept +/-20% in spot and 10-30% in volatility
    pub fn demo() -> Self {
        Self {
            pricing: PricingParameters {
                spot: 100.0,
                strike: 100.0,
                time_to_maturity: 1.0,
                volatility: 0.2,
                risk_free_rate: 0.05,
            },
            heatmap: HeatmapSettings {
                min_spot: 80.0,
                max_spot: 120.0,
                min_volatility: 0.1,
                max_volatility: 0.3,
                volatility_sampling: VolatilitySampling::Unrounded,
            },
            position: None,
            output: OutputConfig::default(),
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("failed to parse session config")
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("invalid config file {}", path.display()))
    }
}

// Same bounds as the volatility sliders of the interactive front end.
fn default_min_volatility() -> f64 {
    0.01
}

fn default_max_volatility() -> f64 {
    1.0
}

fn default_directory() -> PathBuf {
    PathBuf::from("out")
}

fn default_true() -> bool {
    true
}

fn default_verbosity() -> u8 {
    1
}
