use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level rnd configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RndConfig {
    /// Model and batch settings.
    #[serde(default)]
    pub model: ModelToml,

    /// Export settings.
    #[serde(default)]
    pub output: OutputToml,
}

impl RndConfig {
    /// Reads and parses a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelToml {
    #[serde(default)]
    pub p: usize,
    #[serde(default = "default_one")]
    pub d: usize,
    #[serde(default = "default_one")]
    pub q: usize,
    #[serde(default)]
    pub bp: usize,
    #[serde(default = "default_one")]
    pub bd: usize,
    #[serde(default = "default_one")]
    pub bq: usize,
    /// Periods per year: 1, 2, 3, 4, 6 or 12.
    #[serde(default = "default_frequency")]
    pub frequency: u16,
    #[serde(default)]
    pub seed: u64,
    #[serde(default = "default_noise_scale")]
    pub noise_scale: f64,
    #[serde(default = "default_count")]
    pub count: usize,
    #[serde(default = "default_length")]
    pub length: usize,
    /// Explicit base coefficients; all zero when absent.
    #[serde(default)]
    pub coefficients: Option<CoefficientsToml>,
}

impl Default for ModelToml {
    fn default() -> Self {
        Self {
            p: 0,
            d: default_one(),
            q: default_one(),
            bp: 0,
            bd: default_one(),
            bq: default_one(),
            frequency: default_frequency(),
            seed: 0,
            noise_scale: default_noise_scale(),
            count: default_count(),
            length: default_length(),
            coefficients: None,
        }
    }
}

fn default_one() -> usize {
    1
}
fn default_frequency() -> u16 {
    12
}
fn default_noise_scale() -> f64 {
    0.1
}
fn default_count() -> usize {
    100
}
fn default_length() -> usize {
    240
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoefficientsToml {
    #[serde(default)]
    pub phi: Vec<f64>,
    #[serde(default)]
    pub theta: Vec<f64>,
    #[serde(default)]
    pub bphi: Vec<f64>,
    #[serde(default)]
    pub btheta: Vec<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    /// CSV summary report, one row per series.
    pub report: Option<PathBuf>,
    /// JSON dump of every resolved series.
    pub series_json: Option<PathBuf>,
    #[serde(default = "default_encoding")]
    pub encoding: String,
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self {
            report: None,
            series_json: None,
            encoding: default_encoding(),
            delimiter: default_delimiter(),
        }
    }
}

fn default_encoding() -> String {
    "latin1".to_string()
}
fn default_delimiter() -> char {
    ','
}
