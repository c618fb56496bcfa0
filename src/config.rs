use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level configuration file.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct TauchenConfig {
    /// Global RNG seed.
    #[serde(default)]
    pub seed: Option<u64>,

    /// AR(1) process and grid parameters.
    #[serde(default)]
    pub ar1: Ar1Toml,

    /// Discretization settings.
    #[serde(default)]
    pub discretize: DiscretizeToml,
}

impl TauchenConfig {
    /// Reads and parses a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Ar1Toml {
    #[serde(default = "default_nz")]
    pub nz: usize,
    #[serde(default)]
    pub mu: f64,
    #[serde(default = "default_rho")]
    pub rho: f64,
    #[serde(default = "default_sigma")]
    pub sigma: f64,
    #[serde(default = "default_lambda")]
    pub lambda: f64,
}

impl Default for Ar1Toml {
    fn default() -> Self {
        Self {
            nz: default_nz(),
            mu: 0.0,
            rho: default_rho(),
            sigma: default_sigma(),
            lambda: default_lambda(),
        }
    }
}

fn default_nz() -> usize {
    4
}
fn default_rho() -> f64 {
    0.95
}
fn default_sigma() -> f64 {
    0.005
}
fn default_lambda() -> f64 {
    3.0
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct DiscretizeToml {
    #[serde(default)]
    pub parallel: bool,
    #[serde(default)]
    pub output: Option<PathBuf>,
}
