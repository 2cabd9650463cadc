//! Optional TOML run configuration
//!
//! Every field is optional; explicit CLI flags take precedence over file
//! values, and built-in defaults cover whatever neither supplies.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct RunFileConfig {
    pub population_size: Option<usize>,
    pub generations: Option<usize>,
    pub mutation_rate: Option<f64>,
    pub seed: Option<u64>,
}

impl RunFileConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("failed to read config {}", path.as_ref().display()))?;
        let config = toml::from_str(&raw)
            .with_context(|| format!("failed to parse config {}", path.as_ref().display()))?;
        Ok(config)
    }
}
