//! Serializable run configuration.

use paperfolio_core::engine::{Allocation, Granularity, SimulationMode};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Unique identifier for a run (content-addressable hash).
pub type RunId = String;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("starting capital must be positive, got {0}")]
    NonPositiveCapital(f64),
}

/// Everything needed to reproduce one simulation run.
///
/// Loaded from a TOML file; two identical configs hash to the same `RunId`,
/// so results keyed by run id can be shared or cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    pub starting_capital: f64,
    /// Slug of a scenario in the catalog.
    pub scenario: String,
    #[serde(default)]
    pub drip: bool,
    /// Day-one buys, executed as pending trades on the first tick.
    #[serde(default)]
    pub allocations: Vec<Allocation>,
    /// Override for the price-artifact directory; the CLI falls back to its
    /// own default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    #[serde(default = "default_mode")]
    pub mode: SimulationMode,
    #[serde(default = "default_granularity")]
    pub granularity: Granularity,
}

fn default_mode() -> SimulationMode {
    SimulationMode::Movie
}

fn default_granularity() -> Granularity {
    Granularity::Daily
}

impl RunConfig {
    pub fn from_toml_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.starting_capital <= 0.0 {
            return Err(ConfigError::NonPositiveCapital(self.starting_capital));
        }
        Ok(())
    }

    /// Deterministic content hash of this configuration.
    pub fn run_id(&self) -> RunId {
        let json = serde_json::to_string(self).expect("RunConfig serialization failed");
        blake3::hash(json.as_bytes()).to_hex().to_string()
    }
}
