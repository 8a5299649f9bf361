//! Engine configuration, loadable from a TOML file with full defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::ConfigError;

/// Top-level configuration for the CLI and engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Path of the SQLite database file.
    pub database_path: String,
    /// How many outfits a suggestion run returns.
    pub suggestion_count: usize,
    /// Size of the top-ranked pool the selector samples from.
    pub top_pool: usize,
    /// Fixed RNG seed for selection sampling. Unset means entropy-seeded.
    pub sample_seed: Option<u64>,
    /// Garment category the shoes pool is drawn from.
    pub shoes_category: String,
    /// Garment category the bottoms pool is drawn from.
    pub bottoms_category: String,
    /// Default tracing filter when RUST_LOG is not set.
    pub log_level: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            database_path: "data/wardrobe.db".to_string(),
            suggestion_count: 3,
            top_pool: 150,
            sample_seed: None,
            shoes_category: "shoes".to_string(),
            bottoms_category: "trousers".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl EngineConfig {
    /// Load from a TOML file. A missing file yields the defaults;
    /// a malformed file is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        toml::from_str(&raw).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}
