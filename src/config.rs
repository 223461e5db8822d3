//! Processor configuration. Model parameters are fixed at fit time, never
//! derived from input traffic.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessorConfig {
    /// Isolation forest parameters
    pub model: ModelConfig,
    /// Synthetic reference baseline parameters
    pub baseline: BaselineConfig,
    /// Logging
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Number of isolation trees in the ensemble
    pub num_trees: usize,
    /// Rows subsampled per tree
    pub sample_size: usize,
    /// Expected outlier fraction, calibrates the decision boundary (0.0–0.5)
    pub contamination: f64,
    /// RNG seed for reproducible fits
    pub seed: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaselineConfig {
    /// Number of synthetic reference rows drawn at fit time
    pub samples: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            model: ModelConfig::default(),
            baseline: BaselineConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            num_trees: 100,
            sample_size: 256,
            contamination: 0.1,
            seed: 42,
        }
    }
}

impl Default for BaselineConfig {
    fn default() -> Self {
        Self { samples: 1000 }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: true,
        }
    }
}

impl ProcessorConfig {
    /// Load from JSON file if present; otherwise return default
    pub fn load(path: &std::path::Path) -> Self {
        if path.exists() {
            if let Ok(data) = std::fs::read_to_string(path) {
                if let Ok(c) = serde_json::from_str::<ProcessorConfig>(&data) {
                    return c;
                }
            }
        }
        Self::default()
    }
}
