//! Fixed-width numeric feature projection of a CoT event.

mod extract;

pub use extract::{kinematic_or_zero, FeatureExtractor};

use serde::{Deserialize, Serialize};

/// Width of the model input. The fitted forest's dimensionality must match;
/// the fixed-size array makes any other width unrepresentable.
pub const FEATURE_DIM: usize = 4;

/// Ordered projection `[lat, lon, speed, course]` consumed by the model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub values: [f64; FEATURE_DIM],
}

impl FeatureVector {
    pub fn new(values: [f64; FEATURE_DIM]) -> Self {
        Self { values }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}
