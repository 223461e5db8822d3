//! Synthetic reference baseline the model is fitted against.
//!
//! The sample is drawn from a standard normal distribution, not from real
//! CoT traffic — an assumption-only stand-in for "normal". Kept behind this
//! seam so recorded historical data can replace it without touching the
//! scoring contract.

use crate::config::BaselineConfig;
use crate::features::FEATURE_DIM;
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::Rng;
use rand_distr::StandardNormal;

pub struct ReferenceBaseline {
    samples: usize,
    dim: usize,
}

impl ReferenceBaseline {
    /// Baseline matching the feature space width.
    pub fn standard_normal(config: &BaselineConfig) -> Self {
        Self {
            samples: config.samples,
            dim: FEATURE_DIM,
        }
    }

    /// Draw the reference matrix (`samples` rows × `FEATURE_DIM` columns).
    pub fn sample(&self, rng: &mut StdRng) -> Array2<f64> {
        Array2::from_shape_fn((self.samples, self.dim), |_| rng.sample(StandardNormal))
    }
}
