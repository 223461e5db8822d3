//! Anomaly scorer: the process-wide fitted model and its scoring contract.

use super::{IsolationForest, ReferenceBaseline};
use crate::config::{BaselineConfig, ModelConfig};
use crate::features::FeatureVector;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Outcome of scoring one feature vector.
///
/// `is_anomaly` and `confidence` are two independently derived signals:
/// the verdict comes from the fit-time calibrated decision boundary, the
/// confidence is a sigmoid of the raw score. They are not reconciled and
/// may disagree; callers get both.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoringResult {
    pub is_anomaly: bool,
    /// Raw path-length score; lower ⇒ more anomalous.
    pub anomaly_score: f64,
    /// Sigmoid of the raw score, strictly in (0, 1). A monotonic squashing,
    /// not a calibrated probability of anomaly.
    pub confidence: f64,
}

/// Holds the fitted forest. Fitting is the only constructor, so an unfitted
/// scorer is unrepresentable; after construction the model is read-only and
/// safe to share across threads without locks.
pub struct AnomalyScorer {
    forest: IsolationForest,
}

impl AnomalyScorer {
    /// Fit against the synthetic reference baseline. Called once at process
    /// start; the seed makes fits reproducible across runs.
    pub fn fit(model: &ModelConfig, baseline: &BaselineConfig) -> Self {
        let mut rng = StdRng::seed_from_u64(model.seed);
        let reference = ReferenceBaseline::standard_normal(baseline).sample(&mut rng);
        let forest = IsolationForest::fit(model, reference.view(), &mut rng);
        Self { forest }
    }

    /// Deterministic: same fitted model + same vector ⇒ same result, always.
    pub fn score(&self, features: &FeatureVector) -> ScoringResult {
        let anomaly_score = self.forest.score_samples(features.as_slice());
        let is_anomaly = self.forest.predict(features.as_slice());
        ScoringResult {
            is_anomaly,
            anomaly_score,
            confidence: sigmoid(anomaly_score),
        }
    }
}

/// `e^s / (1 + e^s)`, computed branch-wise so large |s| saturates toward the
/// limit instead of overflowing.
pub fn sigmoid(score: f64) -> f64 {
    if score >= 0.0 {
        1.0 / (1.0 + (-score).exp())
    } else {
        let e = score.exp();
        e / (1.0 + e)
    }
}
