//! Isolation-based outlier model: fitted once at process start, read-only
//! afterwards.

mod baseline;
mod forest;
mod scorer;

pub use baseline::ReferenceBaseline;
pub use forest::IsolationForest;
pub use scorer::{sigmoid, AnomalyScorer, ScoringResult};
