//! Feature extraction: CoT event → `[lat, lon, speed, course]`.

use super::{FeatureVector, FEATURE_DIM};
use crate::event::CotEvent;

/// Absent kinematics are scored as 0.0. The source event is not mutated;
/// the substitution exists only in the feature space.
pub fn kinematic_or_zero(value: Option<f64>) -> f64 {
    value.unwrap_or(0.0)
}

/// Stateless projection of an event onto the model's input space.
/// No validation: out-of-range or non-finite coordinates pass through as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureExtractor;

impl FeatureExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, event: &CotEvent) -> FeatureVector {
        FeatureVector::new([
            event.lat,
            event.lon,
            kinematic_or_zero(event.speed),
            kinematic_or_zero(event.course),
        ])
    }
}
