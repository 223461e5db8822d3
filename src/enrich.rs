//! Enrichment record assembly and the single-shot processing pipeline.

use crate::event::CotEvent;
use crate::features::FeatureExtractor;
use crate::model::{AnomalyScorer, ScoringResult};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ProcessError {
    /// Rejected at the boundary, before the core: required fields missing
    /// or mistyped.
    #[error("malformed CoT event: {0}")]
    Malformed(#[from] serde_json::Error),
    /// Generic processing failure with a human-readable message. The
    /// pipeline is pure and deterministic, so no retry is warranted.
    #[error("failed to process event: {0}")]
    Processing(String),
}

/// Scoring block nested in the enriched record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MlEnrichment {
    pub anomaly_detected: bool,
    pub anomaly_score: f64,
    pub confidence: f64,
}

/// The original event's scalar fields plus the scoring block. The only
/// transformation of source fields is RFC 3339 timestamp formatting;
/// kinematics absent on input stay absent here even though the feature
/// vector substituted 0.0 for them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichedCot {
    pub event_id: String,
    #[serde(rename = "type")]
    pub cot_type: String,
    pub time: String,
    pub lat: f64,
    pub lon: f64,
    pub altitude: Option<f64>,
    pub speed: Option<f64>,
    pub course: Option<f64>,
    pub ml_enrichment: MlEnrichment,
}

impl EnrichedCot {
    /// Pure merge of event and scoring result. No side effects.
    pub fn assemble(event: &CotEvent, result: &ScoringResult) -> Self {
        Self {
            event_id: event.event_id.clone(),
            cot_type: event.cot_type.clone(),
            time: event.time.to_rfc3339(),
            lat: event.lat,
            lon: event.lon,
            altitude: event.altitude,
            speed: event.speed,
            course: event.course,
            ml_enrichment: MlEnrichment {
                anomaly_detected: result.is_anomaly,
                anomaly_score: result.anomaly_score,
                confidence: result.confidence,
            },
        }
    }
}

/// What `process` hands back to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichmentOutcome {
    pub event_id: String,
    pub is_anomaly: bool,
    pub anomaly_score: f64,
    pub enriched_cot: EnrichedCot,
}

/// Event → feature vector → score → enriched record. Stateless per request;
/// the only long-lived state is the fitted scorer, shared read-only.
pub struct CotProcessor {
    extractor: FeatureExtractor,
    scorer: AnomalyScorer,
}

impl CotProcessor {
    pub fn new(scorer: AnomalyScorer) -> Self {
        Self {
            extractor: FeatureExtractor::new(),
            scorer,
        }
    }

    /// Score one validated event and assemble its enrichment record.
    /// Synchronous, referentially transparent, safe to call concurrently.
    pub fn process(&self, event: &CotEvent) -> EnrichmentOutcome {
        let features = self.extractor.extract(event);
        let result = self.scorer.score(&features);
        debug!(
            event_id = %event.event_id,
            score = result.anomaly_score,
            anomaly = result.is_anomaly,
            "scored event"
        );
        EnrichmentOutcome {
            event_id: event.event_id.clone(),
            is_anomaly: result.is_anomaly,
            anomaly_score: result.anomaly_score,
            enriched_cot: EnrichedCot::assemble(event, &result),
        }
    }
}
