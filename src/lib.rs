//! CoT Processor — anomaly detection pipeline for Cursor-on-Target events.
//!
//! Modular structure:
//! - [`event`] — CoT event data model
//! - [`features`] — Event → fixed-width feature vector extraction
//! - [`model`] — Isolation forest, synthetic reference baseline, scorer
//! - [`enrich`] — Enrichment record assembly and the `process` pipeline
//! - [`logging`] — Structured JSON logging

pub mod config;
pub mod event;
pub mod features;
pub mod model;
pub mod enrich;
pub mod logging;

pub use config::ProcessorConfig;
pub use event::CotEvent;
pub use features::{FeatureExtractor, FeatureVector, FEATURE_DIM};
pub use model::{AnomalyScorer, ScoringResult};
pub use enrich::{CotProcessor, EnrichedCot, EnrichmentOutcome, ProcessError};
pub use logging::StructuredLogger;
