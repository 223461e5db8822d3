//! CoT processor entrypoint: fit the model once, then score events.
//! Reads CoT events as JSON lines on stdin and writes enrichment outcomes as
//! JSON lines on stdout; logs go to stderr. This is the thin boundary around
//! the core pipeline — input validation happens here, not in the core.

use cot_processor::{
    config::ProcessorConfig,
    enrich::{CotProcessor, ProcessError},
    event::CotEvent,
    logging::StructuredLogger,
    model::AnomalyScorer,
};
use std::io::{BufRead, Write};
use tracing::{info, warn};

fn process_line(processor: &CotProcessor, line: &str) -> Result<String, ProcessError> {
    let event: CotEvent = serde_json::from_str(line)?;
    info!(event_id = %event.event_id, "processing CoT event");
    let outcome = processor.process(&event);
    if outcome.is_anomaly {
        info!(
            event_id = %outcome.event_id,
            score = outcome.anomaly_score,
            confidence = outcome.enriched_cot.ml_enrichment.confidence,
            "anomaly detected"
        );
    }
    serde_json::to_string(&outcome).map_err(|e| ProcessError::Processing(e.to_string()))
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config_path = std::env::var("COT_PROCESSOR_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| std::path::PathBuf::from("config.json"));
    let config = ProcessorConfig::load(&config_path);

    StructuredLogger::init(config.log.json, &config.log.level);

    info!(
        num_trees = config.model.num_trees,
        contamination = config.model.contamination,
        seed = config.model.seed,
        baseline_samples = config.baseline.samples,
        "fitting anomaly model"
    );
    let scorer = AnomalyScorer::fit(&config.model, &config.baseline);
    let processor = CotProcessor::new(scorer);
    info!("model fitted; reading events from stdin");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match process_line(&processor, &line) {
            Ok(json) => writeln!(out, "{}", json)?,
            Err(e) => warn!(error = %e, "event rejected"),
        }
    }

    Ok(())
}
