//! CoT event data model. Field names match the upstream JSON wire shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single Cursor-on-Target event: position plus optional kinematics.
/// Created per request, consumed once, never mutated by the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CotEvent {
    /// Opaque identifier, used only for correlation.
    pub event_id: String,
    /// Free-form CoT type tag (e.g. "a-f-G-U-C").
    #[serde(rename = "type")]
    pub cot_type: String,
    pub time: DateTime<Utc>,
    pub lat: f64,
    pub lon: f64,
    /// Altitude in meters.
    pub altitude: Option<f64>,
    /// Speed in m/s.
    pub speed: Option<f64>,
    /// Course in degrees.
    pub course: Option<f64>,
    /// Open string-keyed mapping, passed through untouched.
    #[serde(default)]
    pub additional_data: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_minimal_event() {
        let json = r#"{
            "event_id": "E1",
            "type": "a-f-G",
            "time": "2024-01-01T00:00:00Z",
            "lat": 10.0,
            "lon": 20.0,
            "altitude": null,
            "speed": null,
            "course": null
        }"#;
        let e: CotEvent = serde_json::from_str(json).unwrap();
        assert_eq!(e.event_id, "E1");
        assert_eq!(e.cot_type, "a-f-G");
        assert_eq!(e.lat, 10.0);
        assert!(e.speed.is_none());
        assert!(e.additional_data.is_empty());
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let json = r#"{"event_id": "E1", "type": "a-f-G", "time": "2024-01-01T00:00:00Z", "lat": 10.0}"#;
        assert!(serde_json::from_str::<CotEvent>(json).is_err());
    }

    #[test]
    fn additional_data_roundtrips() {
        let json = r#"{
            "event_id": "E2",
            "type": "b-m-p",
            "time": "2024-01-01T00:00:00Z",
            "lat": 1.0,
            "lon": 2.0,
            "altitude": 100.0,
            "speed": 5.0,
            "course": 90.0,
            "additional_data": {"callsign": "RAVEN-1", "team": "Blue"}
        }"#;
        let e: CotEvent = serde_json::from_str(json).unwrap();
        assert_eq!(e.additional_data["callsign"], "RAVEN-1");
        let back = serde_json::to_value(&e).unwrap();
        assert_eq!(back["additional_data"]["team"], "Blue");
        assert_eq!(back["type"], "b-m-p");
    }
}
