use crate::engine::FuzzyEngine;
use crate::recommend::recommendations;
use crate::schema::{Detection, DetectorResponse, FuzzyAssessment, SCHEMA_VERSION};
use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One detection bundled with everything derived from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AssessedDetection {
    pub detection: Detection,
    pub assessment: FuzzyAssessment,
    /// Display name: the detected object with its first character
    /// capitalized.
    pub fruit_name: String,
    pub recommendations: Vec<String>,
}

/// The record handed to the persistence collaborator for one analysis
/// request. Neither the record nor its detections are mutated after
/// construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisRecord {
    pub detections: Vec<AssessedDetection>,
    pub total_detections: usize,
    pub analyzed_at: DateTime<Utc>,
    pub session_id: String,
    pub version: String,
}

impl AnalysisRecord {
    /// Assess every prediction in a detector response and bundle the
    /// results under a fresh session id.
    pub fn build(engine: &FuzzyEngine, response: &DetectorResponse) -> Self {
        let detections = response
            .predictions
            .iter()
            .map(|prediction| {
                let assessment = engine.assess_detection(prediction);
                let recs = recommendations(&assessment, &prediction.detected_object);
                AssessedDetection {
                    fruit_name: display_name(&prediction.detected_object),
                    recommendations: recs,
                    assessment,
                    detection: prediction.clone(),
                }
            })
            .collect();

        Self {
            detections,
            total_detections: response.total_detections,
            analyzed_at: Utc::now(),
            session_id: new_session_id(),
            version: SCHEMA_VERSION.to_string(),
        }
    }
}

/// Capitalize the first character of a detected object name.
pub fn display_name(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Session ids group the detections of one analysis request:
/// `session_<unix-millis>_<short-random-suffix>`.
fn new_session_id() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("session_{}_{}", Utc::now().timestamp_millis(), &suffix[..9])
}
