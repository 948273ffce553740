use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single classified object as reported by the detection service.
///
/// `label` is the classifier's class (e.g. `apple_fresh`, `banana_rotten`),
/// `confidence` its softmax score, `detected_object` the object detector's
/// name for the fruit. The bounding box is carried through for rendering
/// callers but plays no part in assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Detection {
    pub label: String,
    pub confidence: f64,
    pub detected_object: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bbox: Option<[i32; 4]>,
}

/// The detection service's response body for one analyzed image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DetectorResponse {
    pub predictions: Vec<Detection>,
    pub total_detections: usize,
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("malformed detector response: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("prediction {index}: confidence {value} outside [0, 1]")]
    ConfidenceOutOfRange { index: usize, value: f64 },
}

impl DetectorResponse {
    /// Parse and validate a detector response body.
    ///
    /// The engine contract assumes confidences in `[0, 1]`, so violations
    /// (including NaN) are rejected here at the boundary rather than fed
    /// through the arithmetic.
    pub fn from_json(body: &str) -> Result<Self, InputError> {
        let response: Self = serde_json::from_str(body)?;
        response.validate()?;
        Ok(response)
    }

    pub fn validate(&self) -> Result<(), InputError> {
        for (index, prediction) in self.predictions.iter().enumerate() {
            let value = prediction.confidence;
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(InputError::ConfidenceOutOfRange { index, value });
            }
        }
        Ok(())
    }
}
