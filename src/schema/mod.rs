pub mod assessment;
pub mod detection;
pub mod record;

// Re-export commonly used types
pub use assessment::FuzzyAssessment;
pub use detection::{Detection, DetectorResponse, InputError};
pub use record::{AnalysisRecord, AssessedDetection};

/// Version stamped into analysis records.
pub const SCHEMA_VERSION: &str = "0.1.0";
