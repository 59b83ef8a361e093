//! Output shapes for the scoring pipeline.

use serde::{Deserialize, Serialize};

/// Probability cutoff above which a transaction is flagged as fraud.
/// At exactly 0.5 the flag stays false.
pub const FRAUD_THRESHOLD: f64 = 0.5;

/// Successful scoring outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResult {
    #[serde(rename = "isFraud")]
    pub is_fraud: bool,
    /// Estimated probability of the fraud class, in [0, 1].
    pub probability: f64,
}

impl PredictionResult {
    /// Apply the fixed decision threshold to a class probability.
    pub fn from_probability(probability: f64) -> Self {
        Self {
            is_fraud: probability > FRAUD_THRESHOLD,
            probability,
        }
    }
}

/// Failure outcome; mutually exclusive with [`PredictionResult`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResult {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_strict() {
        assert!(!PredictionResult::from_probability(0.5).is_fraud);
        assert!(PredictionResult::from_probability(0.5000001).is_fraud);
        assert!(!PredictionResult::from_probability(0.0).is_fraud);
        assert!(PredictionResult::from_probability(1.0).is_fraud);
    }

    #[test]
    fn test_result_serialization() {
        let result = PredictionResult::from_probability(0.73);
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"isFraud\":true"));
        assert!(json.contains("\"probability\":0.73"));

        let back: PredictionResult = serde_json::from_str(&json).unwrap();
        assert!(back.is_fraud);
        assert_eq!(back.probability, 0.73);
    }

    #[test]
    fn test_error_result_shape() {
        let result = ErrorResult {
            error: "Missing field: day".to_string(),
        };
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, "{\"error\":\"Missing field: day\"}");
    }
}
