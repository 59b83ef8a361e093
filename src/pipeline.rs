//! Scoring pipeline orchestration.
//!
//! Raw input flows parse -> validate -> assemble -> scale -> predict, and
//! any stage failure short-circuits; no partial output is ever produced.

use crate::config::AppConfig;
use crate::error::PipelineError;
use crate::features::FeatureAssembler;
use crate::models::{load_classifier, Classifier};
use crate::scaler::ScalerAdapter;
use crate::types::prediction::PredictionResult;
use crate::validation;
use serde_json::Value;
use tracing::{debug, info};

/// Loaded model artifacts. Constructed once at startup, read-only
/// afterwards; construction failure is fatal before any input is read.
pub struct ModelContext {
    scaler: ScalerAdapter,
    classifier: Box<dyn Classifier>,
}

impl ModelContext {
    /// Load both artifacts per configuration.
    pub fn load(config: &AppConfig) -> Result<Self, PipelineError> {
        let scaler = ScalerAdapter::load(config.model.scaler_path())?;
        let classifier = load_classifier(&config.model)?;

        info!(
            classifier = classifier.name(),
            columns = scaler.column_count(),
            "Model context initialized"
        );

        Ok(Self::new(scaler, classifier))
    }

    /// Assemble a context from already-loaded parts.
    pub fn new(scaler: ScalerAdapter, classifier: Box<dyn Classifier>) -> Self {
        Self { scaler, classifier }
    }
}

/// Single entry point for scoring one raw input against the loaded models.
pub struct PredictionPipeline {
    context: ModelContext,
    assembler: FeatureAssembler,
}

impl PredictionPipeline {
    pub fn new(context: ModelContext) -> Self {
        Self {
            context,
            assembler: FeatureAssembler::new(),
        }
    }

    /// Score one raw JSON input.
    pub fn process(&self, raw: &str) -> Result<PredictionResult, PipelineError> {
        // Only a truly empty input counts as empty; whitespace-only input
        // falls through to JSON parsing and fails there.
        if raw.is_empty() {
            return Err(PipelineError::EmptyInput);
        }

        let value: Value = serde_json::from_str(raw)
            .map_err(|e| PipelineError::InvalidJson(e.to_string()))?;
        let fields = value
            .as_object()
            .ok_or_else(|| PipelineError::InvalidJson("expected a JSON object".to_string()))?;

        let request = validation::validate(fields)?;
        let features = self.assembler.assemble(&request);
        let scaled = self.context.scaler.transform(&features)?;
        let probability = self.context.classifier.predict_probability(&scaled)?;

        debug!(
            amount = request.amount,
            day = request.day,
            probability,
            "Transaction scored"
        );

        Ok(PredictionResult::from_probability(probability))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Stub classifier returning a fixed probability, recording nothing.
    struct FixedProbability(f64);

    impl Classifier for FixedProbability {
        fn predict_probability(&self, _features: &[f32]) -> Result<f64, PipelineError> {
            Ok(self.0)
        }

        fn name(&self) -> &'static str {
            "fixed"
        }
    }

    /// Stub classifier asserting on the scaled input it receives.
    struct CaptureWidth;

    impl Classifier for CaptureWidth {
        fn predict_probability(&self, features: &[f32]) -> Result<f64, PipelineError> {
            assert_eq!(features.len(), 13);
            Ok(0.0)
        }

        fn name(&self) -> &'static str {
            "capture"
        }
    }

    fn pipeline_with(probability: f64) -> PredictionPipeline {
        let scaler = ScalerAdapter::new(vec![0.0; 13], vec![1.0; 13]).unwrap();
        PredictionPipeline::new(ModelContext::new(
            scaler,
            Box::new(FixedProbability(probability)),
        ))
    }

    const VALID_INPUT: &str = r#"{
        "amount": 100,
        "day": 15,
        "type": "PAYMENT",
        "transaction_pair_code": "cc",
        "part_of_the_day": "morning"
    }"#;

    #[test]
    fn test_successful_prediction() {
        let result = pipeline_with(0.9).process(VALID_INPUT).unwrap();
        assert!(result.is_fraud);
        assert_eq!(result.probability, 0.9);
    }

    #[test]
    fn test_threshold_boundary_is_not_fraud() {
        let result = pipeline_with(0.5).process(VALID_INPUT).unwrap();
        assert!(!result.is_fraud);
    }

    #[test]
    fn test_empty_input() {
        let err = pipeline_with(0.5).process("").unwrap_err();
        assert_eq!(err.to_string(), "Empty input received");
    }

    #[test]
    fn test_whitespace_only_input_is_a_parse_error() {
        let err = pipeline_with(0.5).process("  \n\t ").unwrap_err();
        assert!(err.to_string().starts_with("Invalid JSON input: "));
    }

    #[test]
    fn test_malformed_json() {
        let err = pipeline_with(0.5).process("{not json").unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("Invalid JSON input: "));
        assert!(message.len() > "Invalid JSON input: ".len());
    }

    #[test]
    fn test_non_object_input() {
        let err = pipeline_with(0.5).process("[1, 2, 3]").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid JSON input: expected a JSON object"
        );
    }

    #[test]
    fn test_validation_error_short_circuits() {
        let err = pipeline_with(0.99)
            .process(r#"{"amount": 100, "type": "PAYMENT"}"#)
            .unwrap_err();
        assert_eq!(err.to_string(), "Missing field: day");
    }

    #[test]
    fn test_scaled_vector_reaches_classifier_intact() {
        let scaler = ScalerAdapter::new(vec![0.0; 13], vec![1.0; 13]).unwrap();
        let pipeline =
            PredictionPipeline::new(ModelContext::new(scaler, Box::new(CaptureWidth)));
        assert!(pipeline.process(VALID_INPUT).is_ok());
    }

    #[test]
    fn test_scaler_width_mismatch_surfaces_as_error() {
        let scaler = ScalerAdapter::new(vec![0.0; 11], vec![1.0; 11]).unwrap();
        let pipeline =
            PredictionPipeline::new(ModelContext::new(scaler, Box::new(FixedProbability(0.5))));
        let err = pipeline.process(VALID_INPUT).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::ArtifactShape { got: 13, expected: 11 }
        ));
    }
}
