//! Pluggable classifier capability.

use crate::config::{ClassifierBackend, ModelConfig};
use crate::error::PipelineError;
use crate::models::loader::OnnxClassifier;

/// A trained probabilistic binary classifier.
///
/// Implementations are deterministic for a fixed artifact and input, and
/// never mutate loaded state across calls.
pub trait Classifier: Send + Sync {
    /// Estimated probability of the positive (fraud) class, in [0, 1].
    fn predict_probability(&self, features: &[f32]) -> Result<f64, PipelineError>;

    /// Backend name, for logging.
    fn name(&self) -> &'static str;
}

/// Load the classifier selected by configuration.
pub fn load_classifier(config: &ModelConfig) -> Result<Box<dyn Classifier>, PipelineError> {
    match config.backend {
        ClassifierBackend::Onnx => Ok(Box::new(OnnxClassifier::load(
            config.classifier_path(),
            config.onnx_threads,
        )?)),
    }
}
