//! ONNX classifier artifact loading and inference.

use crate::error::PipelineError;
use crate::models::classifier::Classifier;
use ort::memory::Allocator;
use ort::session::{builder::GraphOptimizationLevel, Session, SessionOutputs};
use ort::value::{DowncastableTarget, DynMapValueType, DynSequenceValueType, Tensor};
use std::path::Path;
use std::sync::RwLock;
use tracing::{debug, info};

/// Classifier backed by an ONNX export of the trained model.
pub struct OnnxClassifier {
    // Session::run takes &mut self; the lock keeps the loaded artifact
    // itself immutable from the caller's point of view.
    session: RwLock<Session>,
    input_name: String,
    output_name: String,
}

// Session does not implement Debug; report the resolved tensor names only.
impl std::fmt::Debug for OnnxClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnnxClassifier")
            .field("input_name", &self.input_name)
            .field("output_name", &self.output_name)
            .finish_non_exhaustive()
    }
}

impl OnnxClassifier {
    /// Load the classifier from its artifact file. Fatal on any failure;
    /// there is no lazy or partial loading.
    pub fn load<P: AsRef<Path>>(path: P, onnx_threads: usize) -> Result<Self, PipelineError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(PipelineError::ArtifactMissing(path.display().to_string()));
        }

        ort::init()
            .commit()
            .map_err(|e| PipelineError::Unexpected(format!("ONNX Runtime init failed: {e}")))?;

        let session = Session::builder()
            .and_then(|b| b.with_optimization_level(GraphOptimizationLevel::Level3))
            .and_then(|b| b.with_intra_threads(onnx_threads))
            .and_then(|b| b.commit_from_file(path))
            .map_err(|e| {
                PipelineError::Unexpected(format!(
                    "failed to load classifier artifact {}: {e}",
                    path.display()
                ))
            })?;

        // Probability output naming differs between exporters; prefer an
        // output that looks like probabilities, else take the last one.
        let input_name = session
            .inputs
            .first()
            .map(|i| i.name.clone())
            .unwrap_or_else(|| "float_input".to_string());

        let output_name = session
            .outputs
            .iter()
            .find(|o| o.name.contains("prob") || o.name.contains("output"))
            .map(|o| o.name.clone())
            .unwrap_or_else(|| {
                session
                    .outputs
                    .last()
                    .map(|o| o.name.clone())
                    .unwrap_or_else(|| "probabilities".to_string())
            });

        info!(
            path = %path.display(),
            input = %input_name,
            output = %output_name,
            threads = onnx_threads,
            "Classifier artifact loaded"
        );

        Ok(Self {
            session: RwLock::new(session),
            input_name,
            output_name,
        })
    }

    /// Extract the fraud-class probability from the session outputs.
    ///
    /// Handles both tensor outputs and the seq(map) shape some sklearn
    /// exporters emit for class probabilities.
    fn extract_probability(&self, outputs: &SessionOutputs) -> Result<f64, PipelineError> {
        if let Some(output) = outputs.get(&self.output_name) {
            if let Ok((shape, data)) = output.try_extract_tensor::<f32>() {
                if let Some(prob) = probability_from_tensor(&shape, data) {
                    return Ok(prob);
                }
            }
            if DynSequenceValueType::can_downcast(&output.dtype()) {
                if let Ok(prob) = probability_from_sequence_map(output) {
                    return Ok(prob);
                }
            }
        }

        // Fallback: scan every output except the hard class label.
        for (name, output) in outputs.iter() {
            if name.contains("label") {
                continue;
            }
            if let Ok((shape, data)) = output.try_extract_tensor::<f32>() {
                if let Some(prob) = probability_from_tensor(&shape, data) {
                    debug!(output = %name, "Probability taken from fallback output");
                    return Ok(prob);
                }
            }
            if DynSequenceValueType::can_downcast(&output.dtype()) {
                if let Ok(prob) = probability_from_sequence_map(&output) {
                    debug!(output = %name, "Probability taken from fallback output");
                    return Ok(prob);
                }
            }
        }

        Err(PipelineError::Inference(
            "no probability output in classifier artifact".to_string(),
        ))
    }
}

impl Classifier for OnnxClassifier {
    fn predict_probability(&self, features: &[f32]) -> Result<f64, PipelineError> {
        let shape = vec![1_i64, features.len() as i64];
        let input = Tensor::from_array((shape, features.to_vec()))
            .map_err(|e| PipelineError::Inference(format!("input tensor: {e}")))?;

        let mut session = self
            .session
            .write()
            .map_err(|e| PipelineError::Inference(format!("session lock poisoned: {e}")))?;

        let outputs = session
            .run(ort::inputs![&self.input_name => input])
            .map_err(|e| PipelineError::Inference(e.to_string()))?;

        let probability = self.extract_probability(&outputs)?;
        debug!(probability, "Inference complete");
        Ok(probability)
    }

    fn name(&self) -> &'static str {
        "onnx"
    }
}

/// Read the positive-class probability out of a `[batch, classes]` or
/// `[classes]` tensor.
fn probability_from_tensor(shape: &ort::tensor::Shape, data: &[f32]) -> Option<f64> {
    let dims: Vec<i64> = shape.iter().copied().collect();
    probability_from_dims(&dims, data)
}

/// A degenerate artifact can declare more classes than its data holds;
/// indexing stays checked so that surfaces as an inference error, not a
/// panic.
fn probability_from_dims(dims: &[i64], data: &[f32]) -> Option<f64> {
    let classes = match dims {
        [_, classes] | [classes] => *classes as usize,
        _ => return None,
    };

    match classes {
        0 => None,
        1 => data.first().map(|&v| v as f64),
        _ => data.get(1).map(|&v| v as f64),
    }
}

/// Read the positive-class probability from a seq(map(int64, float))
/// output (sklearn ZipMap form).
fn probability_from_sequence_map(output: &ort::value::DynValue) -> Result<f64, PipelineError> {
    let allocator = Allocator::default();

    let sequence = output
        .downcast_ref::<DynSequenceValueType>()
        .map_err(|e| PipelineError::Inference(format!("sequence downcast: {e}")))?;

    let maps = sequence
        .try_extract_sequence::<DynMapValueType>(&allocator)
        .map_err(|e| PipelineError::Inference(format!("sequence extract: {e}")))?;

    let map_value = maps
        .first()
        .ok_or_else(|| PipelineError::Inference("empty probability sequence".to_string()))?;

    let kv_pairs = map_value
        .try_extract_key_values::<i64, f32>()
        .map_err(|e| PipelineError::Inference(format!("map extract: {e}")))?;

    for (class_id, prob) in &kv_pairs {
        if *class_id == 1 {
            return Ok(*prob as f64);
        }
    }
    for (class_id, prob) in &kv_pairs {
        if *class_id == 0 {
            return Ok(1.0 - *prob as f64);
        }
    }

    Err(PipelineError::Inference(
        "no class probability in map output".to_string(),
    ))
}
