//! Fitted standardization transform.
//!
//! The training pipeline exports the fitted scaler's per-column mean and
//! scale; inference replays `(x - mean) / scale` identically. The artifact
//! is read-only and loaded once at startup.

use crate::error::PipelineError;
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// Serialized form of the fitted scaler artifact.
#[derive(Debug, Deserialize)]
struct ScalerArtifact {
    mean: Vec<f32>,
    scale: Vec<f32>,
}

/// Per-column standardization fitted during training.
#[derive(Debug)]
pub struct ScalerAdapter {
    mean: Vec<f32>,
    scale: Vec<f32>,
}

impl ScalerAdapter {
    /// Build a scaler from fitted parameters.
    pub fn new(mean: Vec<f32>, scale: Vec<f32>) -> Result<Self, PipelineError> {
        if mean.len() != scale.len() {
            return Err(PipelineError::Unexpected(format!(
                "scaler artifact has {} means but {} scales",
                mean.len(),
                scale.len()
            )));
        }
        if mean.is_empty() {
            return Err(PipelineError::Unexpected(
                "scaler artifact has no columns".to_string(),
            ));
        }
        Ok(Self { mean, scale })
    }

    /// Load the fitted scaler from its artifact file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PipelineError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(PipelineError::ArtifactMissing(path.display().to_string()));
        }

        let raw = std::fs::read(path).map_err(|e| {
            PipelineError::Unexpected(format!(
                "failed to read scaler artifact {}: {e}",
                path.display()
            ))
        })?;
        let artifact: ScalerArtifact = serde_json::from_slice(&raw).map_err(|e| {
            PipelineError::Unexpected(format!(
                "malformed scaler artifact {}: {e}",
                path.display()
            ))
        })?;

        let scaler = Self::new(artifact.mean, artifact.scale)?;
        info!(
            path = %path.display(),
            columns = scaler.column_count(),
            "Scaler artifact loaded"
        );
        Ok(scaler)
    }

    /// Number of feature columns the scaler was fitted on.
    pub fn column_count(&self) -> usize {
        self.mean.len()
    }

    /// Standardize one feature vector.
    ///
    /// Fails if the vector width does not match the fitted column count.
    pub fn transform(&self, features: &[f32]) -> Result<Vec<f32>, PipelineError> {
        if features.len() != self.mean.len() {
            return Err(PipelineError::ArtifactShape {
                got: features.len(),
                expected: self.mean.len(),
            });
        }

        Ok(features
            .iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(x, (mean, scale))| (x - mean) / scale)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_standardizes_per_column() {
        let scaler = ScalerAdapter::new(vec![10.0, 0.0, 1.0], vec![2.0, 1.0, 0.5]).unwrap();
        let scaled = scaler.transform(&[14.0, 3.0, 1.0]).unwrap();
        assert_eq!(scaled, vec![2.0, 3.0, 0.0]);
    }

    #[test]
    fn test_identity_scaler_passes_through() {
        let scaler = ScalerAdapter::new(vec![0.0; 13], vec![1.0; 13]).unwrap();
        let input: Vec<f32> = (0..13).map(|i| i as f32).collect();
        assert_eq!(scaler.transform(&input).unwrap(), input);
    }

    #[test]
    fn test_width_mismatch_rejected() {
        let scaler = ScalerAdapter::new(vec![0.0; 13], vec![1.0; 13]).unwrap();
        let err = scaler.transform(&[1.0, 2.0]).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::ArtifactShape { got: 2, expected: 13 }
        ));
    }

    #[test]
    fn test_mismatched_artifact_rejected() {
        assert!(ScalerAdapter::new(vec![0.0; 3], vec![1.0; 2]).is_err());
        assert!(ScalerAdapter::new(vec![], vec![]).is_err());
    }

    #[test]
    fn test_missing_artifact_file() {
        let err = ScalerAdapter::load("models/no_such_scaler.json").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Model file not found: models/no_such_scaler.json"
        );
    }

    #[test]
    fn test_artifact_json_round_trip() {
        let artifact: ScalerArtifact =
            serde_json::from_str(r#"{"mean": [1.0, 2.0], "scale": [0.5, 4.0]}"#).unwrap();
        let scaler = ScalerAdapter::new(artifact.mean, artifact.scale).unwrap();
        assert_eq!(scaler.transform(&[2.0, 10.0]).unwrap(), vec![2.0, 2.0]);
    }
}
