//! Configuration management for the fraud scorer

use anyhow::{Context, Result};
use config::{Config, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Classifier backend selection.
///
/// Exactly one implementation is active per configuration; the training
/// pipeline has produced other variants in the past, so the selection is
/// kept explicit rather than hardwired into the pipeline.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClassifierBackend {
    /// ONNX export of the fitted model, served through ONNX Runtime.
    #[default]
    Onnx,
}

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Model artifact configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Directory containing the fitted artifacts
    #[serde(default = "default_model_dir")]
    pub dir: String,
    /// Classifier artifact file name within the model directory
    #[serde(default = "default_classifier_file")]
    pub classifier_file: String,
    /// Fitted scaler artifact file name within the model directory
    #[serde(default = "default_scaler_file")]
    pub scaler_file: String,
    /// Which classifier backend to activate
    #[serde(default)]
    pub backend: ClassifierBackend,
    /// Number of threads for ONNX inference (default: 1)
    #[serde(default = "default_onnx_threads")]
    pub onnx_threads: usize,
}

impl ModelConfig {
    pub fn classifier_path(&self) -> PathBuf {
        Path::new(&self.dir).join(&self.classifier_file)
    }

    pub fn scaler_path(&self) -> PathBuf {
        Path::new(&self.dir).join(&self.scaler_file)
    }
}

fn default_model_dir() -> String {
    "models".to_string()
}

fn default_classifier_file() -> String {
    "random_forest.onnx".to_string()
}

fn default_scaler_file() -> String {
    "scaler_rf.json".to_string()
}

fn default_onnx_threads() -> usize {
    1
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (json, pretty)
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl AppConfig {
    /// Load configuration from the default file location.
    ///
    /// A missing file is not an error; defaults apply.
    pub fn load() -> Result<Self> {
        Self::load_from_path("config/config.toml")
    }

    /// Load configuration from a specific path
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Config::builder()
            .add_source(File::from(path.as_ref()).required(false))
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model: ModelConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            dir: default_model_dir(),
            classifier_file: default_classifier_file(),
            scaler_file: default_scaler_file(),
            backend: ClassifierBackend::Onnx,
            onnx_threads: default_onnx_threads(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}
