//! Fraud Scorer Library
//!
//! Scores a single financial transaction for fraud likelihood using
//! pre-trained model artifacts: validates the raw input, encodes it into
//! the fixed-order feature vector the models were trained on, applies the
//! fitted standardization, and runs classifier inference.

pub mod config;
pub mod error;
pub mod features;
pub mod models;
pub mod pipeline;
pub mod scaler;
pub mod types;
pub mod validation;

pub use config::AppConfig;
pub use error::PipelineError;
pub use features::FeatureAssembler;
pub use models::classifier::Classifier;
pub use pipeline::{ModelContext, PredictionPipeline};
pub use scaler::ScalerAdapter;
pub use types::prediction::{ErrorResult, PredictionResult};
pub use types::transaction::TransactionRequest;
