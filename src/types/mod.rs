//! Type definitions for the fraud scorer

pub mod prediction;
pub mod transaction;

pub use prediction::{ErrorResult, PredictionResult};
pub use transaction::TransactionRequest;
