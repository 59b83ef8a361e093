//! Error taxonomy for the scoring pipeline.
//!
//! Every failure is converted to one of these variants at the pipeline
//! boundary; the rendered message is exactly what crosses the output
//! channel, so the texts below are part of the external contract.

use thiserror::Error;

/// All failures a single scoring invocation can surface.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Input channel delivered nothing (or only whitespace).
    #[error("Empty input received")]
    EmptyInput,

    /// Input was not a well-formed JSON object.
    #[error("Invalid JSON input: {0}")]
    InvalidJson(String),

    /// A required field is absent from the input object.
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Amount must be a positive number")]
    InvalidAmount,

    #[error("Day must be an integer between 1 and 31")]
    InvalidDay,

    #[error("Invalid type: {0}")]
    InvalidType(String),

    #[error("Invalid transaction_pair_code: {0}")]
    InvalidPair(String),

    #[error("Invalid part_of_the_day: {0}")]
    InvalidPartOfDay(String),

    /// A model or scaler artifact file is absent. Fatal at startup.
    #[error("Model file not found: {0}")]
    ArtifactMissing(String),

    /// Feature vector width does not match the fitted artifact.
    #[error("Feature vector has {got} columns but the scaler was fitted on {expected}")]
    ArtifactShape { got: usize, expected: usize },

    /// Classifier inference failed for the current request.
    #[error("Inference failed: {0}")]
    Inference(String),

    /// Catch-all for faults outside the taxonomy (corrupt artifact,
    /// I/O failure, configuration error).
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}
