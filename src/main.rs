//! Fraud Scorer - Main Entry Point
//!
//! Reads one JSON transaction from stdin, scores it against the loaded
//! model artifacts, and writes exactly one JSON object to stdout. Logging
//! goes to stderr so stdout stays a clean data channel. Exit status is 0
//! on success and 1 on any handled error.

use fraud_scorer::config::{AppConfig, LoggingConfig};
use fraud_scorer::error::PipelineError;
use fraud_scorer::pipeline::{ModelContext, PredictionPipeline};
use std::io::Read;
use std::process::ExitCode;
use tracing::{error, info};

fn init_logging(config: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.level.clone()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn run() -> Result<String, PipelineError> {
    let config = AppConfig::load()
        .map_err(|e| PipelineError::Unexpected(format!("configuration error: {e:#}")))?;
    init_logging(&config.logging);

    // Artifacts load before any input is consumed; a load failure must
    // prevent request processing entirely.
    let context = ModelContext::load(&config)?;
    let pipeline = PredictionPipeline::new(context);
    info!("Fraud scorer ready");

    let mut raw = String::new();
    std::io::stdin()
        .read_to_string(&mut raw)
        .map_err(|e| PipelineError::Unexpected(format!("failed to read stdin: {e}")))?;

    let result = pipeline.process(&raw)?;
    serde_json::to_string(&result).map_err(|e| PipelineError::Unexpected(e.to_string()))
}

fn main() -> ExitCode {
    match run() {
        Ok(line) => {
            println!("{line}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "Scoring failed");
            println!("{}", serde_json::json!({ "error": err.to_string() }));
            ExitCode::FAILURE
        }
    }
}
