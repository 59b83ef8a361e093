//! Input validation for raw transaction objects.
//!
//! Checks run in a fixed order and the first failing check wins; a call
//! never reports more than one problem. Only a fully validated
//! [`TransactionRequest`] can reach feature assembly.

use crate::error::PipelineError;
use crate::types::transaction::{PartOfDay, TransactionPair, TransactionRequest, TransactionType};
use serde_json::{Map, Value};

/// Required fields, in presence-check order.
const REQUIRED_FIELDS: [&str; 5] = [
    "amount",
    "day",
    "type",
    "transaction_pair_code",
    "part_of_the_day",
];

/// Validate a raw JSON object into a typed transaction.
///
/// Unknown extra fields are ignored.
pub fn validate(fields: &Map<String, Value>) -> Result<TransactionRequest, PipelineError> {
    for name in REQUIRED_FIELDS {
        if !fields.contains_key(name) {
            return Err(PipelineError::MissingField(name));
        }
    }

    Ok(TransactionRequest {
        amount: check_amount(&fields["amount"])?,
        day: check_day(&fields["day"])?,
        transaction_type: check_type(&fields["type"])?,
        pair_code: check_pair(&fields["transaction_pair_code"])?,
        part_of_the_day: check_part_of_day(&fields["part_of_the_day"])?,
    })
}

fn check_amount(value: &Value) -> Result<f64, PipelineError> {
    match value.as_f64() {
        Some(amount) if amount > 0.0 => Ok(amount),
        _ => Err(PipelineError::InvalidAmount),
    }
}

fn check_day(value: &Value) -> Result<i64, PipelineError> {
    // as_i64 is None for JSON floats, including 15.0; day must arrive
    // as an integer literal.
    match value.as_i64() {
        Some(day) if (1..=31).contains(&day) => Ok(day),
        _ => Err(PipelineError::InvalidDay),
    }
}

fn check_type(value: &Value) -> Result<TransactionType, PipelineError> {
    value
        .as_str()
        .and_then(TransactionType::from_label)
        .ok_or_else(|| PipelineError::InvalidType(value_repr(value)))
}

fn check_pair(value: &Value) -> Result<TransactionPair, PipelineError> {
    value
        .as_str()
        .and_then(TransactionPair::from_label)
        .ok_or_else(|| PipelineError::InvalidPair(value_repr(value)))
}

fn check_part_of_day(value: &Value) -> Result<PartOfDay, PipelineError> {
    value
        .as_str()
        .and_then(PartOfDay::from_label)
        .ok_or_else(|| PipelineError::InvalidPartOfDay(value_repr(value)))
}

/// Render the offending value without JSON string quotes.
fn value_repr(value: &Value) -> String {
    match value.as_str() {
        Some(s) => s.to_string(),
        None => value.to_string(),
    }
}
