//! Feature encoding for fraud model inference.
//!
//! Transforms a validated transaction into the numeric vector the models
//! were trained on. Column order must match the training pipeline exactly:
//! amount, day, then the one-hot blocks for type, pair code, and part of
//! the day in enumeration order.

use crate::types::transaction::{PartOfDay, TransactionPair, TransactionRequest, TransactionType};

/// Total feature columns: amount, day, plus the three one-hot blocks.
pub const FEATURE_COUNT: usize = 2
    + TransactionType::CATEGORIES.len()
    + TransactionPair::CATEGORIES.len()
    + PartOfDay::CATEGORIES.len();

/// One-hot encode `value` against an ordered category list.
///
/// Callers must have validated membership; an unknown value produces an
/// all-zero block, which the validator makes unreachable.
pub fn one_hot(value: &str, categories: &[&str]) -> Vec<f32> {
    categories
        .iter()
        .map(|cat| if value == *cat { 1.0 } else { 0.0 })
        .collect()
}

/// Assembles validated transactions into model input features.
pub struct FeatureAssembler;

impl FeatureAssembler {
    pub fn new() -> Self {
        Self
    }

    /// Build the feature vector for one transaction.
    ///
    /// Returns [`FEATURE_COUNT`] values in training column order.
    pub fn assemble(&self, request: &TransactionRequest) -> Vec<f32> {
        let mut features = Vec::with_capacity(FEATURE_COUNT);

        features.push(request.amount as f32);
        features.push(request.day as f32);

        features.extend(one_hot(
            request.transaction_type.as_label(),
            &TransactionType::CATEGORIES,
        ));
        features.extend(one_hot(
            request.pair_code.as_label(),
            &TransactionPair::CATEGORIES,
        ));
        features.extend(one_hot(
            request.part_of_the_day.as_label(),
            &PartOfDay::CATEGORIES,
        ));

        features
    }

    /// Get the number of features produced.
    pub fn feature_count(&self) -> usize {
        FEATURE_COUNT
    }

    /// Get feature names in column order.
    pub fn feature_names(&self) -> Vec<String> {
        let mut names = vec!["amount".to_string(), "day".to_string()];
        names.extend(
            TransactionType::CATEGORIES
                .iter()
                .map(|cat| format!("type_{cat}")),
        );
        names.extend(
            TransactionPair::CATEGORIES
                .iter()
                .map(|cat| format!("transaction_pair_code_{cat}")),
        );
        names.extend(
            PartOfDay::CATEGORIES
                .iter()
                .map(|cat| format!("part_of_the_day_{cat}")),
        );
        names
    }
}

impl Default for FeatureAssembler {
    fn default() -> Self {
        Self::new()
    }
}
