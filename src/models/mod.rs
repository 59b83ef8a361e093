//! Classifier capability and artifact loading

pub mod classifier;
pub mod loader;

pub use classifier::{load_classifier, Classifier};
pub use loader::OnnxClassifier;
