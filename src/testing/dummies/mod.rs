mod constant_classifier;
mod failing_classifier;

pub use constant_classifier::ConstantClassifier;
pub use failing_classifier::{FailingClassifier, FailurePoint};
