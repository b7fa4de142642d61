mod dummies;
mod fixtures;
mod spies;
mod stubs;

pub use dummies::{ConstantClassifier, FailingClassifier, FailurePoint};
pub use fixtures::labeled_dataset;
pub use spies::{FitSpyClassifier, FitSpyHandle};
pub use stubs::ReadoutClassifier;
