mod fit_spy_classifier;

pub use fit_spy_classifier::{FitSpyClassifier, FitSpyHandle};
