use crate::error::ModelError;
use crate::learners::Classifier;
use ndarray::Array2;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicU64, Ordering},
};

pub struct FitSpyHandle {
    fit_sizes: Arc<Mutex<Vec<usize>>>,
    predict_calls: Arc<AtomicU64>,
}

impl FitSpyHandle {
    pub fn fit_sizes(&self) -> Vec<usize> {
        self.fit_sizes.lock().expect("spy lock").clone()
    }

    pub fn predict_calls(&self) -> u64 {
        self.predict_calls.load(Ordering::Relaxed)
    }
}

/// Records the training-set size of every `fit` call and counts `predict`
/// calls, observable through the shared handle.
pub struct FitSpyClassifier {
    fit_sizes: Arc<Mutex<Vec<usize>>>,
    predict_calls: Arc<AtomicU64>,
}

impl FitSpyClassifier {
    pub fn new() -> (Self, FitSpyHandle) {
        let fit_sizes = Arc::new(Mutex::new(Vec::new()));
        let predict_calls = Arc::new(AtomicU64::new(0));
        (
            Self {
                fit_sizes: fit_sizes.clone(),
                predict_calls: predict_calls.clone(),
            },
            FitSpyHandle {
                fit_sizes,
                predict_calls,
            },
        )
    }
}

impl Classifier for FitSpyClassifier {
    fn fit(&mut self, _features: &Array2<f64>, labels: &[usize]) -> Result<(), ModelError> {
        self.fit_sizes.lock().expect("spy lock").push(labels.len());
        Ok(())
    }

    fn predict(&self, features: &Array2<f64>) -> Result<Vec<usize>, ModelError> {
        self.predict_calls.fetch_add(1, Ordering::Relaxed);
        Ok(vec![0; features.nrows()])
    }
}
