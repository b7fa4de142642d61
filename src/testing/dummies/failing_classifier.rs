use crate::error::ModelError;
use crate::learners::Classifier;
use ndarray::Array2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailurePoint {
    Fit,
    Predict,
}

/// Fails at the chosen call so propagation paths can be exercised.
#[derive(Debug)]
pub struct FailingClassifier {
    point: FailurePoint,
}

impl FailingClassifier {
    pub fn new(point: FailurePoint) -> Self {
        Self { point }
    }
}

impl Classifier for FailingClassifier {
    fn fit(&mut self, _features: &Array2<f64>, _labels: &[usize]) -> Result<(), ModelError> {
        if self.point == FailurePoint::Fit {
            return Err("synthetic fit failure".into());
        }
        Ok(())
    }

    fn predict(&self, features: &Array2<f64>) -> Result<Vec<usize>, ModelError> {
        if self.point == FailurePoint::Predict {
            return Err("synthetic predict failure".into());
        }
        Ok(vec![0; features.nrows()])
    }
}
