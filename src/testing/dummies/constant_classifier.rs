use crate::error::ModelError;
use crate::learners::Classifier;
use ndarray::Array2;

/// Always predicts one fixed class, whatever the training data.
#[derive(Debug)]
pub struct ConstantClassifier {
    label: usize,
}

impl ConstantClassifier {
    pub fn new(label: usize) -> Self {
        Self { label }
    }
}

impl Classifier for ConstantClassifier {
    fn fit(&mut self, _features: &Array2<f64>, _labels: &[usize]) -> Result<(), ModelError> {
        Ok(())
    }

    fn predict(&self, features: &Array2<f64>) -> Result<Vec<usize>, ModelError> {
        Ok(vec![self.label; features.nrows()])
    }
}
