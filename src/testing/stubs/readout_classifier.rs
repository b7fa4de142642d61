use crate::error::ModelError;
use crate::learners::Classifier;
use ndarray::Array2;

/// Predicts the class encoded in feature column 0. Paired with
/// [`crate::testing::labeled_dataset`] this behaves as a perfect classifier
/// without peeking at test labels.
#[derive(Debug, Default)]
pub struct ReadoutClassifier;

impl Classifier for ReadoutClassifier {
    fn fit(&mut self, _features: &Array2<f64>, _labels: &[usize]) -> Result<(), ModelError> {
        Ok(())
    }

    fn predict(&self, features: &Array2<f64>) -> Result<Vec<usize>, ModelError> {
        Ok(features.column(0).iter().map(|&v| v as usize).collect())
    }
}
