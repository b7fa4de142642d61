use crate::error::ModelError;
use ndarray::Array2;

/// Batch classifier contract: the harness's only coupling point to a model
/// implementation. Feature matrices are row-per-example, labels are dense
/// class indices.
pub trait Classifier {
    fn fit(&mut self, features: &Array2<f64>, labels: &[usize]) -> Result<(), ModelError>;
    fn predict(&self, features: &Array2<f64>) -> Result<Vec<usize>, ModelError>;
}
