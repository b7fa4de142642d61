use crate::error::ModelError;
use crate::learners::classifier::Classifier;
use ndarray::Array2;

/// Baseline that always predicts the most frequent training label.
/// Ties resolve to the smallest class index.
#[derive(Debug, Default)]
pub struct MajorityClass {
    majority: Option<usize>,
}

impl MajorityClass {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Classifier for MajorityClass {
    fn fit(&mut self, _features: &Array2<f64>, labels: &[usize]) -> Result<(), ModelError> {
        if labels.is_empty() {
            return Err("cannot fit on an empty training set".into());
        }

        let classes = labels.iter().max().expect("non-empty") + 1;
        let mut counts = vec![0usize; classes];
        for &label in labels {
            counts[label] += 1;
        }

        let mut majority = 0;
        for (class, &count) in counts.iter().enumerate() {
            if count > counts[majority] {
                majority = class;
            }
        }
        self.majority = Some(majority);
        Ok(())
    }

    fn predict(&self, features: &Array2<f64>) -> Result<Vec<usize>, ModelError> {
        let majority = self
            .majority
            .ok_or("majority-class model has not been fitted")?;
        Ok(vec![majority; features.nrows()])
    }
}
