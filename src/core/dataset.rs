use crate::core::label_vocabulary::LabelVocabulary;
use crate::error::EvalError;
use ndarray::{Array2, Axis};

/// An in-memory tabular dataset: one numeric feature row per example,
/// paired 1:1 with a dense class label drawn from `vocabulary`.
#[derive(Clone, Debug)]
pub struct Dataset {
    features: Array2<f64>,
    labels: Vec<usize>,
    vocabulary: LabelVocabulary,
}

impl Dataset {
    pub fn new(
        features: Array2<f64>,
        labels: Vec<usize>,
        vocabulary: LabelVocabulary,
    ) -> Result<Self, EvalError> {
        if features.nrows() == 0 {
            return Err(EvalError::InvalidInput(
                "dataset must contain at least one row".into(),
            ));
        }
        if features.nrows() != labels.len() {
            return Err(EvalError::InvalidInput(format!(
                "feature rows ({}) differ from label count ({})",
                features.nrows(),
                labels.len()
            )));
        }
        if let Some(&bad) = labels.iter().find(|&&l| l >= vocabulary.len()) {
            return Err(EvalError::InvalidInput(format!(
                "label index {bad} outside vocabulary of {} classes",
                vocabulary.len()
            )));
        }

        Ok(Self {
            features,
            labels,
            vocabulary,
        })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn number_of_attributes(&self) -> usize {
        self.features.ncols()
    }

    pub fn classes(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn features(&self) -> &Array2<f64> {
        &self.features
    }

    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    pub fn vocabulary(&self) -> &LabelVocabulary {
        &self.vocabulary
    }

    /// Materializes the feature rows and labels at `indices`, in order.
    pub fn select(&self, indices: &[usize]) -> (Array2<f64>, Vec<usize>) {
        let features = self.features.select(Axis(0), indices);
        let labels = indices.iter().map(|&i| self.labels[i]).collect();
        (features, labels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn two_class_vocabulary() -> LabelVocabulary {
        LabelVocabulary::from_names(["no", "yes"])
    }

    #[test]
    fn new_rejects_empty_dataset() {
        let err = Dataset::new(
            Array2::zeros((0, 3)),
            Vec::new(),
            two_class_vocabulary(),
        )
        .unwrap_err();
        assert!(matches!(err, EvalError::InvalidInput(_)));
    }

    #[test]
    fn new_rejects_row_label_mismatch() {
        let err = Dataset::new(
            array![[1.0, 2.0], [3.0, 4.0]],
            vec![0],
            two_class_vocabulary(),
        )
        .unwrap_err();
        assert!(matches!(err, EvalError::InvalidInput(_)));
    }

    #[test]
    fn new_rejects_label_outside_vocabulary() {
        let err = Dataset::new(
            array![[1.0], [2.0]],
            vec![0, 2],
            two_class_vocabulary(),
        )
        .unwrap_err();
        assert!(matches!(err, EvalError::InvalidInput(_)));
    }

    #[test]
    fn select_preserves_requested_order() {
        let ds = Dataset::new(
            array![[0.0], [1.0], [2.0], [3.0]],
            vec![0, 1, 0, 1],
            two_class_vocabulary(),
        )
        .unwrap();

        let (features, labels) = ds.select(&[3, 0, 2]);
        assert_eq!(features, array![[3.0], [0.0], [2.0]]);
        assert_eq!(labels, vec![1, 0, 0]);
    }

    #[test]
    fn accessors_report_shape() {
        let ds = Dataset::new(
            array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]],
            vec![1, 0],
            two_class_vocabulary(),
        )
        .unwrap();
        assert_eq!(ds.len(), 2);
        assert!(!ds.is_empty());
        assert_eq!(ds.number_of_attributes(), 3);
        assert_eq!(ds.classes(), 2);
        assert_eq!(ds.vocabulary().name_of(1), Some("yes"));
    }
}
