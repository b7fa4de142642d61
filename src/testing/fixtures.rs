use crate::core::{Dataset, LabelVocabulary};
use ndarray::Array2;

/// Builds a dataset whose first feature column encodes the class label, so
/// the readout stub predicts it perfectly.
pub fn labeled_dataset(labels: &[usize]) -> Dataset {
    let classes = labels.iter().max().map_or(0, |&m| m + 1);
    let vocabulary = LabelVocabulary::from_names((0..classes).map(|i| format!("c{i}")));

    let values: Vec<f64> = labels
        .iter()
        .flat_map(|&l| [l as f64, 1.0])
        .collect();
    let features =
        Array2::from_shape_vec((labels.len(), 2), values).expect("rows times two values");

    Dataset::new(features, labels.to_vec(), vocabulary).expect("consistent fixture")
}
