use crate::error::EvalError;
use crate::evaluation::confusion_matrix::ConfusionMatrix;

/// Per-class breakdown row produced by [`per_class`].
#[derive(Clone, Debug, PartialEq)]
pub struct ClassMetrics {
    pub class: usize,
    pub precision: f64,
    pub recall: f64,
    pub f_score: f64,
    pub support: usize,
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

fn harmonic_mean(precision: f64, recall: f64) -> f64 {
    if precision + recall == 0.0 {
        0.0
    } else {
        2.0 * precision * recall / (precision + recall)
    }
}

/// Micro-averaged precision: summed per-class true positives over summed
/// predicted positives. `0.0` on an empty denominator, never NaN.
pub fn precision_overall(truth: &[usize], predictions: &[usize]) -> Result<f64, EvalError> {
    let cm = ConfusionMatrix::from_labels(truth, predictions)?;
    let tp: usize = (0..cm.classes()).map(|c| cm.true_positives(c)).sum();
    let predicted: usize = (0..cm.classes()).map(|c| cm.predicted(c)).sum();
    Ok(ratio(tp, predicted))
}

/// Micro-averaged recall: summed true positives over summed actual
/// positives. Same zero-denominator policy as precision.
pub fn recall_overall(truth: &[usize], predictions: &[usize]) -> Result<f64, EvalError> {
    let cm = ConfusionMatrix::from_labels(truth, predictions)?;
    let tp: usize = (0..cm.classes()).map(|c| cm.true_positives(c)).sum();
    let actual: usize = (0..cm.classes()).map(|c| cm.support(c)).sum();
    Ok(ratio(tp, actual))
}

/// Harmonic mean of the micro-averaged precision and recall.
pub fn f_score_overall(truth: &[usize], predictions: &[usize]) -> Result<f64, EvalError> {
    let precision = precision_overall(truth, predictions)?;
    let recall = recall_overall(truth, predictions)?;
    Ok(harmonic_mean(precision, recall))
}

/// Fraction of positions where prediction matches truth.
pub fn accuracy(truth: &[usize], predictions: &[usize]) -> Result<f64, EvalError> {
    Ok(ConfusionMatrix::from_labels(truth, predictions)?.accuracy())
}

/// Per-class precision/recall/F-score over a fixed `classes` universe, so a
/// class the model never predicted still appears with zero precision.
pub fn per_class(
    truth: &[usize],
    predictions: &[usize],
    classes: usize,
) -> Result<Vec<ClassMetrics>, EvalError> {
    let cm = ConfusionMatrix::from_labels_with_classes(truth, predictions, classes)?;

    Ok((0..classes)
        .map(|class| {
            let precision = ratio(cm.true_positives(class), cm.predicted(class));
            let recall = ratio(cm.true_positives(class), cm.support(class));
            ClassMetrics {
                class,
                precision,
                recall,
                f_score: harmonic_mean(precision, recall),
                support: cm.support(class),
            }
        })
        .collect())
}
