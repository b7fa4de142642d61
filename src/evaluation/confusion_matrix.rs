use crate::error::EvalError;
use std::fmt;

/// Multi-class confusion table. `count(t, p)` is the number of examples with
/// true class `t` predicted as `p`.
#[derive(Clone, Debug)]
pub struct ConfusionMatrix {
    counts: Vec<Vec<usize>>,
    classes: usize,
}

impl ConfusionMatrix {
    /// Builds the table with the class universe inferred from the labels
    /// actually present (`max + 1`).
    pub fn from_labels(truth: &[usize], predictions: &[usize]) -> Result<Self, EvalError> {
        let classes = truth
            .iter()
            .chain(predictions.iter())
            .max()
            .map_or(0, |&m| m + 1);
        Self::from_labels_with_classes(truth, predictions, classes)
    }

    /// Builds the table over a fixed class universe, so classes that never
    /// occur in `predictions` (or `truth`) still get a row and column.
    pub fn from_labels_with_classes(
        truth: &[usize],
        predictions: &[usize],
        classes: usize,
    ) -> Result<Self, EvalError> {
        if truth.len() != predictions.len() {
            return Err(EvalError::InvalidInput(format!(
                "truth has {} labels but predictions has {}",
                truth.len(),
                predictions.len()
            )));
        }
        if let Some(&bad) = truth
            .iter()
            .chain(predictions.iter())
            .find(|&&l| l >= classes)
        {
            return Err(EvalError::InvalidInput(format!(
                "label {bad} outside the {classes}-class universe"
            )));
        }

        let mut counts = vec![vec![0usize; classes]; classes];
        for (&t, &p) in truth.iter().zip(predictions.iter()) {
            counts[t][p] += 1;
        }

        Ok(Self { counts, classes })
    }

    pub fn classes(&self) -> usize {
        self.classes
    }

    pub fn count(&self, truth: usize, predicted: usize) -> usize {
        self.counts[truth][predicted]
    }

    pub fn true_positives(&self, class: usize) -> usize {
        self.counts[class][class]
    }

    /// Examples predicted as `class` whose true class differs.
    pub fn false_positives(&self, class: usize) -> usize {
        (0..self.classes)
            .filter(|&t| t != class)
            .map(|t| self.counts[t][class])
            .sum()
    }

    /// Examples of `class` predicted as something else.
    pub fn false_negatives(&self, class: usize) -> usize {
        (0..self.classes)
            .filter(|&p| p != class)
            .map(|p| self.counts[class][p])
            .sum()
    }

    /// Number of examples whose true class is `class`.
    pub fn support(&self, class: usize) -> usize {
        self.counts[class].iter().sum()
    }

    /// Number of examples predicted as `class`.
    pub fn predicted(&self, class: usize) -> usize {
        (0..self.classes).map(|t| self.counts[t][class]).sum()
    }

    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }

    pub fn accuracy(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let correct: usize = (0..self.classes).map(|c| self.counts[c][c]).sum();
        correct as f64 / total as f64
    }
}

impl fmt::Display for ConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .counts
            .iter()
            .flatten()
            .map(|c| c.to_string().len())
            .max()
            .unwrap_or(1)
            .max(self.classes.saturating_sub(1).to_string().len());

        write!(f, "t\\p ")?;
        for p in 0..self.classes {
            write!(f, " {p:>width$}")?;
        }
        writeln!(f)?;

        for t in 0..self.classes {
            write!(f, "{t:>3} ")?;
            for p in 0..self.classes {
                write!(f, " {:>width$}", self.counts[t][p])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_land_in_truth_row_predicted_column() {
        let cm = ConfusionMatrix::from_labels(&[0, 0, 1, 1], &[0, 1, 1, 1]).unwrap();
        assert_eq!(cm.classes(), 2);
        assert_eq!(cm.count(0, 0), 1);
        assert_eq!(cm.count(0, 1), 1);
        assert_eq!(cm.count(1, 0), 0);
        assert_eq!(cm.count(1, 1), 2);
    }

    #[test]
    fn per_class_tallies() {
        let cm = ConfusionMatrix::from_labels(&[0, 0, 1, 1, 2], &[0, 1, 1, 1, 0]).unwrap();
        assert_eq!(cm.true_positives(1), 2);
        assert_eq!(cm.false_positives(1), 1);
        assert_eq!(cm.false_negatives(0), 1);
        assert_eq!(cm.support(2), 1);
        assert_eq!(cm.predicted(0), 2);
        assert_eq!(cm.total(), 5);
    }

    #[test]
    fn fixed_universe_keeps_unseen_classes() {
        let cm = ConfusionMatrix::from_labels_with_classes(&[0, 1], &[0, 0], 4).unwrap();
        assert_eq!(cm.classes(), 4);
        assert_eq!(cm.support(3), 0);
        assert_eq!(cm.predicted(3), 0);
        assert_eq!(cm.false_negatives(1), 1);
    }

    #[test]
    fn mismatched_lengths_are_invalid_input() {
        let err = ConfusionMatrix::from_labels(&[0, 1], &[0]).unwrap_err();
        assert!(matches!(err, EvalError::InvalidInput(_)));
    }

    #[test]
    fn label_outside_universe_is_invalid_input() {
        let err = ConfusionMatrix::from_labels_with_classes(&[0, 5], &[0, 1], 3).unwrap_err();
        assert!(matches!(err, EvalError::InvalidInput(_)));
    }

    #[test]
    fn accuracy_counts_the_diagonal() {
        let cm = ConfusionMatrix::from_labels(&[0, 0, 1, 1], &[0, 1, 1, 1]).unwrap();
        assert!((cm.accuracy() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn accuracy_of_empty_table_is_zero() {
        let cm = ConfusionMatrix::from_labels_with_classes(&[], &[], 2).unwrap();
        assert_eq!(cm.accuracy(), 0.0);
    }

    #[test]
    fn display_renders_one_row_per_class() {
        let cm = ConfusionMatrix::from_labels(&[0, 1], &[1, 1]).unwrap();
        let rendered = cm.to_string();
        assert_eq!(rendered.lines().count(), 3);
        assert!(rendered.starts_with("t\\p"));
    }
}
