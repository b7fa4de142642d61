use crate::error::EvalError;
use crate::evaluation::confusion_matrix::ConfusionMatrix;

/// A receiver-operating-characteristic polyline with its trapezoidal area.
///
/// Built from hard label predictions, so each one-vs-rest curve has a single
/// operating point between the trivial (0,0) and (1,1) endpoints. Rates with
/// an empty denominator (a class absent from truth or predictions) are 0.0.
#[derive(Clone, Debug)]
pub struct RocCurve {
    pub points: Vec<(f64, f64)>,
    pub area: f64,
}

impl RocCurve {
    fn from_points(points: Vec<(f64, f64)>) -> Self {
        let area = trapezoid_area(&points);
        Self { points, area }
    }

    fn from_operating_point(fpr: f64, tpr: f64) -> Self {
        Self::from_points(vec![(0.0, 0.0), (fpr, tpr), (1.0, 1.0)])
    }
}

fn rate(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

fn trapezoid_area(points: &[(f64, f64)]) -> f64 {
    points
        .windows(2)
        .map(|w| (w[1].0 - w[0].0) * (w[1].1 + w[0].1) / 2.0)
        .sum()
}

/// Linear interpolation on the upper envelope of a monotone polyline.
/// Vertical segments (repeated x) resolve to the highest y at that x.
fn interpolate(points: &[(f64, f64)], x: f64) -> f64 {
    let mut best: f64 = 0.0;
    for w in points.windows(2) {
        let ((x0, y0), (x1, y1)) = (w[0], w[1]);
        if x < x0.min(x1) || x > x0.max(x1) {
            continue;
        }
        let y = if x1 == x0 {
            y0.max(y1)
        } else {
            y0 + (y1 - y0) * (x - x0) / (x1 - x0)
        };
        best = best.max(y);
    }
    best
}

/// One-vs-rest ROC per class over a fixed class universe, in class order.
pub fn one_vs_rest(
    truth: &[usize],
    predictions: &[usize],
    classes: usize,
) -> Result<Vec<RocCurve>, EvalError> {
    let cm = ConfusionMatrix::from_labels_with_classes(truth, predictions, classes)?;
    let total = cm.total();

    Ok((0..classes)
        .map(|class| {
            let positives = cm.support(class);
            let negatives = total - positives;
            let tpr = rate(cm.true_positives(class), positives);
            let fpr = rate(cm.false_positives(class), negatives);
            RocCurve::from_operating_point(fpr, tpr)
        })
        .collect())
}

/// ROC over the pooled one-vs-rest binarizations of every class.
pub fn micro_average(
    truth: &[usize],
    predictions: &[usize],
    classes: usize,
) -> Result<RocCurve, EvalError> {
    let cm = ConfusionMatrix::from_labels_with_classes(truth, predictions, classes)?;
    let total = cm.total();
    let correct: usize = (0..classes).map(|c| cm.true_positives(c)).sum();
    let wrong = total - correct;

    let tpr = rate(correct, total);
    let fpr = rate(wrong, total * classes.saturating_sub(1));
    Ok(RocCurve::from_operating_point(fpr, tpr))
}

/// Per-class curves interpolated onto the union of their FPR grids and
/// averaged pointwise.
pub fn macro_average(
    truth: &[usize],
    predictions: &[usize],
    classes: usize,
) -> Result<RocCurve, EvalError> {
    if classes == 0 {
        return Err(EvalError::InvalidInput(
            "macro-averaged roc needs at least one class".into(),
        ));
    }
    let curves = one_vs_rest(truth, predictions, classes)?;

    let mut grid: Vec<f64> = curves
        .iter()
        .flat_map(|c| c.points.iter().map(|&(x, _)| x))
        .collect();
    grid.sort_by(|a, b| a.partial_cmp(b).expect("rates are finite"));
    grid.dedup();

    let points = grid
        .into_iter()
        .map(|x| {
            let mean = curves.iter().map(|c| interpolate(&c.points, x)).sum::<f64>()
                / classes as f64;
            (x, mean)
        })
        .collect();

    Ok(RocCurve::from_points(points))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn perfect_predictions_have_unit_area_per_class() {
        let labels = [0, 1, 2, 0, 1, 2];
        for curve in one_vs_rest(&labels, &labels, 3).unwrap() {
            assert!((curve.area - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn constant_predictor_micro_average_sits_on_the_diagonal() {
        let truth = [0, 1, 2, 0, 1, 2];
        let predictions = [0; 6];
        let curve = micro_average(&truth, &predictions, 3).unwrap();
        assert!((curve.area - 0.5).abs() < EPS);
    }

    #[test]
    fn macro_average_of_perfect_predictions_is_unit_area() {
        let labels = [0, 0, 1, 1];
        let curve = macro_average(&labels, &labels, 2).unwrap();
        assert!((curve.area - 1.0).abs() < EPS);
    }

    #[test]
    fn class_without_positives_contributes_zero_tpr() {
        // class 2 never occurs in truth
        let truth = [0, 1, 0, 1];
        let predictions = [0, 1, 2, 1];
        let curves = one_vs_rest(&truth, &predictions, 3).unwrap();
        let (_, tpr) = curves[2].points[1];
        assert_eq!(tpr, 0.0);
    }

    #[test]
    fn curve_points_are_bounded_rates() {
        let truth = [0, 1, 2, 1, 0, 2, 2];
        let predictions = [1, 1, 2, 0, 0, 2, 1];
        for curve in one_vs_rest(&truth, &predictions, 3).unwrap() {
            for (fpr, tpr) in curve.points {
                assert!((0.0..=1.0).contains(&fpr));
                assert!((0.0..=1.0).contains(&tpr));
            }
            assert!((0.0..=1.0).contains(&curve.area));
        }
    }

    #[test]
    fn mismatched_lengths_are_invalid_input() {
        assert!(matches!(
            one_vs_rest(&[0, 1], &[0], 2),
            Err(EvalError::InvalidInput(_))
        ));
        assert!(matches!(
            micro_average(&[0, 1], &[0], 2),
            Err(EvalError::InvalidInput(_))
        ));
    }

    #[test]
    fn interpolate_resolves_vertical_segments_to_the_upper_envelope() {
        let points = vec![(0.0, 0.0), (0.0, 1.0), (1.0, 1.0)];
        assert!((interpolate(&points, 0.0) - 1.0).abs() < EPS);
        assert!((interpolate(&points, 0.5) - 1.0).abs() < EPS);
    }
}
