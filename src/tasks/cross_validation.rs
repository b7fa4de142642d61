use crate::core::Dataset;
use crate::error::EvalError;
use crate::evaluation::{
    ModelSummary, accuracy, f_score_overall, precision_overall, recall_overall,
};
use crate::learners::Classifier;
use crate::tasks::folds::FoldPlan;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::sync::mpsc::Sender;

use cpu_time::ThreadTime;

/// Progress emitted after each completed fold.
#[derive(Clone, Debug)]
pub struct FoldSnapshot {
    pub fold: usize,
    pub folds: usize,
    pub rows_evaluated: usize,
    pub running_accuracy: f64,
    pub fit_seconds: f64,
    pub predict_seconds: f64,
}

impl Display for FoldSnapshot {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "fold={}/{}, rows={}, acc={:.6}, fit={:.3}s, predict={:.3}s",
            self.fold,
            self.folds,
            self.rows_evaluated,
            self.running_accuracy,
            self.fit_seconds,
            self.predict_seconds
        )
    }
}

/// K-fold cross-validation task: trains the learner on K-1 folds, predicts
/// the held-out fold, and accumulates index-aligned truth/prediction
/// sequences across all folds.
///
/// Accumulated row order is fold order: identical to the dataset's row order
/// under the default contiguous plan, the permuted order under a shuffled
/// plan. `truth()` and `predictions()` are always aligned to each other.
pub struct CrossValidation {
    learner: Box<dyn Classifier>,
    dataset: Dataset,
    plan: FoldPlan,

    truth: Vec<usize>,
    predictions: Vec<usize>,
    fit_seconds: f64,
    predict_seconds: f64,

    progress_tx: Option<Sender<FoldSnapshot>>,
}

impl CrossValidation {
    pub fn new(
        folds: usize,
        learner: Box<dyn Classifier>,
        dataset: Dataset,
    ) -> Result<Self, EvalError> {
        if folds < 2 {
            return Err(EvalError::InvalidConfiguration(format!(
                "folds must be at least 2, got {folds}"
            )));
        }
        if folds > dataset.len() {
            return Err(EvalError::InvalidConfiguration(format!(
                "folds ({folds}) cannot exceed dataset rows ({})",
                dataset.len()
            )));
        }

        Ok(Self {
            learner,
            dataset,
            plan: FoldPlan::contiguous(folds),
            truth: Vec::new(),
            predictions: Vec::new(),
            fit_seconds: 0.0,
            predict_seconds: 0.0,
            progress_tx: None,
        })
    }

    /// Permutes row order with the given seed before blocking into folds.
    pub fn with_shuffle(mut self, seed: u64) -> Self {
        self.plan = FoldPlan::shuffled(self.plan.folds(), seed);
        self
    }

    pub fn with_progress(mut self, tx: Sender<FoldSnapshot>) -> Self {
        self.progress_tx = Some(tx);
        self
    }

    /// Runs all folds sequentially. On any classifier failure the error
    /// propagates unchanged and no accumulated state is published.
    pub fn run(&mut self) -> Result<(), EvalError> {
        self.truth.clear();
        self.predictions.clear();
        self.fit_seconds = 0.0;
        self.predict_seconds = 0.0;

        let rows = self.dataset.len();
        let mut truth: Vec<usize> = Vec::with_capacity(rows);
        let mut predictions: Vec<usize> = Vec::with_capacity(rows);
        let mut fit_seconds = 0.0;
        let mut predict_seconds = 0.0;
        let mut correct = 0usize;

        for (fold, (train_idx, test_idx)) in self.plan.split(rows).into_iter().enumerate() {
            let (train_features, train_labels) = self.dataset.select(&train_idx);
            let (test_features, test_labels) = self.dataset.select(&test_idx);

            let start = ThreadTime::now();
            self.learner
                .fit(&train_features, &train_labels)
                .map_err(|source| EvalError::Model { fold, source })?;
            fit_seconds += start.elapsed().as_secs_f64();

            let start = ThreadTime::now();
            let predicted = self
                .learner
                .predict(&test_features)
                .map_err(|source| EvalError::Model { fold, source })?;
            predict_seconds += start.elapsed().as_secs_f64();

            if predicted.len() != test_labels.len() {
                return Err(EvalError::Model {
                    fold,
                    source: format!(
                        "classifier returned {} predictions for {} test rows",
                        predicted.len(),
                        test_labels.len()
                    )
                    .into(),
                });
            }

            correct += truth_matches(&test_labels, &predicted);
            truth.extend(test_labels);
            predictions.extend(predicted);

            self.push_snapshot(fold, truth.len(), correct, fit_seconds, predict_seconds);
        }

        self.truth = truth;
        self.predictions = predictions;
        self.fit_seconds = fit_seconds;
        self.predict_seconds = predict_seconds;
        Ok(())
    }

    pub fn truth(&self) -> &[usize] {
        &self.truth
    }

    pub fn predictions(&self) -> &[usize] {
        &self.predictions
    }

    pub fn fit_seconds(&self) -> f64 {
        self.fit_seconds
    }

    pub fn predict_seconds(&self) -> f64 {
        self.predict_seconds
    }

    /// Aggregates the accumulated results into a report row.
    pub fn summary(&self, name: impl Into<String>) -> Result<ModelSummary, EvalError> {
        if self.truth.is_empty() {
            return Err(EvalError::InvalidInput(
                "no accumulated results, call run() first".into(),
            ));
        }

        Ok(ModelSummary {
            name: name.into(),
            precision: precision_overall(&self.truth, &self.predictions)?,
            recall: recall_overall(&self.truth, &self.predictions)?,
            f_score: f_score_overall(&self.truth, &self.predictions)?,
            accuracy: accuracy(&self.truth, &self.predictions)?,
            fit_seconds: self.fit_seconds,
            predict_seconds: self.predict_seconds,
        })
    }

    fn push_snapshot(
        &self,
        fold: usize,
        rows_evaluated: usize,
        correct: usize,
        fit_seconds: f64,
        predict_seconds: f64,
    ) {
        let Some(tx) = &self.progress_tx else {
            return;
        };
        let _ = tx.send(FoldSnapshot {
            fold: fold + 1,
            folds: self.plan.folds(),
            rows_evaluated,
            running_accuracy: if rows_evaluated == 0 {
                0.0
            } else {
                correct as f64 / rows_evaluated as f64
            },
            fit_seconds,
            predict_seconds,
        });
    }
}

fn truth_matches(truth: &[usize], predictions: &[usize]) -> usize {
    truth
        .iter()
        .zip(predictions.iter())
        .filter(|(t, p)| t == p)
        .count()
}
