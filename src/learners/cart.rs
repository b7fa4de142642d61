use crate::error::ModelError;
use crate::learners::classifier::Classifier;
use linfa::Dataset;
use linfa::traits::{Fit, Predict};
use linfa_trees::{DecisionTree, SplitQuality};
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

/// Impurity criterion for tree splits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SplitRule {
    #[default]
    Gini,
    Entropy,
}

impl From<SplitRule> for SplitQuality {
    fn from(value: SplitRule) -> Self {
        match value {
            SplitRule::Gini => SplitQuality::Gini,
            SplitRule::Entropy => SplitQuality::Entropy,
        }
    }
}

/// CART decision tree, delegated to `linfa-trees`. The harness only sees the
/// `fit`/`predict` seam; tree construction is owned by the library.
pub struct CartLearner {
    max_depth: Option<usize>,
    min_weight_split: f32,
    min_weight_leaf: f32,
    split_rule: SplitRule,
    model: Option<DecisionTree<f64, usize>>,
}

impl CartLearner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, depth: Option<usize>) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn with_min_weight_split(mut self, weight: f32) -> Self {
        self.min_weight_split = weight;
        self
    }

    pub fn with_min_weight_leaf(mut self, weight: f32) -> Self {
        self.min_weight_leaf = weight;
        self
    }

    pub fn with_split_rule(mut self, rule: SplitRule) -> Self {
        self.split_rule = rule;
        self
    }
}

impl Default for CartLearner {
    fn default() -> Self {
        Self {
            max_depth: None,
            min_weight_split: 2.0,
            min_weight_leaf: 1.0,
            split_rule: SplitRule::Gini,
            model: None,
        }
    }
}

impl Classifier for CartLearner {
    fn fit(&mut self, features: &Array2<f64>, labels: &[usize]) -> Result<(), ModelError> {
        let targets = Array1::from_vec(labels.to_vec());
        let training = Dataset::new(features.clone(), targets);

        let model = DecisionTree::params()
            .max_depth(self.max_depth)
            .min_weight_split(self.min_weight_split)
            .min_weight_leaf(self.min_weight_leaf)
            .split_quality(self.split_rule.into())
            .fit(&training)
            .map_err(|e| Box::new(e) as ModelError)?;

        self.model = Some(model);
        Ok(())
    }

    fn predict(&self, features: &Array2<f64>) -> Result<Vec<usize>, ModelError> {
        let model = self
            .model
            .as_ref()
            .ok_or("decision tree has not been fitted")?;
        Ok(model.predict(features.clone()).targets.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn fits_and_recovers_a_separable_training_set() {
        let features = array![[0.0, 1.0], [0.2, 0.9], [9.8, 0.1], [10.0, 0.0]];
        let labels = vec![0, 0, 1, 1];

        let mut learner = CartLearner::new();
        learner.fit(&features, &labels).unwrap();

        let predicted = learner.predict(&features).unwrap();
        assert_eq!(predicted, labels);
    }

    #[test]
    fn entropy_rule_also_fits() {
        let features = array![[0.0], [1.0], [10.0], [11.0]];
        let labels = vec![0, 0, 1, 1];

        let mut learner = CartLearner::new()
            .with_split_rule(SplitRule::Entropy)
            .with_max_depth(Some(3));
        learner.fit(&features, &labels).unwrap();
        assert_eq!(learner.predict(&array![[10.5]]).unwrap(), vec![1]);
    }

    #[test]
    fn predict_before_fit_is_an_error() {
        let learner = CartLearner::new();
        assert!(learner.predict(&array![[1.0]]).is_err());
    }

    #[test]
    fn split_rule_deserializes_from_kebab_case() {
        let rule: SplitRule = serde_json::from_str("\"entropy\"").unwrap();
        assert_eq!(rule, SplitRule::Entropy);
        assert_eq!(SplitRule::default(), SplitRule::Gini);
    }
}
