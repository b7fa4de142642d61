use crate::learners::{CartLearner, Classifier, MajorityClass};
use crate::ui::types::choices::LearnerChoice;

/// Maps a parsed learner choice onto a boxed classifier handle.
pub fn build_learner(choice: &LearnerChoice) -> Box<dyn Classifier> {
    match choice {
        LearnerChoice::MajorityClass => Box::new(MajorityClass::new()),
        LearnerChoice::DecisionTree(params) => Box::new(
            CartLearner::new()
                .with_max_depth(params.max_depth)
                .with_min_weight_split(params.min_weight_split)
                .with_min_weight_leaf(params.min_weight_leaf)
                .with_split_rule(params.split_rule),
        ),
    }
}
