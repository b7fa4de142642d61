mod cross_validation;
mod folds;

pub use cross_validation::{CrossValidation, FoldSnapshot};
pub use folds::FoldPlan;
