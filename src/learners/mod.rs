mod cart;
mod classifier;
mod majority_class;

pub use cart::{CartLearner, SplitRule};
pub use classifier::Classifier;
pub use majority_class::MajorityClass;
