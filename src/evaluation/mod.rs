mod confusion_matrix;
mod metrics;
mod roc;
mod summary;

pub use confusion_matrix::ConfusionMatrix;
pub use metrics::{
    ClassMetrics, accuracy, f_score_overall, per_class, precision_overall, recall_overall,
};
pub use roc::{RocCurve, macro_average, micro_average, one_vs_rest};
pub use summary::{ModelSummary, Report, ReportFormat};
