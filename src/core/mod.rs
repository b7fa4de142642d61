mod dataset;
mod label_vocabulary;

pub use dataset::Dataset;
pub use label_vocabulary::LabelVocabulary;
