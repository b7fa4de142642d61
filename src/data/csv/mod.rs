mod loader;
mod parser;

pub use loader::load_dataset;
