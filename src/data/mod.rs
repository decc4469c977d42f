pub mod example;
pub mod dataset;

pub use example::{Label, TrainingExample, rain_dataset};
