pub mod error;
pub mod activation;
pub mod data;
pub mod model;
pub mod train;

// Convenience re-exports
pub use error::{PerceptronError, Result};
pub use data::example::{Label, TrainingExample, rain_dataset};
pub use model::predictor::Predictor;
pub use model::state::ModelState;
pub use train::trainer::{train, PerceptronTrainer, TrainingReport};
pub use train::train_config::{Initialization, TrainConfig};
pub use train::epoch_stats::EpochStats;
pub use train::observer::EpochObserver;
