pub mod trainer;
pub mod epoch_stats;
pub mod train_config;
pub mod observer;

pub use trainer::{train, PerceptronTrainer, TrainingReport};
pub use epoch_stats::EpochStats;
pub use train_config::{Initialization, TrainConfig};
pub use observer::{EpochObserver, FnObserver, LogObserver, NoopObserver};
