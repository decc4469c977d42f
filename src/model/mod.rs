pub mod state;
pub mod predictor;

pub use state::{ModelState, Update};
pub use predictor::Predictor;
