use std::path::Path;

use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use serde::{Serialize, Deserialize};

use crate::error::{PerceptronError, Result};
use crate::model::state::ModelState;

/// How weight and bias are seeded before the first epoch.
///
/// `Random` and `Seeded` draw both values independently and uniformly from
/// `[0, 1)`; `Seeded` makes the draw reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Initialization {
    #[default]
    Random,
    Seeded { seed: u64 },
    Fixed { weight: f64, bias: f64 },
}

impl Initialization {
    pub fn initial_state(&self) -> ModelState {
        match *self {
            Initialization::Random => draw(&mut rand::thread_rng()),
            Initialization::Seeded { seed } => draw(&mut StdRng::seed_from_u64(seed)),
            Initialization::Fixed { weight, bias } => ModelState::new(weight, bias),
        }
    }
}

fn draw<R: Rng>(rng: &mut R) -> ModelState {
    let weight = rng.gen::<f64>();
    let bias = rng.gen::<f64>();
    ModelState::new(weight, bias)
}

/// Hyperparameters for a perceptron run.
///
/// # Fields
/// - `learning_rate` — step size of each update; finite and `> 0`
/// - `max_epochs`    — upper bound on full passes; `>= 1`
/// - `init`          — initial weight/bias policy
///
/// Missing fields in a JSON config take the defaults
/// (`0.1`, `100`, `Random`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub learning_rate: f64,
    pub max_epochs: usize,
    pub init: Initialization,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            learning_rate: 0.1,
            max_epochs: 100,
            init: Initialization::Random,
        }
    }
}

impl TrainConfig {
    /// Creates a config with random initialization.
    pub fn new(learning_rate: f64, max_epochs: usize) -> Self {
        TrainConfig {
            learning_rate,
            max_epochs,
            init: Initialization::Random,
        }
    }

    pub fn with_init(mut self, init: Initialization) -> Self {
        self.init = init;
        self
    }

    /// Fails with `InvalidConfiguration` on a non-positive or non-finite
    /// learning rate, a zero epoch budget, or non-finite fixed parameters.
    pub fn validate(&self) -> Result<()> {
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(PerceptronError::InvalidConfiguration(format!(
                "learning_rate must be a finite value > 0, got {}",
                self.learning_rate
            )));
        }
        if self.max_epochs < 1 {
            return Err(PerceptronError::InvalidConfiguration(
                "max_epochs must be at least 1".into(),
            ));
        }
        if let Initialization::Fixed { weight, bias } = self.init {
            if !(weight.is_finite() && bias.is_finite()) {
                return Err(PerceptronError::InvalidConfiguration(format!(
                    "initial weight and bias must be finite, got {weight} and {bias}"
                )));
            }
        }
        Ok(())
    }

    pub fn from_json_str(text: &str) -> Result<TrainConfig> {
        Ok(serde_json::from_str(text)?)
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a config from a JSON file. The result is not validated.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<TrainConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_the_umbrella_run() {
        let config = TrainConfig::default();
        assert_eq!(config.learning_rate, 0.1);
        assert_eq!(config.max_epochs, 100);
        assert_eq!(config.init, Initialization::Random);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_bad_values() {
        for lr in [0.0, -0.1, f64::NAN, f64::INFINITY] {
            let err = TrainConfig::new(lr, 10).validate().unwrap_err();
            assert!(matches!(err, PerceptronError::InvalidConfiguration(_)), "lr={lr}");
        }
        assert!(matches!(
            TrainConfig::new(0.1, 0).validate(),
            Err(PerceptronError::InvalidConfiguration(_))
        ));
        let fixed = TrainConfig::new(0.1, 10).with_init(Initialization::Fixed {
            weight: f64::NAN,
            bias: 0.0,
        });
        assert!(fixed.validate().is_err());
    }

    #[test]
    fn json_fills_defaults() {
        let config = TrainConfig::from_json_str(r#"{"max_epochs": 5}"#).unwrap();
        assert_eq!(config.max_epochs, 5);
        assert_eq!(config.learning_rate, 0.1);

        let config = TrainConfig::from_json_str(
            r#"{"learning_rate": 1.0, "init": {"type": "fixed", "weight": 0.0, "bias": -1.0}}"#,
        )
        .unwrap();
        assert_eq!(config.init, Initialization::Fixed { weight: 0.0, bias: -1.0 });
    }

    #[test]
    fn json_file_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");

        let config = TrainConfig::new(0.25, 42).with_init(Initialization::Seeded { seed: 9 });
        config.save_json(&path).unwrap();
        assert_eq!(TrainConfig::load_json(&path).unwrap(), config);
    }

    #[test]
    fn seeded_init_is_reproducible_and_in_unit_interval() {
        let a = Initialization::Seeded { seed: 7 }.initial_state();
        let b = Initialization::Seeded { seed: 7 }.initial_state();
        assert_eq!(a, b);
        assert!((0.0..1.0).contains(&a.weight));
        assert!((0.0..1.0).contains(&a.bias));

        let r = Initialization::Random.initial_state();
        assert!((0.0..1.0).contains(&r.weight));
        assert!((0.0..1.0).contains(&r.bias));
    }
}
