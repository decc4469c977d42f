use log::{debug, info, warn};

use crate::data::example::TrainingExample;
use crate::error::{PerceptronError, Result};
use crate::model::predictor::Predictor;
use crate::model::state::ModelState;
use crate::train::epoch_stats::EpochStats;
use crate::train::observer::{EpochObserver, NoopObserver};
use crate::train::train_config::TrainConfig;

/// Outcome of a full training run.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingReport {
    pub predictor: Predictor,
    /// `true` if some epoch classified every example correctly.
    pub converged: bool,
    pub epochs_run: usize,
    /// One record per epoch run, in order.
    pub trace: Vec<EpochStats>,
}

/// Trains a single-input perceptron with the online perceptron rule.
///
/// The configuration is validated once, at construction, and is fixed for
/// the trainer's lifetime. Every call to [`train`](Self::train) or
/// [`fit`](Self::fit) starts from a fresh initial state, so predictors from
/// earlier runs are never affected by later ones.
#[derive(Debug, Clone)]
pub struct PerceptronTrainer {
    config: TrainConfig,
    state: Option<ModelState>,
}

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Validates `config`, trains on `examples` and returns the final predictor.
///
/// Running out of epochs is not an error; use [`PerceptronTrainer::fit`] to
/// find out whether the run converged.
pub fn train(examples: &[TrainingExample], config: &TrainConfig) -> Result<Predictor> {
    PerceptronTrainer::new(*config)?.train(examples)
}

impl PerceptronTrainer {
    pub fn new(config: TrainConfig) -> Result<Self> {
        config.validate()?;
        Ok(PerceptronTrainer { config, state: None })
    }

    pub fn config(&self) -> &TrainConfig {
        &self.config
    }

    /// Parameters at the end of the last run, or `None` before the first one.
    pub fn state(&self) -> Option<ModelState> {
        self.state
    }

    pub fn train(&mut self, examples: &[TrainingExample]) -> Result<Predictor> {
        self.fit(examples, NoopObserver).map(|report| report.predictor)
    }

    /// Runs up to `max_epochs` epochs, stopping after the first epoch with
    /// zero total error. `observer` sees every epoch's record.
    ///
    /// Fails with `EmptyDataset` before touching any state if `examples` is empty.
    pub fn fit<O: EpochObserver>(
        &mut self,
        examples: &[TrainingExample],
        mut observer: O,
    ) -> Result<TrainingReport> {
        if examples.is_empty() {
            return Err(PerceptronError::EmptyDataset);
        }

        let TrainConfig { learning_rate, max_epochs, init } = self.config;
        let mut state = init.initial_state();
        info!(
            "training started: {} examples, learning_rate={}, max_epochs={}, weight={:.4}, bias={:.4}",
            examples.len(),
            learning_rate,
            max_epochs,
            state.weight,
            state.bias
        );

        let mut trace = Vec::new();
        let mut converged = false;

        for epoch in 1..=max_epochs {
            let total_error = run_one_epoch(&mut state, examples, learning_rate);

            let stats = EpochStats {
                epoch,
                total_epochs: max_epochs,
                total_error,
                weight: state.weight,
                bias: state.bias,
            };
            observer.on_epoch(&stats);
            trace.push(stats);

            if total_error == 0 {
                info!("converged in epoch {epoch}");
                converged = true;
                break;
            }
        }

        if !converged {
            warn!("no convergence within {max_epochs} epochs; returning last parameters");
        }

        self.state = Some(state);
        let predictor = state.freeze();
        info!("training finished: {predictor}");

        Ok(TrainingReport {
            predictor,
            converged,
            epochs_run: trace.len(),
            trace,
        })
    }
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// One pass over `examples` in order, updating after every example.
/// Returns the number of misclassified examples.
fn run_one_epoch(state: &mut ModelState, examples: &[TrainingExample], learning_rate: f64) -> usize {
    let mut total_error = 0;

    for example in examples {
        let update = state.update(example, learning_rate);
        total_error += update.error.unsigned_abs() as usize;

        debug!(
            "input={} expected={} predicted={} weighted_sum={:.4} error={} -> weight={:.4} bias={:.4}",
            example.input(),
            example.label(),
            update.predicted,
            update.weighted_sum,
            update.error,
            state.weight,
            state.bias
        );
    }

    total_error
}
