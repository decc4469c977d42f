use crate::activation::step::{step, weighted_sum};
use crate::data::example::{Label, TrainingExample};
use crate::model::predictor::Predictor;

/// Mutable weight and bias of a perceptron under training.
///
/// # Fields
/// - `weight` — multiplier applied to the input
/// - `bias`   — offset added to the weighted input
///
/// Both stay finite as long as the learning rate and every input are finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelState {
    pub weight: f64,
    pub bias: f64,
}

/// What one online update saw and did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Update {
    pub weighted_sum: f64,
    pub predicted: Label,
    /// `expected - predicted`, in `{-1, 0, 1}`.
    pub error: i8,
}

impl ModelState {
    /// Creates a state with the given starting parameters.
    pub fn new(weight: f64, bias: f64) -> ModelState {
        ModelState { weight, bias }
    }

    /// Applies the perceptron rule for a single example, in place:
    /// `weight += error * input * lr`, `bias += error * lr`.
    ///
    /// # Arguments
    /// - `example`       — the example to classify and learn from
    /// - `learning_rate` — step size; a correct prediction changes nothing
    ///
    /// Returns what the update observed, for tracing.
    pub fn update(&mut self, example: &TrainingExample, learning_rate: f64) -> Update {
        let input = example.input();
        let sum = weighted_sum(input, self.weight, self.bias);
        let predicted = step(sum);
        let error = Label::error(example.label(), predicted);

        let e = f64::from(error);
        self.weight += e * input * learning_rate;
        self.bias += e * learning_rate;

        Update { weighted_sum: sum, predicted, error }
    }

    /// Snapshots the current parameters. Later updates do not reach the predictor.
    pub fn freeze(&self) -> Predictor {
        Predictor::new(self.weight, self.bias)
    }
}
