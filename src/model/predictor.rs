use crate::activation::step::{step, weighted_sum};
use crate::data::example::{Label, TrainingExample};
use crate::error::{PerceptronError, Result};

/// A trained perceptron: frozen weight and bias plus the step decision rule.
///
/// Obtained from a training run, or from [`Predictor::try_new`] for
/// parameters the caller already holds. Weight and bias are always finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Predictor {
    weight: f64,
    bias: f64,
}

impl Predictor {
    /// Unchecked; callers inside the crate pass parameters already known
    /// to be finite.
    pub(crate) fn new(weight: f64, bias: f64) -> Predictor {
        Predictor { weight, bias }
    }

    /// Builds a predictor from known parameters.
    ///
    /// # Errors
    /// `InvalidConfiguration` if `weight` or `bias` is NaN or infinite.
    pub fn try_new(weight: f64, bias: f64) -> Result<Predictor> {
        if !(weight.is_finite() && bias.is_finite()) {
            return Err(PerceptronError::InvalidConfiguration(format!(
                "weight and bias must be finite, got {weight} and {bias}"
            )));
        }
        Ok(Predictor::new(weight, bias))
    }

    /// Learned input multiplier.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Learned offset.
    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// Returns `1` if `input * weight + bias >= 0`, else `0`.
    pub fn predict(&self, input: f64) -> u8 {
        self.predict_label(input).as_u8()
    }

    /// Same decision as [`predict`](Self::predict), as a [`Label`].
    pub fn predict_label(&self, input: f64) -> Label {
        step(weighted_sum(input, self.weight, self.bias))
    }

    /// Fraction of `examples` classified correctly; `0.0` when empty.
    pub fn accuracy(&self, examples: &[TrainingExample]) -> f64 {
        if examples.is_empty() {
            return 0.0;
        }
        let correct = examples
            .iter()
            .filter(|ex| self.predict_label(ex.input()) == ex.label())
            .count();
        correct as f64 / examples.len() as f64
    }
}

impl std::fmt::Display for Predictor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "weight={:.4} bias={:.4}", self.weight, self.bias)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::example::rain_dataset;

    #[test]
    fn checked_constructor_rejects_non_finite() {
        assert_eq!(Predictor::try_new(0.5, -1.0).unwrap(), Predictor::new(0.5, -1.0));
        for (w, b) in [(f64::NAN, 0.0), (0.0, f64::INFINITY), (f64::NEG_INFINITY, 1.0)] {
            assert!(matches!(
                Predictor::try_new(w, b),
                Err(PerceptronError::InvalidConfiguration(_))
            ));
        }
    }

    #[test]
    fn tie_goes_to_one() {
        let p = Predictor::new(0.5, -1.0);
        assert_eq!(p.predict(2.0), 1);
        assert_eq!(p.predict(1.999), 0);
    }

    #[test]
    fn prediction_is_repeatable() {
        let p = Predictor::new(-0.3, 0.2);
        let first = p.predict(0.7);
        for _ in 0..100 {
            assert_eq!(p.predict(0.7), first);
        }
    }

    #[test]
    fn accuracy_counts_matches() {
        let data = rain_dataset();
        assert_eq!(Predictor::new(1.0, -0.5).accuracy(&data), 1.0);
        assert_eq!(Predictor::new(0.0, 0.0).accuracy(&data), 0.5);
        assert_eq!(Predictor::new(1.0, -0.5).accuracy(&[]), 0.0);
    }
}
