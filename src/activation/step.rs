use crate::data::example::Label;

/// Heaviside step used as the perceptron's activation.
///
/// The threshold is inclusive: a weighted sum of exactly `0.0` fires.
pub fn step(weighted_sum: f64) -> Label {
    if weighted_sum >= 0.0 { Label::One } else { Label::Zero }
}

/// `input * weight + bias`, the pre-activation value of a single-input unit.
pub fn weighted_sum(input: f64, weight: f64, bias: f64) -> f64 {
    input * weight + bias
}
