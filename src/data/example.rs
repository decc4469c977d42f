use serde::{Serialize, Deserialize};

use crate::error::{PerceptronError, Result};

/// Binary class label. Serialized as the integer `0` or `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Label {
    Zero,
    One,
}

impl Label {
    /// Integer form of the label, `0` or `1`.
    pub fn as_u8(self) -> u8 {
        match self {
            Label::Zero => 0,
            Label::One => 1,
        }
    }

    /// `expected - predicted`, in `{-1, 0, 1}`.
    pub fn error(expected: Label, predicted: Label) -> i8 {
        expected.as_u8() as i8 - predicted.as_u8() as i8
    }
}

impl TryFrom<u8> for Label {
    type Error = PerceptronError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Label::Zero),
            1 => Ok(Label::One),
            other => Err(PerceptronError::InvalidExample(format!(
                "label must be 0 or 1, got {other}"
            ))),
        }
    }
}

impl From<Label> for u8 {
    fn from(label: Label) -> u8 {
        label.as_u8()
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// One labelled training point: a scalar input and its expected class.
///
/// # Fields
/// - `input` — the single feature; always finite
/// - `label` — expected class
///
/// Deserializing goes through [`TrainingExample::new`], so the same checks apply.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawExample")]
pub struct TrainingExample {
    input: f64,
    label: Label,
}

#[derive(Deserialize)]
struct RawExample {
    input: f64,
    label: Label,
}

impl TryFrom<RawExample> for TrainingExample {
    type Error = PerceptronError;

    fn try_from(raw: RawExample) -> Result<Self> {
        TrainingExample::new(raw.input, raw.label)
    }
}

impl TrainingExample {
    /// Builds a validated example.
    ///
    /// # Arguments
    /// - `input` — feature value; must be finite
    /// - `label` — expected class
    ///
    /// # Errors
    /// `InvalidExample` if `input` is NaN or infinite.
    pub fn new(input: f64, label: Label) -> Result<Self> {
        if !input.is_finite() {
            return Err(PerceptronError::InvalidExample(format!(
                "input must be finite, got {input}"
            )));
        }
        Ok(TrainingExample { input, label })
    }

    /// The feature value.
    pub fn input(&self) -> f64 {
        self.input
    }

    /// The expected class.
    pub fn label(&self) -> Label {
        self.label
    }
}

/// The umbrella dataset: raining (`1.0`) means carry one, dry (`0.0`) means don't.
pub fn rain_dataset() -> Vec<TrainingExample> {
    vec![
        TrainingExample { input: 1.0, label: Label::One },
        TrainingExample { input: 0.0, label: Label::Zero },
    ]
}
