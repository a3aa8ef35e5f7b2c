//! Validate → encode → assemble → infer → round.

use std::fmt;
use std::ops::RangeInclusive;

use tracing::{error, warn};

use crate::encoder::CategoricalEncoder;
use crate::error::{InferenceError, Result, ValidationError};
use crate::model::{FeatureVector, Regressor};

/// Accepted ages in years, inclusive.
pub const AGE_RANGE: RangeInclusive<i64> = 1..=100;
/// Accepted heights in centimetres, inclusive.
pub const HEIGHT_RANGE: RangeInclusive<i64> = 50..=250;

pub const DEFAULT_AGE: i64 = 18;
pub const DEFAULT_HEIGHT: i64 = 170;

/// Raw form input. Nothing is checked until [`predict`] runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionInput {
    pub age: i64,
    pub height: i64,
    pub gender: String,
}

impl PredictionInput {
    pub fn new(age: i64, height: i64, gender: impl Into<String>) -> Self {
        Self {
            age,
            height,
            gender: gender.into(),
        }
    }

    /// Input pre-filled with the form's initial age and height.
    pub fn with_defaults(gender: impl Into<String>) -> Self {
        Self::new(DEFAULT_AGE, DEFAULT_HEIGHT, gender)
    }
}

/// A successful prediction together with the input it was made for.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub shoe_size: f64,
    pub input: PredictionInput,
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Predicted shoe size: {} (age {} years, height {} cm, gender {})",
            self.shoe_size, self.input.age, self.input.height, self.input.gender
        )
    }
}

/// Rounds half away from zero to two decimal places.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn validate_ranges(input: &PredictionInput) -> Result<(), ValidationError> {
    if !AGE_RANGE.contains(&input.age) {
        return Err(ValidationError::AgeOutOfRange(input.age));
    }
    if !HEIGHT_RANGE.contains(&input.height) {
        return Err(ValidationError::HeightOutOfRange(input.height));
    }
    Ok(())
}

fn encode_gender<E>(encoder: &E, gender: &str) -> Result<usize, ValidationError>
where
    E: CategoricalEncoder + ?Sized,
{
    if gender.is_empty() {
        return Err(ValidationError::EmptyGender);
    }
    encoder
        .encode(gender)
        .ok_or_else(|| ValidationError::UnrecognizedGender {
            label: gender.to_string(),
            accepted: encoder.classes().to_vec(),
        })
}

/// Predicts a shoe size, rounded to two decimals.
///
/// The input is validated here regardless of what the caller already checked;
/// the model is only invoked for input that passed every check.
pub fn predict<M, E>(input: &PredictionInput, model: &M, encoder: &E) -> Result<f64>
where
    M: Regressor + ?Sized,
    E: CategoricalEncoder + ?Sized,
{
    let gender_code = validate_ranges(input)
        .and_then(|()| encode_gender(encoder, &input.gender))
        .inspect_err(|err| warn!(field = %err.field(), "rejected prediction input"))?;

    let features = FeatureVector::new(input.age, input.height, gender_code);
    let raw = model.predict(&features).map_err(|fault| {
        error!(%fault, "model prediction failed");
        InferenceError::from(fault)
    })?;

    Ok(round_to_cents(raw))
}

/// Same as [`predict`], keeping the input alongside the result.
pub fn predict_summary<M, E>(input: PredictionInput, model: &M, encoder: &E) -> Result<Prediction>
where
    M: Regressor + ?Sized,
    E: CategoricalEncoder + ?Sized,
{
    let shoe_size = predict(&input, model, encoder)?;
    Ok(Prediction { shoe_size, input })
}
