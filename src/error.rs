//! Classified failures of the loader and the prediction service.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::predict::{AGE_RANGE, HEIGHT_RANGE};

/// Why an artifact file could not be turned into a handle.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("MessagePack decode failed: {0}")]
    Decode(#[from] rmp_serde::decode::Error),
    #[error("MessagePack encode failed: {0}")]
    Encode(#[from] rmp_serde::encode::Error),
    #[error("invalid artifact: {0}")]
    Invalid(&'static str),
}

/// Storage problems found while loading the artifacts. Fatal for the process.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("missing asset directory: {}", .0.display())]
    MissingAssetDirectory(PathBuf),

    #[error("missing model artifact: {}", .0.display())]
    MissingModelArtifact(PathBuf),

    #[error("missing encoder artifact: {}", .0.display())]
    MissingEncoderArtifact(PathBuf),

    #[error("artifact deserialization failed for {}: {source}", .path.display())]
    Deserialization {
        path: PathBuf,
        #[source]
        source: ArtifactError,
    },
}

/// The input field a [`ValidationError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Age,
    Height,
    Gender,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InputField::Age => "age",
            InputField::Height => "height",
            InputField::Gender => "gender",
        })
    }
}

/// Caller-supplied input violates a documented constraint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("age out of range: {0} (expected {min}..={max})", min = AGE_RANGE.start(), max = AGE_RANGE.end())]
    AgeOutOfRange(i64),

    #[error("height out of range: {0} (expected {min}..={max})", min = HEIGHT_RANGE.start(), max = HEIGHT_RANGE.end())]
    HeightOutOfRange(i64),

    #[error("gender must not be empty")]
    EmptyGender,

    #[error("unrecognized gender label {label:?} (accepted: {})", .accepted.join(", "))]
    UnrecognizedGender { label: String, accepted: Vec<String> },
}

impl ValidationError {
    /// Field that has to be corrected.
    pub fn field(&self) -> InputField {
        match self {
            ValidationError::AgeOutOfRange(_) => InputField::Age,
            ValidationError::HeightOutOfRange(_) => InputField::Height,
            ValidationError::EmptyGender | ValidationError::UnrecognizedGender { .. } => {
                InputField::Gender
            }
        }
    }
}

/// Cause reported by a [`Regressor`](crate::model::Regressor) that could not produce a value.
#[derive(Debug, Error)]
pub enum InferenceFault {
    #[error("model expects {expected} features, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("model produced a non-finite value ({0})")]
    NonFinite(f64),

    #[error(transparent)]
    Backend(Box<dyn std::error::Error + Send + Sync>),
}

/// The model failed on well-formed input. Fatal for the single request only.
#[derive(Debug, Error)]
#[error("model prediction failed: {source}")]
pub struct InferenceError {
    #[from]
    source: InferenceFault,
}

impl InferenceError {
    /// Underlying cause reported by the model.
    pub fn fault(&self) -> &InferenceFault {
        &self.source
    }
}

/// Any failure surfaced by the presentation-facing API.
#[derive(Debug, Error)]
pub enum ShoeSizeError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Inference(#[from] InferenceError),
}

impl ShoeSizeError {
    /// Only validation failures can be fixed by the caller resubmitting.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ShoeSizeError::Validation(_))
    }

    /// Text suitable for showing to the person who filled in the form.
    pub fn user_message(&self) -> String {
        match self {
            ShoeSizeError::Configuration(err) => {
                format!("Service unavailable: {err}. Make sure the model files are in the assets folder.")
            }
            ShoeSizeError::Validation(ValidationError::AgeOutOfRange(_)) => format!(
                "Please enter an age between {} and {} years",
                AGE_RANGE.start(),
                AGE_RANGE.end()
            ),
            ShoeSizeError::Validation(ValidationError::HeightOutOfRange(_)) => format!(
                "Please enter a height between {} and {} cm",
                HEIGHT_RANGE.start(),
                HEIGHT_RANGE.end()
            ),
            ShoeSizeError::Validation(ValidationError::EmptyGender) => {
                "Please select a gender".to_string()
            }
            ShoeSizeError::Validation(ValidationError::UnrecognizedGender { label, accepted }) => {
                format!(
                    "Invalid gender value: {label}. Please select from available options ({}).",
                    accepted.join(", ")
                )
            }
            ShoeSizeError::Inference(err) => format!("Prediction error: {}", err.fault()),
        }
    }
}

/// Result alias used by the presentation-facing API.
pub type Result<T, E = ShoeSizeError> = std::result::Result<T, E>;
