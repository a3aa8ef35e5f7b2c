//! # shoesize 👟
//!
//! Estimate a shoe size from age, height and gender with a pre-trained linear
//! regression model and a gender label encoder.
//!
//! Both artifacts are produced by training and read from a fixed location:
//!
//! ```text
//! assets/
//!   model.pkl            regression model (linfa-linear, MessagePack)
//!   label_encoder.pkl    gender encoder (MessagePack)
//! ```
//!
//! The repository ships no artifacts. Training is done elsewhere; whatever does
//! it writes both files with [`artifact::write_artifact`] so the encoder's
//! codes match the model's third feature. The binary and the benchmark expect
//! them under `assets/` in the working directory.
//!
//! ```no_run
//! use linfa::Dataset;
//! use linfa::traits::Fit;
//! use linfa_linear::LinearRegression;
//! use ndarray::{Array1, array};
//! use shoesize::artifact::write_artifact;
//! use shoesize::{AssetLayout, GenderEncoder, ShoeSizeModel};
//!
//! // [age, height, gender_code] with codes from the sorted labels: Female = 0, Male = 1
//! let encoder = GenderEncoder::from_labels(["Male", "Female"]);
//! let records = array![[18.0, 170.0, 1.0], [25.0, 160.0, 0.0], [40.0, 185.0, 1.0], [60.0, 155.0, 0.0]];
//! let targets = Array1::from(vec![8.76, 6.1, 10.1, 7.5]);
//! let fitted = LinearRegression::new().fit(&Dataset::new(records, targets))?;
//!
//! let layout = AssetLayout::default();
//! std::fs::create_dir_all(&layout.dir)?;
//! write_artifact(&layout.model_path(), &ShoeSizeModel::from_fitted(fitted))?;
//! write_artifact(&layout.encoder_path(), &encoder)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Features
//! - Lazy, single-flight loading of both artifacts, cached for the process lifetime
//! - Input validation owned by the service: age `1..=100`, height `50..=250`,
//!   gender from the encoder's own class list
//! - Feature vector assembled in the trained order `[age, height, gender_code]`
//! - Classified failures: configuration, validation and inference errors
//! - Results rounded half away from zero to two decimal places
//!
//! ## Example
//! ```no_run
//! let options = shoesize::gender_options()?;
//! println!("choose one of: {}", options.join(", "));
//!
//! match shoesize::predict_shoe_size(18, 170, "Male") {
//!     Ok(size) => println!("Predicted shoe size: {size}"),
//!     Err(err) => eprintln!("{}", err.user_message()),
//! }
//! # Ok::<(), shoesize::ShoeSizeError>(())
//! ```

use std::sync::OnceLock;

pub mod artifact;
pub mod encoder;
pub mod error;
pub mod loader;
pub mod model;
pub mod predict;

#[cfg(test)]
mod test_support;

pub use artifact::AssetLayout;
pub use encoder::{CategoricalEncoder, GenderEncoder};
pub use error::{
    ConfigurationError, InferenceError, InferenceFault, InputField, Result, ShoeSizeError,
    ValidationError,
};
pub use loader::{EncoderHandle, ModelHandle, ModelLoader};
pub use model::{FeatureVector, Regressor, ShoeSizeModel};
pub use predict::{Prediction, PredictionInput, predict};

static LOADER: OnceLock<ModelLoader> = OnceLock::new();

/// Process-wide loader reading from the default `assets/` layout.
pub fn global_loader() -> &'static ModelLoader {
    LOADER.get_or_init(|| ModelLoader::new(AssetLayout::default()))
}

/// Loads (once) and returns the shared model and encoder handles.
pub fn load_models() -> Result<(ModelHandle, EncoderHandle), ConfigurationError> {
    global_loader().load()
}

/// Gender labels the model was trained on, for populating a selection control.
pub fn gender_options() -> Result<Vec<String>> {
    let (_, encoder) = load_models()?;
    Ok(encoder.classes().to_vec())
}

/// Presentation-facing entry point. On error, show
/// [`ShoeSizeError::user_message`] instead of a result.
pub fn predict_shoe_size(age: i64, height: i64, gender: &str) -> Result<f64> {
    let (model, encoder) = load_models()?;
    predict(&PredictionInput::new(age, height, gender), &*model, &*encoder)
}
