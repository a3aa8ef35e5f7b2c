use std::path::Path;

use linfa::Dataset;
use linfa::traits::Fit;
use linfa_linear::LinearRegression;
use ndarray::{Array1, Array2};

use crate::artifact::{AssetLayout, write_artifact};
use crate::encoder::GenderEncoder;
use crate::model::{FEATURE_COUNT, ShoeSizeModel};

/// Noise-free generating function the fixture model is fitted on.
pub(crate) fn expected_size(age: i64, height: i64, gender_code: usize) -> f64 {
    -3.0 + 0.02 * age as f64 + 0.06 * height as f64 + 1.2 * gender_code as f64
}

pub(crate) fn gender_encoder() -> GenderEncoder {
    GenderEncoder::from_labels(["Male", "Female"])
}

pub(crate) fn fitted_model() -> ShoeSizeModel {
    let samples = [
        (12, 140, 0),
        (15, 155, 1),
        (18, 170, 1),
        (22, 165, 0),
        (30, 182, 1),
        (35, 158, 0),
        (41, 176, 1),
        (50, 161, 0),
        (64, 190, 1),
        (77, 149, 0),
    ];
    let mut records = Array2::zeros((samples.len(), FEATURE_COUNT));
    for (row, (age, height, code)) in samples.iter().enumerate() {
        records[[row, 0]] = *age as f64;
        records[[row, 1]] = *height as f64;
        records[[row, 2]] = *code as f64;
    }
    let targets: Array1<f64> = samples
        .iter()
        .map(|(age, height, code)| expected_size(*age, *height, *code))
        .collect();

    let fitted = LinearRegression::new()
        .fit(&Dataset::new(records, targets))
        .expect("fixture regression fits");
    ShoeSizeModel::from_fitted(fitted)
}

/// Writes both fixture artifacts into `dir` and returns the matching layout.
pub(crate) fn write_assets(dir: &Path) -> AssetLayout {
    let layout = AssetLayout::rooted_at(dir);
    write_artifact(&layout.model_path(), &fitted_model()).expect("model artifact written");
    write_artifact(&layout.encoder_path(), &gender_encoder()).expect("encoder artifact written");
    layout
}
