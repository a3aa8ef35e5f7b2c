#![allow(dead_code)]

use std::fs::File;
use std::path::Path;

use linfa::Dataset;
use linfa::traits::Fit;
use linfa_linear::LinearRegression;
use ndarray::{Array1, Array2};
use serde::Deserialize;
use shoesize::artifact::write_artifact;
use shoesize::{AssetLayout, CategoricalEncoder, GenderEncoder, ShoeSizeModel};

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/shoe_sizes.csv");

#[derive(Debug, Deserialize)]
pub struct TrainingRow {
    #[serde(rename = "Age")]
    pub age: i64,
    #[serde(rename = "Height")]
    pub height: i64,
    #[serde(rename = "Gender")]
    pub gender: String,
    #[serde(rename = "ShoeSize")]
    pub shoe_size: f64,
}

/// The generating function behind the fixture rows.
pub fn expected_size(age: i64, height: i64, gender: &str) -> f64 {
    let code = if gender == "Male" { 1.0 } else { 0.0 };
    -3.0 + 0.02 * age as f64 + 0.06 * height as f64 + 1.2 * code
}

pub fn training_rows() -> Vec<TrainingRow> {
    let file = File::open(FIXTURE).expect("fixture csv present");
    csv::Reader::from_reader(file)
        .deserialize()
        .collect::<Result<_, _>>()
        .expect("fixture rows parse")
}

/// Fits encoder and model on the fixture the same way training tooling would.
pub fn train() -> (ShoeSizeModel, GenderEncoder) {
    let rows = training_rows();
    let encoder = GenderEncoder::from_labels(rows.iter().map(|r| r.gender.clone()));

    let mut records = Array2::zeros((rows.len(), 3));
    for (i, row) in rows.iter().enumerate() {
        let code = encoder.encode(&row.gender).expect("label from the same rows");
        records[[i, 0]] = row.age as f64;
        records[[i, 1]] = row.height as f64;
        records[[i, 2]] = code as f64;
    }
    let targets: Array1<f64> = rows.iter().map(|r| r.shoe_size).collect();

    let fitted = LinearRegression::new()
        .fit(&Dataset::new(records, targets))
        .expect("fixture regression fits");
    (ShoeSizeModel::from_fitted(fitted), encoder)
}

/// Trains on the fixture and writes both artifacts under `dir`.
pub fn write_assets(dir: &Path) -> AssetLayout {
    let layout = AssetLayout::rooted_at(dir);
    let (model, encoder) = train();
    write_artifact(&layout.model_path(), &model).expect("model written");
    write_artifact(&layout.encoder_path(), &encoder).expect("encoder written");
    layout
}
