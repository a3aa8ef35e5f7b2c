//! Regression model capability and the linfa-backed shoe size model.

use linfa_linear::FittedLinearRegression;
use ndarray::{Array1, ArrayView1, arr2};
use serde::{Deserialize, Serialize};

use crate::error::InferenceFault;

/// Width of the feature vector the model is trained on.
pub const FEATURE_COUNT: usize = 3;

/// Model input in training order: `[age, height, gender_code]`.
///
/// Reordering the fields does not fail, it silently produces wrong sizes, so
/// the only way to build one is the positional constructor below.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    /// Positional constructor: age in years, height in cm, encoded gender.
    pub fn new(age: i64, height: i64, gender_code: usize) -> Self {
        Self([age as f64, height as f64, gender_code as f64])
    }

    /// Raw values in training order.
    pub fn as_array(&self) -> &[f64; FEATURE_COUNT] {
        &self.0
    }
}

/// A trained numeric function over a [`FeatureVector`].
pub trait Regressor: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> Result<f64, InferenceFault>;
}

/// Ordinary least squares over `[age, height, gender_code]`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ShoeSizeModel {
    regression: FittedLinearRegression<f64>,
}

impl ShoeSizeModel {
    /// Wraps a regression fitted on `[age, height, gender_code]` rows.
    pub fn from_fitted(regression: FittedLinearRegression<f64>) -> Self {
        Self { regression }
    }

    /// Constant term of the fitted regression.
    pub fn intercept(&self) -> f64 {
        self.regression.intercept()
    }

    /// Coefficients in feature order.
    pub fn coefficients(&self) -> ArrayView1<'_, f64> {
        self.regression.params().view()
    }
}

impl Regressor for ShoeSizeModel {
    fn predict(&self, features: &FeatureVector) -> Result<f64, InferenceFault> {
        let expected = self.regression.params().len();
        if expected != FEATURE_COUNT {
            return Err(InferenceFault::ShapeMismatch {
                expected,
                actual: FEATURE_COUNT,
            });
        }

        let row = arr2(&[*features.as_array()]);
        let predicted: Array1<f64> = linfa::traits::Predict::predict(&self.regression, &row);
        let value = predicted[0];
        if !value.is_finite() {
            return Err(InferenceFault::NonFinite(value));
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;
    use linfa::Dataset;
    use linfa::traits::Fit;
    use linfa_linear::LinearRegression;
    use ndarray::array;

    #[test]
    fn feature_vector_keeps_training_order() {
        let features = FeatureVector::new(18, 170, 1);
        assert_eq!(features.as_array(), &[18.0, 170.0, 1.0]);
    }

    #[test]
    fn recovers_the_generating_function() {
        let model = test_support::fitted_model();
        let predicted = model.predict(&FeatureVector::new(18, 170, 1)).unwrap();
        assert!(
            (predicted - test_support::expected_size(18, 170, 1)).abs() < 1e-6,
            "predicted {predicted}"
        );
        let coefficients = model.coefficients();
        assert_eq!(coefficients.len(), FEATURE_COUNT);
        for (got, want) in coefficients.iter().zip([0.02, 0.06, 1.2]) {
            assert!((got - want).abs() < 1e-6, "coefficient {got} vs {want}");
        }
        assert!((model.intercept() + 3.0).abs() < 1e-6);
    }

    #[test]
    fn narrower_model_is_a_shape_mismatch() {
        let records = array![[20.0, 160.0], [30.0, 175.0], [45.0, 182.0], [60.0, 150.0]];
        let targets: Array1<f64> = records
            .rows()
            .into_iter()
            .map(|row| 0.1 * row[0] + 0.05 * row[1])
            .collect();
        let fitted = LinearRegression::new()
            .fit(&Dataset::new(records, targets))
            .unwrap();
        let model = ShoeSizeModel::from_fitted(fitted);

        let err = model.predict(&FeatureVector::new(18, 170, 0)).unwrap_err();
        assert!(matches!(
            err,
            InferenceFault::ShapeMismatch {
                expected: 2,
                actual: 3
            }
        ));
    }
}
