//! The package root ships no `assets/`, so the process-wide entry points
//! must report the service as unavailable.

use shoesize::{ConfigurationError, ShoeSizeError, gender_options, predict_shoe_size};

fn assert_missing_assets(err: &ShoeSizeError) {
    assert!(
        matches!(
            err,
            ShoeSizeError::Configuration(ConfigurationError::MissingAssetDirectory(_))
        ),
        "got {err:?}"
    );
    assert!(!err.is_recoverable());
}

#[test]
fn prediction_without_assets_is_a_configuration_error() {
    let err = predict_shoe_size(18, 170, "Male").unwrap_err();
    assert_missing_assets(&err);
    assert!(err.user_message().starts_with("Service unavailable"));
}

#[test]
fn gender_options_without_assets_is_a_configuration_error() {
    let err = gender_options().unwrap_err();
    assert_missing_assets(&err);
}
