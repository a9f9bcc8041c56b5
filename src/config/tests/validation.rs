//! Tests for configuration consistency validation.

use rstest::rstest;

use crate::ReviewPromptConfig;
use crate::error::ReviewError;

#[rstest]
fn default_configuration_is_valid() {
    assert_eq!(ReviewPromptConfig::default().validate(), Ok(()));
}

#[rstest]
fn rejects_zero_review_number() {
    let config = ReviewPromptConfig {
        number: Some(0),
        ..Default::default()
    };

    let result = config.validate();

    assert!(
        matches!(result, Err(ReviewError::Configuration { .. })),
        "should reject review number zero, got {result:?}"
    );
}

#[rstest]
#[case::relative("api.github.com")]
#[case::garbage("not a url")]
fn rejects_unparseable_api_base(#[case] api_base: &str) {
    let config = ReviewPromptConfig {
        github_api_base: Some(api_base.to_owned()),
        ..Default::default()
    };

    let result = config.validate();

    assert!(
        matches!(result, Err(ReviewError::Configuration { .. })),
        "should reject api base {api_base}, got {result:?}"
    );
}
