//! Tests for operation mode and routing identifier resolution.

use rstest::rstest;

use crate::SeatviewConfig;
use crate::api::ClientError;
use crate::config::OperationMode;

fn config_with(theater: Option<&str>, review: Option<&str>) -> SeatviewConfig {
    SeatviewConfig {
        theater: theater.map(ToOwned::to_owned),
        review: review.map(ToOwned::to_owned),
        ..Default::default()
    }
}

#[rstest]
#[case(None, OperationMode::CreateReview)]
#[case(Some("42"), OperationMode::EditReview)]
fn review_flag_selects_mode(#[case] review: Option<&str>, #[case] expected: OperationMode) {
    assert_eq!(config_with(Some("7"), review).operation_mode(), expected);
}

#[rstest]
fn routing_ids_for_create_have_no_review() {
    let routing = config_with(Some("7"), None)
        .routing_ids()
        .expect("routing should resolve");

    assert_eq!(routing.theater_id().as_str(), "7");
    assert!(routing.review_id().is_none());
}

#[rstest]
fn routing_ids_for_edit_carry_review() {
    let routing = config_with(Some("7"), Some("42"))
        .routing_ids()
        .expect("routing should resolve");

    assert_eq!(routing.review_id().map(|id| id.as_str()), Some("42"));
}

#[rstest]
fn missing_theater_is_reported() {
    let result = config_with(None, Some("42")).routing_ids();

    assert_eq!(result, Err(ClientError::MissingTheaterId));
}

#[rstest]
#[case(Some("  "), None)]
#[case(Some("7"), Some("a/b"))]
fn malformed_identifiers_are_rejected(#[case] theater: Option<&str>, #[case] review: Option<&str>) {
    let result = config_with(theater, review).routing_ids();

    assert!(
        matches!(result, Err(ClientError::InvalidIdentifier { .. })),
        "got {result:?}"
    );
}
