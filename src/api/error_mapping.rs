//! Error mapping helpers for the reqwest review gateway.

use http::StatusCode;

use crate::api::ClientError;

/// Checks if an API status indicates an authentication failure.
pub(super) const fn is_auth_failure(status: StatusCode) -> bool {
    matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
}

pub(super) fn map_http_error(
    operation: &str,
    status: StatusCode,
    maybe_message: Option<String>,
) -> ClientError {
    let message = maybe_message.unwrap_or_else(|| "unknown error".to_owned());
    if is_auth_failure(status) {
        ClientError::Authentication {
            message: format!("{operation} failed: API returned {status} {message}"),
        }
    } else if status == StatusCode::NOT_FOUND {
        ClientError::NotFound {
            message: format!("{operation} failed: {message}"),
        }
    } else {
        ClientError::Api {
            message: format!("{operation} failed with status {status}: {message}"),
        }
    }
}

pub(super) fn map_transport_error(operation: &str, error: &reqwest::Error) -> ClientError {
    if error.is_builder() {
        return ClientError::InvalidUrl(format!("{operation}: {error}"));
    }
    ClientError::Network {
        message: format!("{operation} failed: {error}"),
    }
}

/// Pulls a human-readable message out of a JSON error body.
pub(super) fn extract_api_message(body: &str) -> Option<String> {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return None;
    };
    ["message", "error"]
        .iter()
        .find_map(|key| value.get(key).and_then(serde_json::Value::as_str))
        .map(ToOwned::to_owned)
}

/// Pulls the review identifier out of a success body, if the server echoes
/// one as `id` or `reviewId`.
pub(super) fn extract_review_id(body: &str) -> Option<String> {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return None;
    };
    ["id", "reviewId"].iter().find_map(|key| match value.get(key) {
        Some(serde_json::Value::String(id)) => Some(id.clone()),
        Some(serde_json::Value::Number(id)) => Some(id.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use http::StatusCode;
    use rstest::rstest;

    use super::{extract_api_message, extract_review_id, map_http_error};
    use crate::api::ClientError;

    #[rstest]
    #[case(StatusCode::UNAUTHORIZED)]
    #[case(StatusCode::FORBIDDEN)]
    fn auth_statuses_map_to_authentication(#[case] status: StatusCode) {
        let error = map_http_error("create review", status, Some("denied".to_owned()));
        assert!(
            matches!(error, ClientError::Authentication { .. }),
            "got {error:?}"
        );
    }

    #[test]
    fn not_found_maps_to_not_found() {
        let error = map_http_error("fetch review", StatusCode::NOT_FOUND, None);
        assert_eq!(
            error,
            ClientError::NotFound {
                message: "fetch review failed: unknown error".to_owned(),
            }
        );
    }

    #[test]
    fn other_statuses_map_to_api_error() {
        let error = map_http_error(
            "update review",
            StatusCode::BAD_REQUEST,
            Some("content is required".to_owned()),
        );
        assert_eq!(
            error,
            ClientError::Api {
                message: "update review failed with status 400 Bad Request: content is required"
                    .to_owned(),
            }
        );
    }

    #[rstest]
    #[case(r#"{"message":"bad seat"}"#, Some("bad seat"))]
    #[case(r#"{"error":"boom"}"#, Some("boom"))]
    #[case("<html>", None)]
    fn extracts_api_messages(#[case] body: &str, #[case] expected: Option<&str>) {
        assert_eq!(extract_api_message(body).as_deref(), expected);
    }

    #[rstest]
    #[case(r#"{"id":17}"#, Some("17"))]
    #[case(r#"{"reviewId":"abc"}"#, Some("abc"))]
    #[case("", None)]
    fn extracts_review_ids(#[case] body: &str, #[case] expected: Option<&str>) {
        assert_eq!(extract_review_id(body).as_deref(), expected);
    }
}
