//! Error types exposed by the review API layer.

use thiserror::Error;

use crate::review::ReviewFormError;

/// Errors surfaced while loading configuration, reading images, or talking
/// to the review API.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientError {
    /// No theater identifier was configured.
    #[error("theater identifier is required (use --theater)")]
    MissingTheaterId,

    /// A routing identifier was blank or malformed.
    #[error("invalid {kind} identifier: {value:?}")]
    InvalidIdentifier {
        /// Which identifier failed validation (`theater` or `review`).
        kind: &'static str,
        /// The rejected raw value.
        value: String,
    },

    /// The API base URL could not be parsed or extended.
    #[error("API URL is invalid: {0}")]
    InvalidUrl(String),

    /// The API rejected the supplied credentials.
    #[error("review API rejected the credentials: {message}")]
    Authentication {
        /// Server message returned with the 401/403 response.
        message: String,
    },

    /// The requested review does not exist.
    #[error("review not found: {message}")]
    NotFound {
        /// Server message returned with the 404 response.
        message: String,
    },

    /// The API returned a non-success status.
    #[error("review API error: {message}")]
    Api {
        /// Status and server message describing the failure.
        message: String,
    },

    /// Networking failed while calling the API.
    #[error("network error talking to the review API: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded or is inconsistent.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// The confirmation template failed to parse or render.
    #[error("confirmation template error: {message}")]
    Template {
        /// Message from `MiniJinja`.
        message: String,
    },

    /// A submission for the same review route is already in flight.
    #[error("a submission for {route} is already in progress")]
    DuplicateSubmission {
        /// Human-readable route description.
        route: String,
    },

    /// The review draft rejected an edit or transition.
    #[error(transparent)]
    Form(#[from] ReviewFormError),
}
