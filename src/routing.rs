//! Routing identifiers that address a theater's reviews.

use std::fmt;

use crate::api::ClientError;

/// Theater identifier wrapper to avoid stringly typed parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TheaterId(String);

impl TheaterId {
    /// Validates and wraps a theater identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidIdentifier`] when the value is blank or
    /// contains a path separator.
    pub fn new(value: &str) -> Result<Self, ClientError> {
        validate_segment("theater", value).map(Self)
    }

    /// Borrow the identifier.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for TheaterId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

/// Review identifier, present only when editing an existing review.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReviewId(String);

impl ReviewId {
    /// Validates and wraps a review identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidIdentifier`] when the value is blank or
    /// contains a path separator.
    pub fn new(value: &str) -> Result<Self, ClientError> {
        validate_segment("review", value).map(Self)
    }

    /// Borrow the identifier.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ReviewId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

/// Routing context for a submission: the theater and, in edit mode, the
/// review being replaced.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoutingIds {
    theater_id: TheaterId,
    review_id: Option<ReviewId>,
}

impl RoutingIds {
    /// Routing for a new review on `theater_id`.
    #[must_use]
    pub const fn for_create(theater_id: TheaterId) -> Self {
        Self {
            theater_id,
            review_id: None,
        }
    }

    /// Routing for an existing review.
    #[must_use]
    pub const fn for_edit(theater_id: TheaterId, review_id: ReviewId) -> Self {
        Self {
            theater_id,
            review_id: Some(review_id),
        }
    }

    /// Returns the theater identifier.
    #[must_use]
    pub const fn theater_id(&self) -> &TheaterId {
        &self.theater_id
    }

    /// Returns the review identifier when editing.
    #[must_use]
    pub const fn review_id(&self) -> Option<&ReviewId> {
        self.review_id.as_ref()
    }
}

impl fmt::Display for RoutingIds {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.review_id {
            Some(review_id) => write!(formatter, "theater {} review {review_id}", self.theater_id),
            None => write!(formatter, "theater {} (new review)", self.theater_id),
        }
    }
}

fn validate_segment(kind: &'static str, value: &str) -> Result<String, ClientError> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.contains('/') {
        return Err(ClientError::InvalidIdentifier {
            kind,
            value: value.to_owned(),
        });
    }
    Ok(trimmed.to_owned())
}
