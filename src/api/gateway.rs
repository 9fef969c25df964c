//! Gateway trait for the review API.

use async_trait::async_trait;

use crate::api::ClientError;
use crate::review::{ExistingReview, SubmissionPayload};
use crate::routing::{ReviewId, TheaterId};

/// What the API reported after accepting a review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewReceipt {
    /// HTTP status code of the response.
    pub status: u16,
    /// Review identifier echoed by the server, when present.
    pub review_id: Option<String>,
}

/// Gateway that can load and store theater reviews.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewGateway: Send + Sync {
    /// Fetch a stored review to seed an edit session.
    async fn fetch_review(
        &self,
        theater_id: &TheaterId,
        review_id: &ReviewId,
    ) -> Result<ExistingReview, ClientError>;

    /// Store a new review.
    async fn create_review(
        &self,
        theater_id: &TheaterId,
        payload: SubmissionPayload,
    ) -> Result<ReviewReceipt, ClientError>;

    /// Replace an existing review.
    async fn update_review(
        &self,
        theater_id: &TheaterId,
        review_id: &ReviewId,
        payload: SubmissionPayload,
    ) -> Result<ReviewReceipt, ClientError>;
}
