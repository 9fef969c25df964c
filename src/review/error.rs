//! Errors raised while editing or transitioning a review draft.

use thiserror::Error;

/// Edits and transitions the review draft refuses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReviewFormError {
    /// The rating is larger than the highest star value.
    #[error("rating {value} is outside the supported range 0..={max}")]
    RatingOutOfRange {
        /// Rejected rating value.
        value: u8,
        /// Highest accepted rating.
        max: u8,
    },

    /// The review text would exceed the character limit.
    #[error("review content length {attempted} exceeds limit {max_length}")]
    ContentTooLong {
        /// Character count of the rejected text.
        attempted: usize,
        /// Configured maximum character count.
        max_length: usize,
    },

    /// The seat of an existing review cannot be changed.
    #[error("seat location cannot be changed once a review exists")]
    SeatLocked,

    /// Confirmation was requested while content or rating is missing.
    #[error("review needs content and a rating before it can be shared")]
    NotSubmittable,

    /// The draft is waiting on the confirmation step and cannot be edited.
    #[error("review is awaiting confirmation; cancel it before editing")]
    ConfirmationOpen,

    /// Submission was attempted without an open confirmation step.
    #[error("review is not awaiting confirmation")]
    NotAwaitingConfirmation,

    /// The draft was already handed off for submission.
    #[error("review has already been submitted")]
    AlreadySubmitted,
}
