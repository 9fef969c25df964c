//! Star rating for a seat.

use serde::{Deserialize, Serialize};

use super::error::ReviewFormError;

/// Highest star value a reviewer can give.
pub const MAX_RATING: u8 = 5;

/// Star rating; zero means the reviewer has not rated yet.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// The "not yet rated" value.
    pub const UNSET: Self = Self(0);

    /// Validates a rating in `0..=MAX_RATING`.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewFormError::RatingOutOfRange`] for values above
    /// [`MAX_RATING`].
    pub const fn new(value: u8) -> Result<Self, ReviewFormError> {
        if value > MAX_RATING {
            return Err(ReviewFormError::RatingOutOfRange {
                value,
                max: MAX_RATING,
            });
        }
        Ok(Self(value))
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns true once the reviewer picked at least one star.
    #[must_use]
    pub const fn is_set(self) -> bool {
        self.0 > 0
    }
}

impl TryFrom<u8> for Rating {
    type Error = ReviewFormError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}
