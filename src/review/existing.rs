//! Previously stored review used to seed an edit session.

use serde::{Deserialize, Serialize};

use super::seat::SeatLocation;

/// A review as returned by the API, used to seed edit mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExistingReview {
    /// Floor label.
    pub floor: String,
    /// Section code.
    pub section: String,
    /// Row label.
    pub seat_row: String,
    /// Seat number.
    pub seat_number: String,
    /// Stored star rating.
    pub rating: u8,
    /// Stored review text.
    pub content: String,
    /// URLs of images stored with the review.
    #[serde(default)]
    pub images: Vec<String>,
}

impl ExistingReview {
    /// Returns the stored seat.
    #[must_use]
    pub fn seat(&self) -> SeatLocation {
        SeatLocation::new(
            self.floor.clone(),
            self.section.clone(),
            self.seat_row.clone(),
            self.seat_number.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::ExistingReview;
    use crate::review::SeatLocation;

    #[test]
    fn decodes_api_shape_without_images() {
        let review: ExistingReview = serde_json::from_value(serde_json::json!({
            "floor": "2",
            "section": "A",
            "seatRow": "9",
            "seatNumber": "3",
            "rating": 2,
            "content": "pillar in the way"
        }))
        .expect("review should decode");

        assert!(review.images.is_empty());
        assert_eq!(review.seat(), SeatLocation::new("2", "A", "9", "3"));
    }
}
