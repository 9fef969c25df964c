//! Submission payload assembled from a review draft.

use serde::{Deserialize, Serialize};

use super::content::ReviewContent;
use super::image_file::ImageFile;
use super::images::ImageSnapshot;
use super::rating::Rating;
use super::seat::SeatLocation;

/// Multipart field carrying the JSON-encoded [`ReviewData`].
pub const DATA_PART: &str = "data";
/// Multipart field name repeated once per uploaded image.
pub const IMAGE_PART: &str = "image";
/// Multipart field name repeated once per removed pre-existing image.
pub const DELETE_IMAGES_PART: &str = "deleteImages";

/// Scalar review fields sent as the `data` part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewData {
    /// Floor label.
    pub floor: String,
    /// Section code.
    pub section: String,
    /// Row label.
    pub seat_row: String,
    /// Seat number.
    pub seat_number: String,
    /// Star rating.
    pub rating: u8,
    /// Review text.
    pub content: String,
}

impl ReviewData {
    /// Captures the current seat, rating and content by value.
    #[must_use]
    pub fn new(seat: &SeatLocation, rating: Rating, content: &ReviewContent) -> Self {
        Self {
            floor: seat.floor.clone(),
            section: seat.section.clone(),
            seat_row: seat.seat_row.clone(),
            seat_number: seat.seat_number.clone(),
            rating: rating.get(),
            content: content.as_str().to_owned(),
        }
    }

    /// Serialises the fields for the `data` part.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if serialisation fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Everything handed to the mutation trigger on submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionPayload {
    data: ReviewData,
    images: Vec<ImageFile>,
    delete_images: Vec<String>,
}

impl SubmissionPayload {
    /// Builds a payload from explicit parts.
    #[must_use]
    pub const fn new(data: ReviewData, images: Vec<ImageFile>, delete_images: Vec<String>) -> Self {
        Self {
            data,
            images,
            delete_images,
        }
    }

    /// Builds a payload from draft state. Only newly added images are
    /// attached; pre-existing images that remain are not re-uploaded.
    #[must_use]
    pub fn from_draft(
        seat: &SeatLocation,
        rating: Rating,
        content: &ReviewContent,
        images: ImageSnapshot<'_>,
    ) -> Self {
        Self {
            data: ReviewData::new(seat, rating, content),
            images: images.local_files().cloned().collect(),
            delete_images: images.deleted_references().to_vec(),
        }
    }

    /// Scalar fields for the `data` part.
    #[must_use]
    pub const fn data(&self) -> &ReviewData {
        &self.data
    }

    /// Files for the `image` parts.
    #[must_use]
    pub fn images(&self) -> &[ImageFile] {
        &self.images
    }

    /// References for the `deleteImages` parts.
    #[must_use]
    pub fn delete_images(&self) -> &[String] {
        &self.delete_images
    }

    /// Splits the payload into its parts.
    #[must_use]
    pub fn into_parts(self) -> (ReviewData, Vec<ImageFile>, Vec<String>) {
        (self.data, self.images, self.delete_images)
    }
}
