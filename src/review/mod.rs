//! Review draft state and the form controller.
//!
//! The pieces here are plain data plus one controller, [`ReviewForm`], that
//! ties them together. Nothing in this module performs I/O apart from
//! [`ImageFile::read`]; submission is delegated to a
//! [`crate::api::MutationTrigger`].

pub mod confirm;
mod content;
mod error;
mod existing;
pub mod form;
mod image_file;
mod images;
mod payload;
mod rating;
mod seat;

pub use confirm::{
    ConfirmTemplateError, ConfirmationPrompt, ConfirmationView, DEFAULT_CONFIRM_TEMPLATE,
    render_confirmation,
};
pub use content::{MAX_CONTENT_CHARS, ReviewContent};
pub use error::ReviewFormError;
pub use existing::ExistingReview;
pub use form::{
    FormChange, FormMode, FormObserver, FormPhase, ReviewForm, SUBMIT_LABEL_INCOMPLETE,
    SUBMIT_LABEL_READY, TracingFormObserver,
};
pub use image_file::ImageFile;
pub use images::{ImageId, ImageList, ImageSnapshot, ImageSource, StagedImage};
pub use payload::{DATA_PART, DELETE_IMAGES_PART, IMAGE_PART, ReviewData, SubmissionPayload};
pub use rating::{MAX_RATING, Rating};
pub use seat::{SeatLocation, SeatOverride};
