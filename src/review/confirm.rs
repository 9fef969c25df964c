//! Confirmation step shown before a review is shared.
//!
//! The prompt itself is supplied by the caller (a terminal prompt in the
//! CLI, a stub in tests). This module owns the data the prompt displays and
//! renders it through a `MiniJinja` template so the summary wording can be
//! configured.

use minijinja::{Environment, context};
use thiserror::Error;

use super::rating::MAX_RATING;
use super::seat::SeatLocation;
use crate::api::ClientError;

/// Summary template used when none is configured.
pub const DEFAULT_CONFIRM_TEMPLATE: &str = concat!(
    "{% if is_edit %}Updating your review{% else %}Sharing a new review{% endif %}",
    " for theater {{ theater }}\n",
    "Seat: floor {{ floor }}, section {{ section }}, row {{ seat_row }}, seat {{ seat_number }}\n",
    "Rating: {{ rating }}/{{ max_rating }}\n",
    "Review: {{ content }}\n",
    "Images: {{ new_images }} new",
    "{% if removed_images %}, {{ removed_images }} removed{% endif %}"
);

/// Snapshot of the draft shown by the confirmation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationView {
    /// Theater the review belongs to.
    pub theater: String,
    /// Seat captured by value at the time confirmation opened.
    pub seat: SeatLocation,
    /// Star rating.
    pub rating: u8,
    /// Review text.
    pub content: String,
    /// Number of images that will be uploaded.
    pub new_images: usize,
    /// Number of stored images that will be deleted.
    pub removed_images: usize,
    /// Whether an existing review is being replaced.
    pub is_edit: bool,
}

/// Gate that asks the reviewer to confirm before submission.
pub trait ConfirmationPrompt {
    /// Shows `view` and returns whether the reviewer confirmed.
    ///
    /// # Errors
    ///
    /// Returns an error when the prompt cannot be shown or read.
    fn confirm(&self, view: &ConfirmationView) -> Result<bool, ClientError>;
}

/// Errors raised while rendering the confirmation summary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfirmTemplateError {
    /// The template source failed to parse.
    #[error("invalid confirmation template syntax: {message}")]
    InvalidSyntax {
        /// Human-readable parser message from `MiniJinja`.
        message: String,
    },
    /// Rendering failed after successful parsing.
    #[error("confirmation template rendering failed: {message}")]
    RenderFailed {
        /// Human-readable rendering failure from `MiniJinja`.
        message: String,
    },
}

impl From<ConfirmTemplateError> for ClientError {
    fn from(error: ConfirmTemplateError) -> Self {
        Self::Template {
            message: error.to_string(),
        }
    }
}

/// Renders the confirmation summary.
///
/// Templates can use `theater`, `floor`, `section`, `seat_row`,
/// `seat_number`, `rating`, `max_rating`, `content`, `new_images`,
/// `removed_images` and `is_edit`.
///
/// # Errors
///
/// Returns [`ConfirmTemplateError::InvalidSyntax`] when `template_source`
/// fails to parse, or [`ConfirmTemplateError::RenderFailed`] when rendering
/// fails.
pub fn render_confirmation(
    template_source: &str,
    view: &ConfirmationView,
) -> Result<String, ConfirmTemplateError> {
    let mut environment = Environment::new();
    environment.set_auto_escape_callback(|_| minijinja::AutoEscape::None);

    environment
        .add_template("confirm", template_source)
        .map_err(|error| ConfirmTemplateError::InvalidSyntax {
            message: error.to_string(),
        })?;

    let template =
        environment
            .get_template("confirm")
            .map_err(|error| ConfirmTemplateError::RenderFailed {
                message: error.to_string(),
            })?;

    template
        .render(context! {
            theater => view.theater.as_str(),
            floor => view.seat.floor.as_str(),
            section => view.seat.section.as_str(),
            seat_row => view.seat.seat_row.as_str(),
            seat_number => view.seat.seat_number.as_str(),
            rating => view.rating,
            max_rating => MAX_RATING,
            content => view.content.as_str(),
            new_images => view.new_images,
            removed_images => view.removed_images,
            is_edit => view.is_edit,
        })
        .map_err(|error| ConfirmTemplateError::RenderFailed {
            message: error.to_string(),
        })
}
