//! Review form controller shared by the create and edit flows.
//!
//! A [`ReviewForm`] owns the seat, rating, content and image list of one
//! editing session. It derives whether the review can be shared, walks the
//! `Editing → ConfirmationPending → Submitted` phases, and hands the final
//! payload to a [`MutationTrigger`] without waiting on the outcome.

use std::fmt;

use super::confirm::ConfirmationView;
use super::content::ReviewContent;
use super::error::ReviewFormError;
use super::existing::ExistingReview;
use super::image_file::ImageFile;
use super::images::{ImageId, ImageList};
use super::payload::SubmissionPayload;
use super::rating::Rating;
use super::seat::SeatLocation;
use crate::api::MutationTrigger;
use crate::routing::{ReviewId, RoutingIds, TheaterId};

/// Submit label shown when the review can be shared.
pub const SUBMIT_LABEL_READY: &str = "Share review";
/// Submit label shown while required fields are missing.
pub const SUBMIT_LABEL_INCOMPLETE: &str = "Fill in the required fields";

/// Whether the session writes a new review or replaces an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    /// A new review; the seat can be chosen freely.
    Create,
    /// An existing review; the seat is fixed.
    Edit {
        /// Review being replaced.
        review_id: ReviewId,
    },
}

/// Lifecycle of one editing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// Fields can be changed.
    Editing,
    /// The confirmation step is open.
    ConfirmationPending,
    /// The payload was handed to the mutation trigger.
    Submitted,
}

/// Which part of the form changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormChange {
    /// The seat was replaced.
    Seat,
    /// The rating changed.
    Rating,
    /// The review text changed.
    Content,
    /// Images were added or removed.
    Images,
    /// The form moved to a new phase.
    Phase(FormPhase),
}

/// Receives a callback after every accepted change.
pub trait FormObserver {
    /// Called after `change` has been applied to `form`.
    fn form_changed(&self, change: FormChange, form: &ReviewForm);
}

/// Observer that logs every change at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingFormObserver;

impl FormObserver for TracingFormObserver {
    fn form_changed(&self, change: FormChange, form: &ReviewForm) {
        tracing::debug!(
            ?change,
            submittable = form.is_submittable(),
            images = form.images().len(),
            "review form changed"
        );
    }
}

/// State of one review editing session.
pub struct ReviewForm {
    theater_id: TheaterId,
    mode: FormMode,
    seat: SeatLocation,
    rating: Rating,
    content: ReviewContent,
    images: ImageList,
    phase: FormPhase,
    observers: Vec<Box<dyn FormObserver>>,
}

impl ReviewForm {
    /// Starts a new review with the default seat, no rating, no text and no
    /// images.
    #[must_use]
    pub fn create(theater_id: TheaterId) -> Self {
        Self {
            theater_id,
            mode: FormMode::Create,
            seat: SeatLocation::default(),
            rating: Rating::UNSET,
            content: ReviewContent::default(),
            images: ImageList::new(),
            phase: FormPhase::Editing,
            observers: Vec::new(),
        }
    }

    /// Starts editing a stored review, seeded with its values and images.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewFormError::RatingOutOfRange`] or
    /// [`ReviewFormError::ContentTooLong`] when the stored review violates
    /// the input limits.
    pub fn edit(
        theater_id: TheaterId,
        review_id: ReviewId,
        existing: &ExistingReview,
    ) -> Result<Self, ReviewFormError> {
        Ok(Self {
            theater_id,
            mode: FormMode::Edit { review_id },
            seat: existing.seat(),
            rating: Rating::new(existing.rating)?,
            content: ReviewContent::new(&existing.content)?,
            images: ImageList::with_existing(existing.images.iter().cloned()),
            phase: FormPhase::Editing,
            observers: Vec::new(),
        })
    }

    /// Registers an observer notified after every accepted change.
    pub fn subscribe(&mut self, observer: Box<dyn FormObserver>) {
        self.observers.push(observer);
    }

    /// Returns the session mode.
    #[must_use]
    pub const fn mode(&self) -> &FormMode {
        &self.mode
    }

    /// Returns the routing identifiers for submission.
    #[must_use]
    pub fn routing_ids(&self) -> RoutingIds {
        match &self.mode {
            FormMode::Create => RoutingIds::for_create(self.theater_id.clone()),
            FormMode::Edit { review_id } => {
                RoutingIds::for_edit(self.theater_id.clone(), review_id.clone())
            }
        }
    }

    /// Returns the current seat.
    #[must_use]
    pub const fn seat(&self) -> &SeatLocation {
        &self.seat
    }

    /// Returns the current rating.
    #[must_use]
    pub const fn rating(&self) -> Rating {
        self.rating
    }

    /// Returns the current review text.
    #[must_use]
    pub const fn content(&self) -> &ReviewContent {
        &self.content
    }

    /// Returns the attached images.
    #[must_use]
    pub const fn images(&self) -> &ImageList {
        &self.images
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Returns true when the seat is shown read-only.
    #[must_use]
    pub const fn is_seat_locked(&self) -> bool {
        matches!(self.mode, FormMode::Edit { .. })
    }

    /// Returns true when the review has text and a rating.
    #[must_use]
    pub const fn is_submittable(&self) -> bool {
        !self.content.is_empty() && self.rating.is_set()
    }

    /// Returns the label for the submit control.
    #[must_use]
    pub const fn submit_label(&self) -> &'static str {
        if self.is_submittable() {
            SUBMIT_LABEL_READY
        } else {
            SUBMIT_LABEL_INCOMPLETE
        }
    }

    /// Replaces the seat.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewFormError::SeatLocked`] in edit mode, or a phase error
    /// when the form is no longer editable.
    pub fn set_seat(&mut self, seat: SeatLocation) -> Result<(), ReviewFormError> {
        self.ensure_editable()?;
        if self.is_seat_locked() {
            return Err(ReviewFormError::SeatLocked);
        }
        self.seat = seat;
        self.notify(FormChange::Seat);
        Ok(())
    }

    /// Sets the rating; `0` clears it.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewFormError::RatingOutOfRange`] for values above the
    /// maximum, or a phase error when the form is no longer editable.
    pub fn set_rating(&mut self, value: u8) -> Result<(), ReviewFormError> {
        self.ensure_editable()?;
        self.rating = Rating::new(value)?;
        self.notify(FormChange::Rating);
        Ok(())
    }

    /// Replaces the review text.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewFormError::ContentTooLong`] when `text` exceeds the
    /// limit, or a phase error when the form is no longer editable.
    pub fn set_content(&mut self, text: &str) -> Result<(), ReviewFormError> {
        self.ensure_editable()?;
        self.content.replace(text)?;
        self.notify(FormChange::Content);
        Ok(())
    }

    /// Attaches new files after the current images.
    ///
    /// # Errors
    ///
    /// Returns a phase error when the form is no longer editable.
    pub fn add_files<I>(&mut self, files: I) -> Result<Vec<ImageId>, ReviewFormError>
    where
        I: IntoIterator<Item = ImageFile>,
    {
        self.ensure_editable()?;
        let added = self.images.add_files(files);
        if !added.is_empty() {
            self.notify(FormChange::Images);
        }
        Ok(added)
    }

    /// Removes an image; unknown identities are ignored.
    ///
    /// Returns whether an image was removed.
    ///
    /// # Errors
    ///
    /// Returns a phase error when the form is no longer editable.
    pub fn remove_image(&mut self, id: ImageId) -> Result<bool, ReviewFormError> {
        self.ensure_editable()?;
        let removed = self.images.remove(id);
        if removed {
            self.notify(FormChange::Images);
        }
        Ok(removed)
    }

    /// Builds the payload from the current state.
    #[must_use]
    pub fn build_payload(&self) -> SubmissionPayload {
        SubmissionPayload::from_draft(
            &self.seat,
            self.rating,
            &self.content,
            self.images.snapshot(),
        )
    }

    /// Returns what the confirmation step displays.
    #[must_use]
    pub fn confirmation_view(&self) -> ConfirmationView {
        let snapshot = self.images.snapshot();
        ConfirmationView {
            theater: self.theater_id.as_str().to_owned(),
            seat: self.seat.clone(),
            rating: self.rating.get(),
            content: self.content.as_str().to_owned(),
            new_images: snapshot.local_files().count(),
            removed_images: snapshot.deleted_references().len(),
            is_edit: self.is_seat_locked(),
        }
    }

    /// Opens the confirmation step.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewFormError::NotSubmittable`] when content or rating is
    /// missing, or a phase error when the form is not editing.
    pub fn open_confirmation(&mut self) -> Result<ConfirmationView, ReviewFormError> {
        self.ensure_editable()?;
        if !self.is_submittable() {
            return Err(ReviewFormError::NotSubmittable);
        }
        self.set_phase(FormPhase::ConfirmationPending);
        Ok(self.confirmation_view())
    }

    /// Closes the confirmation step and returns to editing.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewFormError::NotAwaitingConfirmation`] when the step is
    /// not open, or [`ReviewFormError::AlreadySubmitted`] after submission.
    pub fn cancel_confirmation(&mut self) -> Result<(), ReviewFormError> {
        self.ensure_confirmation_open()?;
        self.set_phase(FormPhase::Editing);
        Ok(())
    }

    /// Hands the payload to `trigger` and marks the form submitted.
    ///
    /// The trigger owns the network call; its outcome is not observed here.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewFormError::NotAwaitingConfirmation`] when the
    /// confirmation step is not open, or [`ReviewFormError::AlreadySubmitted`]
    /// after submission.
    pub fn confirm<T>(&mut self, trigger: &T) -> Result<(), ReviewFormError>
    where
        T: MutationTrigger + ?Sized,
    {
        self.ensure_confirmation_open()?;

        let payload = self.build_payload();
        let routing = self.routing_ids();
        tracing::info!(
            %routing,
            images = payload.images().len(),
            deleted = payload.delete_images().len(),
            "submitting review"
        );
        trigger.submit(routing, payload);

        self.set_phase(FormPhase::Submitted);
        Ok(())
    }

    const fn ensure_editable(&self) -> Result<(), ReviewFormError> {
        match self.phase {
            FormPhase::Editing => Ok(()),
            FormPhase::ConfirmationPending => Err(ReviewFormError::ConfirmationOpen),
            FormPhase::Submitted => Err(ReviewFormError::AlreadySubmitted),
        }
    }

    const fn ensure_confirmation_open(&self) -> Result<(), ReviewFormError> {
        match self.phase {
            FormPhase::ConfirmationPending => Ok(()),
            FormPhase::Editing => Err(ReviewFormError::NotAwaitingConfirmation),
            FormPhase::Submitted => Err(ReviewFormError::AlreadySubmitted),
        }
    }

    fn set_phase(&mut self, phase: FormPhase) {
        self.phase = phase;
        self.notify(FormChange::Phase(phase));
    }

    fn notify(&self, change: FormChange) {
        for observer in &self.observers {
            observer.form_changed(change, self);
        }
    }
}

impl fmt::Debug for ReviewForm {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ReviewForm")
            .field("theater_id", &self.theater_id)
            .field("mode", &self.mode)
            .field("seat", &self.seat)
            .field("rating", &self.rating)
            .field("content", &self.content)
            .field("images", &self.images)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "form_tests.rs"]
mod tests;
