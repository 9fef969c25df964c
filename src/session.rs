//! Builds a review form from configuration.
//!
//! Edit runs fetch the stored review first so the form is seeded with its
//! seat, rating, text and images. The configured field values are then
//! applied through the form's own setters, so every input limit and the
//! edit-mode seat lock are enforced exactly as they would be interactively.

use crate::api::{ClientError, MutationTrigger, ReviewGateway};
use crate::config::SeatviewConfig;
use crate::review::{ConfirmationPrompt, ImageFile, ReviewForm, TracingFormObserver};

/// Prepares a form for the configured theater and review.
///
/// # Errors
///
/// Returns routing errors from [`SeatviewConfig::routing_ids`], gateway
/// errors while fetching a stored review, [`ClientError::Io`] when an image
/// cannot be read, [`ClientError::Configuration`] when a removal names an
/// image the review does not have, and [`ClientError::Form`] when a value
/// is rejected by the form.
pub async fn prepare_form<G>(config: &SeatviewConfig, gateway: &G) -> Result<ReviewForm, ClientError>
where
    G: ReviewGateway + ?Sized,
{
    let routing = config.routing_ids()?;
    let theater_id = routing.theater_id().clone();

    let mut form = match routing.review_id() {
        Some(review_id) => {
            let existing = gateway.fetch_review(&theater_id, review_id).await?;
            tracing::debug!(%routing, images = existing.images.len(), "loaded stored review");
            ReviewForm::edit(theater_id, review_id.clone(), &existing)?
        }
        None => ReviewForm::create(theater_id),
    };
    form.subscribe(Box::new(TracingFormObserver));

    apply_fields(config, &mut form)?;
    apply_removals(config, &mut form)?;

    let files = config
        .image_paths()
        .iter()
        .map(|path| ImageFile::read(path))
        .collect::<Result<Vec<_>, _>>()?;
    form.add_files(files)?;

    Ok(form)
}

/// Opens the confirmation step, asks `prompt`, and either hands the payload
/// to `trigger` or returns the form to editing.
///
/// Returns whether the review was submitted.
///
/// # Errors
///
/// Returns [`ClientError::Form`] when the form is not submittable, or the
/// prompt's own error. A failing prompt leaves the form in editing.
pub fn confirm_and_submit<P, T>(
    form: &mut ReviewForm,
    prompt: &P,
    trigger: &T,
) -> Result<bool, ClientError>
where
    P: ConfirmationPrompt + ?Sized,
    T: MutationTrigger + ?Sized,
{
    let view = form.open_confirmation()?;
    let confirmed = match prompt.confirm(&view) {
        Ok(confirmed) => confirmed,
        Err(error) => {
            form.cancel_confirmation()?;
            return Err(error);
        }
    };

    if confirmed {
        form.confirm(trigger)?;
    } else {
        tracing::debug!("review confirmation declined");
        form.cancel_confirmation()?;
    }
    Ok(confirmed)
}

fn apply_fields(config: &SeatviewConfig, form: &mut ReviewForm) -> Result<(), ClientError> {
    let overrides = config.seat_override();
    if !overrides.is_empty() {
        let seat = form.seat().with_overrides(&overrides);
        form.set_seat(seat)?;
    }
    if let Some(rating) = config.rating {
        form.set_rating(rating)?;
    }
    if let Some(content) = config.content.as_deref() {
        form.set_content(content)?;
    }
    Ok(())
}

fn apply_removals(config: &SeatviewConfig, form: &mut ReviewForm) -> Result<(), ClientError> {
    for reference in config.removed_references() {
        let id = form
            .images()
            .find_by_reference(&reference)
            .ok_or_else(|| ClientError::Configuration {
                message: format!("review has no stored image {reference:?}"),
            })?;
        form.remove_image(id)?;
    }
    Ok(())
}
