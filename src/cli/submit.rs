//! Create or edit a review and wait for the submission to settle.

use std::sync::Arc;

use seatview::api::{GatewayMutationTrigger, HttpReviewGateway, MutationTrigger, ReviewGateway};
use seatview::notify::{Notification, NotificationSink, StderrNotificationSink};
use seatview::review::{ConfirmationPrompt, DEFAULT_CONFIRM_TEMPLATE, ReviewForm};
use seatview::telemetry::StderrJsonlTelemetrySink;
use seatview::{ClientError, SeatviewConfig, session};
use tokio::runtime::Handle;

use super::output::write_outcomes;
use super::prompt::TerminalPrompt;

/// Prepares the form from `config`, asks for confirmation, and submits.
///
/// # Errors
///
/// Returns the first preparation or prompt error, or the first failed
/// submission once every request has settled.
pub async fn run(config: &SeatviewConfig) -> Result<(), ClientError> {
    let gateway: Arc<dyn ReviewGateway> =
        Arc::new(HttpReviewGateway::new(&config.gateway_config())?);
    let notifications: Arc<dyn NotificationSink> = Arc::new(StderrNotificationSink);

    let mut form = session::prepare_form(config, gateway.as_ref()).await?;

    let template = config
        .confirm_template
        .as_deref()
        .unwrap_or(DEFAULT_CONFIRM_TEMPLATE);
    let prompt = TerminalPrompt::new(template, config.yes);
    let trigger =
        GatewayMutationTrigger::new(Handle::current(), gateway, Arc::clone(&notifications))
            .with_telemetry(Arc::new(StderrJsonlTelemetrySink));

    if !confirm_off_runtime(&mut form, &prompt, &trigger)? {
        notifications.notify(Notification::info("Review not shared"));
        return Ok(());
    }

    let outcomes = trigger.settle().await;
    write_outcomes(&outcomes)?;
    outcomes
        .into_iter()
        .find_map(|outcome| outcome.result.err())
        .map_or(Ok(()), Err)
}

/// Runs the blocking confirmation step without stalling the runtime worker
/// that called it. Requires the multi-threaded runtime.
fn confirm_off_runtime<P, T>(
    form: &mut ReviewForm,
    prompt: &P,
    trigger: &T,
) -> Result<bool, ClientError>
where
    P: ConfirmationPrompt + ?Sized,
    T: MutationTrigger + ?Sized,
{
    tokio::task::block_in_place(|| session::confirm_and_submit(form, prompt, trigger))
}
