//! Fire-and-forget submission of review payloads.
//!
//! The form hands a payload to a [`MutationTrigger`] and moves on. The
//! gateway-backed trigger spawns the request on the Tokio runtime, refuses a
//! second submission for a route that is still in flight, and reports each
//! outcome through a [`NotificationSink`] and a [`TelemetrySink`].
//! [`GatewayMutationTrigger::settle`] lets the caller wait for outstanding
//! requests before exiting.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use super::gateway::{ReviewGateway, ReviewReceipt};
use crate::api::ClientError;
use crate::notify::{Notification, NotificationSink};
use crate::review::SubmissionPayload;
use crate::routing::RoutingIds;
use crate::telemetry::{NoopTelemetrySink, TelemetryEvent, TelemetrySink};

/// Performs the network call for a submitted review.
///
/// Implementations own retries, deduplication and error reporting; the
/// caller never sees the outcome.
pub trait MutationTrigger {
    /// Starts submitting `payload` to the review addressed by `routing`.
    fn submit(&self, routing: RoutingIds, payload: SubmissionPayload);
}

/// Result of one submission, available after [`GatewayMutationTrigger::settle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationOutcome {
    /// Route the submission targeted.
    pub routing: RoutingIds,
    /// Receipt from the API or the failure.
    pub result: Result<ReviewReceipt, ClientError>,
}

impl MutationOutcome {
    /// Returns true when the API accepted the submission.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

#[derive(Debug)]
enum Pending {
    Spawned {
        routing: RoutingIds,
        handle: JoinHandle<Result<ReviewReceipt, ClientError>>,
    },
    Rejected(MutationOutcome),
}

/// Mutation trigger that submits through a [`ReviewGateway`].
pub struct GatewayMutationTrigger {
    runtime: Handle,
    gateway: Arc<dyn ReviewGateway>,
    notifications: Arc<dyn NotificationSink>,
    telemetry: Arc<dyn TelemetrySink>,
    in_flight: Arc<Mutex<HashSet<RoutingIds>>>,
    pending: Mutex<Vec<Pending>>,
}

impl GatewayMutationTrigger {
    /// Creates a trigger that spawns requests on `runtime`.
    #[must_use]
    pub fn new(
        runtime: Handle,
        gateway: Arc<dyn ReviewGateway>,
        notifications: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            runtime,
            gateway,
            notifications,
            telemetry: Arc::new(NoopTelemetrySink),
            in_flight: Arc::new(Mutex::new(HashSet::new())),
            pending: Mutex::new(Vec::new()),
        }
    }

    /// Replaces the telemetry sink.
    #[must_use]
    pub fn with_telemetry(mut self, telemetry: Arc<dyn TelemetrySink>) -> Self {
        self.telemetry = telemetry;
        self
    }

    /// Returns true while a submission for `routing` is running.
    #[must_use]
    pub fn is_in_flight(&self, routing: &RoutingIds) -> bool {
        self.in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(routing)
    }

    /// Waits for every submission started so far and returns their outcomes
    /// in submission order.
    pub async fn settle(&self) -> Vec<MutationOutcome> {
        let pending: Vec<Pending> = std::mem::take(
            &mut *self.pending.lock().unwrap_or_else(PoisonError::into_inner),
        );

        let mut outcomes = Vec::with_capacity(pending.len());
        for entry in pending {
            let outcome = match entry {
                Pending::Rejected(outcome) => outcome,
                Pending::Spawned { routing, handle } => {
                    let result = handle.await.unwrap_or_else(|error| {
                        Err(ClientError::Api {
                            message: format!("submission task for {routing} failed: {error}"),
                        })
                    });
                    MutationOutcome { routing, result }
                }
            };
            outcomes.push(outcome);
        }
        outcomes
    }

    fn claim(&self, routing: &RoutingIds) -> Option<InFlightClaim> {
        let inserted = self
            .in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(routing.clone());
        inserted.then(|| InFlightClaim {
            routing: routing.clone(),
            in_flight: Arc::clone(&self.in_flight),
        })
    }

    fn push_pending(&self, entry: Pending) {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry);
    }
}

impl MutationTrigger for GatewayMutationTrigger {
    fn submit(&self, routing: RoutingIds, payload: SubmissionPayload) {
        let Some(claim) = self.claim(&routing) else {
            tracing::warn!(%routing, "ignoring duplicate submission");
            let error = ClientError::DuplicateSubmission {
                route: routing.to_string(),
            };
            self.notifications.notify(Notification::error(error.to_string()));
            self.push_pending(Pending::Rejected(MutationOutcome {
                routing,
                result: Err(error),
            }));
            return;
        };

        let job = SubmissionJob {
            routing: routing.clone(),
            gateway: Arc::clone(&self.gateway),
            notifications: Arc::clone(&self.notifications),
            telemetry: Arc::clone(&self.telemetry),
        };
        let handle = self.runtime.spawn(job.run(claim, payload));
        self.push_pending(Pending::Spawned { routing, handle });
    }
}

/// Marks a route as in flight until dropped, however the task ends.
struct InFlightClaim {
    routing: RoutingIds,
    in_flight: Arc<Mutex<HashSet<RoutingIds>>>,
}

impl Drop for InFlightClaim {
    fn drop(&mut self) {
        self.in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.routing);
    }
}

struct SubmissionJob {
    routing: RoutingIds,
    gateway: Arc<dyn ReviewGateway>,
    notifications: Arc<dyn NotificationSink>,
    telemetry: Arc<dyn TelemetrySink>,
}

impl SubmissionJob {
    async fn run(
        self,
        claim: InFlightClaim,
        payload: SubmissionPayload,
    ) -> Result<ReviewReceipt, ClientError> {
        let images = payload.images().len();
        let deleted_images = payload.delete_images().len();

        let result = match self.routing.review_id() {
            Some(review_id) => {
                self.gateway
                    .update_review(self.routing.theater_id(), review_id, payload)
                    .await
            }
            None => {
                self.gateway
                    .create_review(self.routing.theater_id(), payload)
                    .await
            }
        };

        drop(claim);
        self.report(&result, images, deleted_images);
        result
    }

    fn report(
        &self,
        result: &Result<ReviewReceipt, ClientError>,
        images: usize,
        deleted_images: usize,
    ) {
        let theater_id = self.routing.theater_id().as_str().to_owned();
        let review_id = self.routing.review_id().map(|id| id.as_str().to_owned());

        match result {
            Ok(receipt) => {
                tracing::info!(routing = %self.routing, status = receipt.status, "review stored");
                let message = if review_id.is_some() {
                    "Your review was updated"
                } else {
                    "Your review was shared"
                };
                self.notifications.notify(Notification::success(message));
                self.telemetry.record(TelemetryEvent::ReviewSubmitted {
                    theater_id,
                    review_id,
                    images,
                    deleted_images,
                });
            }
            Err(error) => {
                tracing::warn!(routing = %self.routing, %error, "review submission failed");
                self.notifications.notify(Notification::error(error.to_string()));
                self.telemetry.record(TelemetryEvent::ReviewSubmissionFailed {
                    theater_id,
                    review_id,
                    reason: error.to_string(),
                });
            }
        }
    }
}

/// Trigger that records submissions instead of sending them.
#[cfg(any(test, feature = "test-support"))]
#[derive(Debug, Default)]
pub struct RecordingMutationTrigger {
    submissions: Mutex<Vec<(RoutingIds, SubmissionPayload)>>,
}

#[cfg(any(test, feature = "test-support"))]
impl RecordingMutationTrigger {
    /// Drains recorded submissions.
    #[must_use]
    pub fn take(&self) -> Vec<(RoutingIds, SubmissionPayload)> {
        self.submissions
            .lock()
            .map(|mut submissions| submissions.drain(..).collect())
            .unwrap_or_default()
    }
}

#[cfg(any(test, feature = "test-support"))]
impl MutationTrigger for RecordingMutationTrigger {
    fn submit(&self, routing: RoutingIds, payload: SubmissionPayload) {
        if let Ok(mut submissions) = self.submissions.lock() {
            submissions.push((routing, payload));
        }
    }
}

#[cfg(test)]
#[path = "mutation_tests.rs"]
mod tests;
