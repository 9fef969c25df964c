//! Seatview library crate for sharing theater seat-view reviews.
//!
//! The library holds the review draft for one editing session, validates it
//! as it changes, and submits it as a multipart request to the review API
//! without blocking the caller. Outcomes are reported through notification
//! and telemetry sinks.

pub mod api;
pub mod config;
pub mod notify;
pub mod review;
pub mod routing;
pub mod session;
pub mod telemetry;

pub use api::{
    ClientError, GatewayMutationTrigger, HttpGatewayConfig, HttpReviewGateway, MutationOutcome,
    MutationTrigger, ReviewGateway, ReviewReceipt,
};
pub use config::{OperationMode, SeatviewConfig};
pub use review::{
    ConfirmationPrompt, ConfirmationView, ExistingReview, FormPhase, ImageFile, ImageId,
    ImageList, ReviewForm, ReviewFormError, SeatLocation, SubmissionPayload,
};
pub use routing::{ReviewId, RoutingIds, TheaterId};
