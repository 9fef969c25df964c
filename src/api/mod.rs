//! Review API access.
//!
//! [`ReviewGateway`] is the seam between the review draft and the network:
//! the reqwest implementation lives in [`http`], and tests mock the trait.
//! [`GatewayMutationTrigger`] adapts a gateway into the fire-and-forget
//! [`MutationTrigger`] the form submits through.

pub mod error;
mod error_mapping;
pub mod gateway;
pub mod http;
pub mod mutation;

pub use error::ClientError;
pub use gateway::{ReviewGateway, ReviewReceipt};
pub use http::{HttpGatewayConfig, HttpReviewGateway};
pub use mutation::{GatewayMutationTrigger, MutationOutcome, MutationTrigger};

#[cfg(any(test, feature = "test-support"))]
pub use mutation::RecordingMutationTrigger;

#[cfg(test)]
pub use gateway::MockReviewGateway;
