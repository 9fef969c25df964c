//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.seatview.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `SEATVIEW_API_URL`, `SEATVIEW_TOKEN`, or
//!    `SEATVIEW_API_TOKEN` as a fallback for the token
//! 4. **Command-line arguments** – `--theater`/`-t`, `--review`/`-r`, and so on.
//!    Every flag carries an explicit short letter so the derived shorts never
//!    collide.
//!
//! # Configuration File
//!
//! ```toml
//! api_url = "https://seats.example/api"
//! token = "secret"
//! timeout_seconds = 10
//! ```

use std::env;
use std::time::Duration;

use camino::Utf8PathBuf;
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::api::{ClientError, HttpGatewayConfig};
use crate::review::SeatOverride;
use crate::routing::{ReviewId, RoutingIds, TheaterId};

/// Default review API base URL.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// Environment variable consulted when no token is configured.
pub const FALLBACK_TOKEN_ENV: &str = "SEATVIEW_API_TOKEN";

const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Operation mode determined by the routing flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Write a new review for a theater.
    CreateReview,
    /// Replace an existing review.
    EditReview,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use seatview::SeatviewConfig;
///
/// let config = SeatviewConfig::load().expect("failed to load configuration");
/// let routing = config.routing_ids().expect("theater required");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "SEATVIEW",
    discovery(
        dotfile_name = ".seatview.toml",
        config_file_name = "seatview.toml",
        app_name = "seatview"
    )
)]
pub struct SeatviewConfig {
    /// Base URL of the review API.
    ///
    /// Can be provided via:
    /// - CLI: `--api-url <URL>` or `-u <URL>`
    /// - Environment: `SEATVIEW_API_URL`
    /// - Config file: `api_url = "..."`
    #[ortho_config(cli_short = 'u')]
    pub api_url: String,

    /// Bearer token sent with every request.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-k <TOKEN>`
    /// - Environment: `SEATVIEW_TOKEN` or `SEATVIEW_API_TOKEN`
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 'k')]
    pub token: Option<String>,

    /// Request timeout in seconds.
    #[ortho_config(cli_short = 'T')]
    pub timeout_seconds: u64,

    /// Theater the review belongs to.
    #[ortho_config(cli_short = 't')]
    pub theater: Option<String>,

    /// Existing review to edit. Omit to create a new review.
    #[ortho_config(cli_short = 'r')]
    pub review: Option<String>,

    /// Floor label of the seat.
    #[ortho_config(cli_short = 'f')]
    pub floor: Option<String>,

    /// Section code of the seat.
    #[ortho_config(cli_short = 'S')]
    pub section: Option<String>,

    /// Row label of the seat.
    #[ortho_config(cli_short = 'R')]
    pub seat_row: Option<String>,

    /// Seat number.
    #[ortho_config(cli_short = 'N')]
    pub seat_number: Option<String>,

    /// Star rating from 1 to 5.
    #[ortho_config(cli_short = 's')]
    pub rating: Option<u8>,

    /// Review text.
    #[ortho_config(cli_short = 'c')]
    pub content: Option<String>,

    /// Comma-separated image files to attach.
    #[ortho_config(cli_short = 'i')]
    pub images: Option<String>,

    /// Comma-separated references of stored images to delete.
    #[ortho_config(cli_short = 'x')]
    pub remove_images: Option<String>,

    /// Submits without asking for confirmation.
    ///
    /// Can be provided via:
    /// - CLI: `--yes` / `-y`
    /// - Config file: `yes = true`
    #[ortho_config(cli_short = 'y')]
    pub yes: bool,

    /// `MiniJinja` template for the confirmation summary.
    #[ortho_config(cli_short = 'C')]
    pub confirm_template: Option<String>,
}

impl Default for SeatviewConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            token: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            theater: None,
            review: None,
            floor: None,
            section: None,
            seat_row: None,
            seat_number: None,
            rating: None,
            content: None,
            images: None,
            remove_images: None,
            yes: false,
            confirm_template: None,
        }
    }
}

impl SeatviewConfig {
    /// Determines whether the run creates or edits a review.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.review.is_some() {
            OperationMode::EditReview
        } else {
            OperationMode::CreateReview
        }
    }

    /// Validates and returns the routing identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingTheaterId`] when no theater is
    /// configured, or [`ClientError::InvalidIdentifier`] when an identifier
    /// is blank or contains a path separator.
    pub fn routing_ids(&self) -> Result<RoutingIds, ClientError> {
        let theater_id = TheaterId::new(
            self.theater
                .as_deref()
                .ok_or(ClientError::MissingTheaterId)?,
        )?;

        match self.review.as_deref() {
            Some(review) => Ok(RoutingIds::for_edit(theater_id, ReviewId::new(review)?)),
            None => Ok(RoutingIds::for_create(theater_id)),
        }
    }

    /// Resolves the token from configuration or the `SEATVIEW_API_TOKEN`
    /// environment variable. Blank values count as absent.
    #[must_use]
    pub fn resolve_token(&self) -> Option<String> {
        self.token
            .clone()
            .or_else(|| env::var(FALLBACK_TOKEN_ENV).ok())
            .filter(|token| !token.trim().is_empty())
    }

    /// Returns the request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Builds the HTTP gateway settings.
    #[must_use]
    pub fn gateway_config(&self) -> HttpGatewayConfig {
        HttpGatewayConfig::new(self.api_url.clone(), self.resolve_token(), self.timeout())
    }

    /// Returns the image files to attach, in the order given.
    #[must_use]
    pub fn image_paths(&self) -> Vec<Utf8PathBuf> {
        split_list(self.images.as_deref())
            .map(Utf8PathBuf::from)
            .collect()
    }

    /// Returns the stored image references to delete, in the order given.
    #[must_use]
    pub fn removed_references(&self) -> Vec<String> {
        split_list(self.remove_images.as_deref())
            .map(ToOwned::to_owned)
            .collect()
    }

    /// Returns the seat fields supplied on this run.
    #[must_use]
    pub fn seat_override(&self) -> SeatOverride {
        SeatOverride {
            floor: self.floor.clone(),
            section: self.section.clone(),
            seat_row: self.seat_row.clone(),
            seat_number: self.seat_number.clone(),
        }
    }
}

fn split_list(value: Option<&str>) -> impl Iterator<Item = &str> {
    value
        .into_iter()
        .flat_map(|list| list.split(','))
        .map(str::trim)
        .filter(|item| !item.is_empty())
}

#[cfg(test)]
mod tests;
