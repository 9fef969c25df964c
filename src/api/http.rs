//! reqwest implementation of [`ReviewGateway`].
//!
//! Reviews live under `{base}/theaters/{theaterId}/reviews`. New reviews are
//! `POST`ed to the collection; edits are `PATCH`ed to the review resource.
//! Both carry a multipart body with a JSON `data` part, one `image` part per
//! new file and one `deleteImages` part per removed stored image.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, StatusCode};
use url::Url;

use super::error_mapping::{
    extract_api_message, extract_review_id, map_http_error, map_transport_error,
};
use super::gateway::{ReviewGateway, ReviewReceipt};
use crate::api::ClientError;
use crate::review::{
    DATA_PART, DELETE_IMAGES_PART, ExistingReview, IMAGE_PART, SubmissionPayload,
};
use crate::routing::{ReviewId, TheaterId};

const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for [`HttpReviewGateway`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpGatewayConfig {
    /// Base API URL (e.g., `https://seats.example/api`).
    pub base_url: String,
    /// Bearer token sent with every request, when set.
    pub token: Option<String>,
    /// HTTP timeout.
    pub timeout: Duration,
}

impl Default for HttpGatewayConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl HttpGatewayConfig {
    /// Constructs configuration with explicit settings.
    #[must_use]
    pub fn new(base_url: impl Into<String>, token: Option<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            token,
            timeout,
        }
    }
}

/// Review gateway backed by a reqwest client.
#[derive(Debug, Clone)]
pub struct HttpReviewGateway {
    client: Client,
    base_url: Url,
    token: Option<String>,
}

impl HttpReviewGateway {
    /// Builds a gateway from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] when the base URL cannot be parsed
    /// or cannot carry path segments, and [`ClientError::Configuration`] when
    /// the HTTP client cannot be built.
    pub fn new(config: &HttpGatewayConfig) -> Result<Self, ClientError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|error| ClientError::InvalidUrl(format!("{}: {error}", config.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(format!(
                "{} cannot be used as a base URL",
                config.base_url
            )));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|error| ClientError::Configuration {
                message: format!("failed to configure review API client: {error}"),
            })?;

        Ok(Self {
            client,
            base_url,
            token: config.token.clone(),
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|()| {
                ClientError::InvalidUrl(format!("{} cannot carry a path", self.base_url))
            })?;
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }

    fn reviews_url(&self, theater_id: &TheaterId) -> Result<Url, ClientError> {
        self.endpoint(&["theaters", theater_id.as_str(), "reviews"])
    }

    fn review_url(&self, theater_id: &TheaterId, review_id: &ReviewId) -> Result<Url, ClientError> {
        self.endpoint(&["theaters", theater_id.as_str(), "reviews", review_id.as_str()])
    }

    fn authorised(&self, builder: RequestBuilder) -> RequestBuilder {
        let Some(token) = self.token.as_deref() else {
            return builder;
        };
        builder.bearer_auth(token)
    }

    async fn send(
        &self,
        operation: &str,
        builder: RequestBuilder,
    ) -> Result<(StatusCode, String), ClientError> {
        let response = self
            .authorised(builder)
            .send()
            .await
            .map_err(|error| map_transport_error(operation, &error))?;

        let status = response.status();
        tracing::debug!(operation, %status, "review API responded");
        let body = match response.text().await {
            Ok(body) => body,
            Err(error) if !status.is_success() => {
                tracing::warn!(operation, %status, %error, "failed to read error body");
                String::new()
            }
            Err(error) => return Err(map_transport_error(operation, &error)),
        };

        if !status.is_success() {
            return Err(map_http_error(operation, status, extract_api_message(&body)));
        }
        Ok((status, body))
    }

    async fn send_mutation(
        &self,
        operation: &str,
        builder: RequestBuilder,
        payload: SubmissionPayload,
    ) -> Result<ReviewReceipt, ClientError> {
        let form = multipart_form(payload)?;
        let (status, body) = self.send(operation, builder.multipart(form)).await?;

        Ok(ReviewReceipt {
            status: status.as_u16(),
            review_id: extract_review_id(&body),
        })
    }
}

#[async_trait]
impl ReviewGateway for HttpReviewGateway {
    async fn fetch_review(
        &self,
        theater_id: &TheaterId,
        review_id: &ReviewId,
    ) -> Result<ExistingReview, ClientError> {
        let url = self.review_url(theater_id, review_id)?;
        let (_, body) = self.send("fetch review", self.client.get(url)).await?;

        serde_json::from_str(&body).map_err(|error| ClientError::Api {
            message: format!("fetch review returned an unexpected body: {error}"),
        })
    }

    async fn create_review(
        &self,
        theater_id: &TheaterId,
        payload: SubmissionPayload,
    ) -> Result<ReviewReceipt, ClientError> {
        let url = self.reviews_url(theater_id)?;
        self.send_mutation("create review", self.client.post(url), payload)
            .await
    }

    async fn update_review(
        &self,
        theater_id: &TheaterId,
        review_id: &ReviewId,
        payload: SubmissionPayload,
    ) -> Result<ReviewReceipt, ClientError> {
        let url = self.review_url(theater_id, review_id)?;
        self.send_mutation("update review", self.client.patch(url), payload)
            .await
    }
}

/// Encodes a payload as the multipart body the review API expects.
///
/// # Errors
///
/// Returns [`ClientError::Api`] when the review data cannot be encoded or an
/// image carries an invalid MIME type.
pub fn multipart_form(payload: SubmissionPayload) -> Result<Form, ClientError> {
    let (data, images, delete_images) = payload.into_parts();

    let json = data.to_json().map_err(|error| ClientError::Api {
        message: format!("failed to encode review data: {error}"),
    })?;
    let data_part = Part::text(json)
        .mime_str("application/json")
        .map_err(|error| ClientError::Api {
            message: format!("failed to build data part: {error}"),
        })?;
    let mut form = Form::new().part(DATA_PART, data_part);

    for image in images {
        let file_name = image.file_name().to_owned();
        let content_type = image.content_type().to_owned();
        let part = Part::bytes(image.into_bytes())
            .file_name(file_name.clone())
            .mime_str(&content_type)
            .map_err(|error| ClientError::Api {
                message: format!("invalid content type for image '{file_name}': {error}"),
            })?;
        form = form.part(IMAGE_PART, part);
    }

    for reference in delete_images {
        form = form.text(DELETE_IMAGES_PART, reference);
    }

    Ok(form)
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
