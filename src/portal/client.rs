use reqwest::{Method, StatusCode};
use serde::Serialize;
use std::time::Duration;

use crate::config::Config;

/// How long we wait on any single portal request before giving up.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Possible errors while talking to the portal.
#[derive(Debug, thiserror::Error)]
pub enum PortalError {
    /// A transport-level fault: connection refused, timeout, DNS, etc.
    #[error("portal request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The portal answered, but not with a success status.
    #[error("portal returned {status}: {body}")]
    Status { status: StatusCode, body: String },
    /// The portal claimed success but the body wasn't the JSON we expected.
    #[error("unable to parse portal response: {0}")]
    Parse(#[from] serde_json::Error),
    /// A success body was missing (or had an empty) required field.
    #[error("portal response is missing a usable `{0}` field")]
    MissingField(&'static str),
}

/// A thin client around the portal API.
///
/// The underlying `reqwest::Client` is configured once, and the bearer key
/// travels with it. There is no mutable state here: a caller wanting a
/// different key or base URL constructs a different client.
#[derive(Debug)]
pub struct PortalClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl PortalClient {
    /// Creates a new portal client from the given configuration.
    pub fn new(config: &Config) -> Result<Self, PortalError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// POSTs the given body as JSON to a path beneath the portal base URL,
    /// returning the response status and raw body text.
    ///
    /// Status handling is left to the caller so that each operation can
    /// print its own diagnostics before deciding success or failure.
    pub(crate) async fn post_json<T: Serialize>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<(StatusCode, String), PortalError> {
        // We serialize ourselves rather than relying on `reqwest`'s JSON
        // support so that the exact posted payload is available to print.
        let posted_contents = serde_json::to_string(body)?;

        let request = self
            .http
            .request(Method::POST, format!("{}{}", self.base_url, path))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .body(posted_contents)
            .build()?;

        let result = self.http.execute(request).await?;
        let status = result.status();
        let body = result.text().await?;

        Ok((status, body))
    }
}

/// The portal reports creation success as either 200 or 201.
pub(crate) fn is_created(status: StatusCode) -> bool {
    status == StatusCode::OK || status == StatusCode::CREATED
}

/// Cuts a response body down to something printable.
/// Careful: we must cut on a character boundary, not a byte offset.
pub(crate) fn truncated(body: &str, limit: usize) -> &str {
    match body.char_indices().nth(limit) {
        Some((index, _)) => &body[..index],
        None => body,
    }
}
