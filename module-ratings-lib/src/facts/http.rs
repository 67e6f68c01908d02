//! Single-attempt JSON fetching for remote provider APIs.
//!
//! Every remote call goes through [`fetch_json`], which either produces a parsed
//! JSON document or a [`FetchError`] describing why it could not. There is no
//! retry: providers turn any error into an "unavailable" outcome and move on.

use crate::Result;
use core::fmt::{Display, Formatter};
use core::time::Duration;
use ohno::{EnrichableExt, IntoAppError};
use serde_json::Value;

const LOG_TARGET: &str = "      http";

const USER_AGENT: &str = "module-ratings";

/// Why a remote JSON document could not be obtained.
#[derive(Debug)]
pub enum FetchError {
    /// The request could not be sent or the body could not be read.
    Transport(ohno::AppError),

    /// The server answered with a non-success status.
    Status(reqwest::StatusCode),

    /// The body was not valid JSON.
    Decode(ohno::AppError),
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Transport(e) => write!(f, "transport failure: {e:#}"),
            Self::Status(status) => write!(f, "unexpected HTTP status {status}"),
            Self::Decode(e) => write!(f, "malformed JSON body: {e:#}"),
        }
    }
}

/// Create the HTTP client shared by the remote providers.
pub fn build_client(timeout: Duration) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
        .into_app_err("unable to create HTTP client")
}

/// Issue a GET request and parse the body as JSON.
///
/// A zero-length body parses as `Value::Null` so callers can treat it like any
/// other empty document.
pub async fn fetch_json(client: &reqwest::Client, url: &str) -> Result<Value, FetchError> {
    log::debug!(target: LOG_TARGET, "GET {url}");

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| FetchError::Transport(ohno::AppError::new(e).enrich_with(|| format!("sending HTTP request to {url}"))))?;

    let status = response.status();
    if !status.is_success() {
        log::debug!(target: LOG_TARGET, "GET {url} returned {status}");
        return Err(FetchError::Status(status));
    }

    let text = response
        .text()
        .await
        .map_err(|e| FetchError::Transport(ohno::AppError::new(e).enrich_with(|| format!("reading response body from {url}"))))?;

    if text.trim().is_empty() {
        return Ok(Value::Null);
    }

    serde_json::from_str(&text).map_err(|e| FetchError::Decode(ohno::AppError::new(e).enrich_with(|| format!("parsing response from {url}"))))
}
