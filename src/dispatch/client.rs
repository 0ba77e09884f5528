//! Repository-dispatch HTTP client.
//!
//! # Responsibilities
//! - Issue the outbound POST to the dispatch endpoint
//! - Interpret the upstream outcome (2xx/204 success, everything else failure)
//! - Log one diagnostic line per completed outbound call
//!
//! Exactly one outbound attempt is made per inbound request. There are no
//! retries and no backoff: the triggered workflow owns everything past the
//! dispatch call.

use reqwest::header::{HeaderValue, AUTHORIZATION, USER_AGENT};
use reqwest::StatusCode;
use thiserror::Error;

use crate::config::schema::GithubConfig;
use crate::dispatch::payload::DispatchEvent;

/// Fixed identifying User-Agent for outbound calls.
pub const USER_AGENT_VALUE: &str = "Mozilla/5.0 (compatible; DownloadBot/1.0)";

/// Error produced by a failed dispatch attempt.
///
/// An upstream rejection and a transport-level failure are distinct here,
/// but both collapse into the same externally observed server-error
/// envelope at the handler boundary.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Failed to trigger GitHub Action: {status} {status_text}")]
    UpstreamStatus { status: u16, status_text: String },

    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// Client for the repository-dispatch endpoint.
#[derive(Clone)]
pub struct DispatchClient {
    http: reqwest::Client,
}

impl DispatchClient {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    /// Trigger the download workflow for `download_url`.
    ///
    /// The caller must have checked that `github` is complete; this method
    /// only builds and sends the request.
    pub async fn trigger(
        &self,
        github: &GithubConfig,
        download_url: &str,
    ) -> Result<(), DispatchError> {
        let endpoint = format!(
            "{}/repos/{}/{}/dispatches",
            github.api_base.trim_end_matches('/'),
            github.owner,
            github.repo
        );

        let event = DispatchEvent::for_download(download_url);

        let response = self
            .http
            .post(&endpoint)
            .header(AUTHORIZATION, format!("token {}", github.token))
            .header(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE))
            .json(&event)
            .send()
            .await?;

        let status = response.status();
        tracing::info!(
            status = status.as_u16(),
            status_text = status_text(status),
            headers = ?response.headers(),
            "GitHub API response"
        );

        // 204 is the documented success signal; accept any 2xx.
        if status.is_success() {
            Ok(())
        } else {
            Err(DispatchError::UpstreamStatus {
                status: status.as_u16(),
                status_text: status_text(status).to_string(),
            })
        }
    }
}

impl Default for DispatchClient {
    fn default() -> Self {
        Self::new()
    }
}

fn status_text(status: StatusCode) -> &'static str {
    status.canonical_reason().unwrap_or("")
}
