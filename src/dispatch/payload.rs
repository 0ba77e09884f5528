//! Dispatch event payload construction.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// Event type the downstream workflow is subscribed to.
pub const EVENT_TYPE: &str = "download_file";

/// Body of the repository-dispatch POST.
#[derive(Debug, Serialize)]
pub struct DispatchEvent {
    pub event_type: &'static str,
    pub client_payload: ClientPayload,
}

/// Payload handed through to the triggered workflow.
///
/// The download URL is carried exactly as decoded from the inbound path,
/// with no re-encoding.
#[derive(Debug, Serialize)]
pub struct ClientPayload {
    pub download_url: String,
    pub timestamp: String,
}

impl DispatchEvent {
    /// Build a download trigger for `download_url`, stamped with the
    /// current UTC time.
    pub fn for_download(download_url: &str) -> Self {
        Self::with_timestamp(
            download_url,
            Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        )
    }

    fn with_timestamp(download_url: &str, timestamp: String) -> Self {
        Self {
            event_type: EVENT_TYPE,
            client_payload: ClientPayload {
                download_url: download_url.to_string(),
                timestamp,
            },
        }
    }
}
