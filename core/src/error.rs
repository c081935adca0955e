//! Error taxonomy for API calls and config-resource loading.
//!
//! Every failure is locally contained: list refreshes retry once,
//! detail loads surface an inline message, resource loads degrade to
//! defaults. Nothing here is ever fatal to the page.

use thiserror::Error;

/// Staged failure classification for status-API requests.
///
/// The stages are checked in order: transport/timeout, HTTP status,
/// body presence, JSON validity. Each stage maps to its own variant so
/// the UI can phrase the inline message accordingly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Fetch rejection or a non-2xx status.
    #[error("network error{}", status.map(|s| format!(" (status {s})")).unwrap_or_default())]
    Network { status: Option<u16> },

    /// The request exceeded the fixed timeout and was aborted.
    #[error("request timed out")]
    Timeout,

    /// 2xx response with an empty or whitespace-only body.
    #[error("server returned an empty response")]
    EmptyResponse,

    /// Body text that is not valid JSON for the expected shape.
    #[error("could not parse response: {0}")]
    Parse(String),
}

/// Config-resource loading failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceError {
    /// No candidate base path satisfied the probe and the fallback
    /// path produced neither table.
    #[error("config resources unreachable at all candidate paths")]
    Missing,
}
