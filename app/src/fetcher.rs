//! Browser-fetch backing for the core resource resolver.

use playerdash_core::{ApiError, TextFetcher};

use crate::api;

/// `TextFetcher` over the page's fetch facility, sharing the API
/// client's timeout and error classification.
pub struct WebFetcher;

impl TextFetcher for WebFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, ApiError> {
        api::fetch_body(url).await
    }
}
