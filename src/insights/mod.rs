mod api;
mod model;
mod wire;

pub use model::NewsInsight;

use crate::core::{
    EsgClient, EsgError,
    client::{CacheMode, RetryConfig},
};

/// A builder for fetching the realtime news/insight feed of one company (`realtime-data`).
pub struct InsightsBuilder {
    client: EsgClient,
    company: String,
    cache_mode: CacheMode,
    retry_override: Option<RetryConfig>,
}

impl InsightsBuilder {
    /// Creates a new `InsightsBuilder` for a given company.
    pub fn new(client: &EsgClient, company: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            company: company.into(),
            cache_mode: CacheMode::Use,
            retry_override: None,
        }
    }

    /// Sets the cache mode for this specific API call.
    #[must_use]
    pub const fn cache_mode(mut self, mode: CacheMode) -> Self {
        self.cache_mode = mode;
        self
    }

    /// Overrides the default retry policy for this specific API call.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    /// Fetches the feed. Items with an empty body are skipped.
    ///
    /// # Errors
    ///
    /// Returns an `EsgError` on a failed request, a non-2xx status, or an undecodable body.
    pub async fn fetch(self) -> Result<Vec<NewsInsight>, EsgError> {
        api::fetch_insights(
            &self.client,
            &self.company,
            self.cache_mode,
            self.retry_override.as_ref(),
        )
        .await
    }
}
