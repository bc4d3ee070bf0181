mod api;
mod wire;

use crate::core::{
    EsgClient, EsgError,
    client::{CacheMode, RetryConfig},
};

/// A builder for fetching the list of selectable company identifiers.
pub struct CompaniesBuilder {
    client: EsgClient,
    cache_mode: CacheMode,
    retry_override: Option<RetryConfig>,
}

impl CompaniesBuilder {
    /// Creates a new `CompaniesBuilder`.
    pub fn new(client: &EsgClient) -> Self {
        Self {
            client: client.clone(),
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

    /// Fetches the company names, in backend order, without blanks or duplicates.
    ///
    /// # Errors
    ///
    /// Returns an `EsgError` if the request fails or the response cannot be decoded.
    #[tracing::instrument(skip(self), err)]
    pub async fn fetch(self) -> Result<Vec<String>, EsgError> {
        api::fetch_companies(&self.client, self.cache_mode, self.retry_override.as_ref()).await
    }
}

/// Convenience wrapper around [`CompaniesBuilder`] with default settings.
///
/// # Errors
///
/// Returns an `EsgError` if the request fails or the response cannot be decoded.
pub async fn companies(client: &EsgClient) -> Result<Vec<String>, EsgError> {
    CompaniesBuilder::new(client).fetch().await
}
