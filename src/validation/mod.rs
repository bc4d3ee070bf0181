mod api;
mod model;
mod wire;

pub use model::ValidationReport;

use crate::core::{
    EsgClient, EsgError,
    client::{CacheMode, RetryConfig},
};

/// A builder for fetching per-report validation results (`validation-company`).
pub struct ValidationBuilder {
    client: EsgClient,
    cache_mode: CacheMode,
    retry_override: Option<RetryConfig>,
}

impl ValidationBuilder {
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

    /// # Errors
    ///
    /// Returns an `EsgError` on a failed request, a non-2xx status, or an undecodable body.
    #[tracing::instrument(skip(self), err)]
    pub async fn fetch(self) -> Result<Vec<ValidationReport>, EsgError> {
        api::fetch_validation(&self.client, self.cache_mode, self.retry_override.as_ref()).await
    }
}
