mod api;
mod model;
mod wire;

pub use model::GreenwashFinding;

use crate::core::{
    EsgClient, EsgError,
    client::{CacheMode, RetryConfig},
};

/// A builder for fetching greenwashing findings for one company (`greenwash-data`).
pub struct GreenwashBuilder {
    client: EsgClient,
    company: String,
    cache_mode: CacheMode,
    retry_override: Option<RetryConfig>,
}

impl GreenwashBuilder {
    /// Creates a new `GreenwashBuilder` for a given company.
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

    /// Fetches the findings in backend order.
    ///
    /// # Errors
    ///
    /// Returns an `EsgError` on a failed request, a non-2xx status, or an undecodable body.
    pub async fn fetch(self) -> Result<Vec<GreenwashFinding>, EsgError> {
        api::fetch_greenwash(
            &self.client,
            &self.company,
            self.cache_mode,
            self.retry_override.as_ref(),
        )
        .await
    }
}
