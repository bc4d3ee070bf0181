mod snapshot;

pub use snapshot::CompanySnapshot;

use crate::core::{
    EsgClient, EsgError,
    client::{CacheMode, RetryConfig},
};
use crate::greenwash::{GreenwashBuilder, GreenwashFinding};
use crate::insights::{InsightsBuilder, NewsInsight};
use crate::metrics::{CompanyMetrics, MetricsBuilder};
use crate::scores::{EsgScoreRecord, ScoresBuilder};

/// A handle on one company, giving access to every per-company endpoint.
///
/// A `Company` is created with an [`EsgClient`] and the company identifier exactly as
/// the `companies` endpoint lists it.
///
/// # Example
///
/// ```no_run
/// # use esg_dashboard::{Company, EsgClient};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = EsgClient::default();
/// let acme = Company::new(&client, "Acme Corp");
///
/// let scores = acme.scores().await?;
/// if let Some(first) = scores.first() {
///     println!("{}: {} ({})", acme.name(), first.total, first.rating);
/// }
/// # Ok(())
/// # }
/// ```
pub struct Company {
    client: EsgClient,
    name: String,
    cache_mode: CacheMode,
    retry_override: Option<RetryConfig>,
}

impl Company {
    pub fn new(client: &EsgClient, name: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            name: name.into(),
            cache_mode: CacheMode::Use,
            retry_override: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the cache mode for all calls made through this handle.
    #[must_use]
    pub const fn cache_mode(mut self, mode: CacheMode) -> Self {
        self.cache_mode = mode;
        self
    }

    /// Overrides the client's retry policy for all calls made through this handle.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    /// Fetches all dashboard data for the company concurrently.
    ///
    /// Score data is required. If metrics, insights or greenwash data fail to load, the
    /// failure is logged and that section is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the score data cannot be fetched.
    #[tracing::instrument(skip(self), err, fields(company = %self.name))]
    pub async fn snapshot(&self) -> Result<CompanySnapshot, EsgError> {
        snapshot::fetch_snapshot(
            &self.client,
            &self.name,
            self.cache_mode,
            self.retry_override.as_ref(),
        )
        .await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    #[tracing::instrument(skip(self), err, fields(company = %self.name))]
    pub async fn scores(&self) -> Result<Vec<EsgScoreRecord>, EsgError> {
        ScoresBuilder::new(&self.client, &self.name)
            .cache_mode(self.cache_mode)
            .retry_policy(self.retry_override.clone())
            .fetch()
            .await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    #[tracing::instrument(skip(self), err, fields(company = %self.name))]
    pub async fn metrics(&self) -> Result<CompanyMetrics, EsgError> {
        MetricsBuilder::new(&self.client, &self.name)
            .cache_mode(self.cache_mode)
            .retry_policy(self.retry_override.clone())
            .fetch()
            .await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    #[tracing::instrument(skip(self), err, fields(company = %self.name))]
    pub async fn insights(&self) -> Result<Vec<NewsInsight>, EsgError> {
        InsightsBuilder::new(&self.client, &self.name)
            .cache_mode(self.cache_mode)
            .retry_policy(self.retry_override.clone())
            .fetch()
            .await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    #[tracing::instrument(skip(self), err, fields(company = %self.name))]
    pub async fn greenwash(&self) -> Result<Vec<GreenwashFinding>, EsgError> {
        GreenwashBuilder::new(&self.client, &self.name)
            .cache_mode(self.cache_mode)
            .retry_policy(self.retry_override.clone())
            .fetch()
            .await
    }
}
