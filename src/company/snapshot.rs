use serde::Serialize;

use crate::core::{
    EsgClient, EsgError,
    client::{CacheMode, RetryConfig},
};
use crate::greenwash::{GreenwashBuilder, GreenwashFinding};
use crate::insights::{InsightsBuilder, NewsInsight};
use crate::metrics::{CompanyMetrics, MetricsBuilder};
use crate::scores::{EsgScoreRecord, ScoresBuilder};

/// Everything the analysis dashboard shows for one company, fetched in one go.
///
/// Every tab is derived from the same snapshot, so switching tabs never refetches.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanySnapshot {
    pub company: String,
    /// Score rows in backend order; the first one is the headline.
    pub scores: Vec<EsgScoreRecord>,
    pub metrics: CompanyMetrics,
    pub insights: Vec<NewsInsight>,
    pub greenwash: Vec<GreenwashFinding>,
}

impl CompanySnapshot {
    /// The headline score row, if the backend returned any.
    pub fn headline(&self) -> Option<&EsgScoreRecord> {
        self.scores.first()
    }
}

fn log_optional<T: Default>(res: Result<T, EsgError>, part: &str, company: &str) -> T {
    match res {
        Ok(data) => data,
        Err(e) => {
            tracing::warn!(company, part, error = %e, "optional section failed to load; showing it empty");
            T::default()
        }
    }
}

pub(super) async fn fetch_snapshot(
    client: &EsgClient,
    company: &str,
    cache_mode: CacheMode,
    retry_override: Option<&RetryConfig>,
) -> Result<CompanySnapshot, EsgError> {
    let (scores_res, metrics_res, insights_res, greenwash_res) = futures::join!(
        ScoresBuilder::new(client, company)
            .cache_mode(cache_mode)
            .retry_policy(retry_override.cloned())
            .fetch(),
        MetricsBuilder::new(client, company)
            .cache_mode(cache_mode)
            .retry_policy(retry_override.cloned())
            .fetch(),
        InsightsBuilder::new(client, company)
            .cache_mode(cache_mode)
            .retry_policy(retry_override.cloned())
            .fetch(),
        GreenwashBuilder::new(client, company)
            .cache_mode(cache_mode)
            .retry_policy(retry_override.cloned())
            .fetch(),
    );

    let scores = scores_res?;
    Ok(CompanySnapshot {
        company: company.to_string(),
        scores,
        metrics: log_optional(metrics_res, "company-metrics", company),
        insights: log_optional(insights_res, "realtime-data", company),
        greenwash: log_optional(greenwash_res, "greenwash-data", company),
    })
}
