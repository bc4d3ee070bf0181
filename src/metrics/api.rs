use crate::core::{
    EsgClient, EsgError,
    client::{CacheMode, RetryConfig, constants::PATH_COMPANY_METRICS},
    fetch::{self, Get},
};

use super::model::CompanyMetrics;
use super::wire::decode_metrics;

pub(super) async fn fetch_metrics(
    client: &EsgClient,
    company: &str,
    cache_mode: CacheMode,
    retry_override: Option<&RetryConfig>,
) -> Result<CompanyMetrics, EsgError> {
    let get = Get {
        path: PATH_COMPANY_METRICS,
        query: &[("company", company)],
        caller: "company_metrics",
        company,
    };
    let text = fetch::fetch_text(client, &get, cache_mode, retry_override).await?;
    let metrics = decode_metrics(&text)?;
    tracing::debug!(company, count = metrics.len(), "decoded company metrics");
    Ok(metrics)
}
