use crate::core::{
    EsgClient, EsgError,
    client::{CacheMode, RetryConfig, constants::PATH_REALTIME_DATA},
    fetch::{self, Get},
    wire::parse_timestamp,
};

use super::model::NewsInsight;
use super::wire::InsightRow;

pub(super) async fn fetch_insights(
    client: &EsgClient,
    company: &str,
    cache_mode: CacheMode,
    retry_override: Option<&RetryConfig>,
) -> Result<Vec<NewsInsight>, EsgError> {
    let get = Get {
        path: PATH_REALTIME_DATA,
        query: &[("company", company)],
        caller: "realtime_data",
        company,
    };
    let rows: Vec<InsightRow> = fetch::fetch_rows(client, &get, cache_mode, retry_override).await?;

    // Display order is the backend's order (newest first); no re-sorting.
    Ok(rows
        .into_iter()
        .filter_map(|row| {
            let markdown = row.content.filter(|c| !c.trim().is_empty())?;
            Some(NewsInsight {
                company: row.company,
                title: row.title,
                published_at: row.timestamp.as_deref().and_then(parse_timestamp),
                timestamp_text: row.timestamp,
                markdown,
            })
        })
        .collect())
}
