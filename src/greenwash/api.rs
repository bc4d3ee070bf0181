use crate::core::{
    EsgClient, EsgError,
    client::{CacheMode, RetryConfig, constants::PATH_GREENWASH_DATA},
    fetch::{self, Get},
    wire::parse_timestamp,
};

use super::model::GreenwashFinding;
use super::wire::GreenwashRow;

pub(super) async fn fetch_greenwash(
    client: &EsgClient,
    company: &str,
    cache_mode: CacheMode,
    retry_override: Option<&RetryConfig>,
) -> Result<Vec<GreenwashFinding>, EsgError> {
    let get = Get {
        path: PATH_GREENWASH_DATA,
        query: &[("company", company)],
        caller: "greenwash_data",
        company,
    };
    let rows: Vec<GreenwashRow> =
        fetch::fetch_rows(client, &get, cache_mode, retry_override).await?;

    Ok(rows
        .into_iter()
        .filter(|row| row.rate.is_some() || row.reason.is_some())
        .map(|row| GreenwashFinding {
            company: row.company,
            rate: row.rate.unwrap_or(0.0),
            reason_markdown: row.reason.unwrap_or_default(),
            published_at: row.timestamp.as_deref().and_then(parse_timestamp),
        })
        .collect())
}
