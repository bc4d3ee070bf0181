use crate::core::{
    EsgClient, EsgError,
    client::{CacheMode, RetryConfig, constants::PATH_SCORE_DATA},
    fetch::{self, Get},
};

use super::model::{EsgScoreRecord, Rating};
use super::wire::ScoreRow;

pub(super) async fn fetch_scores(
    client: &EsgClient,
    company: &str,
    cache_mode: CacheMode,
    retry_override: Option<&RetryConfig>,
) -> Result<Vec<EsgScoreRecord>, EsgError> {
    let get = Get {
        path: PATH_SCORE_DATA,
        query: &[("company", company)],
        caller: "score_data",
        company,
    };
    let rows: Vec<ScoreRow> = fetch::fetch_rows(client, &get, cache_mode, retry_override).await?;

    Ok(rows
        .into_iter()
        .map(|row| EsgScoreRecord {
            company: row.company,
            period: row.period.filter(|p| !p.trim().is_empty()),
            total: row.total.unwrap_or(0.0),
            rating: Rating::parse(row.rating.as_deref().unwrap_or_default()),
            environmental: row.environmental.unwrap_or(0.0),
            social: row.social.unwrap_or(0.0),
            governance: row.governance.unwrap_or(0.0),
        })
        .collect())
}
