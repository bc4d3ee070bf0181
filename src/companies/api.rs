use crate::core::{
    EsgClient, EsgError,
    client::{CacheMode, RetryConfig, constants::PATH_COMPANIES},
    fetch::{self, Get},
};

use super::wire::CompanyRow;

pub(super) async fn fetch_companies(
    client: &EsgClient,
    cache_mode: CacheMode,
    retry_override: Option<&RetryConfig>,
) -> Result<Vec<String>, EsgError> {
    let get = Get {
        path: PATH_COMPANIES,
        query: &[],
        caller: "companies",
        company: "",
    };
    let rows: Vec<CompanyRow> = fetch::fetch_rows(client, &get, cache_mode, retry_override).await?;

    // Keep backend order; drop blanks and repeats.
    let mut names: Vec<String> = Vec::with_capacity(rows.len());
    for name in rows.into_iter().filter_map(CompanyRow::into_name) {
        let name = name.trim();
        if !name.is_empty() && !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    Ok(names)
}
