use reqwest::Response;
use serde::de::DeserializeOwned;
use url::Url;

use crate::core::{
    EsgClient, EsgError,
    client::{CacheMode, RetryConfig},
    net, wire,
};

/// A GET against one backend endpoint.
pub(crate) struct Get<'a> {
    pub(crate) path: &'a str,
    pub(crate) query: &'a [(&'a str, &'a str)],
    /// Short name used in logs and fixture file names.
    pub(crate) caller: &'a str,
    /// Company the request is about; empty for collection endpoints.
    pub(crate) company: &'a str,
}

/// Maps a non-2xx response to `EsgError::NotFound` / `EsgError::Status`, logging it.
pub(crate) fn ensure_success(resp: Response, url: &Url, caller: &str) -> Result<Response, EsgError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    tracing::warn!(
        caller,
        status = status.as_u16(),
        %url,
        "backend returned non-success status"
    );
    if status.as_u16() == 404 {
        return Err(EsgError::NotFound {
            url: url.to_string(),
        });
    }
    Err(EsgError::Status {
        status: status.as_u16(),
        url: url.to_string(),
    })
}

/// The endpoint URL with the request's query pairs appended.
pub(crate) fn query_url(client: &EsgClient, get: &Get<'_>) -> Result<Url, EsgError> {
    let mut url = client.endpoint(get.path)?;
    if !get.query.is_empty() {
        let mut qp = url.query_pairs_mut();
        for (k, v) in get.query {
            qp.append_pair(k, v);
        }
    }
    Ok(url)
}

/// Fetches `get` and turns the successful response into a cacheable string with `read`.
///
/// Under `CacheMode::Use`, concurrent misses for the same URL share one request: later
/// callers wait for the first and are answered from the cache it filled.
pub(crate) async fn fetch_cached<F, Fut>(
    client: &EsgClient,
    get: &Get<'_>,
    cache_mode: CacheMode,
    retry_override: Option<&RetryConfig>,
    read: F,
) -> Result<String, EsgError>
where
    F: FnOnce(Response) -> Fut,
    Fut: Future<Output = Result<String, EsgError>>,
{
    let url = query_url(client, get)?;

    let _slot = if cache_mode == CacheMode::Use {
        if let Some(text) = client.cache_get(&url).await {
            tracing::debug!(caller = get.caller, %url, "served from cache");
            return Ok(text);
        }
        let slot = client.cache_lock(&url).await;
        if let Some(text) = client.cache_get(&url).await {
            tracing::debug!(caller = get.caller, %url, "served from cache after shared fetch");
            return Ok(text);
        }
        slot
    } else {
        None
    };

    let req = client.http().get(url.clone());
    let resp = client.send_with_retry(req, retry_override).await?;
    let resp = ensure_success(resp, &url, get.caller)?;

    let text = read(resp).await?;

    if cache_mode != CacheMode::Bypass {
        client.cache_put(&url, &text).await;
    }

    Ok(text)
}

pub(crate) async fn fetch_text(
    client: &EsgClient,
    get: &Get<'_>,
    cache_mode: CacheMode,
    retry_override: Option<&RetryConfig>,
) -> Result<String, EsgError> {
    fetch_cached(client, get, cache_mode, retry_override, |resp| async move {
        Ok(net::get_text(resp, get.caller, get.company, "json").await?)
    })
    .await
}

/// Fetches an endpoint answering SQL-style rows and decodes each row as `T`.
pub(crate) async fn fetch_rows<T>(
    client: &EsgClient,
    get: &Get<'_>,
    cache_mode: CacheMode,
    retry_override: Option<&RetryConfig>,
) -> Result<Vec<T>, EsgError>
where
    T: DeserializeOwned,
{
    let text = fetch_text(client, get, cache_mode, retry_override).await?;
    wire::parse_rows(&text).map_err(|e| {
        tracing::warn!(caller = get.caller, error = %e, "failed to decode rows");
        e
    })
}
