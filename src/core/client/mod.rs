//! Public client surface + builder.
//! Internals are split into `retry` (backoff + cache modes) and `constants` (UA + endpoint paths).

pub(crate) mod constants;
mod retry;

pub use constants::DEFAULT_BASE_URL;
pub use retry::{Backoff, CacheMode, RetryConfig};

use crate::core::EsgError;
use crate::core::config::DashboardConfig;
use constants::USER_AGENT;
use reqwest::Client;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};
use url::Url;

#[derive(Debug)]
struct CacheEntry {
    body: String,
    expires_at: Instant,
}

#[derive(Debug)]
struct CacheStore {
    map: RwLock<HashMap<String, CacheEntry>>,
    /// One lock per URL being fetched, so concurrent misses issue a single request.
    inflight: Mutex<HashMap<String, Arc<Mutex<()>>>>,
    default_ttl: Duration,
}

/// Handle to the ESG backend.
///
/// Cloning is cheap: clones share the HTTP connection pool and the response cache,
/// so sibling views holding their own clone still hit the cache populated by the others.
#[derive(Debug, Clone)]
pub struct EsgClient {
    http: Client,
    base_url: Url,
    retry: RetryConfig,
    cache: Option<Arc<CacheStore>>,
}

impl Default for EsgClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl EsgClient {
    /// Create a new builder.
    pub fn builder() -> EsgClientBuilder {
        EsgClientBuilder::default()
    }

    /// Build a client from a loaded [`DashboardConfig`].
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn from_config(config: &DashboardConfig) -> Result<Self, EsgError> {
        let mut builder = Self::builder()
            .base_url(config.base_url.clone())
            .retry_enabled(config.retry);
        if let Some(t) = config.timeout {
            builder = builder.timeout(t);
        }
        if let Some(ttl) = config.cache_ttl {
            builder = builder.cache_ttl(ttl);
        }
        builder.build()
    }

    /// The backend base URL every endpoint path is joined onto.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn retry_config(&self) -> &RetryConfig {
        &self.retry
    }

    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, EsgError> {
        Ok(self.base_url.join(path)?)
    }

    pub fn cache_enabled(&self) -> bool {
        self.cache.is_some()
    }

    /// Drops every cached response.
    pub async fn clear_cache(&self) {
        if let Some(store) = &self.cache {
            store.map.write().await.clear();
        }
    }

    /// Number of stored responses. Expired entries are dropped on the next insert.
    pub async fn cache_len(&self) -> usize {
        match &self.cache {
            Some(store) => store.map.read().await.len(),
            None => 0,
        }
    }

    pub(crate) async fn cache_get(&self, url: &Url) -> Option<String> {
        let store = self.cache.as_ref()?;
        let guard = store.map.read().await;
        if let Some(entry) = guard.get(url.as_str())
            && Instant::now() <= entry.expires_at
        {
            return Some(entry.body.clone());
        }
        None
    }

    pub(crate) async fn cache_put(&self, url: &Url, body: &str) {
        let Some(store) = &self.cache else {
            return;
        };
        let now = Instant::now();
        let entry = CacheEntry {
            body: body.to_string(),
            expires_at: now + store.default_ttl,
        };
        let mut map = store.map.write().await;
        map.retain(|_, e| e.expires_at >= now);
        map.insert(url.as_str().to_string(), entry);
    }

    /// Holds the fetch slot for `url` until the guard drops.
    /// Callers waiting on the same URL re-check the cache once they get the slot.
    pub(crate) async fn cache_lock(&self, url: &Url) -> Option<OwnedMutexGuard<()>> {
        let store = self.cache.as_ref()?;
        let slot = {
            let mut inflight = store.inflight.lock().await;
            inflight.retain(|_, slot| Arc::strong_count(slot) > 1);
            inflight
                .entry(url.as_str().to_string())
                .or_default()
                .clone()
        };
        Some(slot.lock_owned().await)
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct EsgClientBuilder {
    user_agent: Option<String>,
    base_url: Option<Url>,
    retry: Option<RetryConfig>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    cache_ttl: Option<Duration>,
}

impl EsgClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the backend base URL (e.g., `http://localhost:3002/`).
    ///
    /// A trailing slash is added when missing so endpoint paths join beneath it.
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Replace the retry policy.
    #[must_use]
    pub fn retry_config(mut self, cfg: RetryConfig) -> Self {
        self.retry = Some(cfg);
        self
    }

    /// Switch retries on (with [`RetryConfig::standard`]) or off.
    #[must_use]
    pub fn retry_enabled(mut self, enabled: bool) -> Self {
        let cfg = if enabled {
            RetryConfig::standard()
        } else {
            RetryConfig::default()
        };
        self.retry = Some(cfg);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Enable in-memory caching with a default TTL.
    /// If not set, caching is disabled.
    #[must_use]
    pub fn cache_ttl(mut self, dur: Duration) -> Self {
        self.cache_ttl = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the default base URL cannot be parsed or the HTTP client
    /// fails to initialize.
    pub fn build(self) -> Result<EsgClient, EsgError> {
        let mut base_url = match self.base_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));
        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }
        let http = httpb.build()?;

        Ok(EsgClient {
            http,
            base_url,
            retry: self.retry.unwrap_or_default(),
            cache: self.cache_ttl.map(|ttl| {
                Arc::new(CacheStore {
                    map: RwLock::new(HashMap::new()),
                    inflight: Mutex::new(HashMap::new()),
                    default_ttl: ttl,
                })
            }),
        })
    }
}
