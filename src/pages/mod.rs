//! Page state machines: each page owns its data and moves
//! `Idle -> Loading -> {Loaded | Failed}` as loads start and finish.

pub mod analysis;
pub mod contact;
pub mod content;
pub mod evaluate;
pub mod validation;

pub use analysis::{AnalysisPage, DashboardTab, TabView, load_snapshot};
pub use contact::{ContactError, ContactField, ContactForm, ContactPage};
pub use content::{Card, Section};
pub use evaluate::{EvaluatePage, SelectedFile, Submission, UploadStatus, upload_and_analyze};
pub use validation::ValidationPage;

use crate::core::EsgError;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Loaded(T),
    /// The load failed; the message is the error's display text.
    Failed(String),
}

/// Identifies one started load. Only the most recent ticket's result is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    key: String,
}

impl LoadTicket {
    /// What the load is for (e.g. the company name).
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// A value loaded asynchronously, guarded against out-of-order completions.
#[derive(Debug, Clone)]
pub struct Loadable<T> {
    state: LoadState<T>,
    generation: u64,
    key: Option<String>,
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Self {
            state: LoadState::Idle,
            generation: 0,
            key: None,
        }
    }
}

impl<T> Loadable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a load for `key`, superseding any load still in flight.
    pub fn begin(&mut self, key: impl Into<String>) -> LoadTicket {
        self.generation += 1;
        let key = key.into();
        self.key = Some(key.clone());
        self.state = LoadState::Loading;
        LoadTicket {
            generation: self.generation,
            key,
        }
    }

    /// Applies a finished load. Returns `false` (and changes nothing) if `ticket` is stale.
    pub fn finish(&mut self, ticket: LoadTicket, result: Result<T, EsgError>) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                key = %ticket.key,
                stale = ticket.generation,
                current = self.generation,
                "dropping stale load result"
            );
            return false;
        }
        self.state = match result {
            Ok(value) => LoadState::Loaded(value),
            Err(e) => {
                tracing::warn!(key = %ticket.key, error = %e, "load failed");
                LoadState::Failed(e.to_string())
            }
        };
        true
    }

    /// Abandons the load in flight, if any; its result will be dropped.
    pub fn cancel(&mut self) {
        self.generation += 1;
        if matches!(self.state, LoadState::Loading) {
            self.state = LoadState::Idle;
        }
    }

    pub const fn state(&self) -> &LoadState<T> {
        &self.state
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub const fn value(&self) -> Option<&T> {
        match &self.state {
            LoadState::Loaded(v) => Some(v),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            LoadState::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    pub const fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading)
    }
}
