use chrono::{DateTime, Utc};
use serde::Serialize;

/// A news/insight item from the realtime feed. The body is Markdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsInsight {
    pub company: Option<String>,
    pub title: Option<String>,
    /// Parsed publication time, when the backend timestamp is recognizable.
    pub published_at: Option<DateTime<Utc>>,
    /// The timestamp exactly as the backend sent it.
    pub timestamp_text: Option<String>,
    pub markdown: String,
}
