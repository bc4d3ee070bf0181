use chrono::{DateTime, Utc};
use serde::Serialize;

/// A greenwashing assessment: how much of the reported sustainability performance the
/// backend considers unsubstantiated, with its reasoning in Markdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GreenwashFinding {
    pub company: Option<String>,
    /// Greenwashing rate in percent. Missing rates are `0.0`.
    pub rate: f64,
    pub reason_markdown: String,
    pub published_at: Option<DateTime<Utc>>,
}
