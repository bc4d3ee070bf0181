use serde::Deserialize;

use crate::core::wire::de_lenient_string;

/// One row of `realtime-data`.
#[derive(Deserialize)]
pub(crate) struct InsightRow {
    #[serde(default, alias = "Company")]
    pub(crate) company: Option<String>,

    #[serde(default, alias = "Title", alias = "headline")]
    pub(crate) title: Option<String>,

    #[serde(
        default,
        alias = "date",
        alias = "Date",
        alias = "time",
        alias = "created_at",
        alias = "published_at",
        deserialize_with = "de_lenient_string"
    )]
    pub(crate) timestamp: Option<String>,

    // Markdown body.
    #[serde(
        default,
        alias = "Content",
        alias = "insight",
        alias = "summary",
        alias = "news",
        deserialize_with = "de_lenient_string"
    )]
    pub(crate) content: Option<String>,
}
