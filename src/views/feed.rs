use serde::Serialize;

use crate::insights::NewsInsight;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsightCard {
    pub title: Option<String>,
    /// `YYYY-MM-DD HH:MM` (UTC) when parsed, else the backend text.
    pub published: Option<String>,
    pub markdown: String,
}

/// Insights tab: the realtime feed in the order the backend returned it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsightsView {
    pub items: Vec<InsightCard>,
}

pub fn insights_view(insights: &[NewsInsight]) -> InsightsView {
    InsightsView {
        items: insights
            .iter()
            .map(|n| InsightCard {
                title: n.title.clone(),
                published: n
                    .published_at
                    .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                    .or_else(|| n.timestamp_text.clone()),
                markdown: n.markdown.clone(),
            })
            .collect(),
    }
}
