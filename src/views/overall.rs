use std::collections::BTreeMap;

use serde::Serialize;

use crate::metrics::CompanyMetrics;
use crate::scores::{EsgScoreRecord, Pillar, Rating};

use super::assessment::{Assessment, assess};
use super::chart::{AREA_PALETTE, BREAKDOWN_PALETTE, Chart, ChartKind, SeriesPoint};
use super::codes::{ENV_GHG_TOTAL, GOV_BOARD_INDEPENDENCE, SOC_FEMALE_PCT};

/// Overall score and letter rating, from the first score row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Headline {
    pub company: String,
    pub score: f64,
    pub rating: Rating,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreCard {
    pub pillar: Pillar,
    pub title: String,
    pub score: f64,
    /// Percent change against the previous period, when one exists and is non-zero.
    pub change: Option<f64>,
}

/// A headline figure read straight from the metric map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Kpi {
    pub label: &'static str,
    pub value: Option<f64>,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverallView {
    pub headline: Option<Headline>,
    pub cards: Vec<ScoreCard>,
    pub breakdown: Chart,
    /// One area chart per pillar, points ordered by period.
    pub trends: Vec<Chart>,
    pub highlights: Vec<Kpi>,
    pub assessment: Option<Assessment>,
}

/// Records keyed by period label; the first record seen for a period wins.
fn by_period(scores: &[EsgScoreRecord]) -> BTreeMap<&str, &EsgScoreRecord> {
    let mut periods = BTreeMap::new();
    for record in scores {
        if let Some(period) = record.period.as_deref() {
            periods.entry(period).or_insert(record);
        }
    }
    periods
}

fn percent_change(current: f64, previous: f64) -> Option<f64> {
    (previous != 0.0).then(|| (current - previous) / previous * 100.0)
}

pub fn score_breakdown(record: Option<&EsgScoreRecord>) -> Chart {
    let series = record
        .map(|r| {
            Pillar::ALL
                .into_iter()
                .map(|p| SeriesPoint::new(p.label(), r.pillar(p)))
                .collect()
        })
        .unwrap_or_default();
    Chart::from_series(ChartKind::Pie, "ESG Breakdown", "score", series, BREAKDOWN_PALETTE)
}

pub fn overall_view(
    company: &str,
    scores: &[EsgScoreRecord],
    metrics: &CompanyMetrics,
) -> OverallView {
    let current = scores.first();
    let periods = by_period(scores);

    // The period just before the headline row's period.
    let previous = current
        .and_then(|c| c.period.as_deref())
        .and_then(|p| periods.range(..p).next_back().map(|(_, r)| *r));

    let cards = current
        .map(|c| {
            Pillar::ALL
                .into_iter()
                .map(|pillar| ScoreCard {
                    pillar,
                    title: format!("{} Score", pillar.label()),
                    score: c.pillar(pillar),
                    change: previous.and_then(|prev| {
                        percent_change(c.pillar(pillar), prev.pillar(pillar))
                    }),
                })
                .collect()
        })
        .unwrap_or_default();

    let trends = Pillar::ALL
        .into_iter()
        .map(|pillar| {
            let series = periods
                .iter()
                .map(|(period, r)| SeriesPoint::new(*period, r.pillar(pillar)))
                .collect();
            Chart::from_series(
                ChartKind::Area,
                format!("{} Performance Trend", pillar.label()),
                "value",
                series,
                AREA_PALETTE,
            )
        })
        .collect();

    let highlights = [
        ("Carbon Emissions", ENV_GHG_TOTAL),
        ("Female Workforce", SOC_FEMALE_PCT),
        ("Board Independence", GOV_BOARD_INDEPENDENCE),
    ]
    .into_iter()
    .map(|(label, code)| Kpi {
        label,
        value: metrics.value(code),
        unit: metrics.unit(code).to_string(),
    })
    .collect();

    OverallView {
        headline: current.map(|c| Headline {
            company: c.company.clone().unwrap_or_else(|| company.to_string()),
            score: c.total,
            rating: c.rating.clone(),
        }),
        cards,
        breakdown: score_breakdown(current),
        trends,
        highlights,
        assessment: current.map(assess),
    }
}
