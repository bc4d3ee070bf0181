use serde::Serialize;

use crate::greenwash::GreenwashFinding;

use super::chart::{Chart, ChartKind, SeriesPoint};
use super::complement::{ComplementPolicy, complement_pair};

const GAUGE_PALETTE: &[&str] = &["#dc2626", "#059669"];

/// Greenwash tab: a two-slice gauge for the latest finding plus every finding's reasoning.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GreenwashView {
    /// `Greenwashing` vs. `Substantiated`; empty when there are no findings.
    pub gauge: Chart,
    pub rate: Option<f64>,
    pub findings: Vec<GreenwashFinding>,
}

pub fn greenwash_view(findings: &[GreenwashFinding], policy: ComplementPolicy) -> GreenwashView {
    let latest = findings.first();
    let series = latest
        .map(|f| {
            let (rate, rest) = complement_pair(f.rate, policy);
            vec![
                SeriesPoint::new("Greenwashing", rate),
                SeriesPoint::new("Substantiated", rest),
            ]
        })
        .unwrap_or_default();

    GreenwashView {
        gauge: Chart::from_series(
            ChartKind::Pie,
            "Greenwashing Rate",
            "value",
            series,
            GAUGE_PALETTE,
        ),
        rate: latest.map(|f| f.rate),
        findings: findings.to_vec(),
    }
}
