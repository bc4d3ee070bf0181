use serde::Serialize;

use crate::metrics::CompanyMetrics;

use super::chart::{Chart, ChartKind, SeriesPoint, TRIAD_PALETTE};
use super::codes::*;
use super::complement::{ComplementPolicy, complement_pair};

/// Governance tab.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GovernanceView {
    /// Independent vs. other directors.
    pub board: Chart,
    /// Female/male split per level, stacked.
    pub diversity: Chart,
    pub certifications: Chart,
    pub frameworks: Chart,
}

pub fn governance_view(metrics: &CompanyMetrics, policy: ComplementPolicy) -> GovernanceView {
    let m = |code: &str| metrics.value_or_zero(code);

    let (independent, other) = complement_pair(m(GOV_BOARD_INDEPENDENCE), policy);
    let board = Chart::from_series(
        ChartKind::Pie,
        "Board Composition",
        "value",
        vec![
            SeriesPoint::new("Independent", independent),
            SeriesPoint::new("Other", other),
        ],
        TRIAD_PALETTE,
    );

    let mut diversity = Chart::new(
        ChartKind::StackedBar,
        "Management Diversity",
        &["female", "male"],
        TRIAD_PALETTE,
    );
    for (level, code) in [("Board", GOV_BOARD_FEMALE), ("Management", GOV_MGMT_FEMALE)] {
        let (female, male) = complement_pair(m(code), policy);
        diversity.push_row(level, vec![female, male]);
    }

    let certifications = Chart::from_series(
        ChartKind::Radar,
        "Certifications",
        "value",
        [
            ("ISO 14001", GOV_CERT_ISO14001),
            ("ISO 45001", GOV_CERT_ISO45001),
            ("ISO 27001", GOV_CERT_ISO27001),
            ("ISO 9001", GOV_CERT_ISO9001),
        ]
        .into_iter()
        .map(|(label, code)| SeriesPoint::new(label, m(code)))
        .collect(),
        TRIAD_PALETTE,
    );

    let frameworks = Chart::from_series(
        ChartKind::Bar,
        "Framework Alignment",
        "compliance",
        [
            ("GRI", GOV_FRAMEWORK_GRI),
            ("SASB", GOV_FRAMEWORK_SASB),
            ("TCFD", GOV_FRAMEWORK_TCFD),
            ("SDGs", GOV_FRAMEWORK_SDGS),
        ]
        .into_iter()
        .map(|(label, code)| SeriesPoint::new(label, m(code)))
        .collect(),
        TRIAD_PALETTE,
    );

    GovernanceView {
        board,
        diversity,
        certifications,
        frameworks,
    }
}
