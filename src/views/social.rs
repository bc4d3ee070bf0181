use serde::Serialize;

use crate::metrics::CompanyMetrics;

use super::chart::{ALERT_PALETTE, Chart, ChartKind, SeriesPoint, TRIAD_PALETTE};
use super::codes::*;
use super::complement::{ComplementPolicy, complement_pair};

/// Social tab.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SocialView {
    /// Female/Male workforce split.
    pub gender: Chart,
    pub age: Chart,
    pub training: Chart,
    pub health_safety: Chart,
}

pub fn social_view(metrics: &CompanyMetrics, policy: ComplementPolicy) -> SocialView {
    let m = |code: &str| metrics.value_or_zero(code);

    let (female, male) = complement_pair(m(SOC_FEMALE_PCT), policy);
    let gender = Chart::from_series(
        ChartKind::Pie,
        "Gender Diversity",
        "value",
        vec![SeriesPoint::new("Female", female), SeriesPoint::new("Male", male)],
        TRIAD_PALETTE,
    );

    let age = Chart::from_series(
        ChartKind::Bar,
        "Age Distribution",
        "value",
        vec![
            SeriesPoint::new("<30", m(SOC_AGE_UNDER_30)),
            SeriesPoint::new("30-50", m(SOC_AGE_30_50)),
            SeriesPoint::new(">50", m(SOC_AGE_OVER_50)),
        ],
        TRIAD_PALETTE,
    );

    let training = Chart::from_series(
        ChartKind::Radar,
        "Training & Development",
        "score",
        [
            ("Technical Skills", SOC_TRAINING_TECHNICAL),
            ("Leadership", SOC_TRAINING_LEADERSHIP),
            ("Soft Skills", SOC_TRAINING_SOFT_SKILLS),
            ("Compliance", SOC_TRAINING_COMPLIANCE),
            ("Innovation", SOC_TRAINING_INNOVATION),
        ]
        .into_iter()
        .map(|(label, code)| SeriesPoint::new(label, m(code)))
        .collect(),
        TRIAD_PALETTE,
    );

    let health_safety = Chart::from_series(
        ChartKind::Bar,
        "Health & Safety",
        "value",
        vec![
            SeriesPoint::new("Injury Rate", m(SOC_INJURY_RATE)),
            SeriesPoint::new("Fatalities", m(SOC_FATALITIES)),
            SeriesPoint::new("Lost Days", m(SOC_LOST_DAYS)),
        ],
        ALERT_PALETTE,
    );

    SocialView {
        gender,
        age,
        training,
        health_safety,
    }
}
