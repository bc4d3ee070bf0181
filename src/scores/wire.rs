use serde::Deserialize;

use crate::core::wire::{de_lenient_f64, de_lenient_string};

/// One row of `score-data`. Column names follow the backend's scoring table.
#[derive(Deserialize)]
pub(crate) struct ScoreRow {
    #[serde(default, alias = "Company", alias = "company_name")]
    pub(crate) company: Option<String>,

    #[serde(
        default,
        rename = "Total ESG Score",
        alias = "total_esg_score",
        alias = "total",
        deserialize_with = "de_lenient_f64"
    )]
    pub(crate) total: Option<f64>,

    #[serde(
        default,
        rename = "Letter Rating",
        alias = "letter_rating",
        alias = "rating",
        deserialize_with = "de_lenient_string"
    )]
    pub(crate) rating: Option<String>,

    #[serde(
        default,
        rename = "Environmental Score",
        alias = "Environment Score",
        alias = "environmental_score",
        alias = "environment_score",
        deserialize_with = "de_lenient_f64"
    )]
    pub(crate) environmental: Option<f64>,

    #[serde(
        default,
        rename = "Social Score",
        alias = "social_score",
        deserialize_with = "de_lenient_f64"
    )]
    pub(crate) social: Option<f64>,

    #[serde(
        default,
        rename = "Governance Score",
        alias = "governance_score",
        deserialize_with = "de_lenient_f64"
    )]
    pub(crate) governance: Option<f64>,

    // Reporting period; numeric years arrive as numbers.
    #[serde(
        default,
        rename = "Year",
        alias = "year",
        alias = "period",
        alias = "Period",
        deserialize_with = "de_lenient_string"
    )]
    pub(crate) period: Option<String>,
}
