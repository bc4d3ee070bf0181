use serde::Deserialize;

use crate::core::wire::{de_lenient_f64, de_lenient_string};

/// One row of `greenwash-data`.
#[derive(Deserialize)]
pub(crate) struct GreenwashRow {
    #[serde(default, alias = "Company")]
    pub(crate) company: Option<String>,

    #[serde(
        default,
        rename = "greenwashing_rate",
        alias = "Greenwashing Rate",
        alias = "greenwash_rate",
        alias = "rate",
        deserialize_with = "de_lenient_f64"
    )]
    pub(crate) rate: Option<f64>,

    #[serde(
        default,
        alias = "Reason",
        alias = "reasons",
        alias = "explanation",
        deserialize_with = "de_lenient_string"
    )]
    pub(crate) reason: Option<String>,

    #[serde(
        default,
        alias = "date",
        alias = "Date",
        alias = "created_at",
        deserialize_with = "de_lenient_string"
    )]
    pub(crate) timestamp: Option<String>,
}
