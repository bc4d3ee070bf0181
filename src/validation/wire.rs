use serde::Deserialize;
use serde_json::Value;

use crate::core::wire::{de_lenient_f64, de_lenient_string, de_lenient_u32};

/// One row of `validation-company`: the backend's quality check of one extracted report.
#[derive(Deserialize)]
pub(crate) struct ValidationRow {
    #[serde(
        default,
        alias = "Report",
        alias = "report_name",
        deserialize_with = "de_lenient_string"
    )]
    pub(crate) report: Option<String>,

    #[serde(
        default,
        alias = "missing_fields",
        alias = "missing_value",
        deserialize_with = "de_lenient_u32"
    )]
    pub(crate) total_missing_fields_count: Option<u32>,

    #[serde(default, alias = "score", deserialize_with = "de_lenient_f64")]
    pub(crate) final_score: Option<f64>,

    #[serde(default, alias = "completeness", deserialize_with = "de_lenient_f64")]
    pub(crate) completeness_score: Option<f64>,

    #[serde(default, alias = "quality", deserialize_with = "de_lenient_f64")]
    pub(crate) quality_score: Option<f64>,

    #[serde(
        default,
        alias = "pdf_path",
        alias = "path",
        deserialize_with = "de_lenient_string"
    )]
    pub(crate) file_path: Option<String>,

    // Either an object or a JSON document serialized as a string.
    #[serde(default, alias = "json_data")]
    pub(crate) json: Option<Value>,
}
