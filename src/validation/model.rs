use serde::Serialize;
use serde_json::Value;

/// Completeness/quality check of one processed report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    /// Report (company) name.
    pub report: String,
    /// Number of expected fields the extraction could not fill.
    pub missing_fields: u32,
    /// Final validation score. Missing scores are `0.0`.
    pub final_score: f64,
    pub completeness_score: Option<f64>,
    pub quality_score: Option<f64>,
    /// Backend path of the source PDF.
    pub file_path: Option<String>,
    /// The extracted JSON document, if the backend sent one.
    pub json: Option<Value>,
}
