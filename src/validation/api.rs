use serde_json::Value;

use crate::core::{
    EsgClient, EsgError,
    client::{CacheMode, RetryConfig, constants::PATH_VALIDATION_COMPANY},
    fetch::{self, Get},
};

use super::model::ValidationReport;
use super::wire::ValidationRow;

fn normalize_json(raw: Option<Value>) -> Option<Value> {
    match raw? {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        // Embedded documents come back double-encoded; keep the text if it is not JSON.
        Value::String(s) => Some(serde_json::from_str(&s).unwrap_or(Value::String(s))),
        other => Some(other),
    }
}

pub(super) async fn fetch_validation(
    client: &EsgClient,
    cache_mode: CacheMode,
    retry_override: Option<&RetryConfig>,
) -> Result<Vec<ValidationReport>, EsgError> {
    let get = Get {
        path: PATH_VALIDATION_COMPANY,
        query: &[],
        caller: "validation_company",
        company: "",
    };
    let rows: Vec<ValidationRow> =
        fetch::fetch_rows(client, &get, cache_mode, retry_override).await?;

    Ok(rows
        .into_iter()
        .map(|row| ValidationReport {
            report: row.report.unwrap_or_default(),
            missing_fields: row.total_missing_fields_count.unwrap_or(0),
            final_score: row.final_score.unwrap_or(0.0),
            completeness_score: row.completeness_score,
            quality_score: row.quality_score,
            file_path: row.file_path.filter(|p| !p.trim().is_empty()),
            json: normalize_json(row.json),
        })
        .collect())
}
