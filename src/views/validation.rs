use serde::Serialize;

use crate::validation::ValidationReport;

use super::chart::{Chart, ChartKind, TRIAD_PALETTE};

pub const VALIDATION_HEADERS: [&str; 5] = ["Company Name", "Missing Value", "Score", "PDF", "JSON"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationRowView {
    pub company: String,
    pub missing_value: u32,
    pub score: f64,
    pub pdf: Option<String>,
    /// The extracted document, pretty-printed.
    pub json: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationView {
    pub headers: [&'static str; 5],
    pub rows: Vec<ValidationRowView>,
    /// Missing values and score per report.
    pub chart: Chart,
}

pub fn validation_view(reports: &[ValidationReport]) -> ValidationView {
    let mut chart = Chart::new(
        ChartKind::Bar,
        "Validation Results",
        &["missingValue", "score"],
        TRIAD_PALETTE,
    );
    let rows = reports
        .iter()
        .map(|r| {
            chart.push_row(r.report.clone(), vec![f64::from(r.missing_fields), r.final_score]);
            ValidationRowView {
                company: r.report.clone(),
                missing_value: r.missing_fields,
                score: r.final_score,
                pdf: r.file_path.clone(),
                json: r
                    .json
                    .as_ref()
                    .and_then(|v| serde_json::to_string_pretty(v).ok()),
            }
        })
        .collect();

    ValidationView {
        headers: VALIDATION_HEADERS,
        rows,
        chart,
    }
}
