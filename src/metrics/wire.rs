use serde_json::Value;

use crate::core::{
    EsgError,
    wire::{row_values, scalar_text},
};

use super::model::{CompanyMetrics, MetricValue};

/// Decodes the metric map.
///
/// The usual shape is `{ "ENV_GHG": { "value": "75", "unit": "tCO2e" }, ... }`. Bare scalars
/// (`{ "ENV_GHG": 75 }`) are accepted with an empty unit, and a row envelope wrapping the map
/// is unwrapped to its first row.
pub(crate) fn decode_metrics(text: &str) -> Result<CompanyMetrics, EsgError> {
    let root: Value = serde_json::from_str(text)?;
    let map = match root {
        Value::Object(map) => map,
        other => match row_values(other)?.into_iter().next() {
            Some(Value::Object(map)) => map,
            Some(other) => {
                return Err(EsgError::Data(format!(
                    "company-metrics: expected an object, got `{other}`"
                )));
            }
            None => return Ok(CompanyMetrics::new()),
        },
    };

    Ok(map
        .into_iter()
        .filter_map(|(code, entry)| {
            let metric = match &entry {
                Value::Object(fields) => MetricValue {
                    value: fields.get("value").and_then(scalar_text).unwrap_or_default(),
                    unit: fields.get("unit").and_then(scalar_text).unwrap_or_default(),
                },
                scalar => MetricValue {
                    value: scalar_text(scalar)?,
                    unit: String::new(),
                },
            };
            Some((code, metric))
        })
        .collect())
}
