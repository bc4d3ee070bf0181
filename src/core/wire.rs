use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::core::EsgError;

/// Parses a backend number that may carry thousands separators or a trailing `%`.
///
/// Returns `None` for empty, non-numeric or non-finite input.
pub fn parse_number(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .trim()
        .trim_end_matches('%')
        .chars()
        .filter(|c| *c != ',' && *c != '_')
        .collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AnyScalar {
    Num(f64),
    Text(String),
    Flag(bool),
    Other(Value),
}

/// Accepts a JSON number, a numeric string, or null. Anything else decodes as `None`.
pub(crate) fn de_lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<AnyScalar>::deserialize(deserializer)? {
        Some(AnyScalar::Num(n)) if n.is_finite() => Some(n),
        Some(AnyScalar::Text(s)) => parse_number(&s),
        _ => None,
    })
}

/// Accepts a non-negative whole number given as a number or string.
pub(crate) fn de_lenient_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = de_lenient_f64(deserializer)?;
    Ok(value.and_then(|v| {
        let rounded = v.round();
        if rounded >= 0.0 && rounded <= f64::from(u32::MAX) {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            Some(rounded as u32)
        } else {
            None
        }
    }))
}

/// Accepts a string, number or boolean and renders it as a string.
pub(crate) fn de_lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<AnyScalar>::deserialize(deserializer)? {
        Some(AnyScalar::Text(s)) => Some(s),
        Some(AnyScalar::Num(n)) => Some(format_number(n)),
        Some(AnyScalar::Flag(b)) => Some(b.to_string()),
        Some(AnyScalar::Other(Value::Null)) | None => None,
        Some(AnyScalar::Other(v)) => Some(v.to_string()),
    })
}

/// Formats a number without a trailing `.0` for whole values.
pub(crate) fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{n:.0}")
    } else {
        n.to_string()
    }
}

/// Unwraps the row envelopes the backend produces.
///
/// SQL-backed endpoints answer either a bare array of rows, a single row object, or a
/// `[rows, fields]` pair where the first element is the row array.
pub(crate) fn row_values(root: Value) -> Result<Vec<Value>, EsgError> {
    match root {
        Value::Array(mut items) => {
            if matches!(items.first(), Some(Value::Array(_)))
                && let Value::Array(rows) = items.swap_remove(0)
            {
                return Ok(rows);
            }
            Ok(items)
        }
        Value::Object(map) => Ok(vec![Value::Object(map)]),
        Value::Null => Ok(Vec::new()),
        other => Err(EsgError::Data(format!(
            "expected an array of rows, got `{other}`"
        ))),
    }
}

pub(crate) fn parse_rows<T: DeserializeOwned>(text: &str) -> Result<Vec<T>, EsgError> {
    let root: Value = serde_json::from_str(text)?;
    row_values(root)?
        .into_iter()
        .map(|row| serde_json::from_value(row).map_err(EsgError::from))
        .collect()
}

/// Renders a JSON scalar as text; `None` for null, arrays and objects.
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => n.as_f64().map(format_number),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Parses the timestamp formats the backend emits: RFC 3339, `YYYY-MM-DD HH:MM:SS`
/// (with a space or `T`), a bare date, or Unix seconds. Naive values are taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|n| n.and_utc());
    }
    raw.parse::<i64>()
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
}
