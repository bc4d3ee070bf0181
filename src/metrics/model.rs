use std::collections::BTreeMap;

use serde::Serialize;

use crate::core::wire::parse_number;

/// One reported metric: the raw value text and its unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricValue {
    pub value: String,
    pub unit: String,
}

impl MetricValue {
    pub fn new(value: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            unit: unit.into(),
        }
    }

    /// The value as a number, if it parses as one (`"1,250"` and `"42%"` do).
    pub fn as_f64(&self) -> Option<f64> {
        parse_number(&self.value)
    }
}

/// Metric code -> value map for one company (`company-metrics`).
///
/// Codes follow the backend's `PILLAR_Name` convention, e.g. `ENV_GHG` or `SOC_Female_Pct`.
/// Iteration is ordered by code.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CompanyMetrics {
    entries: BTreeMap<String, MetricValue>,
}

impl CompanyMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, code: impl Into<String>, value: MetricValue) {
        self.entries.insert(code.into(), value);
    }

    pub fn get(&self, code: &str) -> Option<&MetricValue> {
        self.entries.get(code)
    }

    /// The numeric value of `code`, if present and numeric.
    pub fn value(&self, code: &str) -> Option<f64> {
        self.get(code).and_then(MetricValue::as_f64)
    }

    /// The numeric value of `code`; a missing or non-numeric value counts as `0.0`.
    pub fn value_or_zero(&self, code: &str) -> f64 {
        self.value(code).unwrap_or(0.0)
    }

    /// The unit of `code`, or `""` when missing.
    pub fn unit(&self, code: &str) -> &str {
        self.get(code).map_or("", |m| m.unit.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetricValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Entries whose code starts with `prefix` (e.g. `"ENV_"`).
    pub fn with_prefix<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a MetricValue)> + 'a {
        self.iter().filter(move |(k, _)| k.starts_with(prefix))
    }
}

impl FromIterator<(String, MetricValue)> for CompanyMetrics {
    fn from_iter<I: IntoIterator<Item = (String, MetricValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
