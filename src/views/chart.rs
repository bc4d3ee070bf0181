//! Chart descriptions consumed by the front end (recharts-shaped rows) and the text renderer.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Four-slice environmental overview.
pub const ENVIRONMENTAL_PALETTE: &[&str] = &["#059669", "#34d399", "#0ea5e9", "#dc2626"];
/// Social and governance charts.
pub const TRIAD_PALETTE: &[&str] = &["#059669", "#0ea5e9", "#6366f1"];
/// Pillar breakdown pie on the overall tab.
pub const BREAKDOWN_PALETTE: &[&str] = &["#059669", "#047857", "#065f46"];
/// Trend area charts.
pub const AREA_PALETTE: &[&str] = &["#059669"];
/// Total (left axis) and density (right axis) bars.
pub const TOTAL_DENSITY_PALETTE: &[&str] = &["#34d399", "#059669"];
/// Health and safety bars.
pub const ALERT_PALETTE: &[&str] = &["#dc2626", "#eab308"];

/// Formats a chart value for display: whole numbers without decimals, others with up to two.
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{value:.0}");
    }
    let text = format!("{value:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Pie,
    Bar,
    StackedBar,
    Area,
    Radar,
}

/// One category of a chart: a label and one value per value key.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRow {
    pub label: String,
    pub values: Vec<f64>,
}

/// A single `{ name, value }` pair.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SeriesPoint {
    pub name: String,
    pub value: f64,
}

impl SeriesPoint {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

pub type ChartSeries = Vec<SeriesPoint>;

/// A chart: kind, title, the keys each row carries, the rows, and a fixed palette.
///
/// A chart with no rows is valid; use [`Chart::is_empty`] to decide whether to draw it.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub kind: ChartKind,
    pub title: String,
    pub value_keys: Vec<String>,
    pub rows: Vec<ChartRow>,
    pub palette: &'static [&'static str],
}

impl Chart {
    pub fn new(
        kind: ChartKind,
        title: impl Into<String>,
        value_keys: &[&str],
        palette: &'static [&'static str],
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            value_keys: value_keys.iter().map(|k| (*k).to_string()).collect(),
            rows: Vec::new(),
            palette,
        }
    }

    /// A single-key chart built from `{ name, value }` points.
    pub fn from_series(
        kind: ChartKind,
        title: impl Into<String>,
        key: &str,
        series: ChartSeries,
        palette: &'static [&'static str],
    ) -> Self {
        let mut chart = Self::new(kind, title, &[key], palette);
        for point in series {
            chart.push_row(point.name, vec![point.value]);
        }
        chart
    }

    /// Appends a row. Missing trailing values are filled with `0.0`; extras are dropped.
    pub fn push_row(&mut self, label: impl Into<String>, mut values: Vec<f64>) {
        values.resize(self.value_keys.len(), 0.0);
        self.rows.push(ChartRow {
            label: label.into(),
            values,
        });
    }

    #[must_use]
    pub fn with_row(mut self, label: impl Into<String>, values: Vec<f64>) -> Self {
        self.push_row(label, values);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Color for the `index`-th slice or series, cycling through the palette.
    pub fn color_for(&self, index: usize) -> &'static str {
        if self.palette.is_empty() {
            return "#059669";
        }
        self.palette[index % self.palette.len()]
    }

    /// The value of `key` in the row labelled `label`.
    pub fn value(&self, label: &str, key: &str) -> Option<f64> {
        let idx = self.value_keys.iter().position(|k| k == key)?;
        self.rows
            .iter()
            .find(|r| r.label == label)
            .and_then(|r| r.values.get(idx).copied())
    }

    /// The first-key values as `{ name, value }` points.
    pub fn series(&self) -> ChartSeries {
        self.rows
            .iter()
            .map(|r| SeriesPoint::new(r.label.clone(), r.values.first().copied().unwrap_or(0.0)))
            .collect()
    }

    /// Sum of the first-key values.
    pub fn total(&self) -> f64 {
        self.rows
            .iter()
            .filter_map(|r| r.values.first())
            .sum()
    }
}

impl Serialize for Chart {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let rows: Vec<RowRef<'_>> = self
            .rows
            .iter()
            .map(|row| RowRef {
                keys: &self.value_keys,
                row,
            })
            .collect();
        let mut map = serializer.serialize_map(Some(5))?;
        map.serialize_entry("kind", &self.kind)?;
        map.serialize_entry("title", &self.title)?;
        map.serialize_entry("value_keys", &self.value_keys)?;
        map.serialize_entry("data", &rows)?;
        map.serialize_entry("palette", self.palette)?;
        map.end()
    }
}

/// Serializes as a recharts data row: `{"name": label, "<key>": value, ...}`.
struct RowRef<'a> {
    keys: &'a [String],
    row: &'a ChartRow,
}

impl Serialize for RowRef<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.keys.len() + 1))?;
        map.serialize_entry("name", &self.row.label)?;
        for (key, value) in self.keys.iter().zip(&self.row.values) {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
