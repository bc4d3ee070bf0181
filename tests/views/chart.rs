use esg_dashboard::views::chart::{ENVIRONMENTAL_PALETTE, TOTAL_DENSITY_PALETTE};
use esg_dashboard::views::{Chart, ChartKind, SeriesPoint, format_value};
use serde_json::json;

#[test]
fn serializes_as_recharts_rows() {
    let chart = Chart::new(
        ChartKind::Bar,
        "Water Management",
        &["total", "density"],
        TOTAL_DENSITY_PALETTE,
    )
    .with_row("Total Consumption", vec![850.0, 1.5])
    .with_row("Recycled Water", vec![300.0]);

    let value = serde_json::to_value(&chart).unwrap();
    assert_eq!(
        value,
        json!({
            "kind": "bar",
            "title": "Water Management",
            "value_keys": ["total", "density"],
            "data": [
                { "name": "Total Consumption", "total": 850.0, "density": 1.5 },
                { "name": "Recycled Water", "total": 300.0, "density": 0.0 }
            ],
            "palette": ["#34d399", "#059669"]
        })
    );
}

#[test]
fn rows_are_padded_or_truncated_to_the_keys() {
    let mut chart = Chart::new(ChartKind::StackedBar, "Mix", &["a", "b"], TOTAL_DENSITY_PALETTE);
    chart.push_row("short", vec![1.0]);
    chart.push_row("long", vec![1.0, 2.0, 3.0]);

    assert_eq!(chart.rows[0].values, vec![1.0, 0.0]);
    assert_eq!(chart.rows[1].values, vec![1.0, 2.0]);
    assert_eq!(chart.value("long", "b"), Some(2.0));
    assert_eq!(chart.value("long", "c"), None);
    assert_eq!(chart.value("missing", "a"), None);
}

#[test]
fn series_total_and_palette_cycling() {
    let chart = Chart::from_series(
        ChartKind::Pie,
        "Overview",
        "score",
        vec![
            SeriesPoint::new("GHG", 75.0),
            SeriesPoint::new("Energy", 62.0),
            SeriesPoint::new("Water", 80.0),
            SeriesPoint::new("Waste", 0.0),
            SeriesPoint::new("Extra", 3.0),
        ],
        ENVIRONMENTAL_PALETTE,
    );

    assert_eq!(chart.total(), 220.0);
    assert_eq!(chart.series()[1], SeriesPoint::new("Energy", 62.0));
    assert_eq!(chart.color_for(4), chart.color_for(0));
    assert!(!chart.is_empty());
}

#[test]
fn value_formatting() {
    assert_eq!(format_value(75.0), "75");
    assert_eq!(format_value(42.5), "42.5");
    assert_eq!(format_value(0.126), "0.13");
    assert_eq!(format_value(-3.10), "-3.1");
    assert_eq!(format_value(0.0), "0");
}
