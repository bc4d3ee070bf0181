use serde::Serialize;

use crate::metrics::CompanyMetrics;

use super::chart::{
    Chart, ChartKind, ENVIRONMENTAL_PALETTE, SeriesPoint, TOTAL_DENSITY_PALETTE,
};
use super::codes::*;
use super::complement::{ComplementPolicy, complement_pair};

/// Environmental tab: overview pie plus total/density bars per topic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnvironmentalView {
    pub overview: Chart,
    pub ghg: Chart,
    pub energy: Chart,
    pub water: Chart,
    pub waste: Chart,
}

/// The four-slice `GHG, Energy, Water, Waste` pie. Missing codes give a `0` slice.
pub fn environmental_overview(metrics: &CompanyMetrics) -> Chart {
    let series = [
        ("GHG", ENV_GHG),
        ("Energy", ENV_ENERGY),
        ("Water", ENV_WATER),
        ("Waste", ENV_WASTE),
    ]
    .into_iter()
    .map(|(label, code)| SeriesPoint::new(label, metrics.value_or_zero(code)))
    .collect();

    Chart::from_series(
        ChartKind::Pie,
        "Overall Environmental Performance",
        "score",
        series,
        ENVIRONMENTAL_PALETTE,
    )
}

fn total_density(title: &str) -> Chart {
    Chart::new(ChartKind::Bar, title, &["total", "density"], TOTAL_DENSITY_PALETTE)
}

pub fn environmental_view(metrics: &CompanyMetrics, policy: ComplementPolicy) -> EnvironmentalView {
    let m = |code: &str| metrics.value_or_zero(code);

    let ghg = total_density("GHG Emissions Metrics").with_row(
        "Absolute Emissions",
        vec![m(ENV_GHG_TOTAL), m(ENV_GHG_INTENSITY)],
    );

    let (renewable_pct, non_renewable_pct) = complement_pair(m(ENV_ENERGY_RENEWABLE_PCT), policy);
    let energy = total_density("Energy Consumption")
        .with_row("Renewable Energy", vec![m(ENV_ENERGY_RENEWABLE), renewable_pct])
        .with_row(
            "Non-Renewable Energy",
            vec![m(ENV_ENERGY_NON_RENEWABLE), non_renewable_pct],
        );

    let water = total_density("Water Management")
        .with_row(
            "Total Consumption",
            vec![m(ENV_WATER_CONSUMPTION), m(ENV_WATER_INTENSITY)],
        )
        .with_row(
            "Recycled Water",
            vec![m(ENV_WATER_RECYCLED), m(ENV_WATER_RECYCLED_PCT)],
        );

    let (recycled_pct, landfill_pct) = complement_pair(m(ENV_WASTE_RECYCLED_PCT), policy);
    let waste = total_density("Waste Management")
        .with_row("Recycled Waste", vec![m(ENV_WASTE_RECYCLED), recycled_pct])
        .with_row("Landfill Waste", vec![m(ENV_WASTE_LANDFILL), landfill_pct]);

    EnvironmentalView {
        overview: environmental_overview(metrics),
        ghg,
        energy,
        water,
        waste,
    }
}
