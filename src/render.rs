//! Plain-text rendering of view models for terminals.

use std::fmt::{self, Write};

use crate::pages::{Section, TabView};
use crate::shell::Route;
use crate::views::{
    Chart, ChartKind, EnvironmentalView, GovernanceView, GreenwashView, InsightsView,
    OverallView, SocialView, ValidationView, format_value,
};

const BAR_WIDTH: usize = 30;

fn bar(value: f64, max: f64) -> String {
    if max <= 0.0 || !value.is_finite() || value <= 0.0 {
        return String::new();
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let len = ((value / max) * BAR_WIDTH as f64).round() as usize;
    "#".repeat(len.min(BAR_WIDTH))
}

pub fn write_chart(out: &mut impl Write, chart: &Chart) -> fmt::Result {
    writeln!(out, "{}", chart.title)?;
    if chart.is_empty() {
        return writeln!(out, "  (no data)");
    }
    let label_width = chart.rows.iter().map(|r| r.label.len()).max().unwrap_or(0);
    let max = chart
        .rows
        .iter()
        .flat_map(|r| r.values.iter().copied())
        .fold(0.0_f64, f64::max);
    let total = chart.total();

    for row in &chart.rows {
        for (key, value) in chart.value_keys.iter().zip(&row.values) {
            let share = match chart.kind {
                ChartKind::Pie if total > 0.0 => format!(" ({:.1}%)", value / total * 100.0),
                _ => String::new(),
            };
            let key = if chart.value_keys.len() > 1 {
                format!(" {key}")
            } else {
                String::new()
            };
            writeln!(
                out,
                "  {:<label_width$}{key} {:>10}{share} {}",
                row.label,
                format_value(*value),
                bar(*value, max),
            )?;
        }
    }
    Ok(())
}

fn write_charts(out: &mut impl Write, charts: &[&Chart]) -> fmt::Result {
    for (i, chart) in charts.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        write_chart(out, chart)?;
    }
    Ok(())
}

fn write_overall(out: &mut impl Write, view: &OverallView) -> fmt::Result {
    match &view.headline {
        Some(h) => writeln!(out, "{}: {} ({})", h.company, format_value(h.score), h.rating)?,
        None => writeln!(out, "No score data.")?,
    }
    for card in &view.cards {
        let change = match card.change {
            Some(c) if c >= 0.0 => format!("  \u{2191} {c:.1}%"),
            Some(c) => format!("  \u{2193} {:.1}%", c.abs()),
            None => String::new(),
        };
        writeln!(out, "  {:<20} {:>8}{change}", card.title, format_value(card.score))?;
    }
    for kpi in &view.highlights {
        let value = kpi.value.map_or_else(|| "-".to_string(), format_value);
        writeln!(out, "  {:<20} {value} {}", kpi.label, kpi.unit)?;
    }
    writeln!(out)?;
    let mut charts = vec![&view.breakdown];
    charts.extend(view.trends.iter());
    write_charts(out, &charts)?;

    if let Some(a) = &view.assessment {
        writeln!(out)?;
        writeln!(out, "Overall: {}", a.rating)?;
        if let Some(advice) = a.overall_advice {
            writeln!(out, "  {advice}")?;
        }
        for d in &a.dimensions {
            writeln!(out, "{}: {}", d.pillar.label(), d.level.label())?;
            writeln!(out, "  {}", d.advice)?;
        }
        writeln!(out, "Good job! ({})", a.best.label())?;
        writeln!(out, "  {}", a.praise)?;
    }
    Ok(())
}

fn write_environmental(out: &mut impl Write, v: &EnvironmentalView) -> fmt::Result {
    write_charts(out, &[&v.overview, &v.ghg, &v.energy, &v.water, &v.waste])
}

fn write_social(out: &mut impl Write, v: &SocialView) -> fmt::Result {
    write_charts(out, &[&v.gender, &v.age, &v.training, &v.health_safety])
}

fn write_governance(out: &mut impl Write, v: &GovernanceView) -> fmt::Result {
    write_charts(out, &[&v.board, &v.diversity, &v.certifications, &v.frameworks])
}

fn write_insights(out: &mut impl Write, v: &InsightsView) -> fmt::Result {
    if v.items.is_empty() {
        return writeln!(out, "No insights.");
    }
    for item in &v.items {
        writeln!(
            out,
            "[{}] {}",
            item.published.as_deref().unwrap_or("undated"),
            item.title.as_deref().unwrap_or("")
        )?;
        writeln!(out, "{}", item.markdown.trim_end())?;
        writeln!(out)?;
    }
    Ok(())
}

fn write_greenwash(out: &mut impl Write, v: &GreenwashView) -> fmt::Result {
    write_chart(out, &v.gauge)?;
    for f in &v.findings {
        writeln!(out)?;
        writeln!(out, "Rate: {}%", format_value(f.rate))?;
        writeln!(out, "{}", f.reason_markdown.trim_end())?;
    }
    Ok(())
}

pub fn write_tab(out: &mut impl Write, view: &TabView) -> fmt::Result {
    match view {
        TabView::Overall(v) => write_overall(out, v),
        TabView::Environmental(v) => write_environmental(out, v),
        TabView::Social(v) => write_social(out, v),
        TabView::Governance(v) => write_governance(out, v),
        TabView::Insights(v) => write_insights(out, v),
        TabView::Greenwash(v) => write_greenwash(out, v),
    }
}

pub fn write_validation(out: &mut impl Write, view: &ValidationView) -> fmt::Result {
    let width = view
        .rows
        .iter()
        .map(|r| r.company.len())
        .chain(std::iter::once(view.headers[0].len()))
        .max()
        .unwrap_or(0);
    writeln!(
        out,
        "{:<width$}  {:>13}  {:>8}  {}  {}",
        view.headers[0], view.headers[1], view.headers[2], view.headers[3], view.headers[4]
    )?;
    for row in &view.rows {
        writeln!(
            out,
            "{:<width$}  {:>13}  {:>8}  {}  {}",
            row.company,
            row.missing_value,
            format_value(row.score),
            row.pdf.as_deref().unwrap_or("-"),
            if row.json.is_some() { "yes" } else { "-" },
        )?;
    }
    Ok(())
}

pub fn write_routes(out: &mut impl Write, current: Route) -> fmt::Result {
    for route in Route::ALL {
        let marker = if route == current { '*' } else { ' ' };
        writeln!(out, "{marker} {:<12} {}", route.path(), route.label())?;
    }
    Ok(())
}

pub fn write_sections(out: &mut impl Write, sections: &[Section]) -> fmt::Result {
    for section in sections {
        writeln!(out, "{}", section.title)?;
        if let Some(intro) = section.intro {
            writeln!(out, "  {intro}")?;
        }
        for card in section.cards {
            writeln!(out, "  - {}: {}", card.title, card.description)?;
        }
    }
    Ok(())
}

/// Renders with one of the `write_*` functions into a fresh `String`.
pub fn to_string<F>(f: F) -> String
where
    F: FnOnce(&mut String) -> fmt::Result,
{
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = f(&mut out);
    out
}
