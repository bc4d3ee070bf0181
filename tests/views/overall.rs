use esg_dashboard::views::{overall_view, score_breakdown};
use esg_dashboard::{Pillar, Rating};

use super::{metrics, record};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn cards_report_change_against_previous_period() {
    let scores = vec![
        record("2023", 7.2, Rating::A, 7.5, 6.8, 7.1),
        record("2022", 6.4, Rating::BBB, 6.0, 6.8, 5.0),
    ];
    let view = overall_view("Acme Corp", &scores, &metrics(&[]));

    let headline = view.headline.unwrap();
    assert_eq!(headline.company, "Acme Corp");
    assert_eq!(headline.score, 7.2);
    assert_eq!(headline.rating, Rating::A);

    let titles: Vec<_> = view.cards.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, ["Environmental Score", "Social Score", "Governance Score"]);
    assert!(approx(view.cards[0].change.unwrap(), 25.0));
    assert!(approx(view.cards[1].change.unwrap(), 0.0));
    assert!(approx(view.cards[2].change.unwrap(), 42.0));
}

#[test]
fn change_is_absent_without_a_usable_previous_period() {
    let single = vec![record("2023", 7.2, Rating::A, 7.5, 6.8, 7.1)];
    let view = overall_view("Acme Corp", &single, &metrics(&[]));
    assert!(view.cards.iter().all(|c| c.change.is_none()));

    let zero_prev = vec![
        record("2023", 7.2, Rating::A, 7.5, 6.8, 7.1),
        record("2022", 0.0, Rating::CCC, 0.0, 6.8, 0.0),
    ];
    let view = overall_view("Acme Corp", &zero_prev, &metrics(&[]));
    assert_eq!(view.cards[0].change, None);
    assert!(view.cards[1].change.is_some());
}

#[test]
fn trends_are_ordered_by_period() {
    let scores = vec![
        record("2023", 7.2, Rating::A, 7.5, 6.8, 7.1),
        record("2021", 5.9, Rating::BB, 5.5, 6.0, 4.8),
        record("2022", 6.4, Rating::BBB, 6.0, 6.8, 5.0),
        // A repeated period keeps the first row seen.
        record("2022", 1.0, Rating::CCC, 1.0, 1.0, 1.0),
    ];
    let view = overall_view("Acme Corp", &scores, &metrics(&[]));

    assert_eq!(view.trends.len(), 3);
    let env = &view.trends[0];
    assert_eq!(env.title, "Environmental Performance Trend");
    let points: Vec<_> = env
        .series()
        .into_iter()
        .map(|p| (p.name, p.value))
        .collect();
    assert_eq!(
        points,
        vec![
            ("2021".to_string(), 5.5),
            ("2022".to_string(), 6.0),
            ("2023".to_string(), 7.5)
        ]
    );
    assert_eq!(view.trends[2].title, "Governance Performance Trend");
}

#[test]
fn highlights_read_metrics_with_units() {
    let mut m = metrics(&[("SOC_Female_Pct", "45")]);
    m.insert(
        "ENV_GHG_Total",
        esg_dashboard::MetricValue::new("1,250", "tCO2e"),
    );
    let view = overall_view("Acme Corp", &[], &m);

    assert_eq!(view.highlights.len(), 3);
    assert_eq!(view.highlights[0].label, "Carbon Emissions");
    assert_eq!(view.highlights[0].value, Some(1250.0));
    assert_eq!(view.highlights[0].unit, "tCO2e");
    assert_eq!(view.highlights[1].value, Some(45.0));
    assert_eq!(view.highlights[2].label, "Board Independence");
    assert_eq!(view.highlights[2].value, None);
}

#[test]
fn no_scores_means_empty_overall() {
    let view = overall_view("Acme Corp", &[], &metrics(&[]));
    assert!(view.headline.is_none());
    assert!(view.cards.is_empty());
    assert!(view.breakdown.is_empty());
    assert!(view.assessment.is_none());
    assert!(view.trends.iter().all(|t| t.is_empty()));
}

#[test]
fn breakdown_has_one_slice_per_pillar() {
    let r = record("2023", 7.2, Rating::A, 7.5, 6.8, 7.1);
    let pie = score_breakdown(Some(&r));
    assert_eq!(pie.title, "ESG Breakdown");
    for pillar in Pillar::ALL {
        assert_eq!(pie.value(pillar.label(), "score"), Some(r.pillar(pillar)));
    }
}
