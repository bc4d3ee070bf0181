use esg_dashboard::Pillar;
use esg_dashboard::Rating;
use esg_dashboard::views::DimensionLevel;
use esg_dashboard::views::assessment::{assess, dimension_advice, rating_advice};

use super::record;

#[test]
fn dimension_levels() {
    assert_eq!(DimensionLevel::of(10.0), DimensionLevel::Excellent);
    assert_eq!(DimensionLevel::of(6.0), DimensionLevel::Excellent);
    assert_eq!(DimensionLevel::of(5.99), DimensionLevel::Good);
    assert_eq!(DimensionLevel::of(3.0), DimensionLevel::Good);
    assert_eq!(DimensionLevel::of(2.9), DimensionLevel::ToBeImproved);
    assert_eq!(DimensionLevel::of(11.0), DimensionLevel::ToBeImproved);
    assert_eq!(DimensionLevel::Good.label(), "Good");
}

#[test]
fn every_rating_has_advice_except_unrated() {
    for rating in [
        Rating::AAA,
        Rating::AA,
        Rating::A,
        Rating::BBB,
        Rating::BB,
        Rating::B,
        Rating::CCC,
    ] {
        assert!(rating_advice(&rating).is_some(), "{rating} has no advice");
    }
    assert_eq!(rating_advice(&Rating::Unrated("NR".into())), None);
}

#[test]
fn advice_tiers_differ_per_pillar() {
    for pillar in Pillar::ALL {
        let high = dimension_advice(pillar, 8.0);
        let mid = dimension_advice(pillar, 4.0);
        let low = dimension_advice(pillar, 1.0);
        assert_ne!(high, mid);
        assert_ne!(mid, low);
    }
}

#[test]
fn assessment_picks_the_best_pillar() {
    let a = assess(&record("2023", 7.2, Rating::A, 5.0, 8.1, 7.1));
    assert_eq!(a.best, Pillar::Social);
    assert_eq!(a.rating, Rating::A);
    assert!(a.overall_advice.is_some());
    assert_eq!(a.dimensions.len(), 3);
    assert_eq!(a.dimensions[0].level, DimensionLevel::Good);
    assert_eq!(a.dimensions[1].level, DimensionLevel::Excellent);
}

#[test]
fn ties_prefer_environmental_then_social() {
    let all_equal = assess(&record("2023", 6.0, Rating::BBB, 6.0, 6.0, 6.0));
    assert_eq!(all_equal.best, Pillar::Environmental);

    let social_governance = assess(&record("2023", 6.0, Rating::BBB, 4.0, 7.0, 7.0));
    assert_eq!(social_governance.best, Pillar::Social);
    assert_ne!(all_equal.praise, social_governance.praise);
}
