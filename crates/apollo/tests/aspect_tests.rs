mod common;

use apollo::aspects::{rank_aspects, AspectCalculator, AspectKind};
use apollo::{OrbConfig, Planet};
use common::equal_house_chart;

#[test]
fn test_calculate_aspect_conjunction() {
    let calculator = AspectCalculator::default();

    let hits = calculator.calculate_aspects(10.0, 10.0);

    assert_eq!(hits, vec![(AspectKind::Conjunction, 0.0)]);
}

#[test]
fn test_calculate_aspect_opposition() {
    let calculator = AspectCalculator::default();

    let hits = calculator.calculate_aspects(10.0, 190.0);

    assert_eq!(hits, vec![(AspectKind::Opposition, 0.0)]);
}

#[test]
fn test_calculate_aspect_square() {
    let calculator = AspectCalculator::default();

    let hits = calculator.calculate_aspects(10.0, 100.0);

    assert_eq!(hits, vec![(AspectKind::Square, 0.0)]);
}

#[test]
fn test_aspect_across_aries_point() {
    let calculator = AspectCalculator::default();

    // 355 and 3 are 8 degrees apart
    let hits = calculator.calculate_aspects(355.0, 3.0);

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].0, AspectKind::Conjunction);
    assert!((hits[0].1 - 8.0).abs() < 1e-9);
}

#[test]
fn test_orb_limits_per_aspect() {
    let calculator = AspectCalculator::default();

    assert_eq!(calculator.calculate_aspects(0.0, 126.0).len(), 1); // trine, orb 6
    assert!(calculator.calculate_aspects(0.0, 126.5).is_empty());
    assert_eq!(calculator.calculate_aspects(0.0, 56.0).len(), 1); // sextile, orb 4
    assert!(calculator.calculate_aspects(0.0, 55.5).is_empty());
    assert_eq!(calculator.calculate_aspects(0.0, 172.0).len(), 1); // opposition, orb 8
}

#[test]
fn test_compute_cross_aspects() {
    let calculator = AspectCalculator::new(OrbConfig::default());

    let from = equal_house_chart(
        vec![Planet::new("Sun", 10.0), Planet::new("Moon", 100.0)],
        0.0,
        270.0,
    );
    let to = equal_house_chart(
        vec![Planet::new("Sun", 12.0), Planet::new("Saturn", 190.0)],
        0.0,
        270.0,
    );

    let pairs = calculator.compute_cross_aspects(&from, &to);

    let summary: Vec<(&str, &str, AspectKind)> = pairs
        .iter()
        .map(|p| (p.from.as_str(), p.to.as_str(), p.aspect))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("Sun", "Sun", AspectKind::Conjunction),
            ("Sun", "Saturn", AspectKind::Opposition),
            ("Moon", "Sun", AspectKind::Square),
            ("Moon", "Saturn", AspectKind::Square),
        ]
    );
}

#[test]
fn test_cross_aspects_direction_only_changes_labels() {
    let calculator = AspectCalculator::default();
    let a = equal_house_chart(vec![Planet::new("Venus", 33.0)], 0.0, 270.0);
    let b = equal_house_chart(vec![Planet::new("Mars", 151.0)], 0.0, 270.0);

    let ab = calculator.compute_cross_aspects(&a, &b);
    let ba = calculator.compute_cross_aspects(&b, &a);

    assert_eq!(ab.len(), 1);
    assert_eq!(ba.len(), 1);
    assert_eq!(ab[0].from, "Venus");
    assert_eq!(ba[0].from, "Mars");
    assert_eq!(ab[0].aspect, ba[0].aspect);
    assert!((ab[0].orb - ba[0].orb).abs() < 1e-9);
}

#[test]
fn test_rank_aspects_caps_output() {
    let calculator = AspectCalculator::default();
    let planets: Vec<Planet> = (0..12)
        .map(|i| Planet::new(format!("P{}", i), i as f64 * 30.0))
        .collect();
    let chart = equal_house_chart(planets, 0.0, 270.0);

    let pairs = calculator.compute_cross_aspects(&chart, &chart);
    let ranked = rank_aspects(&pairs, 10);

    assert!(pairs.len() > 10);
    assert_eq!(ranked.len(), 10);
    assert!(ranked.iter().all(|p| p.orb == 0.0));
    assert!(ranked.windows(2).all(|w| w[0].orb <= w[1].orb));
}
