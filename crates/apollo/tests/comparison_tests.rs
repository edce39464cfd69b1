mod common;

use apollo::{
    compare, facts, AspectKind, Chart, ChartAngle, Comparator, ComparisonSettings, HouseCusp,
    OrbConfig, Planet, StelliumLocation, ZodiacSign,
};
use common::{equal_house_chart, natal, solar_return};

#[test]
fn test_solar_return_ascendant_house() {
    // Natal equal houses from 0 Aries with the Ascendant at 15
    let cusps = (0..12)
        .map(|i| HouseCusp::new(i as u8 + 1, 30.0 * i as f64))
        .collect();
    let natal = Chart::new(vec![], cusps, 15.0, 270.0).unwrap();
    let sr = equal_house_chart(vec![], 135.0, 45.0);

    let result = compare(&natal, &sr);

    assert_eq!(result.asc_sr_in_natal_house, 5);
    assert_eq!(result.mc_sr_in_natal_house, 2);
}

#[test]
fn test_full_comparison() {
    let result = compare(&natal(), &solar_return());

    assert_eq!(result.asc_sr_in_natal_house, 5);
    assert_eq!(result.mc_sr_in_natal_house, 2);
    assert_eq!(result.sr_ascendant_sign, ZodiacSign::Leo);
    assert_eq!(result.sr_chart_ruler, "Sun");

    let angular: Vec<(&str, ChartAngle, Option<u8>)> = result
        .angular_planets_sr
        .iter()
        .map(|a| (a.planet.as_str(), a.angle, a.house))
        .collect();
    assert_eq!(
        angular,
        vec![
            ("Mars", ChartAngle::Midheaven, Some(8)),
            ("Jupiter", ChartAngle::Ascendant, Some(1)),
        ]
    );

    assert_eq!(result.stelliums_natal.len(), 2);
    assert_eq!(
        result.stelliums_natal[0].location,
        StelliumLocation::Sign(ZodiacSign::Leo)
    );
    assert_eq!(result.stelliums_natal[1].location, StelliumLocation::House(5));
    assert_eq!(
        result.stelliums_natal[0].planets,
        vec!["Sun", "Mercury", "Venus"]
    );
    assert!(result.stelliums_sr.is_empty());

    assert_eq!(result.cross_aspects.len(), 27);
    assert_eq!(result.key_aspects.len(), 10);

    let top = &result.key_aspects[0];
    assert_eq!((top.from.as_str(), top.to.as_str()), ("Sun", "Sun"));
    assert_eq!(top.aspect, AspectKind::Conjunction);
    let second = &result.key_aspects[1];
    assert_eq!((second.from.as_str(), second.to.as_str()), ("Moon", "Moon"));
    assert_eq!(second.aspect, AspectKind::Opposition);
    assert!(result
        .key_aspects
        .windows(2)
        .all(|w| w[0].orb <= w[1].orb));
}

#[test]
fn test_comparison_is_deterministic() {
    let natal = natal();
    let sr = solar_return();

    let first = serde_json::to_string(&compare(&natal, &sr)).unwrap();
    for _ in 0..5 {
        assert_eq!(serde_json::to_string(&compare(&natal, &sr)).unwrap(), first);
    }
}

#[test]
fn test_serialized_field_names() {
    let value = serde_json::to_value(compare(&natal(), &solar_return())).unwrap();

    for key in [
        "ascSRInNatalHouse",
        "mcSRInNatalHouse",
        "angularPlanetsSR",
        "stelliumsNatal",
        "stelliumsSR",
        "crossAspects",
        "keyAspects",
    ] {
        assert!(value.get(key).is_some(), "missing {key}");
    }
    let first = &value["crossAspects"][0];
    assert_eq!(first["planetSR"], "Sun");
    assert_eq!(first["planetNatal"], "Sun");
    assert_eq!(first["aspectType"], "conjunction");
    assert!(first.get("from").is_none());
    assert_eq!(value["keyAspects"][0]["planetSR"], "Sun");
}

#[test]
fn test_custom_settings() {
    let settings = ComparisonSettings {
        orbs: OrbConfig {
            angular_planet: 2.0,
            ..OrbConfig::default()
        },
        aspect_cap: 3,
        modern_rulers: true,
    };
    let comparator = Comparator::new(settings);

    let result = comparator.compare(&natal(), &solar_return());

    // Jupiter is 3 degrees from the Ascendant, Mars 5 from the MC
    assert!(result.angular_planets_sr.is_empty());
    assert_eq!(result.key_aspects.len(), 3);
    assert_eq!(result.cross_aspects.len(), 27);
}

#[test]
fn test_absent_planet_is_not_invented() {
    let natal = equal_house_chart(vec![Planet::new("Sun", 10.0)], 0.0, 270.0);
    let sr = equal_house_chart(vec![Planet::new("Moon", 10.0)], 0.0, 270.0);

    let result = compare(&natal, &sr);

    assert_eq!(result.cross_aspects.len(), 1);
    assert_eq!(result.cross_aspects[0].from, "Moon");
    assert_eq!(result.cross_aspects[0].to, "Sun");
    assert!(result.stelliums_natal.is_empty());
}

#[test]
fn test_fact_lines() {
    let result = compare(&natal(), &solar_return());

    let lines = facts::describe(&result);

    assert_eq!(
        lines[0],
        "Solar Return Ascendant (Leo) falls in natal house 5."
    );
    assert_eq!(lines[1], "Solar Return Midheaven falls in natal house 2.");
    assert_eq!(lines[2], "Solar Return chart ruler: Sun.");
    assert!(lines
        .iter()
        .any(|l| l == "Angular Solar Return planet: Jupiter on the Ascendant (orb 3.0°, Solar Return house 1)."));
    assert!(lines
        .iter()
        .any(|l| l == "Natal stellium in Leo: Sun, Mercury, Venus."));
    assert!(lines
        .iter()
        .any(|l| l == "Natal stellium in house 5: Sun, Mercury, Venus."));
    assert!(lines
        .iter()
        .any(|l| l == "Solar Return Sun conjunct natal Sun (orb 0.0°, exact)."));
    // 3 angle lines + 2 angular + 2 stelliums + 10 aspects
    assert_eq!(lines.len(), 17);
}
