//! Plain-language fact lines derived from a comparison, ready to be
//! interpolated into an interpretation request.

use crate::comparison::SrComparison;
use crate::stellium::Stellium;

/// One line per fact, in the order a reading is usually built: houses of
/// the angles, chart ruler, angular planets, stelliums, key aspects.
pub fn describe(comparison: &SrComparison) -> Vec<String> {
    let mut lines = vec![
        format!(
            "Solar Return Ascendant ({}) falls in natal house {}.",
            comparison.sr_ascendant_sign, comparison.asc_sr_in_natal_house
        ),
        format!(
            "Solar Return Midheaven falls in natal house {}.",
            comparison.mc_sr_in_natal_house
        ),
        format!("Solar Return chart ruler: {}.", comparison.sr_chart_ruler),
    ];

    for angular in &comparison.angular_planets_sr {
        let house = angular
            .house
            .map(|h| format!(", Solar Return house {}", h))
            .unwrap_or_default();
        lines.push(format!(
            "Angular Solar Return planet: {} on the {} (orb {:.1}°{}).",
            angular.planet, angular.angle, angular.orb, house
        ));
    }

    for stellium in &comparison.stelliums_natal {
        lines.push(stellium_line("Natal", stellium));
    }
    for stellium in &comparison.stelliums_sr {
        lines.push(stellium_line("Solar Return", stellium));
    }

    for pair in &comparison.key_aspects {
        let exact = if pair.is_exact() { ", exact" } else { "" };
        lines.push(format!(
            "Solar Return {} {} natal {} (orb {:.1}°{}).",
            pair.from,
            pair.aspect.verb(),
            pair.to,
            pair.orb,
            exact
        ));
    }

    lines
}

fn stellium_line(chart: &str, stellium: &Stellium) -> String {
    format!(
        "{} stellium in {}: {}.",
        chart,
        stellium.location,
        stellium.planets.join(", ")
    )
}
