//! Planets close to the chart angles.

use crate::angle::angular_separation;
use crate::chart::{Chart, ChartAngle};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AngularPlanet {
    pub planet: String,
    pub angle: ChartAngle,
    /// The planet's own house, as reported by the chart
    pub house: Option<u8>,
    pub orb: f64,
}

/// Planets within `orb` degrees of the Ascendant, Midheaven, Descendant or IC.
///
/// Results follow chart planet order and, per planet, ASC, MC, DESC, IC.
/// A planet near two angles is listed once for each. Planets without a
/// usable longitude never match.
pub fn find_angular_planets(chart: &Chart, orb: f64) -> Vec<AngularPlanet> {
    let angles = chart.angles();
    let mut found = Vec::new();

    for planet in chart.planets() {
        let Some(lon) = planet.position() else { continue };
        for (angle, angle_lon) in angles.iter() {
            let separation = angular_separation(lon, angle_lon);
            if separation <= orb {
                found.push(AngularPlanet {
                    planet: planet.name.clone(),
                    angle,
                    house: planet.house,
                    orb: separation,
                });
            }
        }
    }

    found
}
