use serde::{Deserialize, Serialize};

/// Orb tolerances, in degrees, for every check the engine makes.
///
/// A single table so the values live in one place; settings files may
/// override any subset of fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbConfig {
    pub conjunction: f64,
    pub opposition: f64,
    pub square: f64,
    pub trine: f64,
    pub sextile: f64,
    /// Distance from ASC/MC/DESC/IC within which a planet counts as angular
    pub angular_planet: f64,
}

impl Default for OrbConfig {
    fn default() -> Self {
        Self {
            conjunction: 8.0,
            opposition: 8.0,
            square: 6.0,
            trine: 6.0,
            sextile: 4.0,
            angular_planet: 8.0,
        }
    }
}

impl OrbConfig {
    /// `(field name, value)` pairs, for validation and reporting.
    pub fn entries(&self) -> [(&'static str, f64); 6] {
        [
            ("conjunction", self.conjunction),
            ("opposition", self.opposition),
            ("square", self.square),
            ("trine", self.trine),
            ("sextile", self.sextile),
            ("angular_planet", self.angular_planet),
        ]
    }
}
