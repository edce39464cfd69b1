//! Stellium detection: three or more planets gathered in one sign or house.

use crate::chart::{Chart, Planet};
use crate::sign::{ZodiacSign, ALL_SIGNS};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Smallest group that counts as a stellium.
pub const STELLIUM_MIN_PLANETS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StelliumKind {
    Sign,
    House,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StelliumLocation {
    Sign(ZodiacSign),
    House(u8),
}

impl fmt::Display for StelliumLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StelliumLocation::Sign(sign) => write!(f, "{}", sign),
            StelliumLocation::House(house) => write!(f, "house {}", house),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stellium {
    pub kind: StelliumKind,
    pub location: StelliumLocation,
    pub planets: Vec<String>,
}

impl Stellium {
    pub fn new(location: StelliumLocation, planets: Vec<String>) -> Self {
        let kind = match location {
            StelliumLocation::Sign(_) => StelliumKind::Sign,
            StelliumLocation::House(_) => StelliumKind::House,
        };
        Self {
            kind,
            location,
            planets,
        }
    }
}

/// Sign stelliums in zodiac order, then house stelliums in house order.
///
/// The two groupings are independent: the same planets may form both a
/// sign and a house stellium. Planets with an unknown sign or house are
/// left out of that grouping only.
pub fn detect_stelliums(chart: &Chart) -> Vec<Stellium> {
    let mut stelliums = Vec::new();

    for sign in ALL_SIGNS {
        let planets = names_where(chart, |p| p.sign == Some(sign));
        if planets.len() >= STELLIUM_MIN_PLANETS {
            stelliums.push(Stellium::new(StelliumLocation::Sign(sign), planets));
        }
    }

    for house in 1..=12u8 {
        let planets = names_where(chart, |p| p.house == Some(house));
        if planets.len() >= STELLIUM_MIN_PLANETS {
            stelliums.push(Stellium::new(StelliumLocation::House(house), planets));
        }
    }

    stelliums
}

fn names_where(chart: &Chart, pred: impl Fn(&Planet) -> bool) -> Vec<String> {
    chart
        .planets()
        .iter()
        .filter(|p| pred(*p))
        .map(|p| p.name.clone())
        .collect()
}
