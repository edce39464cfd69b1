//! Boundary adapter for ephemeris chart payloads.
//!
//! The ephemeris collaborator is loose about field names (`longitude` or
//! `degree`, `house` or `house_number`, cusps as bare numbers or objects,
//! angles at the top level, nested, or listed among the planets). Everything
//! is mapped onto the canonical [`Chart`] here so that no engine code ever
//! sees a variant.

use crate::chart::error::ChartError;
use crate::chart::types::{Chart, HouseCusp, Planet};
use crate::sign::ZodiacSign;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SignField {
    Name(String),
    Object { name: String },
}

impl SignField {
    fn name(&self) -> &str {
        match self {
            SignField::Name(name) => name,
            SignField::Object { name } => name,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlanetPayload {
    #[serde(alias = "planet")]
    pub name: String,
    #[serde(default)]
    pub sign: Option<SignField>,
    #[serde(default)]
    pub sign_name: Option<SignField>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub full_degree: Option<f64>,
    #[serde(default)]
    pub degree: Option<f64>,
    #[serde(default)]
    pub house: Option<u8>,
    #[serde(default)]
    pub house_number: Option<u8>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CuspPayload {
    #[serde(default, alias = "house")]
    pub number: Option<u8>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub degree: Option<f64>,
    #[serde(default)]
    pub start: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CuspList {
    Plain(Vec<f64>),
    Detailed(Vec<CuspPayload>),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnglesPayload {
    #[serde(default, alias = "asc")]
    pub ascendant: Option<f64>,
    #[serde(default, alias = "mc")]
    pub midheaven: Option<f64>,
}

/// Raw chart document as received from the ephemeris collaborator.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartPayload {
    #[serde(default)]
    pub planets: Vec<PlanetPayload>,
    #[serde(default, alias = "cusps")]
    pub houses: Option<CuspList>,
    #[serde(default, alias = "asc")]
    pub ascendant: Option<f64>,
    #[serde(default, alias = "mc")]
    pub midheaven: Option<f64>,
    #[serde(default)]
    pub angles: Option<AnglesPayload>,
}

const ASCENDANT_NAMES: &[&str] = &["ascendant", "asc", "lagna"];
const MIDHEAVEN_NAMES: &[&str] = &["midheaven", "mc", "medium coeli"];
// Derived from ASC and MC; a supplied value is discarded.
const DESCENDANT_NAMES: &[&str] = &["descendant", "desc", "dsc"];
const IC_NAMES: &[&str] = &["imum coeli", "ic", "nadir"];

impl PlanetPayload {
    fn longitude(&self) -> Option<f64> {
        self.longitude.or(self.full_degree).or(self.degree)
    }

    fn into_planet(self) -> Result<Planet, ChartError> {
        let longitude = self.longitude();
        let sign = match self.sign.as_ref().or(self.sign_name.as_ref()) {
            Some(field) => Some(field.name().parse::<ZodiacSign>().map_err(|e| {
                ChartError::invalid(format!("planet {}: {}", self.name, e))
            })?),
            None => longitude
                .filter(|lon| lon.is_finite())
                .map(ZodiacSign::from_longitude),
        };
        Ok(Planet {
            name: self.name.trim().to_string(),
            sign,
            longitude,
            house: self.house.or(self.house_number),
        })
    }
}

impl CuspPayload {
    fn longitude(&self) -> Option<f64> {
        self.longitude.or(self.degree).or(self.start)
    }
}

fn matches_any(name: &str, names: &[&str]) -> bool {
    let name = name.trim().to_lowercase();
    names.iter().any(|n| *n == name)
}

impl TryFrom<ChartPayload> for Chart {
    type Error = ChartError;

    fn try_from(payload: ChartPayload) -> Result<Self, Self::Error> {
        let nested = payload.angles.unwrap_or_default();
        let mut ascendant = payload.ascendant.or(nested.ascendant);
        let mut midheaven = payload.midheaven.or(nested.midheaven);

        // Angles listed among the planets are pulled out; they are not bodies.
        let mut planets = Vec::with_capacity(payload.planets.len());
        for raw in payload.planets {
            if matches_any(&raw.name, ASCENDANT_NAMES) {
                ascendant = ascendant.or(raw.longitude());
                continue;
            }
            if matches_any(&raw.name, MIDHEAVEN_NAMES) {
                midheaven = midheaven.or(raw.longitude());
                continue;
            }
            if matches_any(&raw.name, DESCENDANT_NAMES) || matches_any(&raw.name, IC_NAMES) {
                log::debug!("dropping supplied {} from payload, it is derived", raw.name);
                continue;
            }
            planets.push(raw.into_planet()?);
        }

        let cusps = match payload.houses {
            None => return Err(ChartError::invalid("payload has no house cusps")),
            Some(CuspList::Plain(values)) => values
                .into_iter()
                .enumerate()
                .map(|(i, lon)| HouseCusp::new(i as u8 + 1, lon))
                .collect(),
            Some(CuspList::Detailed(entries)) => entries
                .into_iter()
                .enumerate()
                .map(|(i, entry)| {
                    let number = entry.number.unwrap_or(i as u8 + 1);
                    entry
                        .longitude()
                        .map(|lon| HouseCusp::new(number, lon))
                        .ok_or_else(|| {
                            ChartError::invalid(format!("house {} cusp has no longitude", number))
                        })
                })
                .collect::<Result<Vec<_>, _>>()?,
        };

        let ascendant = ascendant.ok_or_else(|| ChartError::invalid("payload has no ascendant"))?;
        let midheaven = midheaven.ok_or_else(|| ChartError::invalid("payload has no midheaven"))?;

        Chart::new(planets, cusps, ascendant, midheaven)
    }
}
