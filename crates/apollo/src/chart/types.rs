use crate::angle::normalize;
use crate::chart::error::ChartError;
use crate::chart::payload::ChartPayload;
use crate::houses;
use crate::sign::ZodiacSign;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// A body placed in a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    /// "Sun", "Moon", ..., "Pluto", optionally the lunar nodes
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sign: Option<ZodiacSign>,
    /// Ecliptic longitude in degrees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// House 1..=12 as reported by the ephemeris
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub house: Option<u8>,
}

impl Planet {
    pub fn new(name: impl Into<String>, longitude: f64) -> Self {
        Self {
            name: name.into(),
            sign: Some(ZodiacSign::from_longitude(longitude)),
            longitude: Some(longitude),
            house: None,
        }
    }

    pub fn with_house(mut self, house: u8) -> Self {
        self.house = Some(house);
        self
    }

    /// Normalized longitude, or `None` when missing or not finite.
    pub fn position(&self) -> Option<f64> {
        self.longitude.filter(|lon| lon.is_finite()).map(normalize)
    }
}

/// One house cusp as delivered by the ephemeris.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseCusp {
    pub number: u8,
    pub longitude: f64,
}

impl HouseCusp {
    pub fn new(number: u8, longitude: f64) -> Self {
        Self { number, longitude }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartAngle {
    Ascendant,
    Midheaven,
    Descendant,
    ImumCoeli,
}

impl fmt::Display for ChartAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChartAngle::Ascendant => "Ascendant",
            ChartAngle::Midheaven => "Midheaven",
            ChartAngle::Descendant => "Descendant",
            ChartAngle::ImumCoeli => "Imum Coeli",
        };
        f.write_str(name)
    }
}

/// The four angles of a chart. Descendant and IC are always derived from
/// the Ascendant and Midheaven.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartAngles {
    pub ascendant: f64,
    pub midheaven: f64,
    pub descendant: f64,
    pub imum_coeli: f64,
}

impl ChartAngles {
    pub fn derive(ascendant: f64, midheaven: f64) -> Self {
        let ascendant = normalize(ascendant);
        let midheaven = normalize(midheaven);
        Self {
            ascendant,
            midheaven,
            descendant: normalize(ascendant + 180.0),
            imum_coeli: normalize(midheaven + 180.0),
        }
    }

    /// Angles in detection order: ASC, MC, DESC, IC.
    pub fn iter(&self) -> impl Iterator<Item = (ChartAngle, f64)> {
        [
            (ChartAngle::Ascendant, self.ascendant),
            (ChartAngle::Midheaven, self.midheaven),
            (ChartAngle::Descendant, self.descendant),
            (ChartAngle::ImumCoeli, self.imum_coeli),
        ]
        .into_iter()
    }
}

/// A validated chart: planets, twelve ordered cusps, Ascendant and Midheaven.
///
/// Deserializing goes through [`ChartPayload`], so every field-name variant
/// the ephemeris produces is accepted and then checked by [`Chart::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ChartPayload")]
pub struct Chart {
    planets: Vec<Planet>,
    cusps: [f64; 12],
    ascendant: f64,
    midheaven: f64,
}

impl Chart {
    pub fn new(
        planets: Vec<Planet>,
        cusps: Vec<HouseCusp>,
        ascendant: f64,
        midheaven: f64,
    ) -> Result<Self, ChartError> {
        if !ascendant.is_finite() {
            return Err(ChartError::invalid("ascendant is not a finite longitude"));
        }
        if !midheaven.is_finite() {
            return Err(ChartError::invalid("midheaven is not a finite longitude"));
        }

        let cusps = order_cusps(cusps)?;

        let mut seen = HashSet::new();
        for planet in &planets {
            if planet.name.trim().is_empty() {
                return Err(ChartError::invalid("planet with an empty name"));
            }
            // Lookups ignore case, so names must be unique ignoring case
            if !seen.insert(planet.name.trim().to_lowercase()) {
                return Err(ChartError::invalid(format!(
                    "planet {} appears more than once",
                    planet.name
                )));
            }
            if let Some(house) = planet.house {
                if !(1..=12).contains(&house) {
                    return Err(ChartError::invalid(format!(
                        "planet {} has house {}, expected 1..=12",
                        planet.name, house
                    )));
                }
            }
        }

        Ok(Self {
            planets,
            cusps,
            ascendant: normalize(ascendant),
            midheaven: normalize(midheaven),
        })
    }

    /// Parse and validate a chart payload.
    pub fn from_json(json: &str) -> Result<Self, ChartError> {
        let payload: ChartPayload =
            serde_json::from_str(json).map_err(|e| ChartError::InvalidJson(e.to_string()))?;
        Chart::try_from(payload)
    }

    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    pub fn planet(&self, name: &str) -> Option<&Planet> {
        self.planets
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Cusp longitudes for houses 1..=12, normalized.
    pub fn cusps(&self) -> &[f64; 12] {
        &self.cusps
    }

    pub fn ascendant(&self) -> f64 {
        self.ascendant
    }

    pub fn midheaven(&self) -> f64 {
        self.midheaven
    }

    pub fn angles(&self) -> ChartAngles {
        ChartAngles::derive(self.ascendant, self.midheaven)
    }

    /// House of this chart containing `longitude`.
    pub fn house_of(&self, longitude: f64) -> u8 {
        houses::locate_house(longitude, &self.cusps)
    }
}

fn order_cusps(cusps: Vec<HouseCusp>) -> Result<[f64; 12], ChartError> {
    if cusps.len() != 12 {
        return Err(ChartError::invalid(format!(
            "expected 12 house cusps, got {}",
            cusps.len()
        )));
    }

    let mut ordered: [Option<f64>; 12] = [None; 12];
    for cusp in cusps {
        if !(1..=12).contains(&cusp.number) {
            return Err(ChartError::invalid(format!(
                "house cusp number {} outside 1..=12",
                cusp.number
            )));
        }
        if !cusp.longitude.is_finite() {
            return Err(ChartError::invalid(format!(
                "house {} cusp is not a finite longitude",
                cusp.number
            )));
        }
        let slot = &mut ordered[(cusp.number - 1) as usize];
        if slot.is_some() {
            return Err(ChartError::invalid(format!(
                "house {} cusp given more than once",
                cusp.number
            )));
        }
        *slot = Some(normalize(cusp.longitude));
    }

    let mut out = [0.0; 12];
    for (i, value) in ordered.iter().enumerate() {
        // 12 distinct numbers in 1..=12 fill every slot
        out[i] = value.ok_or_else(|| ChartError::invalid(format!("house {} cusp missing", i + 1)))?;
    }
    Ok(out)
}
