//! Zodiac signs and their planetary rulers.

use crate::angle;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// Signs in zodiac order, starting at 0° Aries.
pub const ALL_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

const TRADITIONAL_RULERS: [&str; 12] = [
    "Mars",    // Aries
    "Venus",   // Taurus
    "Mercury", // Gemini
    "Moon",    // Cancer
    "Sun",     // Leo
    "Mercury", // Virgo
    "Venus",   // Libra
    "Mars",    // Scorpio
    "Jupiter", // Sagittarius
    "Saturn",  // Capricorn
    "Saturn",  // Aquarius
    "Jupiter", // Pisces
];

const MODERN_RULERS: [&str; 12] = [
    "Mars", "Venus", "Mercury", "Moon", "Sun", "Mercury", "Venus", "Pluto", "Jupiter", "Saturn",
    "Uranus", "Neptune",
];

impl ZodiacSign {
    pub fn from_index(index: usize) -> ZodiacSign {
        ALL_SIGNS[index % 12]
    }

    /// Sign containing the given ecliptic longitude.
    pub fn from_longitude(longitude: f64) -> ZodiacSign {
        Self::from_index(angle::sign_index(longitude))
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }

    /// Planetary ruler of the sign. `modern` swaps in the outer planets for
    /// Scorpio, Aquarius and Pisces.
    pub fn ruler(self, modern: bool) -> &'static str {
        if modern {
            MODERN_RULERS[self.index()]
        } else {
            TRADITIONAL_RULERS[self.index()]
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown zodiac sign: {0}")]
pub struct UnknownSign(pub String);

impl FromStr for ZodiacSign {
    type Err = UnknownSign;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        ALL_SIGNS
            .iter()
            .copied()
            .find(|sign| {
                let name = sign.name().to_lowercase();
                name == needle || (needle.len() == 3 && name.starts_with(&needle))
            })
            .ok_or_else(|| UnknownSign(s.to_string()))
    }
}
