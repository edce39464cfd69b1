use crate::orbs::OrbConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Major Ptolemaic aspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectKind {
    Conjunction,
    Opposition,
    Square,
    Trine,
    Sextile,
}

/// Aspects in classification order, which is also their precedence when ranking.
pub const ALL_ASPECTS: [AspectKind; 5] = [
    AspectKind::Conjunction,
    AspectKind::Opposition,
    AspectKind::Square,
    AspectKind::Trine,
    AspectKind::Sextile,
];

impl AspectKind {
    /// Exact angle for this aspect (0, 180, 90, 120, 60)
    pub fn exact_angle(self) -> f64 {
        match self {
            AspectKind::Conjunction => 0.0,
            AspectKind::Opposition => 180.0,
            AspectKind::Square => 90.0,
            AspectKind::Trine => 120.0,
            AspectKind::Sextile => 60.0,
        }
    }

    pub fn orb(self, orbs: &OrbConfig) -> f64 {
        match self {
            AspectKind::Conjunction => orbs.conjunction,
            AspectKind::Opposition => orbs.opposition,
            AspectKind::Square => orbs.square,
            AspectKind::Trine => orbs.trine,
            AspectKind::Sextile => orbs.sextile,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AspectKind::Conjunction => "conjunction",
            AspectKind::Opposition => "opposition",
            AspectKind::Square => "square",
            AspectKind::Trine => "trine",
            AspectKind::Sextile => "sextile",
        }
    }

    /// Verb form used in fact lines ("Sun trine Moon")
    pub fn verb(self) -> &'static str {
        match self {
            AspectKind::Conjunction => "conjunct",
            AspectKind::Opposition => "opposite",
            other => other.name(),
        }
    }
}

impl fmt::Display for AspectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One aspect between a planet of the `from` chart and one of the `to` chart.
///
/// Cross-chart aspects always put the Solar Return on the `from` side,
/// which is what the serialized names say.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectPair {
    #[serde(rename = "planetSR")]
    pub from: String,
    #[serde(rename = "planetNatal")]
    pub to: String,
    #[serde(rename = "aspectType")]
    pub aspect: AspectKind,
    /// Deviation from the exact angle, in degrees
    pub orb: f64,
}

impl AspectPair {
    /// Within 0.1° of exact.
    pub fn is_exact(&self) -> bool {
        self.orb < 0.1
    }
}
