//! Solar Return against natal chart.
//!
//! [`Comparator::compare`] answers the questions an annual reading is built
//! on: where the Solar-Return Ascendant and Midheaven fall in the natal
//! houses, which Solar-Return planets sit on an angle, where planets bunch
//! up in either chart, and how the Solar-Return planets aspect the natal
//! ones. The result is plain data, recomputed on every run.

use crate::angular::{find_angular_planets, AngularPlanet};
use crate::aspects::{rank_aspects, AspectCalculator, AspectPair, DEFAULT_ASPECT_CAP};
use crate::chart::Chart;
use crate::orbs::OrbConfig;
use crate::sign::ZodiacSign;
use crate::stellium::{detect_stelliums, Stellium};
use serde::{Deserialize, Serialize};

/// Tunables for a comparison run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonSettings {
    pub orbs: OrbConfig,
    /// How many ranked aspects to keep in `key_aspects`
    pub aspect_cap: usize,
    /// Use modern rulers (Pluto, Uranus, Neptune) for the chart ruler
    pub modern_rulers: bool,
}

impl Default for ComparisonSettings {
    fn default() -> Self {
        Self {
            orbs: OrbConfig::default(),
            aspect_cap: DEFAULT_ASPECT_CAP,
            modern_rulers: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SrComparison {
    #[serde(rename = "ascSRInNatalHouse")]
    pub asc_sr_in_natal_house: u8,
    #[serde(rename = "mcSRInNatalHouse")]
    pub mc_sr_in_natal_house: u8,
    #[serde(rename = "srAscendantSign")]
    pub sr_ascendant_sign: ZodiacSign,
    #[serde(rename = "srChartRuler")]
    pub sr_chart_ruler: String,
    #[serde(rename = "angularPlanetsSR")]
    pub angular_planets_sr: Vec<AngularPlanet>,
    #[serde(rename = "stelliumsNatal")]
    pub stelliums_natal: Vec<Stellium>,
    #[serde(rename = "stelliumsSR")]
    pub stelliums_sr: Vec<Stellium>,
    /// Every Solar-Return (`from`) to natal (`to`) aspect
    #[serde(rename = "crossAspects")]
    pub cross_aspects: Vec<AspectPair>,
    /// `cross_aspects` ranked by importance and capped
    #[serde(rename = "keyAspects")]
    pub key_aspects: Vec<AspectPair>,
}

#[derive(Debug, Clone, Default)]
pub struct Comparator {
    settings: ComparisonSettings,
    aspects: AspectCalculator,
}

impl Comparator {
    pub fn new(settings: ComparisonSettings) -> Self {
        Self {
            settings,
            aspects: AspectCalculator::new(settings.orbs),
        }
    }

    pub fn compare(&self, natal: &Chart, solar_return: &Chart) -> SrComparison {
        let asc_sr_in_natal_house = natal.house_of(solar_return.ascendant());
        let mc_sr_in_natal_house = natal.house_of(solar_return.midheaven());

        let angular_planets_sr =
            find_angular_planets(solar_return, self.settings.orbs.angular_planet);

        let stelliums_natal = detect_stelliums(natal);
        let stelliums_sr = detect_stelliums(solar_return);

        let cross_aspects = self.aspects.compute_cross_aspects(solar_return, natal);
        let key_aspects = rank_aspects(&cross_aspects, self.settings.aspect_cap);

        let sr_ascendant_sign = ZodiacSign::from_longitude(solar_return.ascendant());
        let sr_chart_ruler = sr_ascendant_sign
            .ruler(self.settings.modern_rulers)
            .to_string();

        log::debug!(
            "solar return: ASC in natal house {}, MC in natal house {}, {} angular, {} cross aspects",
            asc_sr_in_natal_house,
            mc_sr_in_natal_house,
            angular_planets_sr.len(),
            cross_aspects.len()
        );

        SrComparison {
            asc_sr_in_natal_house,
            mc_sr_in_natal_house,
            sr_ascendant_sign,
            sr_chart_ruler,
            angular_planets_sr,
            stelliums_natal,
            stelliums_sr,
            cross_aspects,
            key_aspects,
        }
    }
}

/// Compare with the default orbs and aspect cap.
pub fn compare(natal: &Chart, solar_return: &Chart) -> SrComparison {
    Comparator::default().compare(natal, solar_return)
}
