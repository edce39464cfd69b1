use crate::angle::angular_separation;
use crate::aspects::types::{AspectKind, AspectPair, ALL_ASPECTS};
use crate::chart::Chart;
use crate::orbs::OrbConfig;
use std::cmp::Ordering;

/// Number of aspects kept for narrative use.
pub const DEFAULT_ASPECT_CAP: usize = 10;

/// Aspect calculator
#[derive(Debug, Clone, Default)]
pub struct AspectCalculator {
    orbs: OrbConfig,
}

impl AspectCalculator {
    pub fn new(orbs: OrbConfig) -> Self {
        Self { orbs }
    }

    /// Every aspect whose orb admits `separation` (degrees, 0..=180).
    ///
    /// The checks are independent, so one separation may satisfy two
    /// aspects when orbs are wide enough to overlap. Both are returned, in
    /// conjunction, opposition, square, trine, sextile order.
    pub fn classify(&self, separation: f64) -> Vec<(AspectKind, f64)> {
        ALL_ASPECTS
            .iter()
            .filter_map(|&kind| {
                let orb = (separation - kind.exact_angle()).abs();
                (orb <= kind.orb(&self.orbs)).then_some((kind, orb))
            })
            .collect()
    }

    /// Aspects between two longitudes.
    pub fn calculate_aspects(&self, lon1: f64, lon2: f64) -> Vec<(AspectKind, f64)> {
        if !lon1.is_finite() || !lon2.is_finite() {
            return Vec::new();
        }
        self.classify(angular_separation(lon1, lon2))
    }

    /// Aspects between every planet of `from` and every planet of `to`.
    ///
    /// Pairs are visited in `from` order, then `to` order. Planets sharing a
    /// name are still compared, since the two charts are distinct. Planets
    /// without a usable longitude are skipped.
    pub fn compute_cross_aspects(&self, from: &Chart, to: &Chart) -> Vec<AspectPair> {
        let mut pairs = Vec::new();
        for p1 in from.planets() {
            let Some(lon1) = p1.position() else { continue };
            for p2 in to.planets() {
                let Some(lon2) = p2.position() else { continue };
                for (aspect, orb) in self.calculate_aspects(lon1, lon2) {
                    pairs.push(AspectPair {
                        from: p1.name.clone(),
                        to: p2.name.clone(),
                        aspect,
                        orb,
                    });
                }
            }
        }
        pairs
    }
}

/// Most important aspects first: tightest orb, then aspect precedence, then
/// input order. Truncated to `limit`.
pub fn rank_aspects(pairs: &[AspectPair], limit: usize) -> Vec<AspectPair> {
    let mut ranked = pairs.to_vec();
    ranked.sort_by(|a, b| match a.orb.total_cmp(&b.orb) {
        Ordering::Equal => a.aspect.cmp(&b.aspect),
        other => other,
    });
    ranked.truncate(limit);
    ranked
}
