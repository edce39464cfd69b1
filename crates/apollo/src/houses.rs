//! House placement against an ordered set of twelve cusps.

use crate::angle::normalize;

/// House returned when no span claims the longitude.
pub const FALLBACK_HOUSE: u8 = 1;

/// House (1..=12) containing `longitude`, or `None` if no span matches.
///
/// House `i` runs from cusp `i` up to cusp `i + 1`, with house 12 closing on
/// cusp 1. A span whose start is not below its end crosses 0° Aries.
/// A `NaN` longitude matches nothing.
pub fn try_locate_house(longitude: f64, cusps: &[f64; 12]) -> Option<u8> {
    let lon = normalize(longitude);

    for i in 0..12 {
        let start = normalize(cusps[i]);
        let end = normalize(cusps[(i + 1) % 12]);

        let inside = if start < end {
            lon >= start && lon < end
        } else {
            lon >= start || lon < end
        };

        if inside {
            return Some(i as u8 + 1);
        }
    }

    None
}

/// House (1..=12) containing `longitude`.
///
/// Never fails: when no span matches (a `NaN` longitude, or degenerate cusps)
/// the result is [`FALLBACK_HOUSE`]. Callers that need to tell the two apart
/// use [`try_locate_house`].
pub fn locate_house(longitude: f64, cusps: &[f64; 12]) -> u8 {
    try_locate_house(longitude, cusps).unwrap_or_else(|| {
        log::debug!(
            "longitude {} matched no house span, falling back to house {}",
            longitude,
            FALLBACK_HOUSE
        );
        FALLBACK_HOUSE
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const WRAPPING: [f64; 12] = [
        350.0, 20.0, 50.0, 80.0, 110.0, 140.0, 170.0, 200.0, 230.0, 260.0, 290.0, 320.0,
    ];

    fn equal_houses(start: f64) -> [f64; 12] {
        let mut cusps = [0.0; 12];
        for (i, cusp) in cusps.iter_mut().enumerate() {
            *cusp = start + 30.0 * i as f64;
        }
        cusps
    }

    #[test]
    fn test_first_house_spanning_aries_point() {
        assert_eq!(locate_house(5.0, &WRAPPING), 1);
        assert_eq!(locate_house(355.0, &WRAPPING), 1);
        assert_eq!(locate_house(25.0, &WRAPPING), 2);
    }

    #[test]
    fn test_cusp_belongs_to_the_house_it_opens() {
        assert_eq!(locate_house(350.0, &WRAPPING), 1);
        assert_eq!(locate_house(20.0, &WRAPPING), 2);
        assert_eq!(locate_house(319.999, &WRAPPING), 11);
        assert_eq!(locate_house(320.0, &WRAPPING), 12);
    }

    #[test]
    fn test_unnormalized_inputs() {
        assert_eq!(locate_house(-5.0, &WRAPPING), 1);
        assert_eq!(locate_house(385.0, &WRAPPING), 2);
    }

    #[test]
    fn test_every_degree_lands_in_its_equal_house() {
        for start in [0.0, 17.5, 350.0] {
            let cusps = equal_houses(start);
            for tenth in 0..3600 {
                let lon = tenth as f64 / 10.0;
                let expected = ((lon - start).rem_euclid(360.0) / 30.0) as u8 + 1;
                assert_eq!(try_locate_house(lon, &cusps), Some(expected), "start {start} lon {lon}");
            }
        }
    }

    #[test]
    fn test_unequal_houses_cover_the_circle() {
        for tenth in 0..3600 {
            let lon = tenth as f64 / 10.0;
            assert!(try_locate_house(lon, &WRAPPING).is_some(), "lon {lon}");
        }
    }

    #[test]
    fn test_nan_falls_back_to_first_house() {
        assert_eq!(try_locate_house(f64::NAN, &WRAPPING), None);
        assert_eq!(locate_house(f64::NAN, &WRAPPING), FALLBACK_HOUSE);
    }

    #[test]
    fn test_equal_houses_from_aries() {
        let cusps = equal_houses(0.0);
        assert_eq!(locate_house(135.0, &cusps), 5);
        assert_eq!(locate_house(0.0, &cusps), 1);
        assert_eq!(locate_house(359.9, &cusps), 12);
    }
}
