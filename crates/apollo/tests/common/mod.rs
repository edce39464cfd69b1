#![allow(dead_code)]

use apollo::{Chart, HouseCusp, Planet};

/// Equal houses starting at `start`, Ascendant on the first cusp.
pub fn equal_house_chart(planets: Vec<Planet>, start: f64, midheaven: f64) -> Chart {
    let cusps = (0..12)
        .map(|i| HouseCusp::new(i as u8 + 1, start + 30.0 * i as f64))
        .collect();
    Chart::new(planets, cusps, start, midheaven).unwrap()
}

pub fn natal() -> Chart {
    let json = r#"{
        "planets": [
            {"name": "Sun", "longitude": 121.5, "house": 5},
            {"name": "Moon", "longitude": 10.0, "house": 1},
            {"name": "Mercury", "longitude": 128.0, "house": 5},
            {"name": "Venus", "longitude": 140.2, "house": 5},
            {"name": "Mars", "longitude": 200.0, "house": 7},
            {"name": "Jupiter", "longitude": 275.0, "house": 10},
            {"name": "Saturn", "longitude": 305.0, "house": 11},
            {"name": "Uranus", "longitude": 250.0, "house": 9},
            {"name": "Neptune", "longitude": 262.0, "house": 9},
            {"name": "Pluto", "longitude": 215.0, "house": 8}
        ],
        "houses": [0, 30, 60, 90, 120, 150, 180, 210, 240, 270, 300, 330],
        "ascendant": 15.0,
        "midheaven": 280.0
    }"#;
    Chart::from_json(json).unwrap()
}

pub fn solar_return() -> Chart {
    let json = r#"{
        "planets": [
            {"name": "Sun", "degree": 121.5, "house_number": 10},
            {"name": "Moon", "degree": 190.0, "house_number": 1},
            {"name": "Mercury", "degree": 110.0, "house_number": 10},
            {"name": "Venus", "degree": 160.0, "house_number": 12},
            {"name": "Mars", "degree": 40.0, "house_number": 8},
            {"name": "Jupiter", "degree": 138.0, "house_number": 1},
            {"name": "Saturn", "degree": 330.0, "house_number": 6},
            {"name": "Uranus", "degree": 58.0, "house_number": 8},
            {"name": "Neptune", "degree": 0.5, "house_number": 7},
            {"name": "Pluto", "degree": 302.0, "house_number": 5}
        ],
        "houses": [135, 165, 195, 225, 255, 285, 315, 345, 15, 45, 75, 105],
        "asc": 135.0,
        "mc": 45.0
    }"#;
    Chart::from_json(json).unwrap()
}
