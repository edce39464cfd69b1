use apollo::{AspectCalculator, Chart, Comparator, HouseCusp, Planet};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const NAMES: [&str; 10] = [
    "Sun", "Moon", "Mercury", "Venus", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune", "Pluto",
];

fn chart(offset: f64) -> Chart {
    let planets = NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| Planet::new(*name, offset + (i as f64) * 37.0).with_house((i % 12) as u8 + 1))
        .collect();
    let cusps = (0..12)
        .map(|i| HouseCusp::new(i as u8 + 1, offset + 30.0 * i as f64))
        .collect();
    Chart::new(planets, cusps, offset, offset + 270.0).unwrap()
}

fn bench_calculate_aspects(c: &mut Criterion) {
    let calculator = AspectCalculator::default();

    c.bench_function("calculate_aspects", |b| {
        b.iter(|| calculator.calculate_aspects(black_box(100.0), black_box(218.0)))
    });
}

fn bench_compare(c: &mut Criterion) {
    let comparator = Comparator::default();
    let natal = chart(0.0);
    let solar_return = chart(133.0);

    c.bench_function("compare", |b| {
        b.iter(|| comparator.compare(black_box(&natal), black_box(&solar_return)))
    });
}

criterion_group!(benches, bench_calculate_aspects, bench_compare);
criterion_main!(benches);
