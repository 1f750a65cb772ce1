use comunidade_ativa::models::{Business, Coordinate};
use comunidade_ativa::services::{distance_km, BusinessCatalog};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn benchmark_nearby(c: &mut Criterion) {
    let catalog = BusinessCatalog::load_from_file("data/businesses.geojson")
        .expect("Failed to load business catalog");

    // Spread copies of the reference businesses over greater São Paulo.
    let template: Vec<Business> = catalog.businesses().to_vec();
    let large: Vec<Business> = (0..1000)
        .map(|i| {
            let mut b = template[i % template.len()].clone();
            b.id = i.to_string();
            b.location = Coordinate::new(
                b.location.lat + (i as f64 * 0.0007) % 0.3,
                b.location.lng - (i as f64 * 0.0011) % 0.3,
            );
            b
        })
        .collect();
    let large = BusinessCatalog::new(large);

    let origin = Coordinate::new(-23.56, -46.64);

    let mut group = c.benchmark_group("nearby");

    group.bench_function("distance_km", |b| {
        let other = Coordinate::new(-22.9068, -43.1729);
        b.iter(|| distance_km(black_box(origin), black_box(other)))
    });

    group.bench_function("reference_catalog", |b| {
        b.iter(|| catalog.nearby(black_box(origin)).len())
    });

    group.bench_function("thousand_businesses", |b| {
        b.iter(|| large.nearby(black_box(origin)).len())
    });

    group.finish();
}

criterion_group!(benches, benchmark_nearby);
criterion_main!(benches);
