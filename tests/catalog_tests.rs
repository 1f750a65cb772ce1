// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Business catalog smoke tests against the committed data file.

use comunidade_ativa::models::Coordinate;
use comunidade_ativa::services::geolocation::DEFAULT_LOCATION;
use comunidade_ativa::services::BusinessCatalog;

/// Load the committed catalog.
fn load_test_catalog() -> BusinessCatalog {
    BusinessCatalog::load_from_file("data/businesses.geojson")
        .expect("Failed to load business catalog - is data/ committed?")
}

#[test]
fn test_data_file_matches_builtin_catalog() {
    let loaded = load_test_catalog();
    let demo = BusinessCatalog::demo();

    assert_eq!(loaded.businesses(), demo.businesses());
}

#[test]
fn test_offers_belong_to_their_business() {
    let catalog = load_test_catalog();
    for business in catalog.businesses() {
        assert!(!business.offers.is_empty(), "{} has no offers", business.name);
        for offer in &business.offers {
            assert_eq!(offer.business_id, business.id);
        }
    }
}

#[test]
fn test_ids_unique() {
    let catalog = load_test_catalog();
    let mut seen = std::collections::HashSet::new();
    for business in catalog.businesses() {
        assert!(seen.insert(business.id.as_str()), "Duplicate id: {}", business.id);
    }
}

#[test]
fn test_nearby_from_default_location() {
    let catalog = load_test_catalog();
    let nearby = catalog.nearby(DEFAULT_LOCATION);

    let names: Vec<&str> = nearby.iter().map(|n| n.business.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Café Central", "Livraria Saber", "Academia Vida Ativa"]
    );
    assert_eq!(nearby[0].distance_km, 0.0);
    assert_eq!(nearby[1].distance_label(), "0.2km");
    assert_eq!(nearby[2].distance_label(), "0.3km");
}

#[test]
fn test_nearby_is_sorted() {
    let catalog = load_test_catalog();
    let far_away = Coordinate::new(48.8566, 2.3522);
    let nearby = catalog.nearby(far_away);

    assert_eq!(nearby.len(), 3);
    assert!(nearby
        .windows(2)
        .all(|pair| pair[0].distance_km <= pair[1].distance_km));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = BusinessCatalog::load_from_file("data/does-not-exist.geojson").unwrap_err();
    assert!(matches!(
        err,
        comunidade_ativa::services::CatalogError::Io(_)
    ));
}
