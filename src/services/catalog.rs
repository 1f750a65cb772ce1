// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Business catalog loading and nearby lookup.

use crate::models::{Business, Coordinate, Offer};
use crate::services::geo::{distance_km, format_distance};
use chrono::{DateTime, Utc};
use geo::Point;
use geojson::GeoJson;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Read-only list of businesses.
#[derive(Debug, Default, Clone)]
pub struct BusinessCatalog {
    businesses: Vec<Business>,
}

/// A business together with its distance from the viewer.
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyBusiness<'a> {
    pub business: &'a Business,
    pub distance_km: f64,
}

impl NearbyBusiness<'_> {
    pub fn distance_label(&self) -> String {
        format_distance(self.distance_km)
    }
}

impl BusinessCatalog {
    pub fn new(businesses: Vec<Business>) -> Self {
        Self { businesses }
    }

    /// Built-in reference businesses around São Paulo.
    pub fn demo() -> Self {
        // 2024-12-31T00:00:00Z
        let valid_until = DateTime::<Utc>::from_timestamp(1_735_603_200, 0).unwrap_or_default();

        Self::new(vec![
            Business {
                id: "1".to_string(),
                name: "Café Central".to_string(),
                category: "Alimentação".to_string(),
                description: "Café artesanal e lanches saudáveis no coração da cidade".to_string(),
                address: "Rua das Flores, 123".to_string(),
                location: Coordinate::new(-23.5505, -46.6333),
                rating: 4.8,
                image: Some(
                    "https://images.unsplash.com/photo-1501339847302-ac426a4a7cbb?w=400&h=300&fit=crop"
                        .to_string(),
                ),
                phone: Some("(11) 99999-1234".to_string()),
                website: None,
                offers: vec![Offer {
                    id: "1".to_string(),
                    business_id: "1".to_string(),
                    title: "10% de desconto".to_string(),
                    description: "Em qualquer bebida quente".to_string(),
                    discount: 10,
                    points_required: 50,
                    valid_until,
                    category: "Desconto".to_string(),
                }],
                verified: true,
            },
            Business {
                id: "2".to_string(),
                name: "Livraria Saber".to_string(),
                category: "Cultura".to_string(),
                description: "Livros novos e usados, espaço de leitura aconchegante".to_string(),
                address: "Av. Conhecimento, 456".to_string(),
                location: Coordinate::new(-23.5515, -46.6343),
                rating: 4.6,
                image: Some(
                    "https://images.unsplash.com/photo-1481627834876-b7833e8f5570?w=400&h=300&fit=crop"
                        .to_string(),
                ),
                phone: None,
                website: None,
                offers: vec![Offer {
                    id: "2".to_string(),
                    business_id: "2".to_string(),
                    title: "Frete grátis".to_string(),
                    description: "Em compras acima de R$ 50".to_string(),
                    discount: 0,
                    points_required: 100,
                    valid_until,
                    category: "Benefício".to_string(),
                }],
                verified: true,
            },
            Business {
                id: "3".to_string(),
                name: "Academia Vida Ativa".to_string(),
                category: "Saúde".to_string(),
                description: "Equipamentos modernos e aulas em grupo".to_string(),
                address: "Rua da Saúde, 789".to_string(),
                location: Coordinate::new(-23.5525, -46.6353),
                rating: 4.7,
                image: Some(
                    "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=400&h=300&fit=crop"
                        .to_string(),
                ),
                phone: None,
                website: None,
                offers: vec![Offer {
                    id: "3".to_string(),
                    business_id: "3".to_string(),
                    title: "Aula experimental grátis".to_string(),
                    description: "Experimente qualquer modalidade".to_string(),
                    discount: 100,
                    points_required: 75,
                    valid_until,
                    category: "Experiência".to_string(),
                }],
                verified: true,
            },
        ])
    }

    /// Load businesses from a GeoJSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let json_data =
            fs::read_to_string(path.as_ref()).map_err(|e| CatalogError::Io(e.to_string()))?;
        Self::load_from_json(&json_data)
    }

    /// Load businesses from a GeoJSON FeatureCollection of Point features.
    ///
    /// Feature properties carry the business fields (camelCase, as stored);
    /// the point geometry supplies the location.
    pub fn load_from_json(json_data: &str) -> Result<Self, CatalogError> {
        let geojson: GeoJson = json_data
            .parse()
            .map_err(|e: geojson::Error| CatalogError::Parse(e.to_string()))?;

        let GeoJson::FeatureCollection(collection) = geojson else {
            return Err(CatalogError::Parse(
                "expected a FeatureCollection".to_string(),
            ));
        };

        let mut businesses = Vec::with_capacity(collection.features.len());

        for feature in collection.features {
            let geometry = feature
                .geometry
                .ok_or(CatalogError::MissingProperty("geometry"))?;
            let point: Point<f64> = geometry
                .value
                .try_into()
                .map_err(|_| CatalogError::UnsupportedGeometry)?;

            let mut properties = feature
                .properties
                .ok_or(CatalogError::MissingProperty("properties"))?;
            properties.insert(
                "location".to_string(),
                serde_json::to_value(Coordinate::from(point))
                    .map_err(|e| CatalogError::Parse(e.to_string()))?,
            );

            let business: Business = serde_json::from_value(Value::Object(properties))
                .map_err(|e| CatalogError::Parse(e.to_string()))?;
            businesses.push(business);
        }

        tracing::info!(count = businesses.len(), "Loaded business catalog");
        Ok(Self::new(businesses))
    }

    pub fn businesses(&self) -> &[Business] {
        &self.businesses
    }

    pub fn get(&self, id: &str) -> Option<&Business> {
        self.businesses.iter().find(|b| b.id == id)
    }

    /// Businesses ordered by distance from `origin`, nearest first.
    pub fn nearby(&self, origin: Coordinate) -> Vec<NearbyBusiness<'_>> {
        let mut nearby: Vec<NearbyBusiness<'_>> = self
            .businesses
            .iter()
            .map(|business| NearbyBusiness {
                business,
                distance_km: distance_km(origin, business.location),
            })
            .collect();
        // Stable sort keeps catalog order for equal distances.
        nearby.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
        nearby
    }
}

/// Errors from catalog loading.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read file: {0}")]
    Io(String),

    #[error("Failed to parse catalog: {0}")]
    Parse(String),

    #[error("Unsupported geometry type (expected Point)")]
    UnsupportedGeometry,

    #[error("Feature is missing {0}")]
    MissingProperty(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog() {
        let catalog = BusinessCatalog::demo();
        assert_eq!(catalog.businesses().len(), 3);
        assert_eq!(catalog.get("2").map(|b| b.name.as_str()), Some("Livraria Saber"));
        assert!(catalog.get("99").is_none());
        assert!(catalog.businesses().iter().all(|b| b.verified));
    }

    #[test]
    fn test_nearby_sorted_by_distance() {
        let catalog = BusinessCatalog::demo();
        let origin = Coordinate::new(-23.56, -46.64);

        let ids: Vec<&str> = catalog
            .nearby(origin)
            .iter()
            .map(|n| n.business.id.as_str())
            .collect();

        assert_eq!(ids, vec!["3", "2", "1"]);
    }

    #[test]
    fn test_distance_label() {
        let catalog = BusinessCatalog::demo();
        let nearest = &catalog.nearby(Coordinate::new(-23.5505, -46.6333))[0];
        assert_eq!(nearest.business.id, "1");
        assert_eq!(nearest.distance_label(), "0.0km");
    }

    #[test]
    fn test_load_from_json_point_feature() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [-46.6333, -23.5505] },
                "properties": {
                    "id": "10",
                    "name": "Padaria Bom Dia",
                    "category": "Alimentação",
                    "description": "Pães frescos",
                    "address": "Rua A, 1",
                    "rating": 4.2
                }
            }]
        }"#;

        let catalog = BusinessCatalog::load_from_json(json).unwrap();
        let business = catalog.get("10").unwrap();

        assert_eq!(business.location, Coordinate::new(-23.5505, -46.6333));
        assert!(business.offers.is_empty());
        assert!(!business.verified);
    }

    #[test]
    fn test_load_rejects_polygon() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "geometry": { "type": "Polygon", "coordinates": [[[0,0],[1,0],[1,1],[0,0]]] },
                "properties": { "id": "x" }
            }]
        }"#;

        let err = BusinessCatalog::load_from_json(json).unwrap_err();
        assert!(matches!(err, CatalogError::UnsupportedGeometry));
    }

    #[test]
    fn test_load_rejects_invalid_json() {
        assert!(matches!(
            BusinessCatalog::load_from_json("not json"),
            Err(CatalogError::Parse(_))
        ));
    }
}
