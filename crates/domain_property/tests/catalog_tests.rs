//! Property catalog tests
//!
//! Tests cover loading a catalog document, the data rules enforced on load,
//! and the listing/detail/review queries exposed through the port.

use core_kernel::PropertyId;
use domain_property::{CatalogError, InMemoryCatalog, PropertyCatalog, ReviewSummary};
use rust_decimal_macros::dec;
use test_utils::CatalogFixtures;

mod loading {
    use super::*;

    #[test]
    fn test_fixture_catalog_loads() {
        let catalog = CatalogFixtures::catalog();
        assert_eq!(catalog.len(), 2);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_empty_document_gives_empty_catalog() {
        let catalog = InMemoryCatalog::from_json_str("{}").unwrap();
        assert!(catalog.is_empty());
        assert!(InMemoryCatalog::empty().is_empty());
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let result = InMemoryCatalog::from_json_str("{ \"properties\": [");
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = InMemoryCatalog::from_path("/nonexistent/catalog.json");
        assert!(matches!(result, Err(CatalogError::Io(_))));
    }

    #[test]
    fn test_from_path_reads_file() {
        let path = std::env::temp_dir().join(format!("catalog-{}.json", std::process::id()));
        std::fs::write(&path, CatalogFixtures::catalog_json()).unwrap();
        let catalog = InMemoryCatalog::from_path(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(catalog.len(), 2);
    }
}

mod data_rules {
    use super::*;

    fn listing(id: &str, price: &str, rating: &str) -> String {
        format!(
            r#"{{
              "id": "{id}", "name": "Cabin {id}",
              "address": {{ "state": "Cusco", "city": "Urubamba", "country": "Peru" }},
              "rating": "{rating}", "price": "{price}",
              "offers": {{ "bed": "2", "shower": "1", "occupants": "4" }},
              "image": "cabin.jpg"
            }}"#
        )
    }

    fn load(properties: &[String], reviews: &str) -> Result<InMemoryCatalog, CatalogError> {
        InMemoryCatalog::from_json_str(&format!(
            r#"{{ "properties": [{}], "reviews": [{}] }}"#,
            properties.join(","),
            reviews
        ))
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let result = load(&[listing("7", "90", "4"), listing("7", "95", "4")], "");
        assert!(matches!(result, Err(CatalogError::InvalidData(msg)) if msg.contains("duplicate")));
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let result = load(&[listing("7", "-1", "4")], "");
        assert!(matches!(result, Err(CatalogError::InvalidData(_))));
    }

    #[test]
    fn test_rating_above_five_is_rejected() {
        let result = load(&[listing("7", "90", "5.1")], "");
        assert!(matches!(result, Err(CatalogError::InvalidData(_))));
    }

    #[test]
    fn test_review_of_unknown_property_is_rejected() {
        let review = r#"{ "id": "r9", "property_id": "99", "reviewer": "Ana", "rating": 5,
                          "comment": "ok", "date": "2024-01-01" }"#;
        let result = load(&[listing("7", "90", "4")], review);
        assert!(matches!(result, Err(CatalogError::InvalidData(msg)) if msg.contains("unknown property")));
    }

    #[test]
    fn test_review_rating_out_of_range_is_rejected() {
        let review = r#"{ "id": "r9", "property_id": "7", "reviewer": "Ana", "rating": 0,
                          "comment": "ok", "date": "2024-01-01" }"#;
        let result = load(&[listing("7", "90", "4")], review);
        assert!(matches!(result, Err(CatalogError::InvalidData(_))));
    }
}

mod queries {
    use super::*;

    #[tokio::test]
    async fn test_list_keeps_document_order() {
        let catalog = CatalogFixtures::catalog();
        let listings = catalog.list(None).await.unwrap();
        let ids: Vec<&str> = listings.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "2"]);
    }

    #[tokio::test]
    async fn test_list_filters_by_category_ignoring_case() {
        let catalog = CatalogFixtures::catalog();
        let pools = catalog.list(Some("pool")).await.unwrap();
        assert_eq!(pools.len(), 1);
        assert_eq!(pools[0].name, "Villa Arrecife Beach House");

        let none = catalog.list(Some("Ski-in")).await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_get_returns_full_listing() {
        let catalog = CatalogFixtures::catalog();
        let villa = catalog.get(&PropertyId::from(CatalogFixtures::VILLA_ID)).await.unwrap();

        assert_eq!(villa.price, dec!(2500));
        assert_eq!(villa.rating, dec!(4.76));
        assert_eq!(villa.location(), "Alicante, Alicante, Spain");
        assert_eq!(villa.fees.len(), 2);
        assert_eq!(villa.fees[0].label, "Cleaning fee");
    }

    #[tokio::test]
    async fn test_optional_fields_default() {
        let catalog = CatalogFixtures::catalog();
        let loft = catalog.get(&PropertyId::from(CatalogFixtures::LOFT_ID)).await.unwrap();

        assert_eq!(loft.price, dec!(120.50));
        assert!(loft.fees.is_empty());
        assert!(loft.images.is_empty());
        assert_eq!(loft.discount, None);
    }

    #[tokio::test]
    async fn test_get_unknown_property() {
        let catalog = CatalogFixtures::catalog();
        let result = catalog.get(&PropertyId::from("404")).await;
        assert!(matches!(result, Err(CatalogError::PropertyNotFound(id)) if id == "404"));
    }

    #[tokio::test]
    async fn test_reviews_are_newest_first() {
        let catalog = CatalogFixtures::catalog();
        let reviews = catalog
            .reviews(&PropertyId::from(CatalogFixtures::VILLA_ID))
            .await
            .unwrap();
        let reviewers: Vec<&str> = reviews.iter().map(|r| r.reviewer.as_str()).collect();
        assert_eq!(reviewers, ["Tomas", "Johanna", "Priya"]);

        let summary = ReviewSummary::from_reviews(&reviews);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.average_rating, Some(dec!(4.33)));
    }

    #[tokio::test]
    async fn test_property_without_reviews() {
        let catalog = CatalogFixtures::catalog();
        let reviews = catalog
            .reviews(&PropertyId::from(CatalogFixtures::LOFT_ID))
            .await
            .unwrap();
        assert!(reviews.is_empty());
    }

    #[tokio::test]
    async fn test_reviews_of_unknown_property() {
        let catalog = CatalogFixtures::catalog();
        let result = catalog.reviews(&PropertyId::from("404")).await;
        assert!(matches!(result, Err(CatalogError::PropertyNotFound(_))));
    }
}
