//! Bulk data sources for [`CatalogStore::load_initial`](crate::CatalogStore::load_initial).
//!
//! Parsing only: records are turned into products here, validated by the store.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use candyworld_core::ProductId;

use crate::category::Category;
use crate::product::{NutritionalInfo, Product, ProductDraft};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read fixture {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse product fixture: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One product as it appears in a JSON fixture. `id` is optional; a missing one
/// is generated.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductRecord {
    #[serde(default)]
    id: Option<ProductId>,
    name: String,
    country: String,
    price: f64,
    #[serde(default)]
    description: String,
    #[serde(rename = "imageURL", default)]
    image_url: String,
    category: Category,
    nutritional_info: NutritionalInfo,
    rating: f64,
}

impl ProductRecord {
    fn into_product(self) -> Product {
        let id = self.id.unwrap_or_default();
        ProductDraft {
            name: self.name,
            country: self.country,
            price: self.price,
            description: self.description,
            image_url: self.image_url,
            category: self.category,
            nutritional_info: self.nutritional_info,
            rating: self.rating,
        }
        .into_product_with_id(id)
    }
}

/// Parse a JSON array of product records.
pub fn products_from_json(json: &str) -> Result<Vec<Product>, SeedError> {
    let records: Vec<ProductRecord> = serde_json::from_str(json)?;
    Ok(records.into_iter().map(ProductRecord::into_product).collect())
}

pub fn products_from_file(path: impl AsRef<Path>) -> Result<Vec<Product>, SeedError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.display().to_string(),
        source,
    })?;
    products_from_json(&json)
}

/// The built-in demo catalog: one product per category.
pub fn sample_products() -> Vec<Product> {
    vec![
        ProductDraft {
            name: "Mochi".to_string(),
            country: "Japon".to_string(),
            price: 5.99,
            description: "Délicieux mochi traditionnel".to_string(),
            image_url: "url_image_mochi".to_string(),
            category: Category::Candy,
            nutritional_info: NutritionalInfo {
                calories: 100,
                sugar: 15.5,
                allergens: vec!["Lait".to_string(), "Soja".to_string()],
            },
            rating: 4.5,
        }
        .into_product(),
        ProductDraft {
            name: "Pastel de Nata".to_string(),
            country: "Portugal".to_string(),
            price: 3.50,
            description: "Célèbre tarte portugaise".to_string(),
            image_url: "url_image_pastel".to_string(),
            category: Category::Dessert,
            nutritional_info: NutritionalInfo {
                calories: 250,
                sugar: 20.0,
                allergens: vec!["Œufs".to_string(), "Blé".to_string()],
            },
            rating: 4.8,
        }
        .into_product(),
        ProductDraft {
            name: "Bubble Tea".to_string(),
            country: "Taiwan".to_string(),
            price: 4.75,
            description: "Thé aux perles taiwanese".to_string(),
            image_url: "url_image_bubble_tea".to_string(),
            category: Category::Drink,
            nutritional_info: NutritionalInfo {
                calories: 280,
                sugar: 25.0,
                allergens: vec!["Lait".to_string()],
            },
            rating: 4.6,
        }
        .into_product(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use candyworld_core::Entity;

    #[test]
    fn sample_products_are_valid_and_cover_every_category() {
        let products = sample_products();
        assert!(products.iter().all(|p| p.validate().is_ok()));
        let categories: Vec<Category> = products.iter().map(Product::category).collect();
        assert_eq!(categories, Category::ALL.to_vec());
    }

    #[test]
    fn parses_records_and_keeps_given_ids() {
        let id = ProductId::new();
        let json = format!(
            r#"[
                {{
                    "id": "{id}",
                    "name": "Churros",
                    "country": "Espagne",
                    "price": 2.5,
                    "description": "Beignets",
                    "imageURL": "url_image_churros",
                    "category": "dessert",
                    "nutritionalInfo": {{ "calories": 300, "sugar": 12.0, "allergens": ["Blé"] }},
                    "rating": 4.1
                }},
                {{
                    "name": "Ramune",
                    "country": "Japon",
                    "price": 2.0,
                    "category": "drink",
                    "nutritionalInfo": {{ "calories": 80, "sugar": 19.0 }},
                    "rating": 4.0
                }}
            ]"#
        );

        let products = products_from_json(&json).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id(), &id);
        assert_eq!(products[0].image_url(), "url_image_churros");
        assert_eq!(products[1].category(), Category::Drink);
        assert_eq!(products[1].description(), "");
        assert!(!products[1].nutritional_info().has_allergens());
    }

    #[test]
    fn parse_does_not_validate() {
        let json = r#"[{"name": "", "country": "X", "price": -1.0, "category": "candy",
                        "nutritionalInfo": {"calories": 1, "sugar": 1.0}, "rating": 9.0}]"#;
        let products = products_from_json(json).unwrap();
        assert_eq!(products.len(), 1);
        assert!(products[0].validate().is_err());
    }

    #[test]
    fn unknown_category_is_a_parse_error() {
        let json = r#"[{"name": "X", "country": "X", "price": 1.0, "category": "snack",
                        "nutritionalInfo": {"calories": 1, "sugar": 1.0}, "rating": 1.0}]"#;
        assert!(matches!(products_from_json(json), Err(SeedError::Parse(_))));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = products_from_file("/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
