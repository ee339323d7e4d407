//! Catalog queries rendered as JSON.

use serde::Serialize;
use serde_json::Value;

use candyworld_catalog::{CatalogStore, Category, Product};

use crate::cli::Command;

#[derive(Debug, Serialize)]
struct CategoryListing {
    category: Category,
    label: &'static str,
    products: Vec<Product>,
}

/// Answer `command` as a JSON document.
pub fn run_query(store: &CatalogStore, command: &Command) -> Result<Value, serde_json::Error> {
    match command {
        Command::Categories => {
            let listings: Vec<CategoryListing> = store
                .categories()
                .into_iter()
                .map(|category| CategoryListing {
                    category,
                    label: category.label_fr(),
                    products: store.by_category(category),
                })
                .collect();
            serde_json::to_value(listings)
        }
        Command::Category { category } => serde_json::to_value(store.by_category(*category)),
        Command::Country { name } => serde_json::to_value(store.by_country(name)),
        Command::Product { id } => serde_json::to_value(store.get(id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use candyworld_catalog::{ProductId, sample_products};

    fn store() -> CatalogStore {
        let store = CatalogStore::new();
        store.load_initial(sample_products()).unwrap();
        store
    }

    #[test]
    fn categories_query_groups_products() {
        let out = run_query(&store(), &Command::Categories).unwrap();
        let listings = out.as_array().unwrap();
        assert_eq!(listings.len(), 3);
        assert_eq!(listings[0]["category"], "candy");
        assert_eq!(listings[0]["label"], "Bonbons");
        assert_eq!(listings[0]["products"][0]["name"], "Mochi");
        assert_eq!(listings[2]["products"][0]["name"], "Bubble Tea");
    }

    #[test]
    fn country_query_returns_matches() {
        let command = Command::Country { name: "Portugal".to_string() };
        let out = run_query(&store(), &command).unwrap();
        assert_eq!(out.as_array().map(Vec::len), Some(1));
        assert_eq!(out[0]["name"], "Pastel de Nata");
    }

    #[test]
    fn unknown_product_is_null() {
        let out = run_query(&store(), &Command::Product { id: ProductId::new() }).unwrap();
        assert!(out.is_null());
    }
}
