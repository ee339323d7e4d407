//! Confectionery catalog domain module.
//!
//! This crate owns the product model and the in-memory store that serves
//! category/country views of it. It is pure domain logic (no rendering, no
//! network); the only IO is the optional fixture-file helper in [`seed`].

pub mod category;
pub mod product;
pub mod seed;
pub mod store;

pub use category::Category;
pub use product::{NutritionalInfo, Product, ProductDraft};
pub use seed::{SeedError, products_from_file, products_from_json, sample_products};
pub use store::{CatalogChanged, CatalogStore};

pub use candyworld_core::{DomainError, DomainResult, Entity, ProductId, ValidationError};
