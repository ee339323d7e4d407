//! Product entity and its embedded nutrition facts.

use serde::{Deserialize, Serialize};

use candyworld_core::{Entity, ProductId, ValidationError, ValueObject};

use crate::category::Category;

/// Inclusive bounds of a product rating.
pub const RATING_MIN: f64 = 0.0;
pub const RATING_MAX: f64 = 5.0;

/// Nutrition facts embedded in a product (no lifecycle of their own).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionalInfo {
    pub calories: u32,
    /// Grams of sugar.
    pub sugar: f64,
    #[serde(default)]
    pub allergens: Vec<String>,
}

impl ValueObject for NutritionalInfo {}

impl NutritionalInfo {
    pub fn has_allergens(&self) -> bool {
        !self.allergens.is_empty()
    }
}

/// Everything needed to create a product except its identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub country: String,
    pub price: f64,
    pub description: String,
    pub image_url: String,
    pub category: Category,
    pub nutritional_info: NutritionalInfo,
    pub rating: f64,
}

impl ProductDraft {
    /// Turn the draft into a product with a freshly generated id.
    pub fn into_product(self) -> Product {
        self.into_product_with_id(ProductId::new())
    }

    pub fn into_product_with_id(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            country: self.country,
            price: self.price,
            description: self.description,
            image_url: self.image_url,
            category: self.category,
            nutritional_info: self.nutritional_info,
            rating: self.rating,
        }
    }
}

/// A catalog item.
///
/// Construction does not validate; [`Product::validate`] checks the data-model
/// invariants and the store runs it on every bulk load.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    id: ProductId,
    name: String,
    country: String,
    price: f64,
    description: String,
    #[serde(rename = "imageURL")]
    image_url: String,
    category: Category,
    nutritional_info: NutritionalInfo,
    rating: f64,
}

impl Product {
    pub fn product_id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Origin label, compared verbatim (no normalization).
    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Opaque reference handed to whatever fetches images.
    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn nutritional_info(&self) -> &NutritionalInfo {
        &self.nutritional_info
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    /// Check the per-product invariants.
    ///
    /// Uniqueness of `id` is a collection-level invariant and is checked by the store.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::new("name", "cannot be empty"));
        }
        check_non_negative("price", self.price)?;
        check_non_negative("nutritionalInfo.sugar", self.nutritional_info.sugar)?;
        check_rating(self.rating)?;
        Ok(())
    }

    /// Back to an editable draft; the id is dropped.
    pub fn into_draft(self) -> ProductDraft {
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
    }

    pub(crate) fn set_rating(&mut self, rating: f64) {
        self.rating = rating;
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

fn check_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::new(field, "must be a finite number"));
    }
    if value < 0.0 {
        return Err(ValidationError::new(field, "must be >= 0"));
    }
    Ok(())
}

pub(crate) fn check_rating(rating: f64) -> Result<(), ValidationError> {
    if !(RATING_MIN..=RATING_MAX).contains(&rating) {
        return Err(ValidationError::new(
            "rating",
            format!("must be within [{RATING_MIN:.1}, {RATING_MAX:.1}]"),
        ));
    }
    Ok(())
}
