//! In-memory catalog store.
//!
//! The collection lives behind `RwLock<Arc<Vec<Product>>>`:
//! - writers build a complete new collection off-lock, then swap the `Arc` under
//!   the write lock, so readers see either the old or the new collection;
//! - readers clone the `Arc` under the read lock and filter after releasing it.
//!
//! Every query returns owned products, so results never change after the fact.

use std::collections::HashSet;
use std::sync::{Arc, PoisonError, RwLock};

use candyworld_core::{DomainError, DomainResult, Entity, ProductId, ValidationError};
use candyworld_events::{EventBus, InMemoryEventBus, Subscription};

use crate::category::Category;
use crate::product::{Product, check_rating};

/// Signal that the catalog contents changed. Consumers re-query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogChanged;

#[derive(Debug, Default)]
pub struct CatalogStore {
    products: RwLock<Arc<Vec<Product>>>,
    changes: InMemoryEventBus<CatalogChanged>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole catalog.
    ///
    /// All products are validated first; on the first violation the load is
    /// rejected and the previous contents stay in place.
    pub fn load_initial(&self, products: Vec<Product>) -> Result<(), ValidationError> {
        if let Err(err) = validate_all(&products) {
            tracing::warn!(
                index = ?err.index,
                field = err.field,
                constraint = %err.constraint,
                "rejected catalog load"
            );
            return Err(err);
        }

        let count = products.len();
        self.swap(products);
        tracing::info!(products = count, "catalog loaded");
        Ok(())
    }

    /// Products of `category`, in load order.
    pub fn by_category(&self, category: Category) -> Vec<Product> {
        let found = self.filtered(|p| p.category() == category);
        tracing::debug!(%category, matches = found.len(), "query by category");
        found
    }

    /// Products whose `country` equals `country` exactly (case-sensitive), in load order.
    pub fn by_country(&self, country: &str) -> Vec<Product> {
        let found = self.filtered(|p| p.country() == country);
        tracing::debug!(country, matches = found.len(), "query by country");
        found
    }

    /// Look up a single product, e.g. for cart/checkout.
    pub fn get(&self, id: &ProductId) -> Option<Product> {
        self.snapshot().iter().find(|p| p.id() == id).cloned()
    }

    /// Full contents, in load order.
    pub fn all(&self) -> Vec<Product> {
        Vec::clone(&self.snapshot())
    }

    pub fn categories(&self) -> [Category; 3] {
        Category::ALL
    }

    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Set the rating of one product.
    ///
    /// Copy-on-write: the rest of the catalog is carried over unchanged and the
    /// swap is atomic for readers.
    pub fn update_rating(&self, id: &ProductId, rating: f64) -> DomainResult<()> {
        check_rating(rating)?;

        {
            let mut guard = self.products.write().unwrap_or_else(PoisonError::into_inner);
            let mut next = guard.as_ref().clone();
            let product = next
                .iter_mut()
                .find(|p| p.id() == id)
                .ok_or_else(DomainError::not_found)?;
            product.set_rating(rating);
            *guard = Arc::new(next);
        }

        tracing::info!(product_id = %id, rating, "rating updated");
        self.notify();
        Ok(())
    }

    /// Register for change notifications (one per successful write).
    ///
    /// The queue behind a subscription is unbounded: a subscription that is held
    /// but never drained grows by one entry per load or rating update. Drop it
    /// when no longer interested.
    pub fn subscribe(&self) -> Subscription<CatalogChanged> {
        self.changes.subscribe()
    }

    fn snapshot(&self) -> Arc<Vec<Product>> {
        // Writers only ever replace the whole `Arc`, so a poisoned lock still
        // holds a consistent collection.
        let guard = self.products.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    fn filtered(&self, predicate: impl Fn(&Product) -> bool) -> Vec<Product> {
        self.snapshot()
            .iter()
            .filter(|&p| predicate(p))
            .cloned()
            .collect()
    }

    fn swap(&self, products: Vec<Product>) {
        {
            let mut guard = self.products.write().unwrap_or_else(PoisonError::into_inner);
            *guard = Arc::new(products);
        }
        self.notify();
    }

    fn notify(&self) {
        if let Err(err) = self.changes.publish(CatalogChanged) {
            tracing::warn!(?err, "failed to publish catalog change");
        }
    }
}

fn validate_all(products: &[Product]) -> Result<(), ValidationError> {
    let mut seen = HashSet::with_capacity(products.len());
    for (index, product) in products.iter().enumerate() {
        product.validate().map_err(|e| e.at(index))?;
        if !seen.insert(product.product_id()) {
            return Err(ValidationError::new("id", "must be unique").at(index));
        }
    }
    Ok(())
}
