//! Environment-driven configuration.

use std::path::PathBuf;

use thiserror::Error;

use candyworld_catalog::{CatalogStore, Product, SeedError, ValidationError, sample_products};

/// Path to a JSON product fixture. Unset means the built-in sample catalog.
pub const FIXTURE_ENV: &str = "CANDYWORLD_FIXTURE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Seed(#[from] SeedError),

    #[error("catalog rejected: {0}")]
    Catalog(#[from] ValidationError),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub fixture: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup (tests pass a closure).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let fixture = lookup(FIXTURE_ENV)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);
        Self { fixture }
    }

    /// Products to bulk-load, from the fixture or the sample set.
    pub fn source_products(&self) -> Result<Vec<Product>, ConfigError> {
        match &self.fixture {
            Some(path) => {
                tracing::info!(path = %path.display(), "loading catalog fixture");
                Ok(candyworld_catalog::products_from_file(path)?)
            }
            None => {
                tracing::warn!("{FIXTURE_ENV} not set; using built-in sample catalog");
                Ok(sample_products())
            }
        }
    }

    /// A store populated from the configured source.
    pub fn build_store(&self) -> Result<CatalogStore, ConfigError> {
        let store = CatalogStore::new();
        store.load_initial(self.source_products()?)?;
        Ok(store)
    }
}
