//! # Catalog State
//!
//! The catalog a view filters over. Supplied once per view load, either from
//! a JSON file named in the config or from the built-in storefront catalog.
//!
//! ## Catalog File Format
//! ```json
//! [
//!   {
//!     "id": 1,
//!     "category": "Fresh Catch",
//!     "display_name": "Bangus",
//!     "seller_name": "Mark Allan",
//!     "quantity_label": "1 kg"
//!   }
//! ]
//! ```
//! Unknown categories fail deserialization; duplicate ids and blank labels
//! are rejected by `Catalog::new`.

use std::path::Path;

use palengke_core::{fixtures, Catalog, CatalogItem};
use tracing::info;

use super::ConfigState;
use crate::error::LoadError;

/// Read-only catalog for the current view.
#[derive(Debug, Clone)]
pub struct CatalogState {
    catalog: Catalog,
}

impl CatalogState {
    /// Wraps an already-built catalog.
    pub fn new(catalog: Catalog) -> Self {
        CatalogState { catalog }
    }

    /// Loads the catalog named by the config, or the built-in one.
    pub fn from_config(config: &ConfigState) -> Result<Self, LoadError> {
        let catalog = match &config.catalog_path {
            Some(path) => load_catalog_file(path)?,
            None => {
                let catalog = fixtures::storefront_catalog();
                info!(items = catalog.len(), "Using built-in storefront catalog");
                catalog
            }
        };

        Ok(CatalogState::new(catalog))
    }

    #[inline]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

/// Reads a JSON catalog file and validates it.
pub fn load_catalog_file(path: &Path) -> Result<Catalog, LoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let items: Vec<CatalogItem> =
        serde_json::from_str(&contents).map_err(|source| LoadError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    let catalog = Catalog::new(items)?;
    info!(path = %path.display(), items = catalog.len(), "Loaded catalog file");
    Ok(catalog)
}
