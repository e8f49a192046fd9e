//! # Catalog
//!
//! An immutable, ordered snapshot of the items the buyer profile view lists.
//!
//! ## Invariants
//! - Item ids are unique within a snapshot
//! - Every label passes [`validate_item`]
//! - Order is the order the items were supplied in; nothing re-sorts it
//!
//! The catalog is built once per view load and then only read.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::CatalogItem;
use crate::validation::validate_item;

/// A validated catalog snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Builds a catalog, checking id uniqueness and item labels.
    ///
    /// ## Example
    /// ```rust
    /// use palengke_core::{Catalog, CatalogItem, Category};
    ///
    /// let catalog = Catalog::new(vec![
    ///     CatalogItem::new(1, Category::FreshCatch, "Bangus", "Mark Allan", "1 kg"),
    ///     CatalogItem::new(1, Category::Souvenirs, "Fish Wallet", "Mark Allan", "1 pc"),
    /// ]);
    /// assert!(catalog.is_err());
    /// ```
    pub fn new(items: Vec<CatalogItem>) -> CoreResult<Self> {
        let mut seen = HashSet::with_capacity(items.len());

        for item in &items {
            if !seen.insert(item.id) {
                return Err(CoreError::InvalidCatalog {
                    item_id: item.id,
                    source: ValidationError::Duplicate {
                        field: "id".to_string(),
                        value: item.id.to_string(),
                    },
                });
            }

            validate_item(item).map_err(|source| CoreError::InvalidCatalog {
                item_id: item.id,
                source,
            })?;
        }

        Ok(Catalog { items })
    }

    /// A catalog with no items. A valid state, rendered as the empty state.
    pub fn empty() -> Self {
        Catalog::default()
    }

    /// Returns the items in catalog order.
    #[inline]
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Iterates the items in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, CatalogItem> {
        self.items.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Looks up an item by id.
    pub fn get(&self, id: u32) -> CoreResult<&CatalogItem> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .ok_or(CoreError::ItemNotFound(id))
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogItem;
    type IntoIter = std::slice::Iter<'a, CatalogItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn item(id: u32, name: &str) -> CatalogItem {
        CatalogItem::new(id, Category::DriedSeafood, name, "Lito Reyes", "250 g")
    }

    #[test]
    fn test_new_preserves_order() {
        let catalog = Catalog::new(vec![item(3, "Danggit"), item(1, "Pusit"), item(2, "Dilis")]).unwrap();
        let ids: Vec<u32> = catalog.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_new_rejects_duplicate_ids() {
        let err = Catalog::new(vec![item(1, "Danggit"), item(1, "Pusit")]).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidCatalog {
                item_id: 1,
                source: ValidationError::Duplicate { .. }
            }
        ));
    }

    #[test]
    fn test_new_rejects_blank_labels() {
        let err = Catalog::new(vec![item(4, "  ")]).unwrap_err();
        assert!(matches!(err, CoreError::InvalidCatalog { item_id: 4, .. }));
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        assert!(Catalog::new(Vec::new()).unwrap().is_empty());
        assert!(Catalog::empty().is_empty());
    }

    #[test]
    fn test_get() {
        let catalog = Catalog::new(vec![item(5, "Danggit")]).unwrap();
        assert_eq!(catalog.get(5).unwrap().display_name, "Danggit");
        assert!(matches!(catalog.get(6), Err(CoreError::ItemNotFound(6))));
    }
}
