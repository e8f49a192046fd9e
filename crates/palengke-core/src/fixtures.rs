//! # Storefront Catalog
//!
//! The static catalog the storefront ships with. The app falls back to it
//! when no catalog file is configured.

use crate::catalog::Catalog;
use crate::types::{CatalogItem, Category};

/// (id, category, display name, seller, quantity)
const STOREFRONT_ITEMS: &[(u32, Category, &str, &str, &str)] = &[
    (1, Category::FreshCatch, "Bangus", "Mark Allan", "1 kg"),
    (2, Category::Souvenirs, "Fish Wallet", "Mark Allan", "1 pc"),
    (3, Category::FreshCatch, "Tuna", "Sarah Discaya", "2 kg"),
    (4, Category::DriedSeafood, "Danggit", "Lito Reyes", "250 g"),
    (5, Category::FreshCatch, "Tilapia", "Joy Mercado", "1 kg"),
    (6, Category::DriedSeafood, "Dried Pusit", "Sarah Discaya", "500 g"),
    (7, Category::Souvenirs, "Shell Keychain", "Lito Reyes", "3 pcs"),
    (8, Category::FreshCatch, "Lapu-Lapu", "Joy Mercado", "1.5 kg"),
    (9, Category::DriedSeafood, "Dilis", "Mark Allan", "250 g"),
    (10, Category::Souvenirs, "Capiz Lantern", "Ana Villanueva", "1 pc"),
];

/// Returns the built-in storefront catalog.
pub fn storefront_catalog() -> Catalog {
    let items = STOREFRONT_ITEMS
        .iter()
        .map(|&(id, category, name, seller, quantity)| {
            CatalogItem::new(id, category, name, seller, quantity)
        })
        .collect();

    // The table above is checked by `test_storefront_catalog_is_valid`.
    Catalog::new(items).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storefront_catalog_is_valid() {
        let items: Vec<CatalogItem> = STOREFRONT_ITEMS
            .iter()
            .map(|&(id, category, name, seller, quantity)| {
                CatalogItem::new(id, category, name, seller, quantity)
            })
            .collect();
        assert!(Catalog::new(items).is_ok());
        assert_eq!(storefront_catalog().len(), STOREFRONT_ITEMS.len());
    }

    #[test]
    fn test_storefront_catalog_covers_every_category() {
        let catalog = storefront_catalog();
        for category in Category::ALL {
            assert!(
                catalog.iter().any(|item| item.category == category),
                "no item in {category}"
            );
        }
    }
}
