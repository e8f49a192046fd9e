//! # Domain Types
//!
//! Core domain types used by the storefront filters.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   CatalogItem   │   │    Category     │   │   FacetValue    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (u32)       │   │  Fresh Catch    │   │  All            │       │
//! │  │  category       │   │  Dried Seafood  │   │  Only(Category) │       │
//! │  │  display_name   │   │  Souvenirs      │   │                 │       │
//! │  │  seller_name    │   └─────────────────┘   └─────────────────┘       │
//! │  │  quantity_label │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `Category` is a closed set, so an item with an unrecognized category
//! cannot be represented, let alone deserialized.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::ALL_LABEL;

// =============================================================================
// Category
// =============================================================================

/// The closed set of product categories sold on the storefront.
///
/// Serialized by its display label, e.g. `"Fresh Catch"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Category {
    #[serde(rename = "Fresh Catch")]
    FreshCatch,
    #[serde(rename = "Dried Seafood")]
    DriedSeafood,
    #[serde(rename = "Souvenirs")]
    Souvenirs,
}

impl Category {
    /// Every category, in selector order.
    pub const ALL: [Category; 3] = [
        Category::FreshCatch,
        Category::DriedSeafood,
        Category::Souvenirs,
    ];

    /// Returns the label shown in the selectors.
    pub const fn label(&self) -> &'static str {
        match self {
            Category::FreshCatch => "Fresh Catch",
            Category::DriedSeafood => "Dried Seafood",
            Category::Souvenirs => "Souvenirs",
        }
    }

    /// Returns all labels (used in error messages).
    pub fn labels() -> Vec<String> {
        Category::ALL.iter().map(|c| c.label().to_string()).collect()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    /// Parses a selector label, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "category".to_string(),
                allowed: Category::labels(),
            })
    }
}

// =============================================================================
// Facet Value
// =============================================================================

/// A selector value: either the "All" sentinel or one category.
///
/// ## Serialization
/// Serialized as a plain string (`"All"`, `"Fresh Catch"`, ...), which is
/// what the selectors bind to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum FacetValue {
    /// No selection; the selector does not narrow anything.
    #[default]
    All,
    /// Restrict to a single category.
    Only(Category),
}

impl FacetValue {
    /// Returns the selected category, or `None` for "All".
    #[inline]
    pub const fn category(&self) -> Option<Category> {
        match self {
            FacetValue::All => None,
            FacetValue::Only(category) => Some(*category),
        }
    }

    /// Checks if this is the "All" sentinel.
    #[inline]
    pub const fn is_all(&self) -> bool {
        matches!(self, FacetValue::All)
    }

    /// Returns the selector label.
    pub const fn label(&self) -> &'static str {
        match self {
            FacetValue::All => ALL_LABEL,
            FacetValue::Only(category) => category.label(),
        }
    }

    /// Options for a facet selector: "All" first, then every category.
    ///
    /// ## Example
    /// ```rust
    /// use palengke_core::FacetValue;
    ///
    /// let labels: Vec<&str> = FacetValue::options().map(|v| v.label()).collect();
    /// assert_eq!(labels, ["All", "Fresh Catch", "Dried Seafood", "Souvenirs"]);
    /// ```
    pub fn options() -> impl Iterator<Item = FacetValue> {
        std::iter::once(FacetValue::All).chain(Category::ALL.into_iter().map(FacetValue::Only))
    }
}

impl From<Category> for FacetValue {
    fn from(category: Category) -> Self {
        FacetValue::Only(category)
    }
}

impl fmt::Display for FacetValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FacetValue {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(ALL_LABEL) {
            return Ok(FacetValue::All);
        }

        s.parse::<Category>()
            .map(FacetValue::Only)
            .map_err(|_| ValidationError::NotAllowed {
                field: "facet".to_string(),
                allowed: FacetValue::options().map(|v| v.label().to_string()).collect(),
            })
    }
}

impl From<FacetValue> for String {
    fn from(value: FacetValue) -> Self {
        value.label().to_string()
    }
}

impl TryFrom<String> for FacetValue {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// =============================================================================
// Catalog Item
// =============================================================================

/// An orderable item listed on the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CatalogItem {
    /// Unique within a catalog snapshot, stable across renders.
    pub id: u32,

    /// Facet value this item is filed under.
    pub category: Category,

    /// Product label; searched.
    pub display_name: String,

    /// Seller label; searched.
    pub seller_name: String,

    /// Display only (e.g. "1 kg"); never searched or filtered.
    pub quantity_label: String,
}

impl CatalogItem {
    /// Creates a catalog item.
    pub fn new(
        id: u32,
        category: Category,
        display_name: impl Into<String>,
        seller_name: impl Into<String>,
        quantity_label: impl Into<String>,
    ) -> Self {
        CatalogItem {
            id,
            category,
            display_name: display_name.into(),
            seller_name: seller_name.into(),
            quantity_label: quantity_label.into(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_is_case_insensitive() {
        assert_eq!("fresh catch".parse::<Category>().unwrap(), Category::FreshCatch);
        assert_eq!("  DRIED SEAFOOD ".parse::<Category>().unwrap(), Category::DriedSeafood);
        assert!("Frozen".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_serializes_by_label() {
        let json = serde_json::to_string(&Category::DriedSeafood).unwrap();
        assert_eq!(json, "\"Dried Seafood\"");

        let parsed: Category = serde_json::from_str("\"Souvenirs\"").unwrap();
        assert_eq!(parsed, Category::Souvenirs);

        assert!(serde_json::from_str::<Category>("\"Gadgets\"").is_err());
    }

    #[test]
    fn test_facet_value_parse() {
        assert_eq!("All".parse::<FacetValue>().unwrap(), FacetValue::All);
        assert_eq!("all".parse::<FacetValue>().unwrap(), FacetValue::All);
        assert_eq!(
            "Souvenirs".parse::<FacetValue>().unwrap(),
            FacetValue::Only(Category::Souvenirs)
        );

        let err = "Gadgets".parse::<FacetValue>().unwrap_err();
        assert!(matches!(err, ValidationError::NotAllowed { ref allowed, .. } if allowed.len() == 4));
    }

    #[test]
    fn test_facet_value_serializes_as_label() {
        let json = serde_json::to_string(&FacetValue::Only(Category::FreshCatch)).unwrap();
        assert_eq!(json, "\"Fresh Catch\"");
        assert_eq!(serde_json::to_string(&FacetValue::All).unwrap(), "\"All\"");

        let parsed: FacetValue = serde_json::from_str("\"All\"").unwrap();
        assert!(parsed.is_all());
    }

    #[test]
    fn test_facet_value_default_is_all() {
        assert_eq!(FacetValue::default(), FacetValue::All);
        assert_eq!(FacetValue::default().category(), None);
    }
}
