//! # Filter Engine
//!
//! Turns a catalog plus the current filter state into the visible result set.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     compute_results(catalog, state)                     │
//! │                                                                         │
//! │  Catalog (ordered)                                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  1. Facet stage                                                        │
//! │     ├── toggle on?   keep category == EXCLUSIVE_CATEGORY               │
//! │     ├── selectors?   keep category ∈ {facet_a, facet_b}  (OR)          │
//! │     └── neither      keep everything                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  2. Search stage (AND)                                                 │
//! │     ├── trimmed text empty?  keep everything                           │
//! │     └── otherwise            lowercase substring of                    │
//! │                              display_name OR seller_name               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  3. ResultSet: survivors in catalog order + count                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each stage only narrows. The engine never fails, never mutates its
//! inputs and keeps no state between calls; the result is recomputed on
//! every render.
//!
//! ## Why OR across the selectors?
//! Items carry exactly one category, so an AND of two different selections
//! would always be empty. Selecting "Fresh Catch" and "Dried Seafood" shows
//! both.

use crate::catalog::Catalog;
use crate::filter::FilterState;
use crate::types::{CatalogItem, Category};
use crate::EXCLUSIVE_CATEGORY;

// =============================================================================
// Result Set
// =============================================================================

/// The items that survive every filter stage, in catalog order.
///
/// Borrows from the catalog it was computed from; never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSet<'a> {
    items: Vec<&'a CatalogItem>,
}

impl<'a> ResultSet<'a> {
    /// Returns the surviving items.
    #[inline]
    pub fn items(&self) -> &[&'a CatalogItem] {
        &self.items
    }

    /// Iterates the surviving items in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &'a CatalogItem> + '_ {
        self.items.iter().copied()
    }

    /// Number of surviving items.
    #[inline]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Checks for the empty state.
    ///
    /// An empty catalog and over-strict filters look the same here; compare
    /// against `Catalog::is_empty` to tell them apart.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Ids of the surviving items, in order.
    pub fn ids(&self) -> Vec<u32> {
        self.items.iter().map(|item| item.id).collect()
    }

    /// Clones the surviving items out of the catalog.
    pub fn to_owned_items(&self) -> Vec<CatalogItem> {
        self.items.iter().map(|&item| item.clone()).collect()
    }
}

impl<'r, 'a> IntoIterator for &'r ResultSet<'a> {
    type Item = &'a CatalogItem;
    type IntoIter = std::iter::Copied<std::slice::Iter<'r, &'a CatalogItem>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter().copied()
    }
}

// =============================================================================
// Stage Predicates
// =============================================================================

/// Stage 1: category narrowing.
#[derive(Debug, Clone, PartialEq, Eq)]
enum FacetPredicate {
    /// Both selectors on "All", toggle off.
    Unfiltered,
    /// Toggle on.
    Exclusive(Category),
    /// One or two distinct selected categories, OR-combined.
    AnyOf(Vec<Category>),
}

impl FacetPredicate {
    fn from_state(state: &FilterState) -> Self {
        if state.exclusive_toggle() {
            return FacetPredicate::Exclusive(EXCLUSIVE_CATEGORY);
        }

        let mut active = Vec::with_capacity(2);
        for category in [state.facet_a().category(), state.facet_b().category()]
            .into_iter()
            .flatten()
        {
            if !active.contains(&category) {
                active.push(category);
            }
        }

        if active.is_empty() {
            FacetPredicate::Unfiltered
        } else {
            FacetPredicate::AnyOf(active)
        }
    }

    fn matches(&self, item: &CatalogItem) -> bool {
        match self {
            FacetPredicate::Unfiltered => true,
            FacetPredicate::Exclusive(category) => item.category == *category,
            FacetPredicate::AnyOf(categories) => categories.contains(&item.category),
        }
    }
}

/// Stage 2: case-insensitive substring search over names.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SearchPredicate {
    /// Trimmed, lowercased needle; `None` when the input is blank.
    needle: Option<String>,
}

impl SearchPredicate {
    fn from_text(text: &str) -> Self {
        let trimmed = text.trim();
        SearchPredicate {
            needle: (!trimmed.is_empty()).then(|| trimmed.to_lowercase()),
        }
    }

    fn matches(&self, item: &CatalogItem) -> bool {
        match &self.needle {
            None => true,
            Some(needle) => {
                item.display_name.to_lowercase().contains(needle.as_str())
                    || item.seller_name.to_lowercase().contains(needle.as_str())
            }
        }
    }
}

// =============================================================================
// Engine
// =============================================================================

/// Computes the visible result set for the given filter state.
///
/// ## Example
/// ```rust
/// use palengke_core::{compute_results, Catalog, CatalogItem, Category, FacetValue, FilterState};
///
/// let catalog = Catalog::new(vec![
///     CatalogItem::new(1, Category::FreshCatch, "Bangus", "Mark Allan", "1 kg"),
///     CatalogItem::new(2, Category::Souvenirs, "Fish Wallet", "Mark Allan", "1 pc"),
///     CatalogItem::new(3, Category::FreshCatch, "Tuna", "Sarah Discaya", "2 kg"),
/// ])
/// .unwrap();
///
/// let state = FilterState::new()
///     .set_facet_a(FacetValue::Only(Category::FreshCatch))
///     .set_search_text("mark");
///
/// let results = compute_results(&catalog, &state);
/// assert_eq!(results.ids(), vec![1]);
/// assert_eq!(results.count(), 1);
/// ```
pub fn compute_results<'a>(catalog: &'a Catalog, state: &FilterState) -> ResultSet<'a> {
    let facet = FacetPredicate::from_state(state);
    let search = SearchPredicate::from_text(state.search_text());

    let items = catalog
        .iter()
        .filter(|item| facet.matches(item))
        .filter(|item| search.matches(item))
        .collect();

    ResultSet { items }
}

// =============================================================================
// Unit Tests
// =============================================================================
