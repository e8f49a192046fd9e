//! # palengke-core: Pure Business Logic for the Palengke Storefront
//!
//! This crate holds the catalog filtering engine behind the buyer profile
//! view. Everything here is a pure function over in-memory values.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Palengke Storefront Architecture                    │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Storefront UI (web)                          │   │
//! │  │   Categories ▾   Types ▾   [Souvenirs]   🔍 search             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 apps/storefront (orchestration)                 │   │
//! │  │     FilterSession, ConfigState, commands, text renderer         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ palengke-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  catalog  │  │  filter   │  │  engine   │  │   │
//! │  │   │ Category  │  │  Catalog  │  │FilterState│  │ ResultSet │  │   │
//! │  │   │CatalogItem│  │ fixtures  │  │  setters  │  │ predicates│  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • NO CACHING • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Category, FacetValue, CatalogItem)
//! - [`catalog`] - Validated, ordered catalog snapshot
//! - [`filter`] - Filter state and its mutual-exclusion rules
//! - [`engine`] - `compute_results` and the `ResultSet`
//! - [`fixtures`] - The catalog the storefront ships with
//! - [`error`] - Domain error types
//! - [`validation`] - Catalog field validation
//!
//! ## Example Usage
//!
//! ```rust
//! use palengke_core::{compute_results, fixtures, Category, FacetValue, FilterState};
//!
//! let catalog = fixtures::storefront_catalog();
//!
//! let state = FilterState::default()
//!     .set_facet_a(FacetValue::Only(Category::FreshCatch))
//!     .set_search_text("mark");
//!
//! let results = compute_results(&catalog, &state);
//! assert!(results
//!     .iter()
//!     .all(|item| item.category == Category::FreshCatch));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod engine;
pub mod error;
pub mod filter;
pub mod fixtures;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::Catalog;
pub use engine::{compute_results, ResultSet};
pub use error::{CoreError, CoreResult, ValidationError};
pub use filter::FilterState;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Label of the "no selection" sentinel shown at the top of both selectors.
pub const ALL_LABEL: &str = "All";

/// The category the exclusive quick-filter toggle restricts to.
///
/// Fixed at compile time. Enabling the toggle ignores both facet selectors
/// and shows only items of this category.
pub const EXCLUSIVE_CATEGORY: Category = Category::Souvenirs;

/// Maximum length of any free-text catalog label.
pub const MAX_LABEL_LEN: usize = 200;
