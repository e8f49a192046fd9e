//! # Filter State
//!
//! The user's current filter selections for the buyer profile view.
//!
//! ## Selection Mechanisms
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Filter Inputs                                      │
//! │                                                                         │
//! │   Categories ▾ (facet_a)  ─┐                                           │
//! │                            ├─ mutually exclusive with ─┐               │
//! │   Types ▾      (facet_b)  ─┘                           │               │
//! │                                                        ▼               │
//! │   [Souvenirs] (exclusive_toggle) ◄─────────────────────┘               │
//! │                                                                         │
//! │   🔍 search_text  ── orthogonal, composes with any of the above        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariant
//! `exclusive_toggle == true` implies both facets are `All`. Every setter
//! preserves this, so the engine never has to arbitrate between the toggle
//! and the selectors.
//!
//! Setters are pure: they consume the state and return the next one.

use serde::Serialize;
use ts_rs::TS;

use crate::types::FacetValue;

/// Current filter selections.
///
/// Serialize-only. New states come from the setters.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, TS)]
#[ts(export)]
pub struct FilterState {
    /// Selector 1 ("Categories").
    #[ts(as = "String")]
    facet_a: FacetValue,

    /// Selector 2 ("Types").
    #[ts(as = "String")]
    facet_b: FacetValue,

    /// Quick filter restricting to [`crate::EXCLUSIVE_CATEGORY`].
    exclusive_toggle: bool,

    /// Raw search input, stored verbatim.
    search_text: String,
}

impl FilterState {
    /// Creates the default state: both selectors on "All", toggle off,
    /// empty search.
    pub fn new() -> Self {
        FilterState::default()
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    #[inline]
    pub fn facet_a(&self) -> FacetValue {
        self.facet_a
    }

    #[inline]
    pub fn facet_b(&self) -> FacetValue {
        self.facet_b
    }

    #[inline]
    pub fn exclusive_toggle(&self) -> bool {
        self.exclusive_toggle
    }

    #[inline]
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Checks if any selection narrows the catalog.
    ///
    /// Whitespace-only search text does not count.
    pub fn has_active_filters(&self) -> bool {
        self.exclusive_toggle
            || !self.facet_a.is_all()
            || !self.facet_b.is_all()
            || !self.search_text.trim().is_empty()
    }

    // -------------------------------------------------------------------------
    // Setters
    // -------------------------------------------------------------------------

    /// Selects a value in selector 1, clearing the exclusive toggle.
    ///
    /// ## Example
    /// ```rust
    /// use palengke_core::{Category, FacetValue, FilterState};
    ///
    /// let state = FilterState::new()
    ///     .set_exclusive_toggle(true)
    ///     .set_facet_a(FacetValue::Only(Category::FreshCatch));
    ///
    /// assert!(!state.exclusive_toggle());
    /// assert_eq!(state.facet_a(), FacetValue::Only(Category::FreshCatch));
    /// ```
    #[must_use]
    pub fn set_facet_a(mut self, value: FacetValue) -> Self {
        self.exclusive_toggle = false;
        self.facet_a = value;
        self
    }

    /// Selects a value in selector 2, clearing the exclusive toggle.
    #[must_use]
    pub fn set_facet_b(mut self, value: FacetValue) -> Self {
        self.exclusive_toggle = false;
        self.facet_b = value;
        self
    }

    /// Selects selector 1 by label. Unrecognized labels leave the state
    /// untouched, toggle included.
    #[must_use]
    pub fn set_facet_a_label(self, label: &str) -> Self {
        match label.parse::<FacetValue>() {
            Ok(value) => self.set_facet_a(value),
            Err(_) => self,
        }
    }

    /// Selects selector 2 by label. Unrecognized labels are a no-op.
    #[must_use]
    pub fn set_facet_b_label(self, label: &str) -> Self {
        match label.parse::<FacetValue>() {
            Ok(value) => self.set_facet_b(value),
            Err(_) => self,
        }
    }

    /// Turns the exclusive toggle on or off.
    ///
    /// Turning it on resets both selectors to "All". Turning it off only
    /// clears the flag; the selectors stay on "All".
    #[must_use]
    pub fn set_exclusive_toggle(mut self, flag: bool) -> Self {
        if flag {
            self.facet_a = FacetValue::All;
            self.facet_b = FacetValue::All;
        }
        self.exclusive_toggle = flag;
        self
    }

    /// Stores the search text verbatim. Trimming happens at match time.
    #[must_use]
    pub fn set_search_text(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    /// Returns the default state ("clear filters").
    #[must_use]
    pub fn reset(self) -> Self {
        FilterState::default()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    const FRESH: FacetValue = FacetValue::Only(Category::FreshCatch);
    const DRIED: FacetValue = FacetValue::Only(Category::DriedSeafood);

    #[test]
    fn test_defaults() {
        let state = FilterState::new();
        assert_eq!(state.facet_a(), FacetValue::All);
        assert_eq!(state.facet_b(), FacetValue::All);
        assert!(!state.exclusive_toggle());
        assert_eq!(state.search_text(), "");
        assert!(!state.has_active_filters());
    }

    #[test]
    fn test_toggle_on_resets_both_facets() {
        let state = FilterState::new()
            .set_facet_a(FRESH)
            .set_facet_b(DRIED)
            .set_exclusive_toggle(true);

        assert!(state.exclusive_toggle());
        assert_eq!(state.facet_a(), FacetValue::All);
        assert_eq!(state.facet_b(), FacetValue::All);
    }

    #[test]
    fn test_toggle_off_only_clears_flag() {
        let state = FilterState::new()
            .set_exclusive_toggle(true)
            .set_exclusive_toggle(false);

        assert!(!state.exclusive_toggle());
        assert_eq!(state.facet_a(), FacetValue::All);
        assert_eq!(state.facet_b(), FacetValue::All);
    }

    #[test]
    fn test_facet_setters_clear_toggle() {
        let state = FilterState::new().set_exclusive_toggle(true).set_facet_b(DRIED);
        assert!(!state.exclusive_toggle());
        assert_eq!(state.facet_b(), DRIED);

        // Selecting "All" still counts as a selector change.
        let state = FilterState::new()
            .set_exclusive_toggle(true)
            .set_facet_a(FacetValue::All);
        assert!(!state.exclusive_toggle());
    }

    #[test]
    fn test_unrecognized_label_is_noop() {
        let before = FilterState::new().set_exclusive_toggle(true).set_search_text("tuna");
        let after = before.clone().set_facet_a_label("Frozen Goods");
        assert_eq!(before, after);

        let after = before.clone().set_facet_b_label("");
        assert_eq!(before, after);
    }

    #[test]
    fn test_label_setters_parse() {
        let state = FilterState::new()
            .set_facet_a_label("fresh catch")
            .set_facet_b_label("Dried Seafood");
        assert_eq!(state.facet_a(), FRESH);
        assert_eq!(state.facet_b(), DRIED);
    }

    #[test]
    fn test_search_text_is_stored_verbatim() {
        let state = FilterState::new().set_search_text("  Bangus ");
        assert_eq!(state.search_text(), "  Bangus ");

        let blank = FilterState::new().set_search_text("   ");
        assert!(!blank.has_active_filters());
    }

    #[test]
    fn test_search_is_orthogonal_to_toggle() {
        let state = FilterState::new()
            .set_search_text("shell")
            .set_exclusive_toggle(true)
            .set_facet_a(FRESH);
        assert_eq!(state.search_text(), "shell");
    }

    #[test]
    fn test_reset() {
        let state = FilterState::new()
            .set_facet_a(FRESH)
            .set_search_text("x")
            .reset();
        assert_eq!(state, FilterState::default());
    }
}
