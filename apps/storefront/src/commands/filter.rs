//! # Filter Commands
//!
//! One command per user action on the filter bar. Each returns the state
//! after the transition so the UI can re-sync its controls (the toggle and
//! the selectors reset each other).
//!
//! Unrecognized selector labels are ignored: the state comes back unchanged
//! and a warning is logged.

use palengke_core::{FacetValue, FilterState};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::state::FilterSession;

/// Filter state DTO for the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterStateDto {
    pub facet_a: String,
    pub facet_b: String,
    pub exclusive_toggle: bool,
    pub search_text: String,
    pub has_active_filters: bool,
}

impl From<&FilterState> for FilterStateDto {
    fn from(state: &FilterState) -> Self {
        FilterStateDto {
            facet_a: state.facet_a().label().to_string(),
            facet_b: state.facet_b().label().to_string(),
            exclusive_toggle: state.exclusive_toggle(),
            search_text: state.search_text().to_string(),
            has_active_filters: state.has_active_filters(),
        }
    }
}

fn warn_if_unrecognized(selector: &str, label: &str) {
    if label.parse::<FacetValue>().is_err() {
        warn!(selector, label = %label, "Ignoring unrecognized facet value");
    }
}

/// Returns the current filter state.
pub fn get_filter_state(session: &FilterSession) -> Result<FilterStateDto, ApiError> {
    session.with_state(|state| FilterStateDto::from(state))
}

/// "Categories" selector changed.
pub fn set_facet_a(session: &FilterSession, value: &str) -> Result<FilterStateDto, ApiError> {
    debug!(value = %value, "set_facet_a command");
    warn_if_unrecognized("facet_a", value);
    let state = session.update(|s| s.set_facet_a_label(value))?;
    Ok(FilterStateDto::from(&state))
}

/// "Types" selector changed.
pub fn set_facet_b(session: &FilterSession, value: &str) -> Result<FilterStateDto, ApiError> {
    debug!(value = %value, "set_facet_b command");
    warn_if_unrecognized("facet_b", value);
    let state = session.update(|s| s.set_facet_b_label(value))?;
    Ok(FilterStateDto::from(&state))
}

/// Quick-filter button clicked.
pub fn set_exclusive_toggle(
    session: &FilterSession,
    enabled: bool,
) -> Result<FilterStateDto, ApiError> {
    debug!(enabled, "set_exclusive_toggle command");
    let state = session.update(|s| s.set_exclusive_toggle(enabled))?;
    Ok(FilterStateDto::from(&state))
}

/// Search input changed. Stored verbatim.
pub fn set_search_text(session: &FilterSession, text: &str) -> Result<FilterStateDto, ApiError> {
    debug!(text = %text, "set_search_text command");
    let state = session.update(|s| s.set_search_text(text))?;
    Ok(FilterStateDto::from(&state))
}

/// "Clear filters" clicked.
pub fn clear_filters(session: &FilterSession) -> Result<FilterStateDto, ApiError> {
    debug!("clear_filters command");
    let state = session.update(FilterState::reset)?;
    Ok(FilterStateDto::from(&state))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_resets_selectors() {
        let session = FilterSession::new();
        set_facet_a(&session, "Fresh Catch").unwrap();
        set_facet_b(&session, "Dried Seafood").unwrap();

        let dto = set_exclusive_toggle(&session, true).unwrap();
        assert!(dto.exclusive_toggle);
        assert_eq!(dto.facet_a, "All");
        assert_eq!(dto.facet_b, "All");
    }

    #[test]
    fn test_selector_clears_toggle() {
        let session = FilterSession::new();
        set_exclusive_toggle(&session, true).unwrap();

        let dto = set_facet_b(&session, "souvenirs").unwrap();
        assert!(!dto.exclusive_toggle);
        assert_eq!(dto.facet_b, "Souvenirs");
    }

    #[test]
    fn test_unrecognized_label_leaves_state_unchanged() {
        let session = FilterSession::new();
        let before = set_exclusive_toggle(&session, true).unwrap();
        let after = set_facet_a(&session, "Frozen").unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_search_text_and_clear() {
        let session = FilterSession::new();
        let dto = set_search_text(&session, "  tuna ").unwrap();
        assert_eq!(dto.search_text, "  tuna ");
        assert!(dto.has_active_filters);

        let dto = clear_filters(&session).unwrap();
        assert_eq!(dto, get_filter_state(&session).unwrap());
        assert!(!dto.has_active_filters);
        assert_eq!(dto.search_text, "");
    }
}
