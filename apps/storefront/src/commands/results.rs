//! # Results Command
//!
//! Recomputes the visible result set. Called on every render; nothing is
//! cached because the catalog is small and the engine is pure.

use std::time::Instant;

use palengke_core::compute_results;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::catalog::CatalogItemDto;
use crate::error::ApiError;
use crate::state::{CatalogState, FilterSession};

/// Result set DTO for the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsDto {
    /// Surviving items in catalog order.
    pub items: Vec<CatalogItemDto>,
    pub count: usize,
    /// `count == 0`; the renderer shows the empty-state message.
    pub is_empty: bool,
    /// Lets the renderer tell "nothing matched" from "nothing listed".
    pub catalog_is_empty: bool,
}

/// Computes the results for the session's current filter state.
pub fn get_results(
    catalog: &CatalogState,
    session: &FilterSession,
) -> Result<ResultsDto, ApiError> {
    let start = Instant::now();
    let catalog = catalog.catalog();

    let dto = session.with_state(|state| {
        debug!(
            facet_a = %state.facet_a(),
            facet_b = %state.facet_b(),
            exclusive = state.exclusive_toggle(),
            search = %state.search_text(),
            "get_results command"
        );

        let results = compute_results(catalog, state);
        ResultsDto {
            items: results.iter().map(CatalogItemDto::from).collect(),
            count: results.count(),
            is_empty: results.is_empty(),
            catalog_is_empty: catalog.is_empty(),
        }
    })?;

    info!(
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        count = dto.count,
        "get_results complete"
    );

    Ok(dto)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{set_exclusive_toggle, set_facet_a, set_search_text};
    use palengke_core::{fixtures, Catalog, CatalogItem, Category};

    fn scenario_state() -> CatalogState {
        CatalogState::new(
            Catalog::new(vec![
                CatalogItem::new(1, Category::FreshCatch, "Bangus", "Mark Allan", "1 kg"),
                CatalogItem::new(2, Category::Souvenirs, "Fish Wallet", "Mark Allan", "1 pc"),
                CatalogItem::new(3, Category::FreshCatch, "Tuna", "Sarah Discaya", "2 kg"),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn test_scenario_through_commands() {
        let catalog = scenario_state();
        let session = FilterSession::new();
        set_facet_a(&session, "Fresh Catch").unwrap();
        set_search_text(&session, "mark").unwrap();

        let results = get_results(&catalog, &session).unwrap();
        assert_eq!(results.count, 1);
        assert_eq!(results.items[0].id, 1);
        assert!(!results.is_empty);
    }

    #[test]
    fn test_exclusive_toggle_through_commands() {
        let catalog = CatalogState::new(fixtures::storefront_catalog());
        let session = FilterSession::new();
        set_facet_a(&session, "Fresh Catch").unwrap();
        set_exclusive_toggle(&session, true).unwrap();

        let results = get_results(&catalog, &session).unwrap();
        assert!(results.count > 0);
        assert!(results.items.iter().all(|i| i.category == "Souvenirs"));
    }

    #[test]
    fn test_empty_state_flags() {
        let catalog = scenario_state();
        let session = FilterSession::new();
        set_search_text(&session, "zzz-no-match").unwrap();

        let results = get_results(&catalog, &session).unwrap();
        assert!(results.is_empty);
        assert!(!results.catalog_is_empty);

        let empty = CatalogState::new(Catalog::empty());
        let results = get_results(&empty, &FilterSession::new()).unwrap();
        assert!(results.is_empty);
        assert!(results.catalog_is_empty);
    }
}
