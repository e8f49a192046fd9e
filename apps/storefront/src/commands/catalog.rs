//! # Catalog Commands
//!
//! Catalog listing and the option lists that populate the selectors.

use palengke_core::{CatalogItem, FacetValue, EXCLUSIVE_CATEGORY};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;
use crate::state::CatalogState;

/// Catalog item DTO for the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItemDto {
    pub id: u32,
    pub category: String,
    pub display_name: String,
    pub seller_name: String,
    pub quantity_label: String,
}

impl From<&CatalogItem> for CatalogItemDto {
    fn from(item: &CatalogItem) -> Self {
        CatalogItemDto {
            id: item.id,
            category: item.category.label().to_string(),
            display_name: item.display_name.clone(),
            seller_name: item.seller_name.clone(),
            quantity_label: item.quantity_label.clone(),
        }
    }
}

/// Selector contents.
///
/// Both selectors share the same option list ("All" plus every category).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptionsDto {
    pub facet_a_options: Vec<String>,
    pub facet_b_options: Vec<String>,
    /// Label of the quick-filter button.
    pub exclusive_category: String,
}

/// Returns the full, unfiltered catalog in order.
pub fn get_catalog(catalog: &CatalogState) -> Result<Vec<CatalogItemDto>, ApiError> {
    debug!(items = catalog.catalog().len(), "get_catalog command");
    Ok(catalog.catalog().iter().map(CatalogItemDto::from).collect())
}

/// Returns the selector options and the quick-filter label.
pub fn get_filter_options() -> Result<FilterOptionsDto, ApiError> {
    let options: Vec<String> = FacetValue::options().map(String::from).collect();

    Ok(FilterOptionsDto {
        facet_a_options: options.clone(),
        facet_b_options: options,
        exclusive_category: EXCLUSIVE_CATEGORY.label().to_string(),
    })
}
