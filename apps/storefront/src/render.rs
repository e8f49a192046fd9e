//! # Result Renderer
//!
//! Turns a `ResultsDto` into printable output.
//!
//! ## Text Layout
//! ```text
//! Palengke Storefront
//!   1 kg    Bangus (Mark Allan)
//!   2 kg    Tuna (Sarah Discaya)
//! 2 items
//! ```
//! When nothing survives the filters the listing is replaced by the
//! configured empty-state message, so the two states are always
//! distinguishable.

use std::fmt::Write;

use crate::commands::ResultsDto;
use crate::error::ApiError;
use crate::state::{ConfigState, OutputFormat};

/// Renders results in the configured output format.
pub fn render_results(results: &ResultsDto, config: &ConfigState) -> Result<String, ApiError> {
    match config.output {
        OutputFormat::Text => Ok(render_text(results, config)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(results)?),
    }
}

/// Plain-text listing, or the empty-state message.
pub fn render_text(results: &ResultsDto, config: &ConfigState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", config.store_name);

    if results.is_empty {
        let _ = writeln!(out, "{}", config.empty_state_message);
        return out;
    }

    let width = results
        .items
        .iter()
        .map(|item| item.quantity_label.chars().count())
        .max()
        .unwrap_or(0);

    for item in &results.items {
        let _ = writeln!(
            out,
            "  {:<width$}  {} ({})",
            item.quantity_label,
            item.display_name,
            item.seller_name,
            width = width
        );
    }

    let noun = if results.count == 1 { "item" } else { "items" };
    let _ = writeln!(out, "{} {}", results.count, noun);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::CatalogItemDto;

    fn dto(id: u32, name: &str, seller: &str, qty: &str) -> CatalogItemDto {
        CatalogItemDto {
            id,
            category: "Fresh Catch".to_string(),
            display_name: name.to_string(),
            seller_name: seller.to_string(),
            quantity_label: qty.to_string(),
        }
    }

    fn results(items: Vec<CatalogItemDto>) -> ResultsDto {
        ResultsDto {
            count: items.len(),
            is_empty: items.is_empty(),
            catalog_is_empty: false,
            items,
        }
    }

    #[test]
    fn test_text_listing() {
        let out = render_text(
            &results(vec![
                dto(1, "Bangus", "Mark Allan", "1 kg"),
                dto(8, "Lapu-Lapu", "Joy Mercado", "1.5 kg"),
            ]),
            &ConfigState::default(),
        );

        assert_eq!(
            out,
            "Palengke Storefront\n  1 kg    Bangus (Mark Allan)\n  1.5 kg  Lapu-Lapu (Joy Mercado)\n2 items\n"
        );
    }

    #[test]
    fn test_single_item_footer() {
        let out = render_text(&results(vec![dto(1, "Bangus", "Mark Allan", "1 kg")]), &ConfigState::default());
        assert!(out.ends_with("1 item\n"));
    }

    #[test]
    fn test_empty_state_message() {
        let config = ConfigState {
            empty_state_message: "Walang nahanap.".to_string(),
            ..ConfigState::default()
        };
        let out = render_text(&results(Vec::new()), &config);
        assert_eq!(out, "Palengke Storefront\nWalang nahanap.\n");
    }

    #[test]
    fn test_json_output() {
        let config = ConfigState {
            output: OutputFormat::Json,
            ..ConfigState::default()
        };
        let out = render_results(&results(vec![dto(1, "Bangus", "Mark Allan", "1 kg")]), &config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["count"], 1);
        assert_eq!(value["isEmpty"], false);
        assert_eq!(value["items"][0]["displayName"], "Bangus");
    }
}
