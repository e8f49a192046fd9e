//! # Commands Module
//!
//! Everything the storefront UI can invoke.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── catalog.rs  ◄─── Catalog listing, selector options
//! ├── filter.rs   ◄─── Filter state transitions
//! └── results.rs  ◄─── Result set for rendering
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  UI event (select / toggle / keystroke)                                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  set_facet_a(&session, "Fresh Catch")   ──► FilterStateDto             │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  get_results(&catalog, &session)        ──► ResultsDto                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  render::render_results(&results, &config)                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each command takes only the state it needs and returns a camelCase DTO
//! or an `ApiError`.

pub mod catalog;
pub mod filter;
pub mod results;

pub use catalog::{get_catalog, get_filter_options, CatalogItemDto, FilterOptionsDto};
pub use filter::{
    clear_filters, get_filter_state, set_exclusive_toggle, set_facet_a, set_facet_b,
    set_search_text, FilterStateDto,
};
pub use results::{get_results, ResultsDto};
