//! # State Module
//!
//! State owned by one storefront view.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────┐  ┌──────────────────┐  ┌──────────────────┐      │
//! │  │   CatalogState   │  │  FilterSession   │  │   ConfigState    │      │
//! │  │                  │  │                  │  │                  │      │
//! │  │  Catalog         │  │  Arc<Mutex<      │  │  store_name      │      │
//! │  │  (loaded once)   │  │    FilterState   │  │  empty message   │      │
//! │  │                  │  │  >>              │  │  catalog_path    │      │
//! │  └──────────────────┘  └──────────────────┘  └──────────────────┘      │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • CatalogState: Read-only after the view loads                        │
//! │  • FilterSession: Mutex so commands can arrive from any thread         │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod catalog;
mod config;
mod session;

pub use catalog::{load_catalog_file, CatalogState};
pub use config::{ConfigState, OutputFormat, CONFIG_FILE_NAME};
pub use session::FilterSession;
