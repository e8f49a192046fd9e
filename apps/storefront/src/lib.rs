//! # Palengke Storefront Library
//!
//! The orchestration layer between the storefront UI and `palengke-core`.
//!
//! ## Module Organization
//! ```text
//! palengke_storefront/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── cli.rs          ◄─── Command-line flags
//! ├── render.rs       ◄─── Result renderer (text / JSON)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── catalog.rs  ◄─── Catalog loaded for the view
//! │   ├── session.rs  ◄─── Filter state of the mounted view
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── catalog.rs  ◄─── Catalog + selector options
//! │   ├── filter.rs   ◄─── Filter transitions
//! │   └── results.rs  ◄─── Result set
//! └── error.rs        ◄─── LoadError / ApiError
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod render;
pub mod state;

use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{CliArgs, USAGE};
use error::ApiError;
use state::{CatalogState, ConfigState, FilterSession, OutputFormat};

/// Runs the command-line storefront.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Storefront Startup                                │
/// │                                                                         │
/// │  1. Initialize Logging (stderr, RUST_LOG, default info)                 │
/// │  2. Parse flags                                                         │
/// │  3. Load ConfigState (defaults → storefront.toml → PALENGKE_*)          │
/// │  4. Load CatalogState (catalog_path or built-in catalog)                │
/// │  5. Mount the view: fresh FilterSession                                 │
/// │  6. Replay flags as user actions, compute results, render               │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> Result<(), ApiError> {
    init_tracing();

    let args = CliArgs::parse(std::env::args().skip(1))?;
    if args.help {
        print!("{}", USAGE);
        return Ok(());
    }

    let mut config = ConfigState::load(args.config.as_deref())?;
    if args.json {
        config.output = OutputFormat::Json;
    }

    let catalog = CatalogState::from_config(&config)?;
    info!(
        store = %config.store_name,
        items = catalog.catalog().len(),
        "Starting Palengke storefront"
    );

    let output = execute(&args, &config, &catalog)?;
    print!("{}", output);
    Ok(())
}

/// Applies the flags to a fresh view and renders the results.
pub fn execute(
    args: &CliArgs,
    config: &ConfigState,
    catalog: &CatalogState,
) -> Result<String, ApiError> {
    let session = FilterSession::new();

    if let Some(value) = &args.facet_a {
        commands::set_facet_a(&session, value)?;
    }
    if let Some(value) = &args.facet_b {
        commands::set_facet_b(&session, value)?;
    }
    if args.exclusive {
        commands::set_exclusive_toggle(&session, true)?;
    }
    if let Some(text) = &args.search {
        commands::set_search_text(&session, text)?;
    }

    let results = commands::get_results(catalog, &session)?;
    render::render_results(&results, config)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=palengke_storefront=trace` - Trace this crate only
/// - Default: INFO, debug for this crate
///
/// Logs go to stderr so JSON output on stdout stays parseable.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,palengke_storefront=debug"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
