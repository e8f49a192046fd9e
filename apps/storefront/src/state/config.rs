//! # Configuration State
//!
//! Storefront configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`PALENGKE_*`)
//! 2. Config file (`storefront.toml`)
//! 3. Defaults (this file)
//!
//! ## Configuration File Format
//! ```toml
//! store_name = "Palengke Storefront"
//! empty_state_message = "No products match your filters."
//! catalog_path = "/srv/palengke/catalog.json"
//! output = "text"  # text | json
//! ```
//!
//! The facet values and the exclusive category are compile-time constants
//! in `palengke-core` and cannot be configured here.
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::LoadError;

/// File name looked up in the platform config directory.
pub const CONFIG_FILE_NAME: &str = "storefront.toml";

/// How results are printed by the command-line front end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per item plus a count footer.
    #[default]
    Text,

    /// The results DTO as pretty JSON.
    Json,
}

impl FromStr for OutputFormat {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(LoadError::InvalidValue {
                key: "output".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigState {
    /// Shown above the listing.
    pub store_name: String,

    /// Shown instead of the listing when nothing matches.
    pub empty_state_message: String,

    /// JSON catalog to load. `None` uses the built-in storefront catalog.
    pub catalog_path: Option<PathBuf>,

    /// Output format for the command-line front end.
    pub output: OutputFormat,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            store_name: "Palengke Storefront".to_string(),
            empty_state_message: "No products match your filters.".to_string(),
            catalog_path: None,
            output: OutputFormat::Text,
        }
    }
}

impl ConfigState {
    /// Loads configuration from file and environment.
    ///
    /// ## File Resolution
    /// - `explicit` path (e.g. `--config`), which must exist
    /// - else `PALENGKE_CONFIG`, which must exist
    /// - else `storefront.toml` in the platform config dir, if present
    /// - else defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self, LoadError> {
        let required = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os("PALENGKE_CONFIG").map(PathBuf::from));

        let config = match required {
            Some(path) => ConfigState::from_file(&path)?,
            None => match Self::default_config_path() {
                Some(path) if path.is_file() => ConfigState::from_file(&path)?,
                _ => {
                    debug!("No config file found, using defaults");
                    ConfigState::default()
                }
            },
        };

        config.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Platform config location of `storefront.toml`.
    ///
    /// - **Linux**: `~/.config/storefront/storefront.toml`
    /// - **macOS**: `~/Library/Application Support/com.palengke.storefront/storefront.toml`
    /// - **Windows**: `%APPDATA%\palengke\storefront\config\storefront.toml`
    pub fn default_config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "palengke", "storefront")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Reads and parses a config file.
    pub fn from_file(path: &Path) -> Result<Self, LoadError> {
        let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_toml_str(&contents, path)?;
        info!(path = %path.display(), "Loaded storefront config");
        Ok(config)
    }

    /// Parses config TOML. `path` is only used for error messages.
    pub fn from_toml_str(contents: &str, path: &Path) -> Result<Self, LoadError> {
        toml::from_str(contents).map_err(|source| LoadError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Applies `PALENGKE_*` overrides using the given variable lookup.
    ///
    /// ## Environment Variables
    /// - `PALENGKE_STORE_NAME`: Override store name
    /// - `PALENGKE_CATALOG_PATH`: Override catalog file
    /// - `PALENGKE_OUTPUT`: `text` or `json`
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self, LoadError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(store_name) = lookup("PALENGKE_STORE_NAME") {
            self.store_name = store_name;
        }

        if let Some(path) = lookup("PALENGKE_CATALOG_PATH") {
            self.catalog_path = Some(PathBuf::from(path));
        }

        if let Some(output) = lookup("PALENGKE_OUTPUT") {
            self.output = output.parse().map_err(|_| LoadError::InvalidValue {
                key: "PALENGKE_OUTPUT".to_string(),
                value: output.clone(),
            })?;
        }

        Ok(self)
    }
}
