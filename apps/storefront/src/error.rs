//! # Error Types
//!
//! Errors for the storefront layer.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront                         │
//! │                                                                         │
//! │  Startup                          Commands                              │
//! │  ───────                          ────────                              │
//! │  read storefront.toml ──┐         set_facet_a / get_results / ...      │
//! │  read catalog.json    ──┤                │                              │
//! │                         ▼                ▼                              │
//! │                    LoadError ──────► ApiError { code, message } ──► UI │
//! │                         ▲                ▲                              │
//! │  Catalog::new ── CoreError ──────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Filtering itself never produces an error; `ApiError` only carries
//! startup and infrastructure failures plus lookups of unknown items.

use std::path::PathBuf;

use palengke_core::CoreError;
use serde::Serialize;
use thiserror::Error;

// =============================================================================
// Load Error
// =============================================================================

/// Failures while loading configuration or catalog data from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `storefront.toml` is not valid TOML or has the wrong shape.
    #[error("Invalid config file {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Catalog file is not valid JSON or has the wrong shape.
    #[error("Invalid catalog file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// An environment override carries an unusable value.
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },

    /// Catalog data broke a catalog invariant.
    #[error(transparent)]
    Catalog(#[from] CoreError),
}

// =============================================================================
// API Error
// =============================================================================

/// Error returned from storefront commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Catalog item not found: 42"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Catalog item not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Catalog data could not be loaded or is invalid
    CatalogError,

    /// Configuration could not be loaded
    ConfigError,

    /// Internal error (poisoned lock, serialization)
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ItemNotFound(id) => ApiError::new(
                ErrorCode::NotFound,
                format!("Catalog item not found: {}", id),
            ),
            CoreError::InvalidCatalog { .. } => {
                ApiError::new(ErrorCode::CatalogError, err.to_string())
            }
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

/// Converts load errors to API errors.
impl From<LoadError> for ApiError {
    fn from(err: LoadError) -> Self {
        match err {
            LoadError::Catalog(e) => {
                tracing::error!("Catalog rejected: {}", e);
                ApiError::new(ErrorCode::CatalogError, e.to_string())
            }
            LoadError::Json { .. } => {
                tracing::error!("Catalog load failed: {}", err);
                ApiError::new(ErrorCode::CatalogError, err.to_string())
            }
            LoadError::Io { .. } | LoadError::Toml { .. } | LoadError::InvalidValue { .. } => {
                tracing::error!("Config load failed: {}", err);
                ApiError::new(ErrorCode::ConfigError, err.to_string())
            }
        }
    }
}

/// Converts serialization failures (JSON output) to API errors.
impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("Serialization failed: {}", err);
        ApiError::internal("Failed to serialize response")
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use palengke_core::ValidationError;

    #[test]
    fn test_item_not_found_maps_to_not_found() {
        let api: ApiError = CoreError::ItemNotFound(42).into();
        assert_eq!(api.code, ErrorCode::NotFound);
        assert_eq!(api.message, "Catalog item not found: 42");
    }

    #[test]
    fn test_invalid_catalog_maps_to_catalog_error() {
        let core = CoreError::InvalidCatalog {
            item_id: 3,
            source: ValidationError::Required {
                field: "display_name".to_string(),
            },
        };
        let api: ApiError = LoadError::from(core).into();
        assert_eq!(api.code, ErrorCode::CatalogError);
        assert!(api.message.contains("display_name is required"));
    }

    #[test]
    fn test_invalid_env_value_maps_to_config_error() {
        let api: ApiError = LoadError::InvalidValue {
            key: "PALENGKE_OUTPUT".to_string(),
            value: "xml".to_string(),
        }
        .into();
        assert_eq!(api.code, ErrorCode::ConfigError);
        assert_eq!(api.message, "Invalid value for PALENGKE_OUTPUT: 'xml'");
    }

    #[test]
    fn test_serializes_code_in_screaming_snake_case() {
        let json = serde_json::to_string(&ApiError::validation("bad")).unwrap();
        assert_eq!(json, r#"{"code":"VALIDATION_ERROR","message":"bad"}"#);
    }
}
