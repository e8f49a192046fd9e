//! # Error Types
//!
//! Domain-specific error types for palengke-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  palengke-core errors (this file)                                      │
//! │  ├── CoreError        - Catalog-level failures                         │
//! │  └── ValidationError  - Field / label validation failures              │
//! │                                                                         │
//! │  storefront errors (apps/storefront)                                   │
//! │  └── ApiError         - What the UI sees (serialized)                  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → UI                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Filtering itself never fails. Errors only come from building a catalog
//! out of external data or from parsing a category label.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Catalog-level errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An item lookup by id found nothing.
    #[error("Catalog item not found: {0}")]
    ItemNotFound(u32),

    /// A catalog snapshot violates one of its invariants.
    ///
    /// ## When This Occurs
    /// - Two items share an id
    /// - An item carries a blank or oversized label
    #[error("Invalid catalog item {item_id}: {source}")]
    InvalidCatalog {
        item_id: u32,
        #[source]
        source: ValidationError,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },

    /// Duplicate value (e.g., duplicate item id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_catalog_message_names_item() {
        let err = CoreError::InvalidCatalog {
            item_id: 7,
            source: ValidationError::Duplicate {
                field: "id".to_string(),
                value: "7".to_string(),
            },
        };
        assert_eq!(err.to_string(), "Invalid catalog item 7: id '7' already exists");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "display_name".to_string(),
        };
        assert_eq!(err.to_string(), "display_name is required");

        let err = ValidationError::NotAllowed {
            field: "category".to_string(),
            allowed: vec!["Fresh Catch".to_string()],
        };
        assert_eq!(err.to_string(), "category must be one of: [\"Fresh Catch\"]");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "seller_name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
