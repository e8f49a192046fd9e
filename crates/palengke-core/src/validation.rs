//! # Validation Module
//!
//! Field validation for catalog data arriving from outside the crate
//! (the built-in fixture list or a catalog file loaded by the app).
//!
//! ## Usage
//! ```rust
//! use palengke_core::validation::validate_label;
//!
//! assert!(validate_label("display_name", "Bangus").is_ok());
//! assert!(validate_label("display_name", "   ").is_err());
//! ```

use crate::error::ValidationError;
use crate::types::CatalogItem;
use crate::MAX_LABEL_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a free-text catalog label.
///
/// ## Rules
/// - Must not be blank
/// - Must be at most `MAX_LABEL_LEN` characters
pub fn validate_label(field: &str, value: &str) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > MAX_LABEL_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_LABEL_LEN,
        });
    }

    Ok(())
}

/// Validates every label on a catalog item.
///
/// The category needs no check; the type system already rules out values
/// outside the declared set.
pub fn validate_item(item: &CatalogItem) -> ValidationResult<()> {
    validate_label("display_name", &item.display_name)?;
    validate_label("seller_name", &item.seller_name)?;
    validate_label("quantity_label", &item.quantity_label)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    #[test]
    fn test_validate_label() {
        assert!(validate_label("seller_name", "Mark Allan").is_ok());
        assert!(validate_label("seller_name", "").is_err());
        assert!(validate_label("seller_name", &"x".repeat(MAX_LABEL_LEN)).is_ok());
        assert!(matches!(
            validate_label("seller_name", &"x".repeat(MAX_LABEL_LEN + 1)),
            Err(ValidationError::TooLong { .. })
        ));
    }

    #[test]
    fn test_validate_item_reports_first_bad_field() {
        let item = CatalogItem::new(1, Category::FreshCatch, "Bangus", " ", "");
        match validate_item(&item) {
            Err(ValidationError::Required { field }) => assert_eq!(field, "seller_name"),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
