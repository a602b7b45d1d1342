//! # Error Types
//!
//! Domain-specific error types for selection-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  selection-core errors (this file)                                     │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Catalog/content validation failures            │
//! │                                                                         │
//! │  Tauri API errors (in app)                                             │
//! │  └── ApiError         - What frontend sees (serialized)                │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Frontend               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (id, position, name)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
///
/// These errors represent domain rule violations. They should be caught and
/// translated to user-friendly messages at the command boundary.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Perfume cannot be found in the catalog.
    ///
    /// ## When This Occurs
    /// - The frontend sends an id that is not in the fixed collection
    #[error("Perfume not found: {0}")]
    PerfumeNotFound(u32),

    /// Cart removal targeted a position outside the current sequence.
    ///
    /// ## When This Occurs
    /// - The frontend's cart view is stale (entry already removed)
    /// - A double-click fires two removals for the same position
    ///
    /// The cart is left unchanged when this is returned.
    #[error("Cart position {position} is out of bounds (cart has {len} entries)")]
    PositionOutOfBounds { position: usize, len: usize },

    /// Section identifier is not one of the six known sections.
    ///
    /// The previous navigation state is retained when this is returned.
    #[error("Unknown section: {0}")]
    UnknownSection(String),

    /// Icon key is not in the glyph registry.
    #[error("Unknown icon: {0}")]
    UnknownIcon(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Data validation errors.
///
/// These errors occur when compiled-in data (catalog, content) or incoming
/// values do not meet requirements. Used at construction time, before any
/// state is handed to the application layer.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Duplicate value (e.g., duplicate perfume id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::PositionOutOfBounds { position: 3, len: 2 };
        assert_eq!(
            err.to_string(),
            "Cart position 3 is out of bounds (cart has 2 entries)"
        );

        let err = CoreError::PerfumeNotFound(42);
        assert_eq!(err.to_string(), "Perfume not found: 42");

        let err = CoreError::UnknownSection("checkout".to_string());
        assert_eq!(err.to_string(), "Unknown section: checkout");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::MustBePositive {
            field: "price".to_string(),
        };
        assert_eq!(err.to_string(), "price must be positive");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
