//! # Validation Module
//!
//! Construction-time validation for compiled-in data.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript)                                        │
//! │  └── Never sends free-form domain data; ids and enum strings only      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Tauri Command (Rust)                                         │
//! │  ├── Type validation (deserialization)                                 │
//! │  └── Closed-set parsing (Section, PurchaseMode, Icon)                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Startup (THIS MODULE)                                        │
//! │  └── The catalog and content are compiled in, so the interesting       │
//! │      failure mode is a bad edit to the data itself. Validating at      │
//! │      construction turns that into a startup error instead of a         │
//! │      wrong price in a customer's cart.                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use selection_core::validation::{validate_name, validate_price};
//!
//! validate_name("Midnight Essence").unwrap();
//! validate_price("price", 12500).unwrap();
//! ```

use crate::error::ValidationError;
use crate::types::Perfume;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a display name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
///
/// ## Example
/// ```rust
/// use selection_core::validation::validate_name;
///
/// assert!(validate_name("Golden Noir").is_ok());
/// assert!(validate_name("").is_err());
/// ```
pub fn validate_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price in whole rubles.
///
/// ## Rules
/// - Must be strictly positive; the collection has no free items and a zero
///   price is a data error
pub fn validate_price(field: &str, rubles: i64) -> ValidationResult<()> {
    if rubles <= 0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a review rating.
///
/// ## Rules
/// - Must be between 1 and 5 stars
pub fn validate_rating(rating: u8) -> ValidationResult<()> {
    if !(1..=5).contains(&rating) {
        return Err(ValidationError::OutOfRange {
            field: "rating".to_string(),
            min: 1,
            max: 5,
        });
    }

    Ok(())
}

// =============================================================================
// Composite Validators
// =============================================================================

/// Validates one perfume record.
///
/// The image URL is deliberately NOT validated: it is an opaque reference
/// resolved by the rendering layer.
pub fn validate_perfume(perfume: &Perfume) -> ValidationResult<()> {
    validate_name(&perfume.name)?;
    validate_price("price", perfume.price)?;
    validate_price("sample_price", perfume.sample_price)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn perfume(id: u32, price: i64, sample_price: i64) -> Perfume {
        Perfume {
            id,
            name: "Dark Velvet".to_string(),
            description: String::new(),
            price,
            sample_price,
            notes: vec![],
            image: String::new(),
            kind: "Унисекс".to_string(),
        }
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Midnight Essence").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
        assert!(validate_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price("price", 12500).is_ok());
        assert!(validate_price("price", 1).is_ok());
        assert!(validate_price("price", 0).is_err());
        assert!(validate_price("price", -100).is_err());
    }

    #[test]
    fn test_validate_rating() {
        for r in 1..=5 {
            assert!(validate_rating(r).is_ok());
        }
        assert!(validate_rating(0).is_err());
        assert!(validate_rating(6).is_err());
    }

    #[test]
    fn test_validate_perfume() {
        assert!(validate_perfume(&perfume(1, 12500, 500)).is_ok());
        assert!(validate_perfume(&perfume(1, 0, 500)).is_err());
        assert!(validate_perfume(&perfume(1, 12500, -1)).is_err());

        let mut nameless = perfume(1, 12500, 500);
        nameless.name = String::new();
        assert!(validate_perfume(&nameless).is_err());
    }

    #[test]
    fn test_image_url_is_not_validated() {
        // Opaque reference: any string is accepted, including empty
        let p = perfume(1, 12500, 500);
        assert!(p.image.is_empty());
        assert!(validate_perfume(&p).is_ok());
    }
}
