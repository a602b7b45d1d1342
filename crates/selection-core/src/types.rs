//! # Domain Types
//!
//! Core domain types used throughout the SELECTION boutique.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Perfume      │   │  PurchaseMode   │   │    CartEntry    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (u32)       │   │  FullBottle     │   │  perfume        │       │
//! │  │  name           │   │  Sample         │   │  mode           │       │
//! │  │  price          │   │                 │   │  (cart.rs)      │       │
//! │  │  sample_price   │   └─────────────────┘   └─────────────────┘       │
//! │  │  notes          │                                                   │
//! │  │  image, kind    │                                                   │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! A perfume's `id` is a small integer, unique within the fixed collection
//! and stable for the process lifetime. There is no generated identity
//! anywhere in the system.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::{BOTTLE_VOLUME_ML, SAMPLE_VOLUME_ML};

// =============================================================================
// Purchase Mode
// =============================================================================

/// The two ways a perfume can be purchased.
///
/// ## Why an Enum?
/// The reference UI models this as an `isSample` boolean, but the set of
/// purchase modes is closed and each mode carries its own price tier and
/// display label. Closed sets are enums in this codebase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PurchaseMode {
    /// The full 50 ml bottle at the regular price.
    FullBottle,
    /// The 2 ml sample vial at the sample price.
    Sample,
}

impl PurchaseMode {
    /// Whether this mode selects the sample price tier.
    #[inline]
    pub const fn is_sample(&self) -> bool {
        matches!(self, PurchaseMode::Sample)
    }

    /// Display label for the mode, as shown on cart rows and catalog cards.
    pub fn label(&self) -> String {
        match self {
            PurchaseMode::FullBottle => format!("Флакон {}мл", BOTTLE_VOLUME_ML),
            PurchaseMode::Sample => format!("Пробник {}мл", SAMPLE_VOLUME_ML),
        }
    }
}

impl Default for PurchaseMode {
    fn default() -> Self {
        PurchaseMode::FullBottle
    }
}

// =============================================================================
// Perfume
// =============================================================================

/// A perfume in the fixed collection.
///
/// Immutable once the catalog is constructed; the cart stores value copies,
/// so nothing can mutate a perfume after startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Perfume {
    /// Unique identifier within the collection.
    pub id: u32,

    /// Display name shown on catalog cards and cart rows.
    pub name: String,

    /// Short marketing description.
    pub description: String,

    /// Price of the full bottle in whole rubles.
    pub price: i64,

    /// Price of the sample vial in whole rubles.
    pub sample_price: i64,

    /// Scent notes in display order. Order is meaningful; duplicates are
    /// not excluded.
    pub notes: Vec<String>,

    /// Opaque URL of the display image. Never fetched or validated here;
    /// resolving it is the rendering layer's concern.
    pub image: String,

    /// Free-form classification label ("Унисекс", ...). Serialized as
    /// `type` to match the frontend contract.
    #[serde(rename = "type")]
    pub kind: String,
}

impl Perfume {
    /// Returns the full-bottle price as a Money type.
    #[inline]
    pub fn bottle_price(&self) -> Money {
        Money::from_rubles(self.price)
    }

    /// Returns the sample price as a Money type.
    #[inline]
    pub fn sample_price(&self) -> Money {
        Money::from_rubles(self.sample_price)
    }

    /// Returns the price for the given purchase mode.
    ///
    /// ## Example
    /// ```rust
    /// use selection_core::types::{Perfume, PurchaseMode};
    ///
    /// let perfume = Perfume {
    ///     id: 1,
    ///     name: "Midnight Essence".to_string(),
    ///     description: String::new(),
    ///     price: 12500,
    ///     sample_price: 500,
    ///     notes: vec![],
    ///     image: String::new(),
    ///     kind: "Унисекс".to_string(),
    /// };
    ///
    /// assert_eq!(perfume.price_for(PurchaseMode::Sample).rubles(), 500);
    /// assert_eq!(perfume.price_for(PurchaseMode::FullBottle).rubles(), 12500);
    /// ```
    #[inline]
    pub fn price_for(&self, mode: PurchaseMode) -> Money {
        match mode {
            PurchaseMode::FullBottle => self.bottle_price(),
            PurchaseMode::Sample => self.sample_price(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_perfume() -> Perfume {
        Perfume {
            id: 1,
            name: "Midnight Essence".to_string(),
            description: "Глубокий и чувственный аромат".to_string(),
            price: 12500,
            sample_price: 500,
            notes: vec!["Черная орхидея".to_string(), "Уд".to_string()],
            image: "https://example.test/midnight.jpg".to_string(),
            kind: "Унисекс".to_string(),
        }
    }

    #[test]
    fn test_price_for_mode() {
        let perfume = test_perfume();
        assert_eq!(perfume.price_for(PurchaseMode::FullBottle).rubles(), 12500);
        assert_eq!(perfume.price_for(PurchaseMode::Sample).rubles(), 500);
    }

    #[test]
    fn test_purchase_mode_labels() {
        assert_eq!(PurchaseMode::FullBottle.label(), "Флакон 50мл");
        assert_eq!(PurchaseMode::Sample.label(), "Пробник 2мл");
    }

    #[test]
    fn test_purchase_mode_is_sample() {
        assert!(PurchaseMode::Sample.is_sample());
        assert!(!PurchaseMode::FullBottle.is_sample());
    }

    #[test]
    fn test_purchase_mode_default() {
        assert_eq!(PurchaseMode::default(), PurchaseMode::FullBottle);
    }

    #[test]
    fn test_kind_serializes_as_type() {
        // The frontend contract uses `type`, which is reserved in Rust
        let json = serde_json::to_value(test_perfume()).unwrap();
        assert_eq!(json["type"], "Унисекс");
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn test_purchase_mode_wire_format() {
        assert_eq!(
            serde_json::to_string(&PurchaseMode::FullBottle).unwrap(),
            "\"full_bottle\""
        );
        assert_eq!(
            serde_json::to_string(&PurchaseMode::Sample).unwrap(),
            "\"sample\""
        );
    }
}
