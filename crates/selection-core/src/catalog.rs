//! # Catalog Module
//!
//! The fixed, validated perfume collection.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Catalog Lifecycle                                  │
//! │                                                                         │
//! │   collection() ──► Catalog::new() ──► validated ──► app state          │
//! │   (compiled-in      (unique ids,       (startup       (read-only for   │
//! │    records)          valid prices)      or error)      the session)    │
//! │                                                                         │
//! │   No operation mutates the catalog after construction. There is no     │
//! │   reload, no remote refresh, no admin surface.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::Perfume;
use crate::validation::validate_perfume;

// =============================================================================
// Catalog
// =============================================================================

/// A read-only ordered sequence of perfumes.
///
/// Construction validates every record, so a `Catalog` in hand is known-good
/// data: callers never re-check prices or names downstream.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Catalog {
    perfumes: Vec<Perfume>,
}

impl Catalog {
    /// Builds a catalog from perfume records, validating each one.
    ///
    /// ## Errors
    /// - Any record failing [`validate_perfume`] (empty name, non-positive
    ///   price)
    /// - Duplicate ids across the collection
    pub fn new(perfumes: Vec<Perfume>) -> CoreResult<Self> {
        let mut seen = std::collections::HashSet::new();
        for perfume in &perfumes {
            validate_perfume(perfume)?;
            if !seen.insert(perfume.id) {
                return Err(ValidationError::Duplicate {
                    field: "id".to_string(),
                    value: perfume.id.to_string(),
                }
                .into());
            }
        }
        Ok(Catalog { perfumes })
    }

    /// Builds the catalog from the compiled-in collection.
    pub fn with_default_collection() -> CoreResult<Self> {
        Catalog::new(collection())
    }

    /// The perfumes in display order.
    pub fn perfumes(&self) -> &[Perfume] {
        &self.perfumes
    }

    /// Looks up a perfume by id.
    pub fn get(&self, id: u32) -> Option<&Perfume> {
        self.perfumes.iter().find(|p| p.id == id)
    }

    /// Looks up a perfume by id, failing for unknown ids.
    ///
    /// ## Errors
    /// Returns [`CoreError::PerfumeNotFound`] if `id` is not in the
    /// collection.
    pub fn require(&self, id: u32) -> CoreResult<&Perfume> {
        self.get(id).ok_or(CoreError::PerfumeNotFound(id))
    }

    /// Number of perfumes in the collection.
    pub fn len(&self) -> usize {
        self.perfumes.len()
    }

    /// Checks if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.perfumes.is_empty()
    }
}

// =============================================================================
// The Collection
// =============================================================================

/// The compiled-in perfume collection.
///
/// Three fragrances, display order matters. Prices are whole rubles; images
/// are opaque CDN references resolved by the rendering layer.
pub fn collection() -> Vec<Perfume> {
    vec![
        Perfume {
            id: 1,
            name: "Midnight Essence".to_string(),
            description: "Глубокий и чувственный аромат с нотами черной орхидеи".to_string(),
            price: 12500,
            sample_price: 500,
            notes: vec![
                "Черная орхидея".to_string(),
                "Уд".to_string(),
                "Ваниль".to_string(),
            ],
            image: "https://cdn.poehali.dev/projects/019c344b-4df8-4481-9c5c-24e3db30b04c/files/d77533fc-2cf7-43d1-8201-503a64dc3061.jpg".to_string(),
            kind: "Унисекс".to_string(),
        },
        Perfume {
            id: 2,
            name: "Golden Noir".to_string(),
            description: "Роскошная композиция с золотистыми аккордами".to_string(),
            price: 15000,
            sample_price: 600,
            notes: vec![
                "Шафран".to_string(),
                "Кожа".to_string(),
                "Амбра".to_string(),
            ],
            image: "https://cdn.poehali.dev/projects/019c344b-4df8-4481-9c5c-24e3db30b04c/files/95aea077-39d1-492d-870a-1fc1814480a9.jpg".to_string(),
            kind: "Унисекс".to_string(),
        },
        Perfume {
            id: 3,
            name: "Dark Velvet".to_string(),
            description: "Бархатистый аромат для ценителей классики".to_string(),
            price: 11000,
            sample_price: 450,
            notes: vec![
                "Пачули".to_string(),
                "Мускус".to_string(),
                "Сандал".to_string(),
            ],
            image: "https://cdn.poehali.dev/projects/019c344b-4df8-4481-9c5c-24e3db30b04c/files/875269cc-8c14-4fe1-bae7-bf2b03f715a6.jpg".to_string(),
            kind: "Унисекс".to_string(),
        },
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn test_default_collection_is_valid() {
        let catalog = Catalog::with_default_collection().unwrap();
        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_display_order_is_preserved() {
        let catalog = Catalog::with_default_collection().unwrap();
        let names: Vec<&str> = catalog.perfumes().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Midnight Essence", "Golden Noir", "Dark Velvet"]);
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = Catalog::with_default_collection().unwrap();

        let golden = catalog.get(2).unwrap();
        assert_eq!(golden.name, "Golden Noir");
        assert_eq!(golden.price, 15000);
        assert_eq!(golden.sample_price, 600);

        assert!(catalog.get(99).is_none());
    }

    #[test]
    fn test_require_reports_unknown_id() {
        let catalog = Catalog::with_default_collection().unwrap();
        assert_eq!(catalog.require(3).unwrap().name, "Dark Velvet");

        let err = catalog.require(99).unwrap_err();
        assert!(matches!(err, CoreError::PerfumeNotFound(99)));
    }

    #[test]
    fn test_notes_keep_display_order() {
        let catalog = Catalog::with_default_collection().unwrap();
        let midnight = catalog.get(1).unwrap();
        assert_eq!(midnight.notes, vec!["Черная орхидея", "Уд", "Ваниль"]);
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let mut perfumes = collection();
        perfumes[2].id = 1;

        let err = Catalog::new(perfumes).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::Duplicate { .. })
        ));
    }

    #[test]
    fn test_invalid_record_is_rejected() {
        let mut perfumes = collection();
        perfumes[0].price = 0;
        assert!(Catalog::new(perfumes).is_err());

        let mut perfumes = collection();
        perfumes[1].name = String::new();
        assert!(Catalog::new(perfumes).is_err());
    }
}
