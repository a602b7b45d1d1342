//! # Catalog Commands
//!
//! Tauri commands for catalog retrieval.
//!
//! ## Catalog Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Catalog Flow                                         │
//! │                                                                         │
//! │  User opens the catalog section                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  invoke('get_catalog')                                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Vec<PerfumeDto> rendered as the collection grid: image, name, type    │
//! │  badge, notes, both price tiers, two add-to-cart buttons per card       │
//! │                                                                         │
//! │  The catalog never changes while the app runs, but the frontend still  │
//! │  fetches it: the backend owns the data, the webview only renders.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tauri::State;
use tracing::debug;

use crate::error::ApiError;
use crate::state::CatalogState;
use selection_core::Perfume;

/// Perfume DTO (Data Transfer Object) for the frontend.
///
/// ## Why DTO?
/// - Decouples internal domain model from API contract
/// - Handles serde rename to camelCase for JS consumption
/// - Keeps the `type` field name the frontend expects (`kind` internally,
///   since `type` is reserved in Rust)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerfumeDto {
    pub id: u32,
    pub name: String,
    pub description: String,
    /// Full-bottle price in whole rubles.
    pub price: i64,
    /// Sample price in whole rubles.
    pub sample_price: i64,
    /// Scent notes in display order.
    pub notes: Vec<String>,
    /// Opaque image URL; the webview resolves it.
    pub image: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl From<&Perfume> for PerfumeDto {
    fn from(p: &Perfume) -> Self {
        PerfumeDto {
            id: p.id,
            name: p.name.clone(),
            description: p.description.clone(),
            price: p.price,
            sample_price: p.sample_price,
            notes: p.notes.clone(),
            image: p.image.clone(),
            kind: p.kind.clone(),
        }
    }
}

/// Gets the full perfume collection in display order.
///
/// ## Returns
/// Every perfume in the fixed collection; never fails.
#[tauri::command]
pub fn get_catalog(catalog: State<'_, CatalogState>) -> Vec<PerfumeDto> {
    debug!("get_catalog command");
    catalog
        .inner()
        .perfumes()
        .iter()
        .map(PerfumeDto::from)
        .collect()
}

/// Gets a single perfume by its id.
///
/// ## When To Use
/// - Refreshing one card without refetching the grid
///
/// ## Arguments
/// * `id` - Perfume id from the collection
///
/// ## Returns
/// The perfume if found, or ApiError::NotFound
#[tauri::command]
pub fn get_perfume_by_id(
    catalog: State<'_, CatalogState>,
    id: u32,
) -> Result<PerfumeDto, ApiError> {
    debug!(id = %id, "get_perfume_by_id command");
    let perfume = catalog.inner().require(id)?;
    Ok(PerfumeDto::from(perfume))
}

#[cfg(test)]
mod tests {
    use super::*;
    use selection_core::catalog::collection;

    #[test]
    fn test_dto_wire_format() {
        let perfumes = collection();
        let dto = PerfumeDto::from(&perfumes[0]);
        let json = serde_json::to_value(&dto).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Midnight Essence");
        assert_eq!(json["price"], 12500);
        assert_eq!(json["samplePrice"], 500);
        assert_eq!(json["type"], "Унисекс");
        assert!(json.get("kind").is_none());
        assert!(json.get("sample_price").is_none());
    }
}
