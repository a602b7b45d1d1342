//! # Cart Commands
//!
//! Tauri commands for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌─────────────┐                     │
//! │  │  Empty   │────►│ Entries  │────►│  Checkout   │── (unwired: logs,  │
//! │  │  Cart    │     │ in cart  │     │  affordance │    submits nothing) │
//! │  └──────────┘     └──────────┘     └─────────────┘                     │
//! │                        │                                                │
//! │                   add_to_cart                                           │
//! │                   remove_from_cart                                      │
//! │                        │                                                │
//! │                        ▼                                                │
//! │  The cart never persists: it is created empty at startup and           │
//! │  discarded when the session ends.                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tauri::State;
use tracing::{debug, warn};

use crate::commands::catalog::PerfumeDto;
use crate::error::ApiError;
use crate::state::{CartState, CatalogState};
use selection_core::{Cart, CartEntry, CartTotals, PurchaseMode};

/// One cart row for the frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartEntryDto {
    pub perfume: PerfumeDto,
    pub mode: PurchaseMode,
    /// Display label for the mode ("Флакон 50мл" / "Пробник 2мл").
    pub mode_label: String,
    /// The price this row contributes to the total, in whole rubles.
    pub unit_price: i64,
}

impl From<&CartEntry> for CartEntryDto {
    fn from(entry: &CartEntry) -> Self {
        CartEntryDto {
            perfume: PerfumeDto::from(&entry.perfume),
            mode: entry.mode,
            mode_label: entry.mode.label(),
            unit_price: entry.unit_price().rubles(),
        }
    }
}

/// Cart response including rows and derived totals.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Cart Panel (slide-in sheet, opened from the header bag icon)          │
/// │                                                                         │
/// │  ┌────────────────────────────────────────────────────────────────┐    │
/// │  │  КОРЗИНА                                          badge: 2     │    │
/// │  ├────────────────────────────────────────────────────────────────┤    │
/// │  │  Midnight Essence   Пробник 2мл       500 ₽            [🗑]   │    │
/// │  │  Golden Noir        Флакон 50мл     15000 ₽            [🗑]   │    │
/// │  ├────────────────────────────────────────────────────────────────┤    │
/// │  │  Итого:                             15500 ₽                   │    │
/// │  │  [        Оформить заказ        ]                             │    │
/// │  └────────────────────────────────────────────────────────────────┘    │
/// │                                                                         │
/// │  invoke('get_cart') → { entries: [...], totals: {...}, openedAt }      │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub entries: Vec<CartEntryDto>,
    pub totals: CartTotals,
    /// When this session's cart was created.
    pub opened_at: DateTime<Utc>,
}

impl CartResponse {
    fn snapshot(cart: &Cart, opened_at: DateTime<Utc>) -> Self {
        CartResponse {
            entries: cart.entries().iter().map(CartEntryDto::from).collect(),
            totals: CartTotals::from(cart),
            opened_at,
        }
    }
}

/// Gets the current cart contents.
///
/// ## Returns
/// Current cart with rows and recomputed totals.
#[tauri::command]
pub fn get_cart(cart: State<'_, CartState>) -> CartResponse {
    debug!("get_cart command");
    let opened_at = cart.opened_at();
    cart.with_cart(|c| CartResponse::snapshot(c, opened_at))
}

/// Adds a perfume to the cart.
///
/// ## Behavior
/// - Appends a new entry at the end of the cart, snapshotting the perfume
/// - No duplicate check: adding the same perfume+mode twice yields two rows
/// - No capacity limit
///
/// ## Arguments
/// * `perfume_id` - Id from the fixed collection
/// * `mode` - `"full_bottle"` or `"sample"`
///
/// ## Returns
/// Updated cart with all rows and totals
#[tauri::command]
pub fn add_to_cart(
    catalog: State<'_, CatalogState>,
    cart: State<'_, CartState>,
    perfume_id: u32,
    mode: PurchaseMode,
) -> Result<CartResponse, ApiError> {
    debug!(perfume_id = %perfume_id, ?mode, "add_to_cart command");

    let perfume = catalog.inner().require(perfume_id)?;

    let opened_at = cart.opened_at();
    Ok(cart.with_cart_mut(|c| {
        c.add(perfume, mode);
        CartResponse::snapshot(c, opened_at)
    }))
}

/// Removes the cart entry at the given zero-based position.
///
/// ## Behavior
/// Later entries shift down by one. An out-of-range position (a stale cart
/// view, a double-fired click) is reported as a cart error and the cart is
/// left unchanged.
///
/// ## Arguments
/// * `position` - Zero-based row index in the cart panel
///
/// ## Returns
/// Updated cart
#[tauri::command]
pub fn remove_from_cart(
    cart: State<'_, CartState>,
    position: usize,
) -> Result<CartResponse, ApiError> {
    debug!(position = %position, "remove_from_cart command");

    let opened_at = cart.opened_at();
    cart.with_cart_mut(|c| {
        let removed = c.remove(position)?;
        debug!(perfume = %removed.perfume.name, "entry removed");
        Ok::<CartResponse, ApiError>(CartResponse::snapshot(c, opened_at))
    })
}

/// The checkout affordance.
///
/// ## Behavior
/// Presented in the cart panel but not wired to any order backend: this
/// command records the would-be order in the log and returns the cart
/// snapshot it would have submitted. Nothing leaves the process. See
/// `ConfigState::checkout_enabled`.
///
/// ## Returns
/// The cart snapshot that a real order submission would carry.
#[tauri::command]
pub fn checkout(cart: State<'_, CartState>) -> CartResponse {
    let opened_at = cart.opened_at();
    let snapshot = cart.with_cart(|c| CartResponse::snapshot(c, opened_at));
    warn!(
        items = snapshot.totals.item_count,
        total = %snapshot.totals.total,
        "checkout requested, but no order backend is configured; nothing submitted"
    );
    snapshot
}

#[cfg(test)]
mod tests {
    use super::*;
    use selection_core::catalog::collection;

    #[test]
    fn test_entry_dto_carries_mode_pricing() {
        let perfumes = collection();
        let entry = CartEntry::new(&perfumes[0], PurchaseMode::Sample);
        let dto = CartEntryDto::from(&entry);

        assert_eq!(dto.unit_price, 500);
        assert_eq!(dto.mode_label, "Пробник 2мл");
        assert_eq!(dto.perfume.name, "Midnight Essence");
    }

    #[test]
    fn test_response_wire_format() {
        let perfumes = collection();
        let mut cart = Cart::new();
        cart.add(&perfumes[0], PurchaseMode::Sample);
        cart.add(&perfumes[1], PurchaseMode::FullBottle);

        let response = CartResponse::snapshot(&cart, Utc::now());
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["entries"].as_array().unwrap().len(), 2);
        assert_eq!(json["entries"][0]["mode"], "sample");
        assert_eq!(json["entries"][0]["unitPrice"], 500);
        assert_eq!(json["totals"]["itemCount"], 2);
        assert_eq!(json["totals"]["total"], 15500);
        assert!(json.get("openedAt").is_some());
    }
}
