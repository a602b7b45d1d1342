//! # Cart Module
//!
//! The in-memory shopping cart and its derived totals.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Frontend Action          Tauri Command           Cart Change           │
//! │  ───────────────          ─────────────           ───────────           │
//! │                                                                         │
//! │  "В корзину" ────────────► add_to_cart() ───────► entries.push(entry)  │
//! │                                                                         │
//! │  "Заказать пробник" ─────► add_to_cart() ───────► entries.push(entry)  │
//! │                                                                         │
//! │  Trash button ───────────► remove_from_cart() ──► entries.remove(i)    │
//! │                                                                         │
//! │  Open cart panel ────────► get_cart() ──────────► (read only)          │
//! │                                                                         │
//! │  Badge count and grand total are projections, recomputed per read.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Entries are append-only: a new entry always lands at the end
//! - No entry is ever modified in place; positional removal is the only way
//!   an entry disappears
//! - No deduplication: the same perfume+mode pair may appear as any number
//!   of distinct entries
//! - No capacity limit: this is a human-driven cart, not a batch queue

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Perfume, PurchaseMode};

// =============================================================================
// Cart Entry
// =============================================================================

/// One line item in the cart: a perfume plus the chosen purchase mode.
///
/// ## Design Notes
/// - `perfume` is a value copy (snapshot) of the catalog record. The catalog
///   is immutable, so snapshot and reference are indistinguishable today,
///   but the snapshot keeps cart rows self-contained.
/// - An entry has no identity of its own; its position in the cart sequence
///   is its only address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartEntry {
    /// Snapshot of the perfume at the time it was added.
    pub perfume: Perfume,

    /// Which price tier applies to this entry.
    pub mode: PurchaseMode,
}

impl CartEntry {
    /// Creates an entry from a catalog perfume and a purchase mode.
    pub fn new(perfume: &Perfume, mode: PurchaseMode) -> Self {
        CartEntry {
            perfume: perfume.clone(),
            mode,
        }
    }

    /// The price this entry contributes to the cart total.
    #[inline]
    pub fn unit_price(&self) -> Money {
        self.perfume.price_for(self.mode)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart: an ordered sequence of entries.
///
/// ## Invariants
/// - Insertion order is significant; `add` appends to the end
/// - `remove` is positional (zero-based) and shifts later entries down
/// - Out-of-range removal is an error and leaves the cart unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Cart {
    /// Entries in insertion order.
    entries: Vec<CartEntry>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            entries: Vec::new(),
        }
    }

    /// Appends a new entry for `perfume` with the given mode.
    ///
    /// Always succeeds: there is no capacity limit and no duplicate check.
    /// Adding the same perfume twice yields two distinct entries.
    pub fn add(&mut self, perfume: &Perfume, mode: PurchaseMode) {
        self.entries.push(CartEntry::new(perfume, mode));
    }

    /// Removes and returns the entry at the given zero-based position.
    ///
    /// ## Errors
    /// Returns [`CoreError::PositionOutOfBounds`] if `position` is not a
    /// current entry; the cart is left unchanged in that case. The reference
    /// UI silently ignored out-of-range positions, which hides stale-view
    /// bugs in the caller.
    pub fn remove(&mut self, position: usize) -> CoreResult<CartEntry> {
        if position >= self.entries.len() {
            return Err(CoreError::PositionOutOfBounds {
                position,
                len: self.entries.len(),
            });
        }
        Ok(self.entries.remove(position))
    }

    /// The entries in insertion order.
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Number of entries (the cart badge count).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The grand total: sum of each entry's applicable price tier.
    ///
    /// Pure function of current cart state; zero for an empty cart.
    pub fn total(&self) -> Money {
        self.entries.iter().map(CartEntry::unit_price).sum()
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Derived cart summary for API responses.
///
/// A memory-less projection of cart state: recomputed on every read, never
/// cached. Recomputation is linear in cart size, which is negligible for a
/// human-driven cart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Number of entries (badge count).
    pub item_count: usize,

    /// Grand total in whole rubles.
    pub total: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.len(),
            total: cart.total(),
        }
    }
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
            name: format!("Perfume {}", id),
            description: String::new(),
            price,
            sample_price,
            notes: vec![],
            image: String::new(),
            kind: "Унисекс".to_string(),
        }
    }

    #[test]
    fn test_empty_cart_total_is_zero() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.len(), 0);
        assert!(cart.total().is_zero());
    }

    #[test]
    fn test_add_appends_in_call_order() {
        let mut cart = Cart::new();
        let a = perfume(1, 12500, 500);
        let b = perfume(2, 15000, 600);

        cart.add(&a, PurchaseMode::Sample);
        cart.add(&b, PurchaseMode::FullBottle);
        cart.add(&a, PurchaseMode::Sample); // duplicates are distinct entries

        assert_eq!(cart.len(), 3);
        assert_eq!(cart.entries()[0].perfume.id, 1);
        assert_eq!(cart.entries()[1].perfume.id, 2);
        assert_eq!(cart.entries()[2].perfume.id, 1);
    }

    #[test]
    fn test_total_sums_applicable_price_tiers() {
        // Scenario from the storefront: sample of №1 plus full bottle of №2
        let mut cart = Cart::new();
        cart.add(&perfume(1, 12500, 500), PurchaseMode::Sample);
        cart.add(&perfume(2, 15000, 600), PurchaseMode::FullBottle);

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total().rubles(), 500 + 15000);
    }

    #[test]
    fn test_remove_preserves_relative_order() {
        let mut cart = Cart::new();
        cart.add(&perfume(1, 12500, 500), PurchaseMode::Sample);
        cart.add(&perfume(2, 15000, 600), PurchaseMode::FullBottle);
        cart.add(&perfume(3, 11000, 450), PurchaseMode::Sample);

        let removed = cart.remove(1).unwrap();
        assert_eq!(removed.perfume.id, 2);

        let ids: Vec<u32> = cart.entries().iter().map(|e| e.perfume.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_remove_first_leaves_full_price_entry() {
        let mut cart = Cart::new();
        cart.add(&perfume(1, 12500, 500), PurchaseMode::Sample);
        cart.add(&perfume(2, 15000, 600), PurchaseMode::FullBottle);

        cart.remove(0).unwrap();

        assert_eq!(cart.len(), 1);
        let remaining = &cart.entries()[0];
        assert_eq!(remaining.perfume.id, 2);
        assert_eq!(remaining.mode, PurchaseMode::FullBottle);
        assert_eq!(cart.total().rubles(), 15000);
    }

    #[test]
    fn test_remove_out_of_bounds_is_error_and_leaves_cart_unchanged() {
        let mut cart = Cart::new();
        cart.add(&perfume(1, 12500, 500), PurchaseMode::Sample);

        let err = cart.remove(1).unwrap_err();
        assert!(matches!(
            err,
            CoreError::PositionOutOfBounds { position: 1, len: 1 }
        ));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total().rubles(), 500);

        let err = Cart::new().remove(0).unwrap_err();
        assert!(matches!(
            err,
            CoreError::PositionOutOfBounds { position: 0, len: 0 }
        ));
    }

    #[test]
    fn test_length_equals_number_of_adds() {
        let mut cart = Cart::new();
        let p = perfume(1, 12500, 500);
        for n in 1..=10 {
            cart.add(&p, PurchaseMode::Sample);
            assert_eq!(cart.len(), n);
        }
        assert_eq!(cart.total().rubles(), 10 * 500);
    }

    #[test]
    fn test_unit_price_selected_by_mode() {
        let p = perfume(1, 12500, 500);
        assert_eq!(CartEntry::new(&p, PurchaseMode::Sample).unit_price().rubles(), 500);
        assert_eq!(
            CartEntry::new(&p, PurchaseMode::FullBottle).unit_price().rubles(),
            12500
        );
    }

    #[test]
    fn test_totals_projection() {
        let mut cart = Cart::new();
        cart.add(&perfume(1, 12500, 500), PurchaseMode::Sample);
        cart.add(&perfume(2, 15000, 600), PurchaseMode::FullBottle);

        let totals = CartTotals::from(&cart);
        assert_eq!(totals.item_count, 2);
        assert_eq!(totals.total.rubles(), 15500);
    }
}
