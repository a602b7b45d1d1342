//! # Cart State
//!
//! Manages the session's shopping cart.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple commands may access/modify the cart
//! 2. Only one command should modify the cart at a time
//! 3. Tauri commands can run concurrently
//!
//! The user generates events one at a time, but Tauri gives no single-thread
//! guarantee for command execution; the mutex restores the strict
//! event-order semantics the storefront expects.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  Frontend Action          Tauri Command           Cart State Change     │
//! │  ───────────────          ─────────────           ─────────────────     │
//! │                                                                         │
//! │  "В корзину" ────────────► add_to_cart() ───────► cart.add(...)        │
//! │                                                                         │
//! │  Trash button ───────────► remove_from_cart() ──► cart.remove(i)       │
//! │                                                                         │
//! │  Open cart panel ────────► get_cart() ──────────► (read only)          │
//! │                                                                         │
//! │  "Оформить заказ" ───────► checkout() ──────────► (read only, logged)  │
//! │                                                                         │
//! │  All domain rules live in selection_core::cart; this wrapper only      │
//! │  adds locking and the session timestamp.                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use selection_core::Cart;

/// Tauri-managed cart state.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<Cart>>` because:
/// - `Arc`: Allows shared ownership across threads
/// - `Mutex`: Ensures only one thread modifies the cart at a time
///
/// ## Why Not RwLock?
/// Cart operations are quick, and most operations modify state.
/// A RwLock would add complexity with minimal benefit.
#[derive(Debug)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,

    /// When this session's cart came into existence. The cart has no
    /// persistence: it is created empty at startup and discarded on exit.
    opened_at: DateTime<Utc>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        CartState {
            cart: Arc::new(Mutex::new(Cart::new())),
            opened_at: Utc::now(),
        }
    }

    /// When the session's cart was created.
    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = cart_state.with_cart(|cart| CartTotals::from(cart));
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// cart_state.with_cart_mut(|cart| cart.add(&perfume, mode));
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&mut cart)
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use selection_core::catalog::collection;
    use selection_core::PurchaseMode;

    #[test]
    fn test_starts_empty() {
        let state = CartState::new();
        assert!(state.with_cart(|c| c.is_empty()));
    }

    #[test]
    fn test_mutations_are_visible_to_readers() {
        let state = CartState::new();
        let perfumes = collection();

        state.with_cart_mut(|c| c.add(&perfumes[0], PurchaseMode::Sample));
        state.with_cart_mut(|c| c.add(&perfumes[1], PurchaseMode::FullBottle));

        assert_eq!(state.with_cart(|c| c.len()), 2);
        assert_eq!(
            state.with_cart(|c| c.total().rubles()),
            perfumes[0].sample_price + perfumes[1].price
        );
    }

    #[test]
    fn test_failed_removal_leaves_cart_intact() {
        let state = CartState::new();
        let perfumes = collection();
        state.with_cart_mut(|c| c.add(&perfumes[0], PurchaseMode::Sample));

        let result = state.with_cart_mut(|c| c.remove(5));
        assert!(result.is_err());
        assert_eq!(state.with_cart(|c| c.len()), 1);
    }
}
