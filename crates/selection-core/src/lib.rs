//! # selection-core: Pure Domain Logic for the SELECTION Boutique
//!
//! This crate is the **heart** of the SELECTION storefront. It contains all
//! domain logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    SELECTION Boutique Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (WebView)                           │   │
//! │  │    Hero ──► Catalog Grid ──► Cart Panel ──► Info Sections      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Tauri IPC                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Tauri Commands                               │   │
//! │  │    get_catalog, add_to_cart, set_active_section, etc.          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ selection-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌────────────────┐   │   │
//! │  │   │ catalog  │ │   cart   │ │navigation│ │    content     │   │   │
//! │  │   │ Perfume  │ │   Cart   │ │ Section  │ │  Hero, Reviews │   │   │
//! │  │   │  lookup  │ │  totals  │ │  switch  │ │ Delivery, ...  │   │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └────────────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO CLOCK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types ([`Perfume`], [`PurchaseMode`])
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - The in-memory shopping cart and its derived totals
//! - [`catalog`] - The fixed, validated perfume collection
//! - [`navigation`] - Section state machine for the single-page UI
//! - [`content`] - Hard-coded informational content (hero, reviews, ...)
//! - [`icons`] - Closed registry of UI glyph keys
//! - [`error`] - Domain error types
//! - [`validation`] - Construction-time data validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, file system, and clock access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are whole rubles (i64), never floats
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use selection_core::cart::Cart;
//! use selection_core::catalog::Catalog;
//! use selection_core::types::PurchaseMode;
//!
//! let catalog = Catalog::with_default_collection().unwrap();
//! let perfume = catalog.get(1).unwrap();
//!
//! let mut cart = Cart::new();
//! cart.add(perfume, PurchaseMode::Sample);
//!
//! assert_eq!(cart.len(), 1);
//! assert_eq!(cart.total().rubles(), perfume.sample_price);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod content;
pub mod error;
pub mod icons;
pub mod money;
pub mod navigation;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use selection_core::Money` instead of
// `use selection_core::money::Money`

pub use cart::{Cart, CartEntry, CartTotals};
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use icons::Icon;
pub use money::Money;
pub use navigation::{Navigation, Section};
pub use types::{Perfume, PurchaseMode};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Brand name, displayed in the header and window title.
pub const BRAND_NAME: &str = "SELECTION";

/// Currency symbol used for display. Prices are whole rubles; the ruble has
/// no sub-unit anywhere in this system.
pub const CURRENCY_SYMBOL: &str = "₽";

/// Volume of a full bottle in millilitres ("Флакон 50мл").
pub const BOTTLE_VOLUME_ML: u32 = 50;

/// Volume of a sample vial in millilitres ("Пробник 2мл").
pub const SAMPLE_VOLUME_ML: u32 = 2;
