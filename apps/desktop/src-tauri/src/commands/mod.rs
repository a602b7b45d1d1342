//! # Tauri Commands Module
//!
//! All commands exposed to the webview frontend.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs        ◄─── You are here (exports)
//! ├── catalog.rs    ◄─── Catalog retrieval
//! ├── cart.rs       ◄─── Cart manipulation + checkout stub
//! ├── navigation.rs ◄─── Section switching
//! ├── content.rs    ◄─── Informational content
//! └── config.rs     ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Tauri Command Flow                                   │
//! │                                                                         │
//! │  WebView Frontend                                                       │
//! │  ─────────────────                                                      │
//! │  const { invoke } = window.__TAURI__.core;                              │
//! │                                                                         │
//! │  const cart = await invoke('add_to_cart', {                             │
//! │    perfumeId: 1,                                                        │
//! │    mode: 'sample'                                                       │
//! │  });                                                                    │
//! │         │                                                               │
//! │         │ (IPC via WebView)                                             │
//! │         ▼                                                               │
//! │  Rust Backend                                                           │
//! │  ────────────                                                           │
//! │  #[tauri::command]                                                      │
//! │  fn add_to_cart(                                                        │
//! │      catalog: State<'_, CatalogState>, ◄── Injected by Tauri           │
//! │      cart: State<'_, CartState>,       ◄── Injected by Tauri           │
//! │      perfume_id: u32,                  ◄── From invoke params          │
//! │      mode: PurchaseMode,               ◄── Closed-set enum param       │
//! │  ) -> Result<CartResponse, ApiError>                                    │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  Frontend receives: CartResponse                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Injection (Option B)
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the catalog
//! fn get_catalog(catalog: State<'_, CatalogState>)
//!
//! // Only needs the cart
//! fn get_cart(cart: State<'_, CartState>)
//!
//! // Needs both
//! fn add_to_cart(catalog: State<'_, CatalogState>, cart: State<'_, CartState>, ...)
//! ```

pub mod cart;
pub mod catalog;
pub mod config;
pub mod content;
pub mod navigation;
