//! # State Module
//!
//! Manages application state for the Tauri desktop app.
//!
//! ## Why Multiple State Types? (Option B)
//! Instead of a single `AppState` struct containing everything,
//! we use separate state types. This approach:
//!
//! 1. **Better Separation of Concerns**: Each state type has a single responsibility
//! 2. **Easier Testing**: Can construct individual states in isolation
//! 3. **Clearer Command Signatures**: Commands declare exactly what state they need
//! 4. **Reduced Contention**: Independent states don't block each other
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Tauri Runtime                              │   │
//! │  │  app.manage(catalog_state);   app.manage(cart_state);           │   │
//! │  │  app.manage(content_state);   app.manage(nav_state);            │   │
//! │  │  app.manage(config_state);                                      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │      ┌───────────────┬───────┴────────┬────────────────┐               │
//! │      ▼               ▼                ▼                ▼               │
//! │  ┌──────────┐  ┌──────────┐  ┌──────────────┐  ┌──────────────┐       │
//! │  │ Catalog/ │  │CartState │  │  NavState    │  │ ConfigState  │       │
//! │  │ Content  │  │          │  │              │  │              │       │
//! │  │ (frozen) │  │Arc<Mutex<│  │  Arc<Mutex<  │  │  (read-only) │       │
//! │  │          │  │  Cart>>  │  │  Navigation>>│  │              │       │
//! │  └──────────┘  └──────────┘  └──────────────┘  └──────────────┘       │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • CatalogState/ContentState: immutable after startup, freely shared   │
//! │  • CartState/NavState: protected by Arc<Mutex<T>> for exclusive access │
//! │  • ConfigState: read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod catalog;
mod config;
mod navigation;

pub use cart::CartState;
pub use catalog::{CatalogState, ContentState};
pub use config::ConfigState;
pub use navigation::NavState;
