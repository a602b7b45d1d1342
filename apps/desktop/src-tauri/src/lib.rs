//! # SELECTION Desktop Library
//!
//! Core library for the SELECTION boutique desktop application.
//! This is the main entry point that configures and runs the Tauri app.
//!
//! ## Module Organization
//! ```text
//! selection_desktop_lib/
//! ├── lib.rs            ◄─── You are here (Tauri setup & run)
//! ├── state/
//! │   ├── mod.rs        ◄─── State type exports
//! │   ├── catalog.rs    ◄─── Immutable catalog + content wrappers
//! │   ├── cart.rs       ◄─── Cart state management
//! │   ├── navigation.rs ◄─── Navigation state management
//! │   └── config.rs     ◄─── Boutique configuration state
//! ├── commands/
//! │   ├── mod.rs        ◄─── Command exports
//! │   ├── catalog.rs    ◄─── Catalog retrieval commands
//! │   ├── cart.rs       ◄─── Cart manipulation commands
//! │   ├── navigation.rs ◄─── Section switching commands
//! │   ├── content.rs    ◄─── Informational content commands
//! │   └── config.rs     ◄─── Configuration retrieval
//! └── error.rs          ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod state;

use tauri::Manager;
use tracing::info;
use tracing_subscriber::EnvFilter;

use selection_core::catalog::Catalog;
use selection_core::content::SiteContent;
use state::{CartState, CatalogState, ConfigState, ContentState, NavState};

/// Runs the Tauri application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • Default: INFO, can be overridden with RUST_LOG                    │
/// │                                                                         │
/// │  2. Build & Validate Catalog ─────────────────────────────────────────► │
/// │     • Compiled-in collection, checked for unique ids / valid prices     │
/// │     • A bad data edit fails here, not in a customer's cart              │
/// │                                                                         │
/// │  3. Build Site Content ───────────────────────────────────────────────► │
/// │     • Hero, about, delivery, reviews, contacts                          │
/// │                                                                         │
/// │  4. Initialize State Objects ─────────────────────────────────────────► │
/// │     • CatalogState/ContentState: immutable, no locking                  │
/// │     • CartState/NavState: Mutex-guarded mutable session state           │
/// │     • ConfigState: read-only defaults                                   │
/// │                                                                         │
/// │  5. Build & Run Tauri App ────────────────────────────────────────────► │
/// │     • Register all commands                                             │
/// │     • Manage state                                                      │
/// │     • Launch window                                                     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() {
    // Initialize tracing (logging)
    init_tracing();

    info!("Starting SELECTION boutique desktop application");

    // Build and run the Tauri app
    tauri::Builder::default()
        // Setup hook runs before the app starts
        .setup(|app| {
            // Build and validate the fixed collection
            let catalog = Catalog::with_default_collection()?;
            info!(perfumes = catalog.len(), "Catalog built and validated");

            // Build the informational content
            let content = SiteContent::build()?;

            // Initialize state objects
            let catalog_state = CatalogState::new(catalog);
            let content_state = ContentState::new(content);
            let cart_state = CartState::new();
            let nav_state = NavState::new();
            let config_state = ConfigState::default();

            // Register state with Tauri
            app.manage(catalog_state);
            app.manage(content_state);
            app.manage(cart_state);
            app.manage(nav_state);
            app.manage(config_state);

            info!("State initialized");
            Ok(())
        })
        // Register all commands
        .invoke_handler(tauri::generate_handler![
            // Catalog commands
            commands::catalog::get_catalog,
            commands::catalog::get_perfume_by_id,
            // Cart commands
            commands::cart::get_cart,
            commands::cart::add_to_cart,
            commands::cart::remove_from_cart,
            commands::cart::checkout,
            // Navigation commands
            commands::navigation::get_navigation,
            commands::navigation::get_active_section,
            commands::navigation::set_active_section,
            commands::navigation::toggle_menu,
            // Content commands
            commands::content::get_hero,
            commands::content::get_about,
            commands::content::get_delivery_options,
            commands::content::get_reviews,
            commands::content::get_contacts,
            commands::content::get_social_links,
            // Config commands
            commands::config::get_config,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=selection_core=trace` - Show trace for the core crate only
/// - Default: INFO level, DEBUG for our own crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,selection_core=debug,selection_desktop_lib=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
