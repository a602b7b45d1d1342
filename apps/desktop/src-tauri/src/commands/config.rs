//! # Config Commands
//!
//! Tauri commands for retrieving boutique configuration.

use tauri::State;
use tracing::debug;

use crate::state::ConfigState;

/// Gets the boutique configuration.
///
/// ## When Used
/// - App startup (brand name, currency symbol for the UI)
/// - Cart panel (whether the checkout button submits anywhere)
///
/// ## Returns
/// Complete configuration state (read-only)
#[tauri::command]
pub fn get_config(config: State<'_, ConfigState>) -> ConfigState {
    debug!("get_config command");
    (*config).clone()
}
