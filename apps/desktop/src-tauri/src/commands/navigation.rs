//! # Navigation Commands
//!
//! Tauri commands for section switching.
//!
//! ## Navigation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Navigation Flow                                      │
//! │                                                                         │
//! │  User taps "Контакты" in the header                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  invoke('set_active_section', { section: 'contacts' })                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌───────────────────────────────────────────┐                         │
//! │  │  Parse against the closed section set     │                         │
//! │  │  OK:  activate (also closes mobile menu)  │──► render 'contacts',  │
//! │  │  Err: NAVIGATION_ERROR, state retained    │    everything else      │
//! │  └───────────────────────────────────────────┘    absent from the DOM  │
//! │                                                                         │
//! │  Exactly one section is ever rendered; the backend is the single       │
//! │  source of truth for which one.                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tauri::State;
use tracing::debug;

use crate::error::ApiError;
use crate::state::NavState;
use selection_core::content::{navigation, NavItem};
use selection_core::Section;

/// Navigation state snapshot for the frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationDto {
    /// The active section identifier ("home", "catalog", ...).
    pub active: Section,
    /// Whether the mobile menu is open.
    pub menu_open: bool,
}

/// Gets the header navigation items in display order.
///
/// ## Returns
/// Section + label + glyph for each of the six sections; never fails.
#[tauri::command]
pub fn get_navigation() -> Vec<NavItem> {
    debug!("get_navigation command");
    navigation()
}

/// Gets the current navigation state.
#[tauri::command]
pub fn get_active_section(nav: State<'_, NavState>) -> NavigationDto {
    debug!("get_active_section command");
    nav.with_nav(|n| NavigationDto {
        active: n.active(),
        menu_open: n.menu_open(),
    })
}

/// Activates a section.
///
/// ## Behavior
/// The identifier is parsed against the closed section set; anything else is
/// rejected with a navigation error and the previous section stays active.
/// Activating a section also closes the mobile menu. Idempotent for a
/// repeated section.
///
/// ## Arguments
/// * `section` - One of "home", "catalog", "about", "delivery", "reviews",
///   "contacts"
///
/// ## Returns
/// The navigation state after the switch
#[tauri::command]
pub fn set_active_section(
    nav: State<'_, NavState>,
    section: String,
) -> Result<NavigationDto, ApiError> {
    debug!(section = %section, "set_active_section command");

    let target: Section = section.parse()?;
    Ok(nav.with_nav_mut(|n| {
        n.activate(target);
        NavigationDto {
            active: n.active(),
            menu_open: n.menu_open(),
        }
    }))
}

/// Toggles the mobile menu.
///
/// ## Returns
/// The menu state after the toggle.
#[tauri::command]
pub fn toggle_menu(nav: State<'_, NavState>) -> bool {
    debug!("toggle_menu command");
    nav.with_nav_mut(|n| n.toggle_menu())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_items_cover_all_sections() {
        let items = get_navigation();
        assert_eq!(items.len(), Section::ALL.len());
    }

    #[test]
    fn test_dto_wire_format() {
        let dto = NavigationDto {
            active: Section::Catalog,
            menu_open: false,
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["active"], "catalog");
        assert_eq!(json["menuOpen"], false);
    }
}
