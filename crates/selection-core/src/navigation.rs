//! # Navigation Module
//!
//! The section state machine for the single-page storefront.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Navigation State Machine                             │
//! │                                                                         │
//! │   states      = {home, catalog, about, delivery, reviews, contacts}    │
//! │   transitions = any state ──► any state                                │
//! │   trigger     = explicit activate() calls only                         │
//! │   initial     = home                                                   │
//! │   terminal    = none (the session ends externally)                     │
//! │                                                                         │
//! │   Exactly one section is active at any time. There is no history       │
//! │   stack and no persistence across restarts.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why a Closed Enum?
//! The reference UI accepted arbitrary section strings and rendered nothing
//! for unknown values. Here `activate` is a total function over [`Section`]:
//! it cannot fail, and unknown strings never get past the parse boundary
//! ([`Section::from_str`] rejects them while the previous state is retained).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

// =============================================================================
// Section
// =============================================================================

/// The fixed set of content sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Hero and featured gallery. The startup section.
    Home,
    /// The perfume collection grid.
    Catalog,
    /// About-the-brand copy.
    About,
    /// Delivery options.
    Delivery,
    /// Customer reviews.
    Reviews,
    /// Showroom contacts and opening hours.
    Contacts,
}

impl Section {
    /// All sections in display order (matches the header navigation).
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::Catalog,
        Section::About,
        Section::Delivery,
        Section::Reviews,
        Section::Contacts,
    ];

    /// The stable string identifier used at the frontend boundary.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Catalog => "catalog",
            Section::About => "about",
            Section::Delivery => "delivery",
            Section::Reviews => "reviews",
            Section::Contacts => "contacts",
        }
    }
}

impl Default for Section {
    /// The storefront opens on the home section.
    fn default() -> Self {
        Section::Home
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = CoreError;

    /// Parses a section identifier, rejecting anything outside the closed set.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(Section::Home),
            "catalog" => Ok(Section::Catalog),
            "about" => Ok(Section::About),
            "delivery" => Ok(Section::Delivery),
            "reviews" => Ok(Section::Reviews),
            "contacts" => Ok(Section::Contacts),
            other => Err(CoreError::UnknownSection(other.to_string())),
        }
    }
}

// =============================================================================
// Navigation
// =============================================================================

/// Navigation state: the active section plus the mobile-menu flag.
///
/// Owned by the session; mutated only through the operations below, never by
/// reaching into fields (no ambient globals anywhere in the system).
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Navigation {
    active: Section,
    menu_open: bool,
}

impl Navigation {
    /// Creates navigation state at the home section with the menu closed.
    pub fn new() -> Self {
        Navigation::default()
    }

    /// The currently active section.
    #[inline]
    pub fn active(&self) -> Section {
        self.active
    }

    /// Activates a section unconditionally.
    ///
    /// Total over the closed set: there is no invalid input. Selecting a
    /// section also closes the mobile menu, matching the storefront's
    /// tap-to-navigate behavior. Idempotent for a repeated section.
    pub fn activate(&mut self, section: Section) {
        self.active = section;
        self.menu_open = false;
    }

    /// Whether the mobile menu is currently open.
    #[inline]
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Toggles the mobile menu and returns the new state.
    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_home() {
        assert_eq!(Section::default(), Section::Home);
        assert_eq!(Navigation::new().active(), Section::Home);
    }

    #[test]
    fn test_activate_and_read_back_every_section() {
        let mut nav = Navigation::new();
        for section in Section::ALL {
            nav.activate(section);
            assert_eq!(nav.active(), section);
        }
    }

    #[test]
    fn test_activate_is_idempotent() {
        let mut nav = Navigation::new();
        nav.activate(Section::Reviews);
        let once = nav.clone();
        nav.activate(Section::Reviews);
        assert_eq!(nav.active(), once.active());
        assert_eq!(nav.menu_open(), once.menu_open());
    }

    #[test]
    fn test_last_activation_wins() {
        let mut nav = Navigation::new();
        nav.activate(Section::Catalog);
        nav.activate(Section::Contacts);
        // Exactly one section is active; catalog is no longer shown
        assert_eq!(nav.active(), Section::Contacts);
    }

    #[test]
    fn test_string_round_trip() {
        for section in Section::ALL {
            assert_eq!(section.as_str().parse::<Section>().unwrap(), section);
        }
    }

    #[test]
    fn test_unknown_section_is_rejected() {
        let err = "checkout".parse::<Section>().unwrap_err();
        assert!(matches!(err, CoreError::UnknownSection(s) if s == "checkout"));

        // Identifiers are exact: no case folding, no trimming
        assert!("Home".parse::<Section>().is_err());
        assert!(" home".parse::<Section>().is_err());
        assert!("".parse::<Section>().is_err());
    }

    #[test]
    fn test_menu_toggle() {
        let mut nav = Navigation::new();
        assert!(!nav.menu_open());
        assert!(nav.toggle_menu());
        assert!(nav.menu_open());
        assert!(!nav.toggle_menu());
    }

    #[test]
    fn test_activate_closes_menu() {
        let mut nav = Navigation::new();
        nav.toggle_menu();
        nav.activate(Section::About);
        assert!(!nav.menu_open());
    }

    #[test]
    fn test_wire_format_is_lowercase() {
        assert_eq!(serde_json::to_string(&Section::Home).unwrap(), "\"home\"");
        assert_eq!(
            serde_json::to_string(&Section::Contacts).unwrap(),
            "\"contacts\""
        );
    }
}
