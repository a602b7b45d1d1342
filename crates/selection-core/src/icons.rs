//! # Icon Registry
//!
//! Closed registry of the glyph keys the UI uses.
//!
//! ## Why a Registry?
//! The icon facility itself is external: the frontend resolves a name like
//! `"ShoppingBag"` to a visual glyph. The backend's job is to never hand the
//! frontend a key outside the known set, and to reject unknown keys coming
//! the other way with an explicit error instead of passing them through
//! unchecked.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

// =============================================================================
// Icon
// =============================================================================

/// The glyph keys used across the storefront.
///
/// Variant names match the external icon set's keys exactly, so serde's
/// derived representation IS the wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Icon {
    /// Home section nav item.
    Home,
    /// Catalog section nav item.
    Sparkles,
    /// About section nav item.
    Award,
    /// Delivery section nav item and courier delivery card.
    Truck,
    /// Reviews section nav item and rating stars.
    Star,
    /// Contacts section nav item and email row.
    Mail,
    /// Cart trigger in the header.
    ShoppingBag,
    /// Mobile menu trigger.
    Menu,
    /// Cart row removal button.
    Trash2,
    /// Sample-order button on catalog cards.
    Droplet,
    /// Showroom address rows.
    MapPin,
    /// Phone contact row.
    Phone,
    /// Footer social link.
    Instagram,
    /// Footer social link (Telegram).
    Send,
}

impl Icon {
    /// All registered icons.
    pub const ALL: [Icon; 14] = [
        Icon::Home,
        Icon::Sparkles,
        Icon::Award,
        Icon::Truck,
        Icon::Star,
        Icon::Mail,
        Icon::ShoppingBag,
        Icon::Menu,
        Icon::Trash2,
        Icon::Droplet,
        Icon::MapPin,
        Icon::Phone,
        Icon::Instagram,
        Icon::Send,
    ];

    /// The external icon set's key for this glyph.
    pub const fn name(&self) -> &'static str {
        match self {
            Icon::Home => "Home",
            Icon::Sparkles => "Sparkles",
            Icon::Award => "Award",
            Icon::Truck => "Truck",
            Icon::Star => "Star",
            Icon::Mail => "Mail",
            Icon::ShoppingBag => "ShoppingBag",
            Icon::Menu => "Menu",
            Icon::Trash2 => "Trash2",
            Icon::Droplet => "Droplet",
            Icon::MapPin => "MapPin",
            Icon::Phone => "Phone",
            Icon::Instagram => "Instagram",
            Icon::Send => "Send",
        }
    }

    /// Looks up a glyph by its external key.
    ///
    /// ## Errors
    /// Returns [`CoreError::UnknownIcon`] for keys outside the registry.
    /// This is the explicit fallback path: no unchecked pass-through.
    pub fn from_name(name: &str) -> Result<Icon, CoreError> {
        Icon::ALL
            .into_iter()
            .find(|icon| icon.name() == name)
            .ok_or_else(|| CoreError::UnknownIcon(name.to_string()))
    }
}

impl FromStr for Icon {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Icon::from_name(s)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for icon in Icon::ALL {
            assert_eq!(Icon::from_name(icon.name()).unwrap(), icon);
        }
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = Icon::from_name("Cauldron").unwrap_err();
        assert!(matches!(err, CoreError::UnknownIcon(name) if name == "Cauldron"));

        // Keys are exact, matching the external icon set
        assert!(Icon::from_name("home").is_err());
        assert!(Icon::from_name("").is_err());
    }

    #[test]
    fn test_wire_format_matches_name() {
        for icon in Icon::ALL {
            let json = serde_json::to_string(&icon).unwrap();
            assert_eq!(json, format!("\"{}\"", icon.name()));
        }
    }
}
