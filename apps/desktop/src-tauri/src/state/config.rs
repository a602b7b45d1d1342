//! # Configuration State
//!
//! Stores boutique configuration fixed at startup.
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.
//! If hot-reloading is added later, we'd wrap in `RwLock`.

use serde::{Deserialize, Serialize};

use selection_core::{BRAND_NAME, CURRENCY_SYMBOL};

/// Boutique configuration.
///
/// Display concerns (brand name, currency symbol) live here so they are not
/// scattered across the frontend, and capability flags document what the
/// backend actually supports.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Brand name (displayed in the header and window title).
    pub brand_name: String,

    /// Currency symbol (for display; amounts are whole rubles).
    pub currency_symbol: String,

    /// Whether checkout submits an order anywhere.
    ///
    /// The checkout affordance is presented in the cart panel but is not
    /// wired to any order backend; this stays `false` until one exists, so
    /// the frontend can label the button honestly.
    pub checkout_enabled: bool,
}

impl Default for ConfigState {
    /// Returns the boutique's fixed configuration.
    fn default() -> Self {
        ConfigState {
            brand_name: BRAND_NAME.to_string(),
            currency_symbol: CURRENCY_SYMBOL.to_string(),
            checkout_enabled: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConfigState::default();
        assert_eq!(config.brand_name, "SELECTION");
        assert_eq!(config.currency_symbol, "₽");
        assert!(!config.checkout_enabled);
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(ConfigState::default()).unwrap();
        assert_eq!(json["brandName"], "SELECTION");
        assert_eq!(json["checkoutEnabled"], false);
    }
}
