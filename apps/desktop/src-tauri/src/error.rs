//! # API Error Type
//!
//! Unified error type for Tauri commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 Error Flow in the SELECTION Boutique                    │
//! │                                                                         │
//! │  Frontend                    Rust Backend                               │
//! │  ────────                    ────────────                               │
//! │                                                                         │
//! │  invoke('remove_from_cart', { position: 7 })                            │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  CoreError::PositionOutOfBounds ───────────────► ApiError ─────►│  │
//! │  │  CoreError::UnknownSection ────────────────────► ApiError ─────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  try {                                                                  │
//! │    await invoke('remove_from_cart', { position })                       │
//! │  } catch (e) {                                                          │
//! │    // e.message = "Cart position 7 is out of bounds ..."                │
//! │    // e.code = "CART_ERROR"                                             │
//! │  }                                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Tauri Error Serialization
//! Tauri requires errors to be serializable. We implement `Serialize`
//! and include both a machine-readable `code` and human-readable `message`.

use serde::Serialize;
use thiserror::Error;

use selection_core::CoreError;

/// API error returned from Tauri commands.
///
/// ## Serialization
/// This is what the frontend receives when a command fails:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Perfume not found: 42"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Error)]
#[error("[{code:?}] {message}")]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
///
/// ## Usage in Frontend
/// ```typescript
/// try {
///   await invoke('set_active_section', { section });
/// } catch (e) {
///   switch (e.code) {
///     case 'NAVIGATION_ERROR':
///       // keep the current section, log the stale link
///       break;
///     case 'CART_ERROR':
///       // refresh the cart panel, the view was stale
///       break;
///     default:
///       showError('An error occurred');
///   }
/// }
/// ```
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found (unknown perfume id)
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Cart operation failed (stale position)
    CartError,

    /// Navigation target rejected (unknown section)
    NavigationError,

    /// Internal error
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a cart error.
    pub fn cart(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::CartError, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::PerfumeNotFound(id) => ApiError::not_found("Perfume", id),
            CoreError::PositionOutOfBounds { .. } => ApiError::cart(err.to_string()),
            CoreError::UnknownSection(_) => {
                ApiError::new(ErrorCode::NavigationError, err.to_string())
            }
            CoreError::UnknownIcon(_) => ApiError::validation(err.to_string()),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_mapping() {
        let api: ApiError = CoreError::PerfumeNotFound(42).into();
        assert!(matches!(api.code, ErrorCode::NotFound));
        assert_eq!(api.message, "Perfume not found: 42");

        let api: ApiError = CoreError::PositionOutOfBounds { position: 7, len: 2 }.into();
        assert!(matches!(api.code, ErrorCode::CartError));

        let api: ApiError = CoreError::UnknownSection("checkout".to_string()).into();
        assert!(matches!(api.code, ErrorCode::NavigationError));
    }

    #[test]
    fn test_serialized_shape() {
        let api = ApiError::not_found("Perfume", 42);
        let json = serde_json::to_value(&api).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Perfume not found: 42");
    }

    #[test]
    fn test_display() {
        let api = ApiError::cart("stale position");
        assert_eq!(api.to_string(), "[CartError] stale position");
    }
}
