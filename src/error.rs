//! Error types for form validation and DOM wiring.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::consts::{MSG_EMPTY_EMAIL, MSG_INVALID_EMAIL};

// =============================================================================
// SUBSCRIBE
// =============================================================================

/// Why a newsletter submission was rejected.
///
/// `Display` renders the prompt shown to the user, so the host can pass
/// `err.to_string()` straight to `alert`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubscribeError {
    /// The trimmed value is empty.
    #[error("{}", MSG_EMPTY_EMAIL)]
    EmptyEmail,

    /// Non-empty, but not shaped like `local@domain.tld`.
    #[error("{}", MSG_INVALID_EMAIL)]
    InvalidEmailFormat,
}

// =============================================================================
// HOST
// =============================================================================

/// Failures talking to the browser or loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum FooterError {
    /// `window` is not available (not running in a browser).
    #[error("no global window")]
    NoWindow,

    /// The window has no document.
    #[error("window has no document")]
    NoDocument,

    /// A DOM call threw.
    #[error("DOM call failed: {0}")]
    Dom(String),

    /// The config block is not valid JSON for `FooterConfig`.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// A config value parsed but is outside its allowed range.
    #[error("config value out of range: {field}")]
    ConfigRange { field: &'static str },
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for FooterError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
