//! Browser enhancements for a page footer.
//!
//! This crate is compiled to WebAssembly and attached to an already-rendered
//! page. It wires five independent behaviors onto the footer markup; each one
//! silently stays off when the elements it needs are absent.
//!
//! Decision logic is plain Rust and always compiled so it can be unit tested
//! natively. DOM wiring lives behind the `hydrate` feature.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`visibility`] | Reveal the footer once it scrolls into view |
//! | [`subscribe`] | Newsletter email validation and local acknowledgment |
//! | [`anchor`] | Smooth scrolling for `#fragment` links |
//! | [`ripple`] | Click ripple on social icons |
//! | [`scroll_shadow`] | Frame-throttled footer shadow on scroll |
//! | [`app`] | Startup and install reporting |
//! | [`config`] | Optional JSON config embedded in the page |
//! | [`email`] | `local@domain.tld` shape check |
//! | [`error`] | Validation and host error types |
//! | [`consts`] | Selectors, timings, and user-facing strings |

pub mod anchor;
pub mod app;
pub mod config;
pub mod consts;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod email;
pub mod error;
pub mod ripple;
pub mod scroll_shadow;
pub mod subscribe;
pub mod visibility;

/// WASM entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger init failed: {e}").into());
    }
    if let Err(e) = app::boot() {
        log::error!("footer init failed: {e}");
    }
}
