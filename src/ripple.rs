//! Click ripple on social icons.
//!
//! Each click appends a circular overlay `<span>` to the icon and removes it
//! after a fixed delay. The scale-and-fade comes from a `@keyframes ripple`
//! rule injected once per document behind an id check.

#[cfg(test)]
#[path = "ripple_test.rs"]
mod ripple_test;

use crate::consts::RIPPLE_STYLE_ID;
use crate::error::FooterError;

pub const KEYFRAMES_CSS: &str = "@keyframes ripple { to { transform: scale(2); opacity: 0; } }";

/// Inline style of the overlay span.
pub const OVERLAY_STYLE: [(&str, &str); 7] = [
    ("position", "absolute"),
    ("width", "100%"),
    ("height", "100%"),
    ("background", "rgba(255, 255, 255, 0.5)"),
    ("border-radius", "50%"),
    ("transform", "scale(0)"),
    ("animation", "ripple 0.6s ease-out"),
];

/// Inline style forced onto the clicked icon so the overlay is clipped to it.
pub const HOST_STYLE: [(&str, &str); 2] = [("position", "relative"), ("overflow", "hidden")];

/// A document that can carry `<style>` elements keyed by id.
pub trait StyleSheetHost {
    fn has_style(&self, id: &str) -> bool;

    /// Append a `<style id=..>` with the given text.
    ///
    /// # Errors
    ///
    /// Whatever the host reports when the element cannot be created or attached.
    fn inject_style(&mut self, id: &str, css: &str) -> Result<(), FooterError>;
}

/// Inject the ripple keyframes unless already present.
///
/// Returns `true` when this call injected the rule.
///
/// # Errors
///
/// Propagates [`StyleSheetHost::inject_style`] failures.
pub fn ensure_keyframes<H: StyleSheetHost + ?Sized>(host: &mut H) -> Result<bool, FooterError> {
    if host.has_style(RIPPLE_STYLE_ID) {
        return Ok(false);
    }
    host.inject_style(RIPPLE_STYLE_ID, KEYFRAMES_CSS)?;
    Ok(true)
}

#[cfg(feature = "hydrate")]
pub use self::browser::install;

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::JsCast;
    use web_sys::{Document, Event, HtmlElement};

    use super::{HOST_STYLE, OVERLAY_STYLE, StyleSheetHost, ensure_keyframes};
    use crate::config::FooterConfig;
    use crate::dom;
    use crate::error::FooterError;

    impl StyleSheetHost for Document {
        fn has_style(&self, id: &str) -> bool {
            self.get_element_by_id(id).is_some()
        }

        fn inject_style(&mut self, id: &str, css: &str) -> Result<(), FooterError> {
            let head = self.head().ok_or_else(|| FooterError::Dom("document has no <head>".into()))?;
            let style = self.create_element("style")?;
            style.set_id(id);
            style.set_text_content(Some(css));
            head.append_child(&style)?;
            Ok(())
        }
    }

    /// Wire every social icon. Returns how many were wired.
    ///
    /// A failed keyframes injection is logged, not returned: icons are still
    /// wired and each click retries the injection.
    ///
    /// # Errors
    ///
    /// [`FooterError::Dom`] when the selector is rejected or a listener cannot
    /// be attached.
    pub fn install(document: &Document, cfg: &FooterConfig) -> Result<usize, FooterError> {
        let mut doc = document.clone();
        if let Err(e) = ensure_keyframes(&mut doc) {
            log::warn!("ripple: keyframes injection failed, retrying on click: {e}");
        }

        let mut wired = 0;
        for icon in dom::query_all(document, &cfg.icon_selector)? {
            let Some(host) = icon.dyn_ref::<HtmlElement>().cloned() else {
                continue;
            };
            let mut doc = document.clone();
            let remove_ms = cfg.ripple_remove_ms;
            dom::listen(&icon, "click", move |ev: Event| {
                ev.prevent_default();
                if let Err(e) = ensure_keyframes(&mut doc) {
                    log::warn!("ripple: keyframes injection failed: {e}");
                }
                if let Err(e) = spawn(&doc, &host, remove_ms) {
                    log::warn!("ripple: {e}");
                }
            })?;
            wired += 1;
        }
        log::debug!("ripple: {wired} icon(s) wired");
        Ok(wired)
    }

    fn spawn(document: &Document, host: &HtmlElement, remove_ms: u32) -> Result<(), FooterError> {
        let ripple = document.create_element("span")?.unchecked_into::<HtmlElement>();
        let style = ripple.style();
        for (property, value) in OVERLAY_STYLE {
            style.set_property(property, value)?;
        }
        let host_style = host.style();
        for (property, value) in HOST_STYLE {
            host_style.set_property(property, value)?;
        }
        host.append_child(&ripple)?;
        dom::after(remove_ms, move || ripple.remove());
        Ok(())
    }
}
