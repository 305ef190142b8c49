//! Smooth scrolling for in-page `#fragment` links.

#[cfg(test)]
#[path = "anchor_test.rs"]
mod anchor_test;

/// What a click on a hash link should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnchorAction {
    /// Leave the browser default alone (bare `#`, missing or non-hash href).
    PassThrough,
    /// Suppress navigation and scroll to the element with this id, if any.
    ScrollTo(String),
}

/// Decide from the link's `href` attribute, read at click time.
///
/// The fragment is used verbatim as an element id; it is not percent-decoded.
#[must_use]
pub fn resolve(href: Option<&str>) -> AnchorAction {
    match href.and_then(|h| h.strip_prefix('#')) {
        Some(id) if !id.is_empty() => AnchorAction::ScrollTo(id.to_owned()),
        _ => AnchorAction::PassThrough,
    }
}

#[cfg(feature = "hydrate")]
pub use self::browser::install;

#[cfg(feature = "hydrate")]
mod browser {
    use web_sys::{Document, Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

    use super::{AnchorAction, resolve};
    use crate::config::FooterConfig;
    use crate::dom;
    use crate::error::FooterError;

    /// Intercept clicks on every matching link. Returns how many were wired.
    ///
    /// # Errors
    ///
    /// [`FooterError::Dom`] when the selector is rejected or a listener cannot
    /// be attached.
    pub fn install(document: &Document, cfg: &FooterConfig) -> Result<usize, FooterError> {
        let links = dom::query_all(document, &cfg.anchor_selector)?;
        for link in &links {
            let anchor = link.clone();
            let doc = document.clone();
            dom::listen(link, "click", move |ev: Event| {
                let AnchorAction::ScrollTo(id) = resolve(anchor.get_attribute("href").as_deref()) else {
                    return;
                };
                ev.prevent_default();
                let Some(target) = doc.get_element_by_id(&id) else {
                    log::debug!("anchor: no element #{id}");
                    return;
                };
                let opts = ScrollIntoViewOptions::new();
                opts.set_behavior(ScrollBehavior::Smooth);
                opts.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&opts);
            })?;
        }
        log::debug!("anchor: {} link(s) wired", links.len());
        Ok(links.len())
    }
}
