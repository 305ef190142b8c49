//! Startup: install every footer behavior once the document is parsed.
//!
//! The behaviors are independent. A failure installing one is logged and the
//! rest still install.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

/// Outcome of installing a single-target behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Installed {
    /// Listeners are attached.
    Active,
    /// A required element is missing, so nothing was attached.
    Skipped,
}

/// What startup managed to wire. `None` means the install returned an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InstallReport {
    pub visibility: Option<Installed>,
    pub subscribe: Option<Installed>,
    pub anchors: Option<usize>,
    pub ripples: Option<usize>,
    pub scroll_shadow: Option<Installed>,
}

impl InstallReport {
    /// One-line summary for the startup log.
    #[must_use]
    pub fn summary(&self) -> String {
        fn state(s: Option<Installed>) -> &'static str {
            match s {
                Some(Installed::Active) => "active",
                Some(Installed::Skipped) => "skipped",
                None => "failed",
            }
        }
        fn count(c: Option<usize>) -> String {
            c.map_or_else(|| "failed".to_owned(), |n| n.to_string())
        }
        format!(
            "visibility={} subscribe={} anchors={} ripples={} scroll_shadow={}",
            state(self.visibility),
            state(self.subscribe),
            count(self.anchors),
            count(self.ripples),
            state(self.scroll_shadow),
        )
    }

    /// Whether any install returned an error.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.visibility.is_none()
            || self.subscribe.is_none()
            || self.anchors.is_none()
            || self.ripples.is_none()
            || self.scroll_shadow.is_none()
    }
}

/// Styled console banner: `(text, css)` pairs for `console.log("%c...", css)`.
pub const BANNER: [(&str, &str); 2] = [
    ("%c🎉 Professional Footer Loaded Successfully!", "color: #667eea; font-size: 16px; font-weight: bold;"),
    (
        "%cFeatures: Gradient Background, Hover Effects, Scroll Animations, Responsive Design",
        "color: #764ba2; font-size: 12px;",
    ),
];

#[cfg(feature = "hydrate")]
pub use self::browser::boot;

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::JsValue;
    use web_sys::{Document, Event};

    use super::{BANNER, InstallReport};
    use crate::config::FooterConfig;
    use crate::error::FooterError;
    use crate::{anchor, dom, ripple, scroll_shadow, subscribe, visibility};

    /// Run [`install_all`] now if the document is parsed, else on `DOMContentLoaded`.
    ///
    /// # Errors
    ///
    /// [`FooterError::NoWindow`] or [`FooterError::NoDocument`] outside a
    /// browser, [`FooterError::Dom`] when the `DOMContentLoaded` listener
    /// cannot be attached. Failures of individual behaviors are logged by
    /// [`install_all`] instead.
    pub fn boot() -> Result<(), FooterError> {
        let document = dom::document()?;
        if document.ready_state() == "loading" {
            let doc = document.clone();
            dom::listen(&document, "DOMContentLoaded", move |_ev: Event| {
                install_all(&doc);
            })?;
        } else {
            install_all(&document);
        }
        Ok(())
    }

    /// Install every behavior against `document`.
    pub fn install_all(document: &Document) -> InstallReport {
        log::info!("Document ready! Footer animation initialized.");
        let cfg = FooterConfig::from_document(document);

        let report = InstallReport {
            visibility: settle("visibility", visibility::install(document, &cfg)),
            subscribe: settle("subscribe", subscribe::install(document, &cfg)),
            anchors: settle("anchor", anchor::install(document, &cfg)),
            ripples: settle("ripple", ripple::install(document, &cfg)),
            scroll_shadow: settle("scroll_shadow", scroll_shadow::install(document, &cfg)),
        };
        log::debug!("footer: {}", report.summary());

        for (text, css) in BANNER {
            web_sys::console::log_2(&JsValue::from_str(text), &JsValue::from_str(css));
        }
        report
    }

    fn settle<T>(name: &str, result: Result<T, FooterError>) -> Option<T> {
        match result {
            Ok(v) => Some(v),
            Err(e) => {
                log::warn!("{name}: install failed: {e}");
                None
            }
        }
    }
}
