//! Footer reveal on first scroll into view.
//!
//! An `IntersectionObserver` watches the footer with a 10% threshold. Every
//! intersecting entry adds the visible class; nothing ever removes it and the
//! footer is never unobserved, so the class is effectively a one-way latch.

#[cfg(test)]
#[path = "visibility_test.rs"]
mod visibility_test;

/// What to do with one observer entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reveal {
    /// Not intersecting. Leave the element alone.
    Ignore,
    /// First intersection. Apply the class.
    First,
    /// Already revealed. Applying the class again is a no-op in the DOM.
    Again,
}

impl Reveal {
    #[must_use]
    pub fn applies_class(self) -> bool {
        matches!(self, Self::First | Self::Again)
    }
}

/// One-way visible flag for the observed footer.
#[derive(Debug, Clone, Copy, Default)]
pub struct RevealLatch {
    visible: bool,
}

impl RevealLatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one entry's `isIntersecting`.
    pub fn observe(&mut self, is_intersecting: bool) -> Reveal {
        if !is_intersecting {
            return Reveal::Ignore;
        }
        if self.visible {
            Reveal::Again
        } else {
            self.visible = true;
            Reveal::First
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

#[cfg(feature = "hydrate")]
pub use self::browser::install;

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::{JsCast, JsValue, closure::Closure};
    use web_sys::{Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use super::RevealLatch;
    use crate::app::Installed;
    use crate::config::FooterConfig;
    use crate::error::FooterError;

    /// Start observing the footer. Skipped when the footer is absent.
    ///
    /// # Errors
    ///
    /// [`FooterError::Dom`] when the `IntersectionObserver` cannot be created.
    pub fn install(document: &Document, cfg: &FooterConfig) -> Result<Installed, FooterError> {
        let Some(footer) = document.get_element_by_id(&cfg.footer_id) else {
            log::debug!("visibility: no #{}, skipping", cfg.footer_id);
            return Ok(Installed::Skipped);
        };

        let latch = Rc::new(RefCell::new(RevealLatch::new()));
        let class = cfg.visible_class.clone();
        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let reveal = latch.borrow_mut().observe(entry.is_intersecting());
                if !reveal.applies_class() {
                    continue;
                }
                if reveal == super::Reveal::First {
                    log::debug!("visibility: footer revealed");
                }
                if let Err(e) = entry.target().class_list().add_1(&class) {
                    log::warn!("visibility: add class failed: {}", FooterError::from(e));
                }
            }
        }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(cfg.reveal_threshold));
        init.set_root_margin(&cfg.root_margin);
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        observer.observe(&footer);
        callback.forget();

        log::debug!("visibility: observing #{}", cfg.footer_id);
        Ok(Installed::Active)
    }
}
