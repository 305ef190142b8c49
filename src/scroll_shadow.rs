//! Footer drop shadow driven by scroll offset, throttled to animation frames.
//!
//! Scroll events can fire many times per frame. Each one cancels the pending
//! frame request and schedules a fresh one, so at most one style update runs
//! per rendered frame and intermediate offsets are dropped.

#[cfg(test)]
#[path = "scroll_shadow_test.rs"]
mod scroll_shadow_test;

use crate::consts::SHADOW_THRESHOLD_PX;

/// Applied footer shadow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shadow {
    Flat,
    Raised,
}

impl Shadow {
    /// `box-shadow` value for this state, given the raised shadow CSS.
    #[must_use]
    pub fn css(self, raised_css: &str) -> &str {
        match self {
            Self::Flat => "none",
            Self::Raised => raised_css,
        }
    }
}

/// Pending animation-frame request for the current scroll burst.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameThrottle {
    pending: Option<i32>,
}

impl FrameThrottle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the pending handle so the caller can cancel it.
    pub fn supersede(&mut self) -> Option<i32> {
        self.pending.take()
    }

    /// Record the handle of the frame just requested.
    pub fn arm(&mut self, handle: i32) {
        self.pending = Some(handle);
    }

    /// The frame ran; nothing is pending any more.
    pub fn fired(&mut self) {
        self.pending = None;
    }

    #[must_use]
    pub fn pending(&self) -> Option<i32> {
        self.pending
    }
}

/// Tracks the applied shadow so identical offsets cause no style writes.
#[derive(Debug, Clone, Copy)]
pub struct ShadowToggle {
    threshold_px: f64,
    applied: Option<Shadow>,
}

impl Default for ShadowToggle {
    fn default() -> Self {
        Self::new(SHADOW_THRESHOLD_PX)
    }
}

impl ShadowToggle {
    #[must_use]
    pub fn new(threshold_px: f64) -> Self {
        Self { threshold_px, applied: None }
    }

    /// Shadow for an offset. Raised only strictly past the threshold.
    #[must_use]
    pub fn shadow_for(&self, offset: f64) -> Shadow {
        if offset > self.threshold_px { Shadow::Raised } else { Shadow::Flat }
    }

    /// Shadow the footer needs for `offset`, or `None` if it already has it.
    ///
    /// Nothing is recorded until [`ShadowToggle::commit`], so a write that
    /// fails is retried on the next frame.
    #[must_use]
    pub fn pending_write(&self, offset: f64) -> Option<Shadow> {
        let next = self.shadow_for(offset);
        (self.applied != Some(next)).then_some(next)
    }

    /// Record a shadow the host has successfully written.
    pub fn commit(&mut self, shadow: Shadow) {
        self.applied = Some(shadow);
    }

    /// [`ShadowToggle::pending_write`] followed by an immediate commit, for
    /// hosts whose writes cannot fail.
    pub fn update(&mut self, offset: f64) -> Option<Shadow> {
        let next = self.pending_write(offset)?;
        self.commit(next);
        Some(next)
    }

    #[must_use]
    pub fn applied(&self) -> Option<Shadow> {
        self.applied
    }
}

#[cfg(feature = "hydrate")]
pub use self::browser::install;

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::{JsCast, closure::Closure};
    use web_sys::{Document, Event, HtmlElement, Window};

    use super::{FrameThrottle, ShadowToggle};
    use crate::app::Installed;
    use crate::config::FooterConfig;
    use crate::dom;
    use crate::error::FooterError;

    struct ScrollState {
        throttle: FrameThrottle,
        toggle: ShadowToggle,
        // Latest frame closure. Kept alive until the next scroll replaces it.
        frame_cb: Option<Closure<dyn FnMut(f64)>>,
    }

    /// Listen for window scrolls. Skipped when the footer is absent.
    ///
    /// # Errors
    ///
    /// [`FooterError::NoWindow`] outside a browser, [`FooterError::Dom`] when
    /// the listener cannot be attached.
    pub fn install(document: &Document, cfg: &FooterConfig) -> Result<Installed, FooterError> {
        let Some(footer) = dom::html_by_id(document, &cfg.footer_id) else {
            log::debug!("scroll_shadow: no #{}, skipping", cfg.footer_id);
            return Ok(Installed::Skipped);
        };
        let window = dom::window()?;

        let state = Rc::new(RefCell::new(ScrollState {
            throttle: FrameThrottle::new(),
            toggle: ShadowToggle::new(cfg.shadow_threshold_px),
            frame_cb: None,
        }));
        let raised_css: Rc<str> = Rc::from(cfg.shadow_css.as_str());

        let win = window.clone();
        dom::listen(&window, "scroll", move |_ev: Event| {
            if let Err(e) = schedule(&win, &state, &footer, &raised_css) {
                log::warn!("scroll_shadow: {e}");
            }
        })?;

        log::debug!("scroll_shadow: installed");
        Ok(Installed::Active)
    }

    fn schedule(
        window: &Window,
        state: &Rc<RefCell<ScrollState>>,
        footer: &HtmlElement,
        raised_css: &Rc<str>,
    ) -> Result<(), FooterError> {
        if let Some(handle) = state.borrow_mut().throttle.supersede() {
            window.cancel_animation_frame(handle)?;
        }

        let state_for_cb = Rc::clone(state);
        let window_for_cb = window.clone();
        let footer = footer.clone();
        let raised_css = Rc::clone(raised_css);
        let cb = Closure::wrap(Box::new(move |_ts: f64| {
            state_for_cb.borrow_mut().throttle.fired();
            let offset = match window_for_cb.scroll_y() {
                Ok(y) => y,
                Err(e) => {
                    log::warn!("scroll_shadow: scrollY failed: {}", FooterError::from(e));
                    return;
                }
            };
            let Some(shadow) = state_for_cb.borrow().toggle.pending_write(offset) else {
                return;
            };
            match dom::set_style(&footer, "box-shadow", shadow.css(&raised_css)) {
                Ok(()) => state_for_cb.borrow_mut().toggle.commit(shadow),
                Err(e) => log::warn!("scroll_shadow: {e}"),
            }
        }) as Box<dyn FnMut(f64)>);

        let handle = window.request_animation_frame(cb.as_ref().unchecked_ref())?;
        let mut st = state.borrow_mut();
        st.throttle.arm(handle);
        st.frame_cb = Some(cb);
        Ok(())
    }
}
