//! Newsletter email capture.
//!
//! Submission is local only: the value is trimmed and validated, and a valid
//! address is acknowledged, cleared from the field, and flagged on the submit
//! control with a check glyph for a couple of seconds. Nothing is sent.
//!
//! [`activate`] returns the side effects as [`SubscribeAction`]s in the order
//! the host must apply them, mirroring how the browser handler behaves.

#[cfg(test)]
#[path = "subscribe_test.rs"]
mod subscribe_test;

use crate::consts::{CHECK_GLYPH_HTML, GLYPH_REVERT_MS, SEND_GLYPH_HTML};
use crate::email;
use crate::error::SubscribeError;

/// Icon content of the submit control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Send,
    Check,
}

impl Glyph {
    #[must_use]
    pub fn html(self) -> &'static str {
        match self {
            Self::Send => SEND_GLYPH_HTML,
            Self::Check => CHECK_GLYPH_HTML,
        }
    }
}

/// Side effect requested by a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscribeAction {
    /// Show a blocking message.
    Alert(String),
    /// Move focus back to the email field.
    FocusInput,
    /// Empty the email field.
    ClearInput,
    /// Replace the submit control's content now.
    ShowGlyph(Glyph),
    /// Replace the submit control's content after a delay. Never cancelled.
    ShowGlyphAfter { delay_ms: u32, glyph: Glyph },
}

/// Trim and validate a raw field value.
///
/// # Errors
///
/// [`SubscribeError::EmptyEmail`] when nothing is left after trimming,
/// [`SubscribeError::InvalidEmailFormat`] when the shape check fails.
pub fn validate(raw: &str) -> Result<String, SubscribeError> {
    let email = email::trim(raw);
    if email.is_empty() {
        return Err(SubscribeError::EmptyEmail);
    }
    if !email::is_valid(email) {
        return Err(SubscribeError::InvalidEmailFormat);
    }
    Ok(email.to_owned())
}

/// Success message for an accepted address.
#[must_use]
pub fn acknowledgment(email: &str) -> String {
    format!("Terima kasih! Email {email} telah berhasil didaftarkan untuk newsletter kami.")
}

/// Whether a key press in the email field submits the form.
#[must_use]
pub fn submits_on_key(key: &str) -> bool {
    key == "Enter"
}

/// Effects of a key press in the email field with the default revert delay.
///
/// Enter activates exactly as a click on the submit control would; any other
/// key yields `None` and must be left to the browser.
#[must_use]
pub fn on_key(key: &str, raw: &str) -> Option<Vec<SubscribeAction>> {
    on_key_with_delay(key, raw, GLYPH_REVERT_MS)
}

/// Effects of a key press in the email field.
#[must_use]
pub fn on_key_with_delay(key: &str, raw: &str, revert_ms: u32) -> Option<Vec<SubscribeAction>> {
    submits_on_key(key).then(|| activate_with_delay(raw, revert_ms))
}

/// Effects of one activation with the default glyph revert delay.
#[must_use]
pub fn activate(raw: &str) -> Vec<SubscribeAction> {
    activate_with_delay(raw, GLYPH_REVERT_MS)
}

/// Effects of one activation.
#[must_use]
pub fn activate_with_delay(raw: &str, revert_ms: u32) -> Vec<SubscribeAction> {
    match validate(raw) {
        Ok(email) => vec![
            SubscribeAction::Alert(acknowledgment(&email)),
            SubscribeAction::ClearInput,
            SubscribeAction::ShowGlyph(Glyph::Check),
            SubscribeAction::ShowGlyphAfter { delay_ms: revert_ms, glyph: Glyph::Send },
        ],
        Err(e) => vec![SubscribeAction::Alert(e.to_string()), SubscribeAction::FocusInput],
    }
}

#[cfg(feature = "hydrate")]
pub use self::browser::install;

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::JsCast;
    use web_sys::{Document, Event, HtmlElement, HtmlInputElement, KeyboardEvent};

    use super::{SubscribeAction, activate_with_delay, on_key_with_delay};
    use crate::app::Installed;
    use crate::config::FooterConfig;
    use crate::dom;
    use crate::error::FooterError;

    /// Wire the submit control and the Enter key. Skipped unless both the
    /// control and the email field exist.
    ///
    /// # Errors
    ///
    /// [`FooterError::Dom`] when a selector is rejected or a listener cannot
    /// be attached.
    pub fn install(document: &Document, cfg: &FooterConfig) -> Result<Installed, FooterError> {
        let button = dom::query(document, &cfg.submit_selector)?.and_then(|el| el.dyn_ref::<HtmlElement>().cloned());
        let input = dom::query(document, &cfg.email_selector)?.and_then(|el| el.dyn_ref::<HtmlInputElement>().cloned());
        let (Some(button), Some(input)) = (button, input) else {
            log::debug!("subscribe: form controls missing, skipping");
            return Ok(Installed::Skipped);
        };

        let revert_ms = cfg.glyph_revert_ms;
        let click_button = button.clone();
        let click_input = input.clone();
        dom::listen(&button, "click", move |ev: Event| {
            ev.prevent_default();
            for action in activate_with_delay(&click_input.value(), revert_ms) {
                apply(&action, &click_button, &click_input);
            }
        })?;

        // Enter runs the same activation as the click handler. Suppressing the
        // keypress default also stops a surrounding <form> from submitting
        // implicitly and activating twice.
        let key_input = input.clone();
        dom::listen(&input, "keypress", move |ev: Event| {
            let Some(key_ev) = ev.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let Some(actions) = on_key_with_delay(&key_ev.key(), &key_input.value(), revert_ms) else {
                return;
            };
            ev.prevent_default();
            for action in actions {
                apply(&action, &button, &key_input);
            }
        })?;

        log::debug!("subscribe: installed");
        Ok(Installed::Active)
    }

    fn apply(action: &SubscribeAction, button: &HtmlElement, input: &HtmlInputElement) {
        match action {
            SubscribeAction::Alert(message) => dom::alert(message),
            SubscribeAction::FocusInput => {
                if let Err(e) = input.focus() {
                    log::warn!("subscribe: focus failed: {}", FooterError::from(e));
                }
            }
            SubscribeAction::ClearInput => input.set_value(""),
            SubscribeAction::ShowGlyph(glyph) => button.set_inner_html(glyph.html()),
            SubscribeAction::ShowGlyphAfter { delay_ms, glyph } => {
                let target = button.clone();
                let html = glyph.html();
                dom::after(*delay_ms, move || target.set_inner_html(html));
            }
        }
    }
}
