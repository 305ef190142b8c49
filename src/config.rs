//! Footer configuration.
//!
//! Every field has a default matching the stock footer markup, so a page only
//! needs to embed a config block when it deviates:
//!
//! ```html
//! <script type="application/json" id="footer-config">
//!   { "shadow_threshold_px": 240, "glyph_revert_ms": 1500 }
//! </script>
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    ANCHOR_SELECTOR, EMAIL_SELECTOR, FOOTER_ID, GLYPH_REVERT_MS, ICON_SELECTOR, REVEAL_THRESHOLD, RIPPLE_REMOVE_MS,
    ROOT_MARGIN, SHADOW_CSS, SHADOW_THRESHOLD_PX, SUBMIT_SELECTOR, VISIBLE_CLASS,
};
use crate::error::FooterError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FooterConfig {
    pub footer_id: String,
    pub submit_selector: String,
    pub email_selector: String,
    pub anchor_selector: String,
    pub icon_selector: String,
    pub visible_class: String,
    pub reveal_threshold: f64,
    pub root_margin: String,
    pub shadow_threshold_px: f64,
    pub shadow_css: String,
    pub glyph_revert_ms: u32,
    pub ripple_remove_ms: u32,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            footer_id: FOOTER_ID.to_owned(),
            submit_selector: SUBMIT_SELECTOR.to_owned(),
            email_selector: EMAIL_SELECTOR.to_owned(),
            anchor_selector: ANCHOR_SELECTOR.to_owned(),
            icon_selector: ICON_SELECTOR.to_owned(),
            visible_class: VISIBLE_CLASS.to_owned(),
            reveal_threshold: REVEAL_THRESHOLD,
            root_margin: ROOT_MARGIN.to_owned(),
            shadow_threshold_px: SHADOW_THRESHOLD_PX,
            shadow_css: SHADOW_CSS.to_owned(),
            glyph_revert_ms: GLYPH_REVERT_MS,
            ripple_remove_ms: RIPPLE_REMOVE_MS,
        }
    }
}

impl FooterConfig {
    /// Parse a JSON config block. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// [`FooterError::ConfigParse`] for malformed JSON or unknown fields,
    /// [`FooterError::ConfigRange`] when a value fails [`FooterConfig::validate`].
    pub fn from_json(raw: &str) -> Result<Self, FooterError> {
        let cfg: Self = serde_json::from_str(raw).map_err(|e| FooterError::ConfigParse(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check value ranges that serde cannot express.
    ///
    /// # Errors
    ///
    /// [`FooterError::ConfigRange`] naming the first offending field.
    pub fn validate(&self) -> Result<(), FooterError> {
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(FooterError::ConfigRange { field: "reveal_threshold" });
        }
        if !self.shadow_threshold_px.is_finite() || self.shadow_threshold_px < 0.0 {
            return Err(FooterError::ConfigRange { field: "shadow_threshold_px" });
        }
        let required = [
            ("footer_id", &self.footer_id),
            ("submit_selector", &self.submit_selector),
            ("email_selector", &self.email_selector),
            ("anchor_selector", &self.anchor_selector),
            ("icon_selector", &self.icon_selector),
            ("visible_class", &self.visible_class),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(FooterError::ConfigRange { field: *field });
        }
        Ok(())
    }

    /// Load the config block from the page, falling back to defaults.
    ///
    /// An absent block is normal. A broken one is logged and ignored so the
    /// footer still works with stock settings.
    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn from_document(document: &web_sys::Document) -> Self {
        let Some(text) = document
            .get_element_by_id(crate::consts::CONFIG_SCRIPT_ID)
            .and_then(|el| el.text_content())
        else {
            return Self::default();
        };
        match Self::from_json(&text) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("ignoring footer config: {e}");
                Self::default()
            }
        }
    }
}
