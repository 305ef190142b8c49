//! Shared constants: DOM hooks, timings, and user-facing strings.

// ── DOM hooks ───────────────────────────────────────────────────

/// Element id of the page footer.
pub const FOOTER_ID: &str = "footer";

/// Class added to the footer once it scrolls into view.
pub const VISIBLE_CLASS: &str = "footer-visible";

pub const SUBMIT_SELECTOR: &str = "footer button";
pub const EMAIL_SELECTOR: &str = "footer input[type=\"email\"]";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const ICON_SELECTOR: &str = ".social-icon";

/// Id of the injected `<style>` element carrying the ripple keyframes.
pub const RIPPLE_STYLE_ID: &str = "ripple-animation";

/// Id of the optional `<script type="application/json">` config block.
pub const CONFIG_SCRIPT_ID: &str = "footer-config";

// ── Timing and thresholds ───────────────────────────────────────

/// Fraction of the footer that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

pub const ROOT_MARGIN: &str = "0px";

/// Scroll offset (CSS px) past which the footer gets its shadow.
pub const SHADOW_THRESHOLD_PX: f64 = 100.0;

pub const SHADOW_CSS: &str = "0 -5px 20px rgba(0, 0, 0, 0.1)";

/// How long the submit control shows the check glyph.
pub const GLYPH_REVERT_MS: u32 = 2000;

/// Lifetime of a ripple overlay. Matches the 0.6s CSS animation by value only.
pub const RIPPLE_REMOVE_MS: u32 = 600;

// ── Glyphs ──────────────────────────────────────────────────────

pub const SEND_GLYPH_HTML: &str = "<i class=\"fas fa-paper-plane\"></i>";
pub const CHECK_GLYPH_HTML: &str = "<i class=\"fas fa-check\"></i>";

// ── Messages (Bahasa Indonesia) ─────────────────────────────────

pub const MSG_EMPTY_EMAIL: &str = "Mohon masukkan alamat email Anda.";
pub const MSG_INVALID_EMAIL: &str = "Mohon masukkan alamat email yang valid.";
