#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn defaults_match_stock_markup() {
    let cfg = FooterConfig::default();
    assert_eq!(cfg.footer_id, "footer");
    assert_eq!(cfg.submit_selector, "footer button");
    assert_eq!(cfg.email_selector, "footer input[type=\"email\"]");
    assert_eq!(cfg.anchor_selector, "a[href^=\"#\"]");
    assert_eq!(cfg.icon_selector, ".social-icon");
    assert_eq!(cfg.visible_class, "footer-visible");
    assert_eq!(cfg.reveal_threshold, 0.1);
    assert_eq!(cfg.root_margin, "0px");
    assert_eq!(cfg.shadow_threshold_px, 100.0);
    assert_eq!(cfg.glyph_revert_ms, 2000);
    assert_eq!(cfg.ripple_remove_ms, 600);
}

#[test]
fn defaults_validate() {
    assert!(FooterConfig::default().validate().is_ok());
}

#[test]
fn empty_object_yields_defaults() {
    let cfg = FooterConfig::from_json("{}").unwrap();
    assert_eq!(cfg, FooterConfig::default());
}

#[test]
fn partial_object_overrides_only_named_fields() {
    let cfg = FooterConfig::from_json(r#"{ "shadow_threshold_px": 240, "glyph_revert_ms": 1500 }"#).unwrap();
    assert_eq!(cfg.shadow_threshold_px, 240.0);
    assert_eq!(cfg.glyph_revert_ms, 1500);
    assert_eq!(cfg.footer_id, "footer");
    assert_eq!(cfg.ripple_remove_ms, 600);
}

#[test]
fn malformed_json_is_parse_error() {
    let err = FooterConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, FooterError::ConfigParse(_)));
}

#[test]
fn unknown_field_is_parse_error() {
    let err = FooterConfig::from_json(r#"{ "shadow_px": 5 }"#).unwrap_err();
    assert!(matches!(err, FooterError::ConfigParse(_)));
}

#[test]
fn wrong_type_is_parse_error() {
    let err = FooterConfig::from_json(r#"{ "glyph_revert_ms": "soon" }"#).unwrap_err();
    assert!(matches!(err, FooterError::ConfigParse(_)));
}

#[test]
fn threshold_above_one_is_range_error() {
    let err = FooterConfig::from_json(r#"{ "reveal_threshold": 1.5 }"#).unwrap_err();
    assert!(matches!(err, FooterError::ConfigRange { field: "reveal_threshold" }));
}

#[test]
fn threshold_bounds_are_inclusive() {
    assert!(FooterConfig::from_json(r#"{ "reveal_threshold": 0.0 }"#).is_ok());
    assert!(FooterConfig::from_json(r#"{ "reveal_threshold": 1.0 }"#).is_ok());
}

#[test]
fn negative_shadow_threshold_is_range_error() {
    let err = FooterConfig::from_json(r#"{ "shadow_threshold_px": -1 }"#).unwrap_err();
    assert!(matches!(err, FooterError::ConfigRange { field: "shadow_threshold_px" }));
}

#[test]
fn non_finite_shadow_threshold_is_range_error() {
    let cfg = FooterConfig { shadow_threshold_px: f64::NAN, ..FooterConfig::default() };
    assert!(matches!(cfg.validate(), Err(FooterError::ConfigRange { field: "shadow_threshold_px" })));
}

#[test]
fn blank_selector_is_range_error() {
    let err = FooterConfig::from_json(r#"{ "icon_selector": "  " }"#).unwrap_err();
    assert!(matches!(err, FooterError::ConfigRange { field: "icon_selector" }));
}
