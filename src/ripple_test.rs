use super::*;

// =============================================================
// Helpers
// =============================================================

#[derive(Default)]
struct MemoryStyles {
    sheets: Vec<(String, String)>,
    fail: bool,
}

impl StyleSheetHost for MemoryStyles {
    fn has_style(&self, id: &str) -> bool {
        self.sheets.iter().any(|(sid, _)| sid == id)
    }

    fn inject_style(&mut self, id: &str, css: &str) -> Result<(), FooterError> {
        if self.fail {
            return Err(FooterError::Dom("no head".into()));
        }
        self.sheets.push((id.to_owned(), css.to_owned()));
        Ok(())
    }
}

// =============================================================
// ensure_keyframes
// =============================================================

#[test]
fn first_call_injects_rule() {
    let mut doc = MemoryStyles::default();
    assert!(ensure_keyframes(&mut doc).unwrap());
    assert_eq!(doc.sheets, vec![("ripple-animation".to_owned(), KEYFRAMES_CSS.to_owned())]);
}

#[test]
fn rule_present_exactly_once_after_many_clicks() {
    let mut doc = MemoryStyles::default();
    for _ in 0..25 {
        ensure_keyframes(&mut doc).unwrap();
    }
    assert_eq!(doc.sheets.len(), 1);
}

#[test]
fn later_calls_report_no_injection() {
    let mut doc = MemoryStyles::default();
    ensure_keyframes(&mut doc).unwrap();
    assert!(!ensure_keyframes(&mut doc).unwrap());
}

#[test]
fn existing_page_style_is_respected() {
    let mut doc = MemoryStyles { sheets: vec![("ripple-animation".into(), "/* page */".into())], fail: false };
    assert!(!ensure_keyframes(&mut doc).unwrap());
    assert_eq!(doc.sheets[0].1, "/* page */");
}

#[test]
fn injection_failure_propagates() {
    let mut doc = MemoryStyles { fail: true, ..Default::default() };
    assert!(matches!(ensure_keyframes(&mut doc), Err(FooterError::Dom(_))));
    assert!(doc.sheets.is_empty());
}

#[test]
fn failed_injection_is_retried_on_next_call() {
    let mut doc = MemoryStyles { fail: true, ..Default::default() };
    assert!(ensure_keyframes(&mut doc).is_err());
    doc.fail = false;
    assert!(ensure_keyframes(&mut doc).unwrap());
    assert!(!ensure_keyframes(&mut doc).unwrap());
    assert_eq!(doc.sheets.len(), 1);
}

#[test]
fn works_through_trait_object() {
    let mut doc = MemoryStyles::default();
    let host: &mut dyn StyleSheetHost = &mut doc;
    assert!(ensure_keyframes(host).unwrap());
}

// =============================================================
// Styles
// =============================================================

#[test]
fn keyframes_scale_and_fade() {
    assert!(KEYFRAMES_CSS.starts_with("@keyframes ripple"));
    assert!(KEYFRAMES_CSS.contains("transform: scale(2)"));
    assert!(KEYFRAMES_CSS.contains("opacity: 0"));
}

#[test]
fn overlay_covers_host_as_circle() {
    let get = |name: &str| OVERLAY_STYLE.iter().find(|(p, _)| *p == name).map(|(_, v)| *v);
    assert_eq!(get("position"), Some("absolute"));
    assert_eq!(get("width"), Some("100%"));
    assert_eq!(get("height"), Some("100%"));
    assert_eq!(get("border-radius"), Some("50%"));
    assert_eq!(get("animation"), Some("ripple 0.6s ease-out"));
}

#[test]
fn host_is_clipped_container() {
    assert_eq!(HOST_STYLE, [("position", "relative"), ("overflow", "hidden")]);
}
