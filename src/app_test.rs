use super::*;

#[test]
fn default_report_is_all_failed() {
    let report = InstallReport::default();
    assert!(report.has_failures());
    assert_eq!(
        report.summary(),
        "visibility=failed subscribe=failed anchors=failed ripples=failed scroll_shadow=failed"
    );
}

#[test]
fn summary_lists_each_behavior() {
    let report = InstallReport {
        visibility: Some(Installed::Active),
        subscribe: Some(Installed::Skipped),
        anchors: Some(3),
        ripples: Some(0),
        scroll_shadow: Some(Installed::Active),
    };
    assert!(!report.has_failures());
    assert_eq!(report.summary(), "visibility=active subscribe=skipped anchors=3 ripples=0 scroll_shadow=active");
}

#[test]
fn skipped_is_not_a_failure() {
    let report = InstallReport {
        visibility: Some(Installed::Skipped),
        subscribe: Some(Installed::Skipped),
        anchors: Some(0),
        ripples: Some(0),
        scroll_shadow: Some(Installed::Skipped),
    };
    assert!(!report.has_failures());
}

#[test]
fn one_failure_is_reported() {
    let report = InstallReport {
        visibility: Some(Installed::Active),
        subscribe: Some(Installed::Active),
        anchors: None,
        ripples: Some(2),
        scroll_shadow: Some(Installed::Active),
    };
    assert!(report.has_failures());
    assert!(report.summary().contains("anchors=failed"));
}

#[test]
fn banner_lines_are_styled() {
    assert_eq!(BANNER.len(), 2);
    for (text, css) in BANNER {
        assert!(text.starts_with("%c"));
        assert!(css.contains("color:"));
    }
}
