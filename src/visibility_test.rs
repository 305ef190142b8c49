use super::*;

#[test]
fn new_latch_is_hidden() {
    assert!(!RevealLatch::new().is_visible());
}

#[test]
fn non_intersecting_entry_is_ignored() {
    let mut latch = RevealLatch::new();
    assert_eq!(latch.observe(false), Reveal::Ignore);
    assert!(!latch.is_visible());
}

#[test]
fn first_intersection_reveals() {
    let mut latch = RevealLatch::new();
    assert_eq!(latch.observe(true), Reveal::First);
    assert!(latch.is_visible());
}

#[test]
fn later_intersections_reapply() {
    let mut latch = RevealLatch::new();
    latch.observe(true);
    assert_eq!(latch.observe(true), Reveal::Again);
    assert_eq!(latch.observe(true), Reveal::Again);
}

#[test]
fn leaving_viewport_never_clears_flag() {
    let mut latch = RevealLatch::new();
    latch.observe(true);
    assert_eq!(latch.observe(false), Reveal::Ignore);
    assert!(latch.is_visible());
    assert_eq!(latch.observe(true), Reveal::Again);
}

#[test]
fn applies_class_only_when_intersecting() {
    assert!(!Reveal::Ignore.applies_class());
    assert!(Reveal::First.applies_class());
    assert!(Reveal::Again.applies_class());
}
