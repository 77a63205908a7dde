use super::*;

#[test]
fn starts_hidden() {
    assert!(!FocusOutlines::new().is_shown());
}

#[test]
fn first_tab_latches() {
    let mut latch = FocusOutlines::new();
    assert!(latch.key_pressed("Tab"));
    assert!(latch.is_shown());
}

#[test]
fn other_keys_do_not_latch() {
    let mut latch = FocusOutlines::new();
    for key in ["a", "Enter", "Shift", "Escape", " "] {
        assert!(!latch.key_pressed(key), "key {key:?} must not latch");
        assert!(!latch.is_shown());
    }
}

#[test]
fn key_names_are_case_sensitive() {
    let mut latch = FocusOutlines::new();
    assert!(!latch.key_pressed("tab"));
    assert!(!latch.is_shown());
}

#[test]
fn second_tab_reports_no_transition() {
    let mut latch = FocusOutlines::new();
    assert!(latch.key_pressed("Tab"));
    assert!(!latch.key_pressed("Tab"), "only the first Tab is a transition");
    assert!(latch.is_shown());
}

#[test]
fn latch_never_unsets() {
    let mut latch = FocusOutlines::new();
    latch.key_pressed("Tab");
    for key in ["Escape", "a", "Tab"] {
        latch.key_pressed(key);
        assert!(latch.is_shown());
    }
}
