#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn install_is_noop_but_callable() {
    let outlines = RwSignal::new(FocusOutlines::new());
    install(outlines);
    assert!(!outlines.get_untracked().is_shown());
}
