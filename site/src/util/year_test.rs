#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn no_year_off_browser() {
    assert_eq!(current_year(), None);
}
