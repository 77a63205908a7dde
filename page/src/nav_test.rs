use super::*;

#[test]
fn starts_closed() {
    let menu = NavMenu::new();
    assert!(!menu.is_open());
    assert_eq!(menu.aria_expanded(), "false");
}

#[test]
fn toggle_opens() {
    let mut menu = NavMenu::new();
    menu.toggle();
    assert!(menu.is_open());
    assert_eq!(menu.aria_expanded(), "true");
}

#[test]
fn toggle_twice_closes() {
    let mut menu = NavMenu::new();
    menu.toggle();
    menu.toggle();
    assert!(!menu.is_open());
    assert_eq!(menu.aria_expanded(), "false");
}

#[test]
fn link_activation_closes_an_open_menu() {
    let mut menu = NavMenu::new();
    menu.toggle();
    menu.close_for_navigation();
    assert!(!menu.is_open());
}

#[test]
fn link_activation_on_a_closed_menu_is_a_no_op() {
    let mut menu = NavMenu::new();
    menu.close_for_navigation();
    assert!(!menu.is_open());
    assert_eq!(menu.aria_expanded(), "false");
}

#[test]
fn aria_always_agrees_with_the_flag() {
    let mut menu = NavMenu::new();
    for _ in 0..5 {
        menu.toggle();
        assert_eq!(menu.aria_expanded(), if menu.is_open() { "true" } else { "false" });
    }
}
