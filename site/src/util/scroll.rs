//! Smooth scrolling for same-page anchor links.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Scroll smoothly to the element a fragment href points at.
///
/// Returns `true` when the href names a fragment and an element with that
/// id exists; the caller should then suppress the browser's default jump.
/// A bare `#`, a non-fragment href, or a missing element returns `false`,
/// leaving the default navigation alone.
pub fn scroll_to_fragment(href: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(id) = page::anchor::anchor_target(href) else {
            return false;
        };
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            return false;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        el.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = href;
        false
    }
}
