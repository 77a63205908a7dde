#[cfg(test)]
#[path = "anchor_test.rs"]
mod anchor_test;

/// Extract the fragment identifier from an internal link's `href`.
///
/// `Some("services")` for `"#services"`; `None` for a bare `"#"`, an empty
/// string, or any href that is not a same-page fragment. Whether an
/// element with that id actually exists is the caller's check; a miss
/// falls through to the browser's default navigation.
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    let fragment = href.strip_prefix('#')?;
    if fragment.is_empty() { None } else { Some(fragment) }
}
