//! Current calendar year for the footer.

#[cfg(test)]
#[path = "year_test.rs"]
mod year_test;

/// The current year from the visitor's clock, or `None` off-browser (the
/// footer's year span renders empty then).
#[must_use]
pub fn current_year() -> Option<i32> {
    #[cfg(feature = "hydrate")]
    {
        i32::try_from(js_sys::Date::new_0().get_full_year()).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
