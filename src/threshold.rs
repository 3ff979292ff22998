// Pure threshold logic, kept free of web-sys so it can be tested host-side.

// Fraction of the hero section's rendered height scrolled past before the
// header engages
pub const HERO_THRESHOLD_RATIO: f64 = 0.5;

#[inline]
pub fn scroll_threshold(hero_height: f64) -> f64 {
    hero_height * HERO_THRESHOLD_RATIO
}

/// Whether the header should carry the active class for the given scroll
/// offset and hero height. Strictly greater: sitting exactly at the
/// threshold leaves the header inactive.
#[inline]
pub fn header_engaged(scroll_y: f64, hero_height: f64) -> bool {
    scroll_y > scroll_threshold(hero_height)
}
