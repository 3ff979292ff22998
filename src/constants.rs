/// Element identifiers and the class toggled on the header.
///
/// These match the ids used by the page templates; the hero section is
/// only present on pages tall enough to scroll.
pub const HERO_ID: &str = "hero-section";
pub const HEADER_ID: &str = "sticky-header";
pub const ACTIVE_CLASS: &str = "active";
