use crate::constants::{ACTIVE_CLASS, HEADER_ID, HERO_ID};
use crate::dom;
use crate::threshold;
use web_sys as web;

/// Bind the scroll handler for the lifetime of the page view.
pub fn wire_scroll_handler(window: &web::Window) {
    dom::add_scroll_listener(window, || {
        if let Some(document) = dom::window_document() {
            sync_header_state(&document);
        }
    });
}

/// Re-evaluate the header state from the current layout. Elements are
/// looked up fresh on every invocation; the hero section might not exist
/// on very short pages, in which case nothing is touched.
pub fn sync_header_state(document: &web::Document) {
    let hero_height = dom::element_height(document, HERO_ID);
    let header = document.get_element_by_id(HEADER_ID);
    if let (Some(hero_height), Some(header)) = (hero_height, header) {
        let scroll_y = web::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0);
        let engaged = threshold::header_engaged(scroll_y, hero_height);
        dom::set_class_enabled(&header, ACTIVE_CLASS, engaged);
    }
}
