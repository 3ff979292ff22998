use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_scroll_listener(window: &web::Window, mut handler: impl FnMut() + 'static) {
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback(
        "scroll",
        closure.as_ref().unchecked_ref::<js_sys::Function>(),
    );
    closure.forget();
}

/// Rendered height of the element in CSS pixels, or `None` if the element
/// is absent or not an HTML element.
#[inline]
pub fn element_height(document: &web::Document, element_id: &str) -> Option<f64> {
    document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        .map(|el| el.offset_height() as f64)
}

#[inline]
pub fn set_class_enabled(el: &web::Element, class: &str, enabled: bool) {
    let classes = el.class_list();
    if enabled {
        let _ = classes.add_1(class);
    } else {
        let _ = classes.remove_1(class);
    }
}
