use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Attach `handler` to `el`'s click event for the lifetime of the page.
#[inline]
pub fn add_click_listener(el: &web::Element, mut handler: impl FnMut() + 'static) -> bool {
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let ok = el
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        .is_ok();
    closure.forget();
    ok
}

/// All elements matching `selector`, in document order.
pub fn query_elements(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(e) => {
            log::error!("[dom] bad selector {}: {:?}", selector, e);
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

/// Page-level attribute lookup on `<html>`.
#[inline]
pub fn root_attribute(document: &web::Document, name: &str) -> Option<String> {
    document
        .document_element()
        .and_then(|el| el.get_attribute(name))
}
