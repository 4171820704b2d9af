use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Look up a required element and cast it to the expected type.
pub fn element_by_id<T: JsCast>(document: &web::Document, element_id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(element_id)
        .ok_or_else(|| anyhow!("missing #{}", element_id))?
        .dyn_into::<T>()
        .map_err(|e| anyhow!("#{} has unexpected type: {:?}", element_id, e))
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        add_event_listener(&el, "click", move |_| handler());
    } else {
        log::warn!("[dom] no #{} to listen on", element_id);
    }
}

/// Attach a listener for the lifetime of the page.
pub fn add_event_listener(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}
