use crate::WebPanel;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Document-wide so Escape closes the settings modal wherever focus is.
pub fn wire_escape_close(document: &web::Document, panel: Rc<WebPanel>) {
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if panel.key_down(&ev.key()) {
            log::debug!("[keys] settings closed");
        }
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}
