use crate::constants::checked_mode_selector;
use crate::dom;
use crate::WebModeController;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn checked_value(form: &web::HtmlFormElement) -> Option<String> {
    form.query_selector(&checked_mode_selector())
        .ok()
        .flatten()?
        .dyn_into::<web::HtmlInputElement>()
        .ok()
        .map(|input| input.value())
}

pub fn wire_display_form(form: &web::HtmlFormElement, modes: Rc<WebModeController>) {
    let source = form.clone();
    dom::add_event_listener(form, "change", move |_| {
        let value = checked_value(&source).unwrap_or_default();
        let mode = modes.select(&value);
        log::info!("[settings] display mode -> {}", mode);
    });
}
