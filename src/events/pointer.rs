use crate::constants::{CLOSE_MODAL_ID, SETTINGS_BUTTON_ID};
use crate::dom;
use crate::{WebPanel, WebSoundButton};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Cycle the button on every click. Keyboard activation of the `<button>`
/// arrives here as a click too.
pub fn wire_sound_button(button: &web::HtmlElement, controller: WebSoundButton) {
    dom::add_event_listener(button, "click", move |_| {
        // activate() issues any play request before returning, which keeps it
        // inside the gesture that allows playback
        spawn_local(controller.activate());
    });
}

pub fn wire_settings_panel(document: &web::Document, modal: &web::Element, panel: Rc<WebPanel>) {
    let open = panel.clone();
    dom::add_click_listener(document, SETTINGS_BUTTON_ID, move || open.open());

    let close = panel.clone();
    dom::add_click_listener(document, CLOSE_MODAL_ID, move || close.close());

    let backdrop = modal.clone();
    dom::add_event_listener(modal, "click", move |ev: web::Event| {
        let on_backdrop = ev
            .target()
            .map(|t| js_sys::Object::is(&t, &backdrop))
            .unwrap_or(false);
        panel.backdrop_click(on_backdrop);
    });
}
