#![cfg(target_arch = "wasm32")]
use ambience_core::{DisplayModeController, SettingsPanel, SoundButtonController};
use anyhow::anyhow;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod audio;
mod constants;
mod dom;
mod events;
mod overlay;
mod storage;
mod timer;
mod ui;

use constants::{SoundSpec, SOUNDS};

pub(crate) type WebSoundButton =
    SoundButtonController<audio::MediaSink, ui::ButtonStyle, timer::WindowInterval>;
pub(crate) type WebModeController = DisplayModeController<storage::LocalStore, ui::RootModeView>;
pub(crate) type WebPanel = SettingsPanel<overlay::ModalOverlay>;

fn wire_settings(document: &web::Document) -> anyhow::Result<()> {
    let modal: web::Element = dom::element_by_id(document, constants::SETTINGS_MODAL_ID)?;
    let form: web::HtmlFormElement = dom::element_by_id(document, constants::DISPLAY_FORM_ID)?;
    let body = document.body().ok_or_else(|| anyhow!("no body"))?;

    let panel: Rc<WebPanel> = Rc::new(SettingsPanel::new(overlay::ModalOverlay::new(
        modal.clone(),
    )));
    events::pointer::wire_settings_panel(document, &modal, panel.clone());

    let modes: Rc<WebModeController> = Rc::new(DisplayModeController::new(
        storage::LocalStore::open(),
        ui::RootModeView::new(body, form.clone()),
    ));
    events::form::wire_display_form(&form, modes.clone());
    let mode = modes.restore();
    log::info!("[settings] display mode {}", mode);

    events::keyboard::wire_escape_close(document, panel);
    Ok(())
}

fn setup_sound(document: &web::Document, spec: &SoundSpec) -> anyhow::Result<()> {
    let button: web::HtmlElement = dom::element_by_id(document, spec.button_id)?;
    let audio: web::HtmlAudioElement = dom::element_by_id(document, spec.audio_id)?;

    let icon = button
        .query_selector(constants::BUTTON_ICON_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
    if icon.is_none() {
        log::warn!("[sound] {} has no icon", spec.name);
    }
    let name = button
        .query_selector(constants::BUTTON_LABEL_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.text_content())
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| spec.name.to_string());

    let controller: WebSoundButton = SoundButtonController::new(
        name,
        audio::MediaSink::new(audio),
        ui::ButtonStyle::new(button.clone(), icon),
        timer::WindowInterval::default(),
    );
    log::info!("[sound] {} ready", controller.name());
    events::pointer::wire_sound_button(&button, controller);
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow!("no document"))?;

    wire_settings(&document)?;

    let mut wired = 0;
    for spec in SOUNDS.iter() {
        match setup_sound(&document, spec) {
            Ok(()) => wired += 1,
            Err(e) => log::warn!("[sound] skipping {}: {:?}", spec.name, e),
        }
    }
    log::info!("[sound] {}/{} buttons wired", wired, SOUNDS.len());
    Ok(())
}

fn run_init() {
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
}

// `document.readyState` is still "loading" while the parser runs.
fn is_loading(document: &web::Document) -> bool {
    js_sys::Reflect::get(document, &JsValue::from_str("readyState"))
        .ok()
        .and_then(|v| v.as_string())
        .map(|state| state == "loading")
        .unwrap_or(false)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ambience-web starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if is_loading(&document) {
        let on_ready: Closure<dyn FnMut()> = Closure::once(run_init);
        document.add_event_listener_with_callback(
            "DOMContentLoaded",
            on_ready.as_ref().unchecked_ref(),
        )?;
        on_ready.forget();
    } else {
        run_init();
    }
    Ok(())
}
