use crate::constants::{mode_radio_selector, STYLE_BACKGROUND, STYLE_FILTER, STYLE_TRANSFORM};
use ambience_core::{ButtonView, DisplayMode, ModeView, SoundPreset};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Inline styling of a sound button and its icon.
pub struct ButtonStyle {
    button: web::HtmlElement,
    icon: Option<web::HtmlElement>,
}

impl ButtonStyle {
    pub fn new(button: web::HtmlElement, icon: Option<web::HtmlElement>) -> Self {
        Self { button, icon }
    }
}

impl ButtonView for ButtonStyle {
    fn show_preset(&self, preset: &SoundPreset) {
        _ = self
            .button
            .style()
            .set_property(STYLE_BACKGROUND, preset.color);
        if let Some(icon) = &self.icon {
            let style = icon.style();
            _ = style.set_property(STYLE_TRANSFORM, &preset.transform_css());
            _ = style.set_property(STYLE_FILTER, &preset.filter_css());
        }
    }
}

/// Mode classes on `<body>` plus the radio group in the settings form.
pub struct RootModeView {
    root: web::HtmlElement,
    form: web::HtmlFormElement,
}

impl RootModeView {
    pub fn new(root: web::HtmlElement, form: web::HtmlFormElement) -> Self {
        Self { root, form }
    }
}

impl ModeView for RootModeView {
    fn show_mode(&self, mode: DisplayMode) {
        let cl = self.root.class_list();
        for m in DisplayMode::ALL {
            _ = cl.remove_1(m.root_class());
        }
        _ = cl.add_1(mode.root_class());
    }

    fn check_option(&self, value: &str) {
        let Ok(options) = self.form.query_selector_all(&mode_radio_selector()) else {
            return;
        };
        for i in 0..options.length() {
            if let Some(input) = options
                .item(i)
                .and_then(|n| n.dyn_into::<web::HtmlInputElement>().ok())
            {
                input.set_checked(input.value() == value);
            }
        }
    }
}
