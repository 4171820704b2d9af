/// DOM contract of the page markup.
///
/// The frontend never creates these elements; it only looks them up by id or
/// selector. Kept free of `web-sys` so host tests can include it directly.
// Settings modal
pub const SETTINGS_BUTTON_ID: &str = "settingsBtn";
pub const SETTINGS_MODAL_ID: &str = "settingsModal";
pub const CLOSE_MODAL_ID: &str = "closeModal";
pub const DISPLAY_FORM_ID: &str = "displayForm";
pub const MODE_RADIO_NAME: &str = "mode";
pub const MODAL_HIDDEN_ATTR: &str = "aria-hidden";

// Inside each sound button
pub const BUTTON_ICON_SELECTOR: &str = "img";
pub const BUTTON_LABEL_SELECTOR: &str = ".label";

// Inline style properties driven by the presets
pub const STYLE_BACKGROUND: &str = "background-color";
pub const STYLE_TRANSFORM: &str = "transform";
pub const STYLE_FILTER: &str = "filter";

/// A sound button and the audio element it controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SoundSpec {
    pub name: &'static str,
    pub button_id: &'static str,
    pub audio_id: &'static str,
}

const fn sound(name: &'static str, button_id: &'static str, audio_id: &'static str) -> SoundSpec {
    SoundSpec {
        name,
        button_id,
        audio_id,
    }
}

pub const SOUNDS: [SoundSpec; 7] = [
    sound("white noise", "whiteBtn", "whiteAudio"),
    sound("rain", "rainBtn", "rainAudio"),
    sound("birds", "birdsBtn", "birdsAudio"),
    sound("cat", "catBtn", "catAudio"),
    sound("violin", "violinBtn", "violinAudio"),
    sound("fire", "fireBtn", "fireAudio"),
    sound("dog", "dogBtn", "dogAudio"),
];

/// Every option of the display-mode radio group.
pub fn mode_radio_selector() -> String {
    format!("input[name=\"{}\"]", MODE_RADIO_NAME)
}

/// The currently selected display-mode option.
pub fn checked_mode_selector() -> String {
    format!("{}:checked", mode_radio_selector())
}

#[inline]
pub fn hidden_attr_value(hidden: bool) -> &'static str {
    if hidden {
        "true"
    } else {
        "false"
    }
}
