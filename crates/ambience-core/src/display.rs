//! Display-mode preference: whether sound buttons show icons, text or both.
//!
//! The preference is a single string in the host's key/value store. Values
//! this build does not recognise are treated exactly like a missing value.

use crate::constants::SETTINGS_KEY;
use crate::error::UnknownDisplayMode;
use crate::host::{ModeView, PreferenceStore};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DisplayMode {
    #[default]
    Both,
    Icons,
    Text,
}

impl DisplayMode {
    pub const ALL: [DisplayMode; 3] = [DisplayMode::Both, DisplayMode::Icons, DisplayMode::Text];

    pub fn as_str(self) -> &'static str {
        match self {
            DisplayMode::Both => "both",
            DisplayMode::Icons => "icons",
            DisplayMode::Text => "text",
        }
    }

    /// Class placed on the page root while this mode is active.
    pub fn root_class(self) -> &'static str {
        match self {
            DisplayMode::Both => "mode-both",
            DisplayMode::Icons => "mode-icons",
            DisplayMode::Text => "mode-text",
        }
    }

    /// Parse a stored or submitted value, falling back to the default.
    pub fn parse_or_default(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayMode {
    type Err = UnknownDisplayMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "both" => Ok(DisplayMode::Both),
            "icons" => Ok(DisplayMode::Icons),
            "text" => Ok(DisplayMode::Text),
            other => Err(UnknownDisplayMode(other.to_string())),
        }
    }
}

/// Sole owner of the persisted preference and the page-wide mode classes.
pub struct DisplayModeController<S, V> {
    store: S,
    view: V,
    key: &'static str,
}

impl<S: PreferenceStore, V: ModeView> DisplayModeController<S, V> {
    pub fn new(store: S, view: V) -> Self {
        Self {
            store,
            view,
            key: SETTINGS_KEY,
        }
    }

    pub fn get_mode(&self) -> DisplayMode {
        match self.store.load(self.key) {
            Some(raw) => raw.parse::<DisplayMode>().unwrap_or_else(|e| {
                log::debug!("{}, using {}", e, DisplayMode::default());
                DisplayMode::default()
            }),
            None => DisplayMode::default(),
        }
    }

    /// Persist `mode` and show it. The mode is applied even when the store
    /// refuses the write.
    pub fn set_mode(&self, mode: DisplayMode) {
        if let Err(e) = self.store.save(self.key, mode.as_str()) {
            log::debug!("display mode not persisted: {}", e);
        }
        self.apply_mode(mode);
    }

    pub fn apply_mode(&self, mode: DisplayMode) {
        self.view.show_mode(mode);
        self.view.check_option(mode.as_str());
    }

    /// Apply whatever was persisted, at startup.
    pub fn restore(&self) -> DisplayMode {
        let mode = self.get_mode();
        self.apply_mode(mode);
        mode
    }

    /// Handle a value picked in the settings form.
    pub fn select(&self, value: &str) -> DisplayMode {
        let mode = DisplayMode::parse_or_default(value);
        self.set_mode(mode);
        mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_values_only() {
        assert_eq!("icons".parse::<DisplayMode>(), Ok(DisplayMode::Icons));
        assert_eq!("text".parse::<DisplayMode>(), Ok(DisplayMode::Text));
        assert_eq!("both".parse::<DisplayMode>(), Ok(DisplayMode::Both));
        assert_eq!(
            "Icons".parse::<DisplayMode>(),
            Err(UnknownDisplayMode("Icons".to_string()))
        );
        assert_eq!(DisplayMode::parse_or_default("xyz"), DisplayMode::Both);
        assert_eq!(DisplayMode::parse_or_default(""), DisplayMode::Both);
    }

    #[test]
    fn unknown_mode_error_names_the_value() {
        let err = "xyz".parse::<DisplayMode>().unwrap_err();
        assert_eq!(err, UnknownDisplayMode("xyz".to_string()));
        assert_eq!(err.to_string(), "unknown display mode `xyz`");
    }

    #[test]
    fn root_classes_are_distinct() {
        let classes: Vec<_> = DisplayMode::ALL.iter().map(|m| m.root_class()).collect();
        assert_eq!(classes, ["mode-both", "mode-icons", "mode-text"]);
    }

    #[test]
    fn display_matches_stored_value() {
        for m in DisplayMode::ALL {
            assert_eq!(m.to_string(), m.as_str());
            assert_eq!(m.as_str().parse::<DisplayMode>(), Ok(m));
        }
    }
}
