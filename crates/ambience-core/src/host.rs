//! Seams between the controllers and the environment they run in.
//!
//! The browser frontend implements these over `web-sys`; tests implement them
//! with recording fakes. Everything is single-threaded, so none of the traits
//! require `Send`.

use crate::display::DisplayMode;
use crate::error::{PlaybackError, StoreError};
use crate::preset::SoundPreset;
use std::future::Future;
use std::pin::Pin;

/// Pending result of a playback start request.
pub type PlayRequest = Pin<Box<dyn Future<Output = Result<(), PlaybackError>>>>;

/// A playable audio loop with a volume control.
///
/// Implementations are cheap handles; clones refer to the same element.
pub trait AudioSink: Clone + 'static {
    fn volume(&self) -> f64;
    fn set_volume(&self, volume: f64);
    fn is_paused(&self) -> bool;
    /// Issue a playback request. The request must reach the host before this
    /// returns; the returned future only reports how it was answered.
    fn play(&self) -> PlayRequest;
    fn pause(&self) -> Result<(), PlaybackError>;
}

/// Presentation of a sound button.
pub trait ButtonView: 'static {
    fn show_preset(&self, preset: &SoundPreset);
}

/// A host repeating timer.
pub trait IntervalTimer: 'static {
    type Handle: 'static;
    /// Call `tick` every `interval_ms` until the returned handle is cancelled.
    fn start(&self, interval_ms: u32, tick: Box<dyn FnMut()>) -> Self::Handle;
    fn cancel(&self, handle: Self::Handle);
}

/// Key/value storage for the display preference.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Page-wide presentation of the display mode.
pub trait ModeView {
    /// Leave exactly the class for `mode` on the page root.
    fn show_mode(&self, mode: DisplayMode);
    /// Check the radio option whose value is `value`, uncheck the rest.
    fn check_option(&self, value: &str);
}

pub trait PanelView {
    fn set_hidden(&self, hidden: bool);
}
