// Shared tuning constants used by the core controllers and the web frontend.

// Volume fades
pub const FADE_DURATION_MS: u32 = 300; // default crossfade length
pub const FADE_STEPS: u32 = 30; // discrete volume writes per fade
pub const MIN_TICK_MS: u32 = 8; // smallest timer interval we ask the host for
pub const SILENCE_EPSILON: f64 = 0.001; // fades ending below this pause playback

// Persisted display preference
pub const SETTINGS_KEY: &str = "sound-ui-mode";

// Keyboard
pub const CLOSE_KEY: &str = "Escape";
