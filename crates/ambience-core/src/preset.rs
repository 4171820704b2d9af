//! The fixed table of states every sound button cycles through.

/// One step of a sound button: how loud it plays and how its icon looks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SoundPreset {
    pub volume: f64,
    pub scale: f64,
    pub brightness: f64,
    pub color: &'static str,
}

impl SoundPreset {
    /// CSS `transform` value for the button icon.
    pub fn transform_css(&self) -> String {
        format!("scale({})", self.scale)
    }

    /// CSS `filter` value for the button icon.
    pub fn filter_css(&self) -> String {
        format!("brightness({})", self.brightness)
    }

    #[inline]
    pub fn is_audible(&self) -> bool {
        self.volume > 0.0
    }
}

// Volumes stay inside [0, 1]; the loudest step is capped rather than boosted.
pub static PRESETS: [SoundPreset; 5] = [
    SoundPreset {
        volume: 0.0,
        scale: 0.5,
        brightness: 1.0,
        color: "#013647",
    },
    SoundPreset {
        volume: 0.2,
        scale: 0.65,
        brightness: 1.0,
        color: "#1e657d",
    },
    SoundPreset {
        volume: 0.5,
        scale: 0.85,
        brightness: 1.0,
        color: "#3b87a1",
    },
    SoundPreset {
        volume: 0.9,
        scale: 1.15,
        brightness: 1.0,
        color: "#6fb9d1",
    },
    SoundPreset {
        volume: 1.0,
        scale: 1.45,
        brightness: 1.0,
        color: "#9fdff5",
    },
];

/// Index of the preset following `index`, wrapping back to the silent one.
#[inline]
pub fn next_preset_index(index: usize) -> usize {
    (index + 1) % PRESETS.len()
}
