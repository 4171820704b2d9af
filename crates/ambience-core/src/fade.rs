use crate::constants::{FADE_DURATION_MS, FADE_STEPS, MIN_TICK_MS, SILENCE_EPSILON};

/// Timing of a stepped volume fade.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FadeParams {
    pub duration_ms: u32,
    pub steps: u32,
    pub min_tick_ms: u32,
    pub silence_epsilon: f64,
}

impl Default for FadeParams {
    fn default() -> Self {
        Self {
            duration_ms: FADE_DURATION_MS,
            steps: FADE_STEPS,
            min_tick_ms: MIN_TICK_MS,
            silence_epsilon: SILENCE_EPSILON,
        }
    }
}

impl FadeParams {
    /// Timer interval for a fade lasting `duration_ms`, never below the
    /// minimum tick the host can honour. Fractions are truncated, as
    /// `setInterval` does.
    pub fn interval_ms(&self, duration_ms: u32) -> u32 {
        let per_step = duration_ms as f64 / self.steps.max(1) as f64;
        per_step.max(self.min_tick_ms as f64).floor() as u32
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FadeStep {
    /// Intermediate volume to write.
    Ramp(f64),
    /// Final step: volume snapped to the target. `silent` asks the caller to
    /// pause playback.
    Done { volume: f64, silent: bool },
}

/// Linear interpolation from a start volume to a clamped target in a fixed
/// number of steps.
#[derive(Clone, Debug)]
pub struct Fade {
    start: f64,
    target: f64,
    steps: u32,
    step: u32,
    silence_epsilon: f64,
}

impl Fade {
    pub fn new(start: f64, target: f64, params: &FadeParams) -> Self {
        // NaN reported by a media element counts as silence
        let start = if start.is_finite() {
            start.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let target = if target.is_finite() {
            target.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self {
            start,
            target,
            steps: params.steps.max(1),
            step: 0,
            silence_epsilon: params.silence_epsilon,
        }
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn steps_taken(&self) -> u32 {
        self.step
    }

    pub fn is_finished(&self) -> bool {
        self.step >= self.steps
    }

    pub fn advance(&mut self) -> FadeStep {
        self.step = (self.step + 1).min(self.steps);
        if self.is_finished() {
            return FadeStep::Done {
                volume: self.target,
                silent: self.target.abs() < self.silence_epsilon,
            };
        }
        let t = self.step as f64 / self.steps as f64;
        FadeStep::Ramp(self.start + (self.target - self.start) * t)
    }
}
