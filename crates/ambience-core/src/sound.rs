use crate::fade::{Fade, FadeParams, FadeStep};
use crate::host::{AudioSink, ButtonView, IntervalTimer, PlayRequest};
use crate::preset::{next_preset_index, SoundPreset, PRESETS};
use std::cell::RefCell;
use std::future::Future;
use std::rc::{Rc, Weak};

struct ActiveFade<H> {
    generation: u64,
    fade: Fade,
    handle: H,
}

/// Mutable per-button record. `generation` increases with every fade so a
/// tick from a superseded timer can recognise itself and do nothing.
struct SoundButtonState<H> {
    index: usize,
    unlocked: bool,
    active_fade: Option<ActiveFade<H>>,
    generation: u64,
}

struct Inner<A, V, T: IntervalTimer> {
    name: String,
    audio: A,
    view: V,
    timer: T,
    params: FadeParams,
    state: RefCell<SoundButtonState<T::Handle>>,
}

enum Pending {
    Unlock(PlayRequest),
    Resume(PlayRequest),
    Idle,
}

/// One sound button: cycles the presets and crossfades its audio loop.
///
/// Cloning yields another handle to the same button.
pub struct SoundButtonController<A, V, T: IntervalTimer> {
    inner: Rc<Inner<A, V, T>>,
}

impl<A, V, T: IntervalTimer> Clone for SoundButtonController<A, V, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<A: AudioSink, V: ButtonView, T: IntervalTimer> SoundButtonController<A, V, T> {
    pub fn new(name: impl Into<String>, audio: A, view: V, timer: T) -> Self {
        Self::with_params(name, audio, view, timer, FadeParams::default())
    }

    /// Build the controller and force the button into its silent first
    /// preset, whatever state the audio element was left in.
    pub fn with_params(
        name: impl Into<String>,
        audio: A,
        view: V,
        timer: T,
        params: FadeParams,
    ) -> Self {
        let inner = Rc::new(Inner {
            name: name.into(),
            audio,
            view,
            timer,
            params,
            state: RefCell::new(SoundButtonState {
                index: 0,
                unlocked: false,
                active_fade: None,
                generation: 0,
            }),
        });
        inner.view.show_preset(&PRESETS[0]);
        inner.audio.set_volume(0.0);
        if let Err(e) = inner.audio.pause() {
            log::debug!("[{}] initial pause ignored: {}", inner.name, e);
        }
        Self { inner }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn index(&self) -> usize {
        self.inner.state.borrow().index
    }

    pub fn preset(&self) -> &'static SoundPreset {
        &PRESETS[self.index()]
    }

    pub fn is_unlocked(&self) -> bool {
        self.inner.state.borrow().unlocked
    }

    pub fn is_fading(&self) -> bool {
        self.inner.state.borrow().active_fade.is_some()
    }

    /// Advance to the next preset.
    ///
    /// Styling and any playback request happen before this returns, so it
    /// must be called straight from the user-gesture handler. The returned
    /// future settles the playback request; on the first activation it also
    /// marks the button unlocked and starts the fade.
    pub fn activate(&self) -> impl Future<Output = ()> + 'static {
        let inner = self.inner.clone();
        let (preset, unlocked) = {
            let mut st = inner.state.borrow_mut();
            st.index = next_preset_index(st.index);
            (&PRESETS[st.index], st.unlocked)
        };
        inner.view.show_preset(preset);
        let duration_ms = inner.params.duration_ms;

        let pending = if !unlocked {
            inner.audio.set_volume(0.0);
            Pending::Unlock(inner.audio.play())
        } else if inner.audio.is_paused() && preset.is_audible() {
            let resume = inner.audio.play();
            Inner::fade_to(&inner, preset.volume, duration_ms);
            Pending::Resume(resume)
        } else {
            Inner::fade_to(&inner, preset.volume, duration_ms);
            Pending::Idle
        };

        async move {
            match pending {
                Pending::Unlock(request) => {
                    if let Err(e) = request.await {
                        log::debug!("[{}] unlock failed, will not retry: {}", inner.name, e);
                    }
                    inner.state.borrow_mut().unlocked = true;
                    Inner::fade_to(&inner, preset.volume, duration_ms);
                }
                Pending::Resume(request) => {
                    if let Err(e) = request.await {
                        log::debug!("[{}] resume ignored: {}", inner.name, e);
                    }
                }
                Pending::Idle => {}
            }
        }
    }

    /// Fade the volume to `target`, replacing any fade still in flight.
    pub fn fade_to(&self, target: f64, duration_ms: u32) {
        Inner::fade_to(&self.inner, target, duration_ms);
    }
}

impl<A: AudioSink, V: ButtonView, T: IntervalTimer> Inner<A, V, T> {
    fn fade_to(this: &Rc<Self>, target: f64, duration_ms: u32) {
        let (previous, generation) = {
            let mut st = this.state.borrow_mut();
            st.generation += 1;
            (st.active_fade.take(), st.generation)
        };
        if let Some(previous) = previous {
            this.timer.cancel(previous.handle);
        }

        let fade = Fade::new(this.audio.volume(), target, &this.params);
        let interval_ms = this.params.interval_ms(duration_ms);
        let weak: Weak<Self> = Rc::downgrade(this);
        let handle = this.timer.start(
            interval_ms,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.tick(generation);
                }
            }),
        );
        this.state.borrow_mut().active_fade = Some(ActiveFade {
            generation,
            fade,
            handle,
        });
    }

    fn tick(&self, generation: u64) {
        let step = {
            let mut st = self.state.borrow_mut();
            match st.active_fade.as_mut() {
                Some(active) if active.generation == generation => active.fade.advance(),
                _ => return,
            }
        };
        match step {
            FadeStep::Ramp(volume) => self.audio.set_volume(volume),
            FadeStep::Done { volume, silent } => {
                self.audio.set_volume(volume);
                let finished = self.state.borrow_mut().active_fade.take();
                if let Some(finished) = finished {
                    self.timer.cancel(finished.handle);
                }
                if silent {
                    if let Err(e) = self.audio.pause() {
                        log::debug!("[{}] pause after fade ignored: {}", self.name, e);
                    }
                }
            }
        }
    }
}
