// Recording fakes for the host traits. Each fake is a cheap Rc handle so a
// test can keep one clone and hand the other to a controller.

#![allow(dead_code)]

use ambience_core::*;
use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap};
use std::future::ready;
use std::rc::Rc;

#[derive(Default)]
pub struct AudioLog {
    pub volume: Cell<f64>,
    pub paused: Cell<bool>,
    pub writes: RefCell<Vec<f64>>,
    pub play_calls: Cell<u32>,
    pub pause_calls: Cell<u32>,
    pub reject_play: Cell<bool>,
    pub fail_pause: Cell<bool>,
}

#[derive(Clone, Default)]
pub struct FakeAudio(pub Rc<AudioLog>);

impl FakeAudio {
    /// A loop left playing at full volume, as a page might hand it over.
    pub fn playing() -> Self {
        let a = FakeAudio::default();
        a.0.volume.set(1.0);
        a.0.paused.set(false);
        a
    }

    pub fn writes(&self) -> Vec<f64> {
        self.0.writes.borrow().clone()
    }

    pub fn write_count(&self) -> usize {
        self.0.writes.borrow().len()
    }
}

impl AudioSink for FakeAudio {
    fn volume(&self) -> f64 {
        self.0.volume.get()
    }

    fn set_volume(&self, volume: f64) {
        // media elements throw outside [0, 1]
        assert!((0.0..=1.0).contains(&volume), "volume {volume} out of range");
        self.0.volume.set(volume);
        self.0.writes.borrow_mut().push(volume);
    }

    fn is_paused(&self) -> bool {
        self.0.paused.get()
    }

    fn play(&self) -> PlayRequest {
        self.0.play_calls.set(self.0.play_calls.get() + 1);
        if self.0.reject_play.get() {
            return Box::pin(ready(Err(PlaybackError::Rejected(
                "NotAllowedError".to_string(),
            ))));
        }
        self.0.paused.set(false);
        Box::pin(ready(Ok(())))
    }

    fn pause(&self) -> Result<(), PlaybackError> {
        self.0.pause_calls.set(self.0.pause_calls.get() + 1);
        if self.0.fail_pause.get() {
            return Err(PlaybackError::Pause("InvalidStateError".to_string()));
        }
        self.0.paused.set(true);
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct FakeButton(pub Rc<RefCell<Vec<SoundPreset>>>);

impl FakeButton {
    pub fn last(&self) -> Option<SoundPreset> {
        self.0.borrow().last().copied()
    }
}

impl ButtonView for FakeButton {
    fn show_preset(&self, preset: &SoundPreset) {
        self.0.borrow_mut().push(*preset);
    }
}

type Tick = Rc<RefCell<Box<dyn FnMut()>>>;

#[derive(Default)]
pub struct TimerSlots {
    next_id: usize,
    active: Vec<(usize, u32, Tick)>,
    retired: Vec<(usize, Tick)>,
}

/// Interval timer driven by hand. Cancelled callbacks are kept so a test can
/// deliver a stale tick on purpose.
#[derive(Clone, Default)]
pub struct ManualTimer(pub Rc<RefCell<TimerSlots>>);

impl ManualTimer {
    pub fn active_ids(&self) -> Vec<usize> {
        self.0.borrow().active.iter().map(|(id, _, _)| *id).collect()
    }

    pub fn active_count(&self) -> usize {
        self.0.borrow().active.len()
    }

    pub fn interval_of(&self, id: usize) -> Option<u32> {
        self.0
            .borrow()
            .active
            .iter()
            .find(|(i, _, _)| *i == id)
            .map(|(_, ms, _)| *ms)
    }

    pub fn is_cancelled(&self, id: usize) -> bool {
        self.0.borrow().retired.iter().any(|(i, _)| *i == id)
    }

    /// Invoke a callback by id, active or cancelled.
    pub fn fire(&self, id: usize) {
        let tick = {
            let slots = self.0.borrow();
            let active = slots
                .active
                .iter()
                .find(|(i, _, _)| *i == id)
                .map(|(_, _, t)| t.clone());
            let found = active.or_else(|| {
                slots
                    .retired
                    .iter()
                    .find(|(i, _)| *i == id)
                    .map(|(_, t)| t.clone())
            });
            found
        };
        if let Some(tick) = tick {
            let mut f = tick.borrow_mut();
            (*f)();
        }
    }

    pub fn fire_active(&self, times: usize) {
        for _ in 0..times {
            let Some(id) = self.active_ids().first().copied() else {
                return;
            };
            self.fire(id);
        }
    }

    /// Fire ticks until no interval is left; returns how many were fired.
    pub fn run_until_idle(&self) -> usize {
        let mut fired = 0;
        while let Some(id) = self.active_ids().first().copied() {
            self.fire(id);
            fired += 1;
            assert!(fired < 10_000, "interval never cancelled");
        }
        fired
    }
}

impl IntervalTimer for ManualTimer {
    type Handle = usize;

    fn start(&self, interval_ms: u32, tick: Box<dyn FnMut()>) -> usize {
        let mut slots = self.0.borrow_mut();
        slots.next_id += 1;
        let id = slots.next_id;
        slots.active.push((id, interval_ms, Rc::new(RefCell::new(tick))));
        id
    }

    fn cancel(&self, handle: usize) {
        let mut slots = self.0.borrow_mut();
        if let Some(pos) = slots.active.iter().position(|(i, _, _)| *i == handle) {
            let (id, _, tick) = slots.active.remove(pos);
            slots.retired.push((id, tick));
        }
    }
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    pub values: Rc<RefCell<HashMap<String, String>>>,
    pub refuse_writes: Rc<Cell<bool>>,
}

impl MemoryStore {
    pub fn with(key: &str, value: &str) -> Self {
        let s = MemoryStore::default();
        s.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        s
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.get(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.refuse_writes.get() {
            return Err(StoreError::Write {
                key: key.to_string(),
                reason: "QuotaExceededError".to_string(),
            });
        }
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub const RADIO_VALUES: [&str; 3] = ["both", "icons", "text"];

#[derive(Clone, Default)]
pub struct FakePage {
    pub root_classes: Rc<RefCell<BTreeSet<&'static str>>>,
    pub checked: Rc<RefCell<Vec<&'static str>>>,
}

impl FakePage {
    pub fn classes(&self) -> Vec<&'static str> {
        self.root_classes.borrow().iter().copied().collect()
    }

    pub fn checked(&self) -> Vec<&'static str> {
        self.checked.borrow().clone()
    }
}

impl ModeView for FakePage {
    fn show_mode(&self, mode: DisplayMode) {
        let mut classes = self.root_classes.borrow_mut();
        for m in DisplayMode::ALL {
            classes.remove(m.root_class());
        }
        classes.insert(mode.root_class());
    }

    fn check_option(&self, value: &str) {
        *self.checked.borrow_mut() = RADIO_VALUES.iter().copied().filter(|v| *v == value).collect();
    }
}

#[derive(Clone, Default)]
pub struct FakeModal(pub Rc<RefCell<Vec<bool>>>);

impl FakeModal {
    pub fn aria_hidden(&self) -> Option<bool> {
        self.0.borrow().last().copied()
    }
}

impl PanelView for FakeModal {
    fn set_hidden(&self, hidden: bool) {
        self.0.borrow_mut().push(hidden);
    }
}
