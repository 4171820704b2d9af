use crate::constants::CLOSE_KEY;
use crate::host::PanelView;
use std::cell::Cell;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelState {
    Open,
    Closed,
}

/// Open/closed state of the settings modal.
pub struct SettingsPanel<V> {
    view: V,
    state: Cell<PanelState>,
}

impl<V: PanelView> SettingsPanel<V> {
    /// Starts closed; the view is not touched until the first transition.
    pub fn new(view: V) -> Self {
        Self {
            view,
            state: Cell::new(PanelState::Closed),
        }
    }

    pub fn state(&self) -> PanelState {
        self.state.get()
    }

    pub fn is_open(&self) -> bool {
        self.state.get() == PanelState::Open
    }

    pub fn open(&self) {
        self.state.set(PanelState::Open);
        self.view.set_hidden(false);
    }

    pub fn close(&self) {
        self.state.set(PanelState::Closed);
        self.view.set_hidden(true);
    }

    /// Clicks inside the modal bubble up to it; only a click whose target is
    /// the backdrop itself closes the panel.
    pub fn backdrop_click(&self, on_backdrop: bool) {
        if on_backdrop {
            self.close();
        }
    }

    /// Returns whether the key was consumed.
    pub fn key_down(&self, key: &str) -> bool {
        if key == CLOSE_KEY {
            self.close();
            return true;
        }
        false
    }
}
