use crate::constants::{hidden_attr_value, MODAL_HIDDEN_ATTR};
use ambience_core::PanelView;
use web_sys as web;

/// The settings modal, shown and hidden through `aria-hidden`.
pub struct ModalOverlay {
    el: web::Element,
}

impl ModalOverlay {
    pub fn new(el: web::Element) -> Self {
        Self { el }
    }
}

impl PanelView for ModalOverlay {
    fn set_hidden(&self, hidden: bool) {
        _ = self
            .el
            .set_attribute(MODAL_HIDDEN_ATTR, hidden_attr_value(hidden));
    }
}
