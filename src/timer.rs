use ambience_core::IntervalTimer;
use std::cell::RefCell;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct IntervalHandle {
    id: Option<i32>,
    tick: Closure<dyn FnMut()>,
}

/// `window.setInterval` for one sound button.
#[derive(Default)]
pub struct WindowInterval {
    // A fade cancels its own interval from inside the final tick, so the
    // closure must outlive that call. It is dropped on the next cancel.
    retired: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl IntervalTimer for WindowInterval {
    type Handle = IntervalHandle;

    fn start(&self, interval_ms: u32, tick: Box<dyn FnMut()>) -> IntervalHandle {
        let tick = Closure::wrap(tick);
        let id = web::window().and_then(|w| {
            w.set_interval_with_callback_and_timeout_and_arguments_0(
                tick.as_ref().unchecked_ref(),
                interval_ms as i32,
            )
            .map_err(|e| log::warn!("[timer] setInterval failed: {:?}", e))
            .ok()
        });
        IntervalHandle { id, tick }
    }

    fn cancel(&self, handle: IntervalHandle) {
        if let (Some(id), Some(w)) = (handle.id, web::window()) {
            w.clear_interval_with_handle(id);
        }
        self.retired.replace(Some(handle.tick));
    }
}
