use ambience_core::{AudioSink, PlayRequest, PlaybackError};
use std::future::ready;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// An `<audio>` loop driven by a sound button.
#[derive(Clone)]
pub struct MediaSink {
    el: web::HtmlAudioElement,
}

impl MediaSink {
    pub fn new(el: web::HtmlAudioElement) -> Self {
        Self { el }
    }
}

impl AudioSink for MediaSink {
    fn volume(&self) -> f64 {
        self.el.volume()
    }

    fn set_volume(&self, volume: f64) {
        // the element throws outside [0, 1]
        self.el.set_volume(volume.clamp(0.0, 1.0));
    }

    fn is_paused(&self) -> bool {
        self.el.paused()
    }

    fn play(&self) -> PlayRequest {
        match self.el.play() {
            Ok(promise) => {
                let pending = JsFuture::from(promise);
                Box::pin(async move {
                    pending
                        .await
                        .map(|_| ())
                        .map_err(|e| PlaybackError::Rejected(format!("{:?}", e)))
                })
            }
            Err(e) => Box::pin(ready(Err(PlaybackError::Rejected(format!("{:?}", e))))),
        }
    }

    fn pause(&self) -> Result<(), PlaybackError> {
        self.el
            .pause()
            .map_err(|e| PlaybackError::Pause(format!("{:?}", e)))
    }
}
