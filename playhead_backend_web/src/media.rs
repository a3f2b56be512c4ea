// Copyright 2026 the Playhead Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `HTMLVideoElement` and Fullscreen API adapters.

use js_sys::Promise;
use playhead_core::backend::{FullscreenHost, MediaElement};
use playhead_core::error::PlayerError;
use playhead_core::event::PLAY_REJECTED_EVENT;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Event, HtmlVideoElement};

/// [`MediaElement`] over a DOM `<video>` element.
///
/// `play()` returns a promise in the browser. A synchronous failure is
/// reported as [`PlayerError::PlaybackRejected`]; a later rejection (e.g.
/// autoplay policy) is re-raised on the element as a
/// [`PLAY_REJECTED_EVENT`] DOM event so listeners can surface it as
/// [`MediaEvent::PlayRejected`](playhead_core::MediaEvent::PlayRejected).
#[derive(Clone, Debug)]
pub struct WebVideo {
    video: HtmlVideoElement,
}

impl WebVideo {
    /// Wraps `video`.
    #[must_use]
    pub fn new(video: HtmlVideoElement) -> Self {
        Self { video }
    }

    /// Returns the wrapped element.
    #[must_use]
    pub fn element(&self) -> &HtmlVideoElement {
        &self.video
    }
}

impl MediaElement for WebVideo {
    fn current_time(&self) -> f64 {
        self.video.current_time()
    }

    fn duration(&self) -> f64 {
        self.video.duration()
    }

    fn muted(&self) -> bool {
        self.video.muted()
    }

    fn volume(&self) -> f64 {
        self.video.volume()
    }

    fn paused(&self) -> bool {
        self.video.paused()
    }

    fn play(&mut self) -> Result<(), PlayerError> {
        let promise = self
            .video
            .play()
            .map_err(|err| PlayerError::PlaybackRejected(describe(&err)))?;
        watch_play_promise(self.video.clone(), promise);
        Ok(())
    }

    fn pause(&mut self) -> Result<(), PlayerError> {
        self.video
            .pause()
            .map_err(|err| PlayerError::PauseFailed(describe(&err)))
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.video.set_current_time(seconds);
    }

    fn set_muted(&mut self, muted: bool) {
        self.video.set_muted(muted);
    }

    fn set_volume(&mut self, level: f64) {
        self.video.set_volume(level);
    }

    fn request_fullscreen(&self) -> Result<(), PlayerError> {
        self.video
            .request_fullscreen()
            .map_err(|err| PlayerError::FullscreenDenied(describe(&err)))
    }
}

/// Re-raises a late `play()` rejection as a DOM event on `video`.
fn watch_play_promise(video: HtmlVideoElement, promise: Promise) {
    wasm_bindgen_futures::spawn_local(async move {
        let Err(reason) = JsFuture::from(promise).await else {
            return;
        };
        tracing::warn!(reason = %describe(&reason), "play() was rejected");
        match Event::new(PLAY_REJECTED_EVENT) {
            Ok(event) => {
                let _ = video.dispatch_event(&event);
            }
            Err(err) => tracing::debug!(error = %describe(&err), "could not raise rejection event"),
        }
    });
}

/// [`FullscreenHost`] over the document's Fullscreen API.
#[derive(Clone, Debug)]
pub struct DocumentFullscreen {
    document: Document,
}

impl DocumentFullscreen {
    /// Wraps `document`.
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl FullscreenHost for DocumentFullscreen {
    fn is_fullscreen(&self) -> bool {
        self.document.fullscreen_element().is_some()
    }

    fn exit_fullscreen(&self) -> Result<(), PlayerError> {
        self.document.exit_fullscreen();
        Ok(())
    }
}

/// Renders a thrown JS value for logs and error payloads.
pub(crate) fn describe(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}
