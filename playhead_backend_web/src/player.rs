// Copyright 2026 the Playhead Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mounting a [`PlayerView`] onto DOM elements.
//!
//! [`WebPlayer::mount`] attaches the `<video>` to a view, renders the initial
//! state, and subscribes to media, fullscreen and gesture events. Every
//! callback follows the same path: borrow the shared state, run one view
//! operation, present the resulting changes. Dropping the [`WebPlayer`]
//! removes the listeners and detaches the element.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::Rect;
use playhead_core::backend::Presenter as _;
use playhead_core::config::PlayerConfig;
use playhead_core::display::{DisplayChanges, DisplayState};
use playhead_core::event::MediaEvent;
use playhead_core::seek::fraction_within;
use playhead_core::view::PlayerView;
use wasm_bindgen::JsCast as _;
use web_sys::{
    Event, EventTarget, HtmlButtonElement, HtmlElement, HtmlVideoElement, MouseEvent, PointerEvent,
};

use crate::config::Labels;
use crate::error::MountError;
use crate::listeners::EventSubscriptions;
use crate::media::{DocumentFullscreen, WebVideo};
use crate::presenter::{ControlWidgets, DomControls};

/// The DOM elements a [`WebPlayer`] binds to.
#[derive(Clone, Debug)]
pub struct ControlsUi {
    /// Player container; hovering it shows the controls.
    pub container: HtmlElement,
    /// The playback surface. Clicking it toggles play.
    pub video: HtmlVideoElement,
    /// Large play button inside the center overlay.
    pub center_button: HtmlButtonElement,
    /// Seek bar track; click or drag to seek.
    pub progress_track: HtmlElement,
    /// Skip back button.
    pub skip_back: HtmlButtonElement,
    /// Skip forward button.
    pub skip_forward: HtmlButtonElement,
    /// Elements written by the presenter.
    pub widgets: ControlWidgets,
}

struct Shared {
    view: PlayerView<WebVideo>,
    presenter: DomControls,
    fullscreen: DocumentFullscreen,
}

type Action = fn(&mut Shared);

/// A mounted player. Dropping it tears the player down.
pub struct WebPlayer {
    shared: Rc<RefCell<Shared>>,
    subscriptions: EventSubscriptions,
}

impl WebPlayer {
    /// Mounts a player onto `ui`.
    pub fn mount(ui: ControlsUi, config: PlayerConfig, labels: Labels) -> Result<Self, MountError> {
        let document = ui
            .container
            .owner_document()
            .ok_or(MountError::MissingDocument)?;

        let mut view = PlayerView::new(config);
        view.attach(WebVideo::new(ui.video.clone()));
        view.take_changes();
        let mut presenter = DomControls::new(ui.widgets.clone(), labels);
        presenter.apply(view.display(), DisplayChanges::ALL);

        let shared = Rc::new(RefCell::new(Shared {
            view,
            presenter,
            fullscreen: DocumentFullscreen::new(document.clone()),
        }));
        let mut subs = EventSubscriptions::new();

        // Media element events.
        for event in MediaEvent::ELEMENT_EVENTS {
            let Some(kind) = event.dom_type() else {
                continue;
            };
            let s = Rc::clone(&shared);
            subs.listen(ui.video.as_ref(), kind, move |_| {
                dispatch(&s, |sh| sh.view.handle_event(event));
            })?;
        }
        let s = Rc::clone(&shared);
        let doc = document.clone();
        subs.listen(document.as_ref(), "fullscreenchange", move |_| {
            let fullscreen = doc.fullscreen_element().is_some();
            dispatch(&s, |sh| {
                sh.view.handle_event(MediaEvent::FullscreenChanged(fullscreen));
            });
        })?;

        // Gestures.
        let toggle_play: Action = |sh| sh.view.toggle_play();
        let gestures: [(&EventTarget, &'static str, Action); 9] = [
            (ui.center_button.as_ref(), "click", toggle_play),
            (ui.video.as_ref(), "click", toggle_play),
            (ui.widgets.play_button.as_ref(), "click", toggle_play),
            (ui.skip_back.as_ref(), "click", |sh| sh.view.skip_back()),
            (ui.skip_forward.as_ref(), "click", |sh| sh.view.skip_forward()),
            (ui.widgets.mute_button.as_ref(), "click", |sh| sh.view.toggle_mute()),
            (ui.widgets.fullscreen_button.as_ref(), "click", |sh| {
                sh.view.toggle_fullscreen(&sh.fullscreen);
            }),
            (ui.container.as_ref(), "pointerenter", |sh| sh.view.pointer_enter()),
            (ui.container.as_ref(), "pointerleave", |sh| sh.view.pointer_leave()),
        ];
        for (target, kind, action) in gestures {
            let s = Rc::clone(&shared);
            subs.listen(target, kind, move |_| dispatch(&s, action))?;
        }

        let s = Rc::clone(&shared);
        let slider = ui.widgets.volume.clone();
        subs.listen(ui.widgets.volume.as_ref(), "input", move |_| {
            let level = slider.value_as_number();
            dispatch(&s, |sh| sh.view.set_volume(level));
        })?;

        bind_seek_bar(&mut subs, &shared, &ui.progress_track)?;

        tracing::info!(listeners = subs.len(), "player mounted");
        Ok(Self {
            shared,
            subscriptions: subs,
        })
    }

    /// Returns a snapshot of the display state.
    #[must_use]
    pub fn display(&self) -> Option<DisplayState> {
        self.shared
            .try_borrow()
            .ok()
            .map(|shared| shared.view.display().clone())
    }

    /// Returns the number of installed listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Tears the player down. Equivalent to dropping it.
    pub fn unmount(self) {}
}

impl Drop for WebPlayer {
    fn drop(&mut self) {
        self.subscriptions.clear();
        if let Ok(mut shared) = self.shared.try_borrow_mut() {
            shared.view.detach();
        }
        tracing::info!("player unmounted");
    }
}

impl core::fmt::Debug for WebPlayer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WebPlayer")
            .field("subscriptions", &self.subscriptions)
            .field("display", &self.display())
            .finish()
    }
}

/// Click or drag on the track seeks. The pointer is captured on press so a
/// drag keeps seeking after it leaves the bar.
fn bind_seek_bar(
    subs: &mut EventSubscriptions,
    shared: &Rc<RefCell<Shared>>,
    track: &HtmlElement,
) -> Result<(), MountError> {
    let s = Rc::clone(shared);
    let t = track.clone();
    subs.listen(track.as_ref(), "pointerdown", move |event| {
        if let Some(pointer) = event.dyn_ref::<PointerEvent>() {
            let _ = t.set_pointer_capture(pointer.pointer_id());
        }
        if let Some(fraction) = pointer_fraction(&t, &event) {
            dispatch(&s, |sh| sh.view.begin_scrub(fraction));
        }
    })?;

    let s = Rc::clone(shared);
    let t = track.clone();
    subs.listen(track.as_ref(), "pointermove", move |event| {
        let scrubbing = s.try_borrow().is_ok_and(|sh| sh.view.is_scrubbing());
        if !scrubbing {
            return;
        }
        if let Some(fraction) = pointer_fraction(&t, &event) {
            dispatch(&s, |sh| sh.view.scrub_to(fraction));
        }
    })?;

    for kind in ["pointerup", "pointercancel"] {
        let s = Rc::clone(shared);
        subs.listen(track.as_ref(), kind, move |_| {
            dispatch(&s, |sh| sh.view.end_scrub());
        })?;
    }
    Ok(())
}

/// Pointer position as a fraction of the track's rendered width.
fn pointer_fraction(track: &HtmlElement, event: &Event) -> Option<f64> {
    let mouse = event.dyn_ref::<MouseEvent>()?;
    let rect = track.get_bounding_client_rect();
    let bounds = Rect::new(rect.left(), rect.top(), rect.right(), rect.bottom());
    fraction_within(bounds, f64::from(mouse.client_x()))
}

/// Runs `action` against the shared state and presents the result.
fn dispatch(shared: &Rc<RefCell<Shared>>, action: impl FnOnce(&mut Shared)) {
    let Ok(mut guard) = shared.try_borrow_mut() else {
        tracing::warn!("re-entrant player event dropped");
        return;
    };
    let sh = &mut *guard;
    action(sh);
    sh.view.present(&mut sh.presenter);
}
