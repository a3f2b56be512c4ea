// Copyright 2026 the Playhead Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM control bar presenter.
//!
//! Writes [`DisplayState`] into the control bar elements, touching only the
//! widgets whose [`DisplayChanges`] channel is set.

use playhead_core::backend::Presenter;
use playhead_core::display::{DisplayChanges, DisplayState};
use web_sys::{HtmlButtonElement, HtmlElement, HtmlInputElement};

use crate::config::Labels;

/// Glyph shown on the transport and center buttons while paused.
pub const PLAY_GLYPH: &str = "\u{25B6}";
/// Glyph shown on the transport button while playing.
pub const PAUSE_GLYPH: &str = "\u{275A}\u{275A}";
/// Speaker glyph while audible.
pub const SPEAKER_GLYPH: &str = "\u{1F50A}";
/// Speaker glyph while muted or at zero volume.
pub const SPEAKER_MUTED_GLYPH: &str = "\u{1F507}";
/// Fullscreen button glyph when windowed.
pub const ENTER_FULLSCREEN_GLYPH: &str = "\u{26F6}";
/// Fullscreen button glyph when fullscreen.
pub const EXIT_FULLSCREEN_GLYPH: &str = "\u{2715}";

/// Elements the presenter writes to.
#[derive(Clone, Debug)]
pub struct ControlWidgets {
    /// Translucent layer holding the large play button; shown while paused.
    pub center_overlay: HtmlElement,
    /// Bottom bar faded in and out on hover.
    pub controls_bar: HtmlElement,
    /// Filled part of the seek bar.
    pub progress_fill: HtmlElement,
    /// Current position label.
    pub current_label: HtmlElement,
    /// Duration label.
    pub duration_label: HtmlElement,
    /// Play/pause transport button.
    pub play_button: HtmlButtonElement,
    /// Mute toggle.
    pub mute_button: HtmlButtonElement,
    /// Volume slider.
    pub volume: HtmlInputElement,
    /// Fullscreen toggle.
    pub fullscreen_button: HtmlButtonElement,
}

/// [`Presenter`] for the DOM control bar.
#[derive(Debug)]
pub struct DomControls {
    widgets: ControlWidgets,
    labels: Labels,
}

impl DomControls {
    /// Creates a presenter over `widgets`.
    #[must_use]
    pub fn new(widgets: ControlWidgets, labels: Labels) -> Self {
        Self { widgets, labels }
    }

    /// Returns the managed widgets.
    #[must_use]
    pub fn widgets(&self) -> &ControlWidgets {
        &self.widgets
    }
}

impl Presenter for DomControls {
    fn apply(&mut self, display: &DisplayState, changes: DisplayChanges) {
        let w = &self.widgets;

        if changes.contains(DisplayChanges::TIME) {
            w.current_label
                .set_text_content(Some(&display.current_time_label()));
        }
        if changes.contains(DisplayChanges::DURATION) {
            w.duration_label
                .set_text_content(Some(&display.duration_label()));
        }
        if changes.contains(DisplayChanges::PROGRESS) {
            let _ = w
                .progress_fill
                .style()
                .set_property("width", &width_css(display.progress_percent));
        }
        if changes.contains(DisplayChanges::PLAYBACK) {
            let (glyph, title) = transport_face(display, &self.labels);
            w.play_button.set_text_content(Some(glyph));
            w.play_button.set_title(title);
            let display_value = if display.shows_center_overlay() {
                "flex"
            } else {
                "none"
            };
            let _ = w
                .center_overlay
                .style()
                .set_property("display", display_value);
        }
        if changes.intersects(DisplayChanges::MUTE | DisplayChanges::VOLUME) {
            let (glyph, title) = speaker_face(display, &self.labels);
            w.mute_button.set_text_content(Some(glyph));
            w.mute_button.set_title(title);
            w.volume.set_value(&slider_value(display));
        }
        if changes.contains(DisplayChanges::CONTROLS) {
            let opacity = if display.controls_visible { "1" } else { "0" };
            let _ = w.controls_bar.style().set_property("opacity", opacity);
        }
        if changes.contains(DisplayChanges::FULLSCREEN) {
            let glyph = if display.fullscreen {
                EXIT_FULLSCREEN_GLYPH
            } else {
                ENTER_FULLSCREEN_GLYPH
            };
            w.fullscreen_button.set_text_content(Some(glyph));
            w.fullscreen_button.set_title(&self.labels.fullscreen);
        }
    }
}

/// CSS width for the progress fill.
fn width_css(percent: f64) -> String {
    let percent = if percent.is_finite() {
        percent.clamp(0.0, 100.0)
    } else {
        0.0
    };
    format!("{percent:.2}%")
}

/// Slider value string: `0` while muted, the volume otherwise.
fn slider_value(display: &DisplayState) -> String {
    format!("{}", display.volume_slider_value())
}

fn transport_face<'a>(display: &DisplayState, labels: &'a Labels) -> (&'static str, &'a str) {
    if display.is_playing {
        (PAUSE_GLYPH, labels.pause.as_str())
    } else {
        (PLAY_GLYPH, labels.play.as_str())
    }
}

fn speaker_face<'a>(display: &DisplayState, labels: &'a Labels) -> (&'static str, &'a str) {
    let glyph = if display.speaker_muted() {
        SPEAKER_MUTED_GLYPH
    } else {
        SPEAKER_GLYPH
    };
    let title = if display.is_muted {
        labels.unmute.as_str()
    } else {
        labels.mute.as_str()
    };
    (glyph, title)
}
