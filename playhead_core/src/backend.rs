// Copyright 2026 the Playhead Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend contract for platform integrations.
//!
//! Playhead keeps platform work in *backend* crates. Each backend provides:
//!
//! - **Media element**: Implements [`MediaElement`] over the platform's
//!   native playback surface (e.g. `HTMLVideoElement`). The view holds it
//!   exclusively between attach and detach.
//!
//! - **Fullscreen host**: Implements [`FullscreenHost`], the global
//!   "is anything fullscreen" query and the exit command.
//!
//! - **Event source**: Translates native element events into
//!   [`MediaEvent`](crate::event::MediaEvent) values. This is not abstracted
//!   by a trait because subscription and teardown differ fundamentally
//!   across platforms.
//!
//! - **Presenter**: Implements [`Presenter`] to write the changed parts of
//!   the [`DisplayState`] into native widgets.
//!
//! # Event loop pseudocode
//!
//! ```rust,ignore
//! fn on_native_event(event: MediaEvent) {
//!     // Reflect: fold the element's state into the display state
//!     view.handle_event(event);
//!
//!     // Present: apply only the changed fields to the widgets
//!     view.present(&mut presenter);
//! }
//!
//! fn on_gesture() {
//!     // Command: forward the gesture to the element, update optimistically
//!     view.toggle_play();
//!     view.present(&mut presenter);
//! }
//! ```

use crate::display::{DisplayChanges, DisplayState};
use crate::error::PlayerError;

/// A native playback surface the view reads from and commands.
///
/// Readers report the element's live values; `NaN` is a legal duration
/// before metadata has loaded.
pub trait MediaElement {
    /// Playback position in seconds.
    fn current_time(&self) -> f64;
    /// Media duration in seconds (`NaN` when unknown).
    fn duration(&self) -> f64;
    /// Whether audio output is muted.
    fn muted(&self) -> bool;
    /// Volume level, `0.0..=1.0`.
    fn volume(&self) -> f64;
    /// Whether the element is paused.
    fn paused(&self) -> bool;

    /// Requests playback. May still be refused later by the platform.
    fn play(&mut self) -> Result<(), PlayerError>;
    /// Pauses playback.
    fn pause(&mut self) -> Result<(), PlayerError>;
    /// Moves the playback position.
    fn set_current_time(&mut self, seconds: f64);
    /// Sets the muted flag.
    fn set_muted(&mut self, muted: bool);
    /// Sets the volume level.
    fn set_volume(&mut self, level: f64);
    /// Asks the platform to show this element fullscreen.
    fn request_fullscreen(&self) -> Result<(), PlayerError>;
}

/// Global fullscreen state of the page or window hosting the element.
pub trait FullscreenHost {
    /// Returns `true` if anything is currently fullscreen.
    fn is_fullscreen(&self) -> bool;
    /// Leaves fullscreen.
    fn exit_fullscreen(&self) -> Result<(), PlayerError>;
}

/// Writes display state into a platform-native widget tree.
///
/// DOM presenters and test doubles both implement this trait.
pub trait Presenter {
    /// Applies the fields named by `changes`, reading values from `display`.
    fn apply(&mut self, display: &DisplayState, changes: DisplayChanges);
}
