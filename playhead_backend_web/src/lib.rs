// Copyright 2026 the Playhead Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for playhead.
//!
//! This crate provides integration with browser APIs:
//!
//! - [`WebVideo`]: `HTMLVideoElement` as a [`MediaElement`]
//! - [`DocumentFullscreen`]: the Fullscreen API as a [`FullscreenHost`]
//! - [`DomControls`]: control bar [`Presenter`]
//! - [`EventSubscriptions`]: listeners removed on drop
//! - [`WebPlayer`]: all of the above mounted onto a set of DOM elements
//! - [`console::init`]: `tracing` and panics routed to the browser console
//!
//! [`MediaElement`]: playhead_core::backend::MediaElement
//! [`FullscreenHost`]: playhead_core::backend::FullscreenHost

mod config;
pub mod console;
mod error;
mod listeners;
mod media;
mod player;
mod presenter;

pub use config::{
    Labels, MediaSource, PageConfig, parse_log_level, parse_playback_sync, parse_skip_seconds,
};
pub use error::MountError;
pub use listeners::EventSubscriptions;
pub use media::{DocumentFullscreen, WebVideo};
pub use player::{ControlsUi, WebPlayer};
pub use playhead_core::backend::Presenter;
pub use presenter::{
    ControlWidgets, DomControls, ENTER_FULLSCREEN_GLYPH, EXIT_FULLSCREEN_GLYPH, PAUSE_GLYPH,
    PLAY_GLYPH, SPEAKER_GLYPH, SPEAKER_MUTED_GLYPH,
};

/// Returns the global `window`.
pub fn window() -> Result<web_sys::Window, MountError> {
    web_sys::window().ok_or(MountError::MissingWindow)
}

/// Returns the global `document`.
pub fn document() -> Result<web_sys::Document, MountError> {
    window()?.document().ok_or(MountError::MissingDocument)
}
