// Copyright 2026 the Playhead Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by media element commands.

use alloc::string::String;

/// A media or fullscreen command that did not take effect.
///
/// [`PlayerView`](crate::view::PlayerView) never propagates these: a failed
/// command is logged and the display state stays as the gesture left it.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PlayerError {
    /// No media element is attached to the view.
    #[error("no media element is attached")]
    Detached,
    /// The platform refused to start playback (e.g. autoplay policy).
    #[error("playback request was rejected: {0}")]
    PlaybackRejected(String),
    /// The platform failed to pause playback.
    #[error("pause request failed: {0}")]
    PauseFailed(String),
    /// The platform refused to enter or leave fullscreen.
    #[error("fullscreen request was denied: {0}")]
    FullscreenDenied(String),
}
