// Copyright 2026 the Playhead Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Player behavior configuration.

/// Default skip interval for the skip buttons, in seconds.
pub const DEFAULT_SKIP_INTERVAL: f64 = 10.0;

/// How the displayed play/pause state follows the media element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlaybackSync {
    /// The play state flips on user intent and only end-of-media resets it.
    ///
    /// The display can disagree with the element when the platform refuses
    /// to play (autoplay blocked) or pauses on its own.
    #[default]
    Optimistic,
    /// The play state flips on user intent, then native `play`/`pause`
    /// events and rejected play requests reconcile it with the element.
    Confirmed,
}

/// Tunables for a [`PlayerView`](crate::view::PlayerView).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayerConfig {
    /// Seconds moved by [`skip_forward`](crate::view::PlayerView::skip_forward)
    /// and [`skip_back`](crate::view::PlayerView::skip_back).
    pub skip_interval: f64,
    /// Whether element events may correct the optimistic play state.
    pub playback_sync: PlaybackSync,
    /// Whether the control bar starts visible before the first hover.
    pub controls_initially_visible: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            skip_interval: DEFAULT_SKIP_INTERVAL,
            playback_sync: PlaybackSync::Optimistic,
            controls_initially_visible: true,
        }
    }
}
