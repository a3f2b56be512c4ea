// Copyright 2026 the Playhead Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Display state and change tracking.
//!
//! [`DisplayState`] is everything the control bar renders. It is owned by a
//! [`PlayerView`](crate::view::PlayerView) and mutated only in response to
//! element events or user gestures. Every mutation marks a
//! [`DisplayChanges`] channel so a [`Presenter`](crate::backend::Presenter)
//! can update just the affected widgets.

use alloc::string::String;
use core::fmt;
use core::ops::{BitOr, BitOrAssign};

use crate::config::PlayerConfig;
use crate::time::format_time;

/// Logical playback state shown by the transport button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlaybackState {
    /// Not playing. The initial state.
    #[default]
    Paused,
    /// Playing.
    Playing,
}

/// Values reflected from the media element into the UI.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayState {
    /// Whether the transport shows the playing state.
    pub is_playing: bool,
    /// Whether audio is muted.
    pub is_muted: bool,
    /// Playback position in seconds.
    pub current_time: f64,
    /// Media duration in seconds; `0` before metadata, possibly `NaN`.
    pub duration: f64,
    /// Position as a percentage of the duration, `0..=100`.
    pub progress_percent: f64,
    /// Volume level, `0.0..=1.0`.
    pub volume: f64,
    /// Whether the control bar is shown.
    pub controls_visible: bool,
    /// Whether the document is in fullscreen.
    pub fullscreen: bool,
}

impl DisplayState {
    /// Creates the initial display state for a freshly mounted player.
    #[must_use]
    pub fn new(config: &PlayerConfig) -> Self {
        Self {
            is_playing: false,
            is_muted: false,
            current_time: 0.0,
            duration: 0.0,
            progress_percent: 0.0,
            volume: 1.0,
            controls_visible: config.controls_initially_visible,
            fullscreen: false,
        }
    }

    /// Returns the logical playback state.
    #[must_use]
    pub const fn playback(&self) -> PlaybackState {
        if self.is_playing {
            PlaybackState::Playing
        } else {
            PlaybackState::Paused
        }
    }

    /// Whether the large play button over the video is shown.
    #[must_use]
    pub const fn shows_center_overlay(&self) -> bool {
        !self.is_playing
    }

    /// Whether the speaker icon shows the muted glyph.
    #[must_use]
    pub fn speaker_muted(&self) -> bool {
        self.is_muted || self.volume == 0.0
    }

    /// Value the volume slider shows: `0` while muted, the volume otherwise.
    #[must_use]
    pub fn volume_slider_value(&self) -> f64 {
        if self.is_muted { 0.0 } else { self.volume }
    }

    /// `M:SS` label for the current position.
    #[must_use]
    pub fn current_time_label(&self) -> String {
        format_time(self.current_time)
    }

    /// `M:SS` label for the duration.
    #[must_use]
    pub fn duration_label(&self) -> String {
        format_time(self.duration)
    }
}

/// Set of [`DisplayState`] fields changed since the last presentation.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DisplayChanges(u16);

impl DisplayChanges {
    /// No changes.
    pub const NONE: Self = Self(0);
    /// `current_time` changed.
    pub const TIME: Self = Self(1 << 0);
    /// `duration` changed.
    pub const DURATION: Self = Self(1 << 1);
    /// `progress_percent` changed.
    pub const PROGRESS: Self = Self(1 << 2);
    /// `is_playing` changed.
    pub const PLAYBACK: Self = Self(1 << 3);
    /// `is_muted` changed.
    pub const MUTE: Self = Self(1 << 4);
    /// `volume` changed.
    pub const VOLUME: Self = Self(1 << 5);
    /// `controls_visible` changed.
    pub const CONTROLS: Self = Self(1 << 6);
    /// `fullscreen` changed.
    pub const FULLSCREEN: Self = Self(1 << 7);
    /// Every channel; used for the first render.
    pub const ALL: Self = Self(0xff);

    const NAMES: [(Self, &'static str); 8] = [
        (Self::TIME, "TIME"),
        (Self::DURATION, "DURATION"),
        (Self::PROGRESS, "PROGRESS"),
        (Self::PLAYBACK, "PLAYBACK"),
        (Self::MUTE, "MUTE"),
        (Self::VOLUME, "VOLUME"),
        (Self::CONTROLS, "CONTROLS"),
        (Self::FULLSCREEN, "FULLSCREEN"),
    ];

    /// Returns `true` if no channel is set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if any channel of `other` is set in `self`.
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Returns `true` if every channel of `other` is set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Sets the channels of `other`.
    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }
}

impl BitOr for DisplayChanges {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for DisplayChanges {
    fn bitor_assign(&mut self, rhs: Self) {
        self.insert(rhs);
    }
}

impl fmt::Debug for DisplayChanges {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut set = f.debug_set();
        for (flag, name) in Self::NAMES {
            if self.contains(flag) {
                set.entry(&format_args!("{name}"));
            }
        }
        set.finish()
    }
}
