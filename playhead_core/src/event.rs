// Copyright 2026 the Playhead Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Media element events consumed by [`PlayerView`](crate::view::PlayerView).

/// An event raised by the media element or the fullscreen host.
///
/// Backends translate their native events (e.g. DOM `timeupdate`) into these
/// and feed them to [`PlayerView::handle_event`].
///
/// [`PlayerView::handle_event`]: crate::view::PlayerView::handle_event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaEvent {
    /// The playback position advanced (`timeupdate`).
    TimeUpdate,
    /// Duration and dimensions became available (`loadedmetadata`).
    LoadedMetadata,
    /// The duration changed after metadata (`durationchange`).
    DurationChange,
    /// Playback reached the end of the media (`ended`).
    Ended,
    /// The element started playing (`play`).
    Played,
    /// The element paused (`pause`).
    Paused,
    /// A play request was refused after it was issued.
    PlayRejected,
    /// The document entered (`true`) or left (`false`) fullscreen.
    FullscreenChanged(bool),
}

impl MediaEvent {
    /// Returns the DOM event type this event is raised from, if any.
    ///
    /// [`FullscreenChanged`](Self::FullscreenChanged) comes from the document
    /// rather than the media element and has no element event type.
    #[must_use]
    pub const fn dom_type(self) -> Option<&'static str> {
        match self {
            Self::TimeUpdate => Some("timeupdate"),
            Self::LoadedMetadata => Some("loadedmetadata"),
            Self::DurationChange => Some("durationchange"),
            Self::Ended => Some("ended"),
            Self::Played => Some("play"),
            Self::Paused => Some("pause"),
            Self::PlayRejected => Some(PLAY_REJECTED_EVENT),
            Self::FullscreenChanged(_) => None,
        }
    }

    /// Element events a backend subscribes to, in subscription order.
    pub const ELEMENT_EVENTS: [Self; 7] = [
        Self::TimeUpdate,
        Self::LoadedMetadata,
        Self::DurationChange,
        Self::Ended,
        Self::Played,
        Self::Paused,
        Self::PlayRejected,
    ];
}

/// Custom event type a backend raises on the element when a play request is
/// refused asynchronously.
pub const PLAY_REJECTED_EVENT: &str = "playhead:playrejected";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_element_event_has_a_dom_type() {
        for event in MediaEvent::ELEMENT_EVENTS {
            assert!(event.dom_type().is_some(), "{event:?} has no DOM type");
        }
        assert_eq!(MediaEvent::FullscreenChanged(true).dom_type(), None);
    }
}
