// Copyright 2026 the Playhead Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The player view: element events in, element commands out.
//!
//! [`PlayerView`] owns the [`DisplayState`] and, while mounted, the media
//! element. Element events ([`handle_event`](PlayerView::handle_event))
//! refresh the display from the element's live values; gestures
//! ([`toggle_play`](PlayerView::toggle_play), [`seek_to`](PlayerView::seek_to),
//! ...) command the element and update the display together.
//!
//! Every operation is a no-op while no element is attached, which covers the
//! window before mount and after unmount.

use tracing::{debug, trace};

use crate::backend::{FullscreenHost, MediaElement, Presenter};
use crate::config::{PlaybackSync, PlayerConfig};
use crate::display::{DisplayChanges, DisplayState};
use crate::event::MediaEvent;
use crate::time::{is_seekable_duration, progress_percent};

/// Display state plus the media element it reflects.
#[derive(Debug)]
pub struct PlayerView<M> {
    element: Option<M>,
    display: DisplayState,
    config: PlayerConfig,
    changes: DisplayChanges,
    scrubbing: bool,
}

impl<M: MediaElement> PlayerView<M> {
    /// Creates a view with no element attached.
    #[must_use]
    pub fn new(config: PlayerConfig) -> Self {
        Self {
            element: None,
            display: DisplayState::new(&config),
            config,
            changes: DisplayChanges::NONE,
            scrubbing: false,
        }
    }

    /// Returns the current display state.
    #[must_use]
    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    /// Returns the configuration the view was created with.
    #[must_use]
    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    /// Returns the attached element, if any.
    #[must_use]
    pub fn element(&self) -> Option<&M> {
        self.element.as_ref()
    }

    /// Returns `true` while an element is attached.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.element.is_some()
    }

    /// Returns `true` while a seek-bar drag is in progress.
    #[must_use]
    pub fn is_scrubbing(&self) -> bool {
        self.scrubbing
    }

    /// Attaches `element`, returning the previously attached one.
    ///
    /// A duration the element already knows (cached media can skip
    /// `loadedmetadata` before listeners exist) is picked up immediately,
    /// and the mute flag and volume are mirrored from the element.
    pub fn attach(&mut self, element: M) -> Option<M> {
        let duration = element.duration();
        if duration != 0.0 && !duration.is_nan() {
            self.display.duration = duration;
            self.changes |= DisplayChanges::DURATION;
        }
        self.display.is_muted = element.muted();
        self.display.volume = element.volume();
        self.changes |= DisplayChanges::MUTE | DisplayChanges::VOLUME;
        if self.config.playback_sync == PlaybackSync::Confirmed {
            self.set_playing(!element.paused());
        }
        debug!(duration, "media element attached");
        self.element.replace(element)
    }

    /// Detaches and returns the element. Later operations become no-ops.
    pub fn detach(&mut self) -> Option<M> {
        self.scrubbing = false;
        let element = self.element.take();
        if element.is_some() {
            debug!("media element detached");
        }
        element
    }

    /// Drains the set of display fields changed since the last call.
    pub fn take_changes(&mut self) -> DisplayChanges {
        core::mem::take(&mut self.changes)
    }

    /// Hands pending changes to `presenter`. Does nothing if none are pending.
    pub fn present(&mut self, presenter: &mut impl Presenter) {
        let changes = self.take_changes();
        if !changes.is_empty() {
            trace!(?changes, "presenting");
            presenter.apply(&self.display, changes);
        }
    }

    /// Folds an element or fullscreen event into the display state.
    pub fn handle_event(&mut self, event: MediaEvent) {
        trace!(?event, "media event");
        match event {
            MediaEvent::TimeUpdate => self.on_time_update(),
            MediaEvent::LoadedMetadata | MediaEvent::DurationChange => self.on_loaded_metadata(),
            MediaEvent::Ended => self.on_ended(),
            MediaEvent::Played => self.confirm_playing(true),
            MediaEvent::Paused | MediaEvent::PlayRejected => self.confirm_playing(false),
            MediaEvent::FullscreenChanged(fullscreen) => {
                if self.display.fullscreen != fullscreen {
                    self.display.fullscreen = fullscreen;
                    self.changes |= DisplayChanges::FULLSCREEN;
                }
            }
        }
    }

    /// Refreshes the position and progress from the element.
    ///
    /// Progress is left untouched while the element's duration is unknown.
    pub fn on_time_update(&mut self) {
        let Some(element) = &self.element else {
            return;
        };
        let now = element.current_time();
        let duration = element.duration();
        self.display.current_time = now;
        self.changes |= DisplayChanges::TIME;
        if let Some(percent) = progress_percent(now, duration) {
            self.display.progress_percent = percent;
            self.changes |= DisplayChanges::PROGRESS;
        }
    }

    /// Copies the element's duration into the display state.
    pub fn on_loaded_metadata(&mut self) {
        let Some(element) = &self.element else {
            return;
        };
        self.display.duration = element.duration();
        self.changes |= DisplayChanges::DURATION;
    }

    /// End of media: back to the paused state.
    pub fn on_ended(&mut self) {
        self.set_playing(false);
    }

    fn confirm_playing(&mut self, playing: bool) {
        if self.config.playback_sync == PlaybackSync::Confirmed {
            self.set_playing(playing);
        }
    }

    fn set_playing(&mut self, playing: bool) {
        self.display.is_playing = playing;
        self.changes |= DisplayChanges::PLAYBACK;
    }

    /// Pauses if playing, plays otherwise, and flips the displayed state
    /// without waiting for the element to confirm.
    pub fn toggle_play(&mut self) {
        let Some(element) = self.element.as_mut() else {
            return;
        };
        let playing = self.display.is_playing;
        let result = if playing {
            element.pause()
        } else {
            element.play()
        };
        if let Err(err) = result {
            debug!(error = %err, "playback command failed");
            if self.config.playback_sync == PlaybackSync::Confirmed {
                return;
            }
        }
        self.set_playing(!playing);
    }

    /// Seeks to `fraction` of the duration.
    ///
    /// `fraction` is clamped to `[0, 1]`. Nothing happens while the duration
    /// is zero, unknown or unbounded.
    pub fn seek_to(&mut self, fraction: f64) {
        let Some(element) = self.element.as_mut() else {
            return;
        };
        let duration = self.display.duration;
        if !is_seekable_duration(duration) || fraction.is_nan() {
            return;
        }
        let fraction = fraction.clamp(0.0, 1.0);
        let target = fraction * duration;
        element.set_current_time(target);
        self.display.current_time = target;
        self.display.progress_percent = fraction * 100.0;
        self.changes |= DisplayChanges::TIME | DisplayChanges::PROGRESS;
    }

    /// Starts a seek-bar drag at `fraction`.
    pub fn begin_scrub(&mut self, fraction: f64) {
        if self.element.is_none() || !is_seekable_duration(self.display.duration) {
            return;
        }
        self.scrubbing = true;
        self.seek_to(fraction);
    }

    /// Continues a drag started with [`begin_scrub`](Self::begin_scrub).
    pub fn scrub_to(&mut self, fraction: f64) {
        if self.scrubbing {
            self.seek_to(fraction);
        }
    }

    /// Ends a seek-bar drag.
    pub fn end_scrub(&mut self) {
        self.scrubbing = false;
    }

    /// Moves the element's position by `delta` seconds, clamped to
    /// `[0, duration]`.
    ///
    /// The display catches up on the next time update.
    pub fn skip(&mut self, delta: f64) {
        let Some(element) = self.element.as_mut() else {
            return;
        };
        let duration = self.display.duration;
        if duration.is_nan() {
            return;
        }
        let target = (element.current_time() + delta).clamp(0.0, duration.max(0.0));
        if target.is_nan() {
            return;
        }
        element.set_current_time(target);
    }

    /// Skips forward by the configured interval.
    pub fn skip_forward(&mut self) {
        self.skip(self.config.skip_interval);
    }

    /// Skips back by the configured interval.
    pub fn skip_back(&mut self) {
        self.skip(-self.config.skip_interval);
    }

    /// Flips the element's mute flag and mirrors the result.
    pub fn toggle_mute(&mut self) {
        let Some(element) = self.element.as_mut() else {
            return;
        };
        let muted = !element.muted();
        element.set_muted(muted);
        self.display.is_muted = element.muted();
        self.changes |= DisplayChanges::MUTE;
    }

    /// Sets the volume from the slider.
    ///
    /// `level` is clamped to `[0, 1]`; `NaN` is ignored. Zero mutes, any
    /// other level unmutes, and the element's mute flag follows.
    pub fn set_volume(&mut self, level: f64) {
        let Some(element) = self.element.as_mut() else {
            return;
        };
        if level.is_nan() {
            return;
        }
        let level = level.clamp(0.0, 1.0);
        let muted = level == 0.0;
        element.set_volume(level);
        element.set_muted(muted);
        self.display.volume = level;
        self.display.is_muted = muted;
        self.changes |= DisplayChanges::VOLUME | DisplayChanges::MUTE;
    }

    /// Leaves fullscreen if `host` is fullscreen, otherwise requests it for
    /// the element. Refusals are logged and otherwise ignored.
    pub fn toggle_fullscreen(&mut self, host: &impl FullscreenHost) {
        let Some(element) = self.element.as_ref() else {
            return;
        };
        let result = if host.is_fullscreen() {
            host.exit_fullscreen()
        } else {
            element.request_fullscreen()
        };
        if let Err(err) = result {
            debug!(error = %err, "fullscreen toggle ignored");
        }
    }

    /// Pointer entered the player: show the controls.
    pub fn pointer_enter(&mut self) {
        self.set_controls_visible(true);
    }

    /// Pointer left the player: hide the controls.
    pub fn pointer_leave(&mut self) {
        self.set_controls_visible(false);
    }

    fn set_controls_visible(&mut self, visible: bool) {
        if self.display.controls_visible != visible {
            self.display.controls_visible = visible;
            self.changes |= DisplayChanges::CONTROLS;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::PlaybackState;
    use crate::error::PlayerError;
    use alloc::string::String;
    use alloc::vec::Vec;
    use core::cell::Cell;

    #[derive(Clone, Copy, Debug, PartialEq)]
    enum Command {
        Play,
        Pause,
        Seek(f64),
        Muted(bool),
        Volume(f64),
        Fullscreen,
    }

    #[derive(Debug)]
    struct FakeMedia {
        current_time: f64,
        duration: f64,
        muted: bool,
        volume: f64,
        paused: bool,
        refuse_play: bool,
        refuse_fullscreen: bool,
        commands: Vec<Command>,
        fullscreen_requests: Cell<u32>,
    }

    impl FakeMedia {
        fn new() -> Self {
            Self {
                current_time: 0.0,
                duration: f64::NAN,
                muted: false,
                volume: 1.0,
                paused: true,
                refuse_play: false,
                refuse_fullscreen: false,
                commands: Vec::new(),
                fullscreen_requests: Cell::new(0),
            }
        }

        fn with_duration(duration: f64) -> Self {
            Self {
                duration,
                ..Self::new()
            }
        }
    }

    impl MediaElement for FakeMedia {
        fn current_time(&self) -> f64 {
            self.current_time
        }
        fn duration(&self) -> f64 {
            self.duration
        }
        fn muted(&self) -> bool {
            self.muted
        }
        fn volume(&self) -> f64 {
            self.volume
        }
        fn paused(&self) -> bool {
            self.paused
        }
        fn play(&mut self) -> Result<(), PlayerError> {
            self.commands.push(Command::Play);
            if self.refuse_play {
                return Err(PlayerError::PlaybackRejected(String::from("NotAllowedError")));
            }
            self.paused = false;
            Ok(())
        }
        fn pause(&mut self) -> Result<(), PlayerError> {
            self.commands.push(Command::Pause);
            self.paused = true;
            Ok(())
        }
        fn set_current_time(&mut self, seconds: f64) {
            self.commands.push(Command::Seek(seconds));
            self.current_time = seconds;
        }
        fn set_muted(&mut self, muted: bool) {
            self.commands.push(Command::Muted(muted));
            self.muted = muted;
        }
        fn set_volume(&mut self, level: f64) {
            self.commands.push(Command::Volume(level));
            self.volume = level;
        }
        fn request_fullscreen(&self) -> Result<(), PlayerError> {
            self.fullscreen_requests.set(self.fullscreen_requests.get() + 1);
            if self.refuse_fullscreen {
                Err(PlayerError::FullscreenDenied(String::from("TypeError")))
            } else {
                Ok(())
            }
        }
    }

    #[derive(Debug, Default)]
    struct FakeHost {
        fullscreen: bool,
        exits: Cell<u32>,
    }

    impl FullscreenHost for FakeHost {
        fn is_fullscreen(&self) -> bool {
            self.fullscreen
        }
        fn exit_fullscreen(&self) -> Result<(), PlayerError> {
            self.exits.set(self.exits.get() + 1);
            Ok(())
        }
    }

    #[derive(Debug, Default)]
    struct RecordingPresenter {
        applied: Vec<(DisplayChanges, bool, f64)>,
    }

    impl Presenter for RecordingPresenter {
        fn apply(&mut self, display: &DisplayState, changes: DisplayChanges) {
            self.applied
                .push((changes, display.is_playing, display.progress_percent));
        }
    }

    fn mounted(media: FakeMedia) -> PlayerView<FakeMedia> {
        let mut view = PlayerView::new(PlayerConfig::default());
        view.attach(media);
        view.take_changes();
        view
    }

    fn commands(view: &PlayerView<FakeMedia>) -> &[Command] {
        &view.element().unwrap().commands
    }

    fn element_mut(view: &mut PlayerView<FakeMedia>) -> &mut FakeMedia {
        view.element.as_mut().unwrap()
    }

    #[test]
    fn detached_view_ignores_everything() {
        let mut view: PlayerView<FakeMedia> = PlayerView::new(PlayerConfig::default());
        let before = view.display().clone();

        view.toggle_play();
        view.seek_to(0.5);
        view.skip(10.0);
        view.toggle_mute();
        view.set_volume(0.3);
        view.toggle_fullscreen(&FakeHost::default());
        view.handle_event(MediaEvent::TimeUpdate);
        view.handle_event(MediaEvent::LoadedMetadata);

        assert_eq!(view.display(), &before);
        assert!(view.take_changes().is_empty(), "no changes while detached");
    }

    #[test]
    fn attach_reads_known_duration_and_audio() {
        let mut media = FakeMedia::with_duration(596.5);
        media.muted = true;
        media.volume = 0.4;
        let mut view = PlayerView::new(PlayerConfig::default());
        assert!(view.attach(media).is_none(), "nothing attached before");

        assert_eq!(view.display().duration, 596.5);
        assert!(view.display().is_muted, "mirrors element mute");
        assert_eq!(view.display().volume, 0.4);
        assert!(
            view.take_changes()
                .contains(DisplayChanges::DURATION | DisplayChanges::MUTE | DisplayChanges::VOLUME)
        );
    }

    #[test]
    fn attach_leaves_duration_alone_while_unknown() {
        let mut view = PlayerView::new(PlayerConfig::default());
        view.attach(FakeMedia::new());
        assert_eq!(view.display().duration, 0.0);
        assert!(!view.take_changes().contains(DisplayChanges::DURATION));
    }

    #[test]
    fn detach_turns_operations_into_noops() {
        let mut view = mounted(FakeMedia::with_duration(20.0));
        view.handle_event(MediaEvent::LoadedMetadata);
        let media = view.detach().unwrap();
        assert!(!view.is_attached(), "detached");

        view.seek_to(0.5);
        view.toggle_play();
        assert!(media.commands.is_empty(), "no commands reached the element");
        assert_eq!(view.display().current_time, 0.0);
        assert!(!view.display().is_playing, "still paused");
    }

    #[test]
    fn time_update_recomputes_progress() {
        let mut view = mounted(FakeMedia::with_duration(120.0));
        element_mut(&mut view).current_time = 30.0;
        view.handle_event(MediaEvent::TimeUpdate);

        assert_eq!(view.display().current_time, 30.0);
        assert_eq!(view.display().progress_percent, 25.0);
        assert_eq!(
            view.take_changes(),
            DisplayChanges::TIME | DisplayChanges::PROGRESS
        );
    }

    #[test]
    fn time_update_keeps_progress_when_duration_unknown() {
        let mut view = mounted(FakeMedia::new());
        view.display.progress_percent = 12.0;
        element_mut(&mut view).current_time = 3.0;
        view.handle_event(MediaEvent::TimeUpdate);

        assert_eq!(view.display().current_time, 3.0);
        assert_eq!(view.display().progress_percent, 12.0);
        assert_eq!(view.take_changes(), DisplayChanges::TIME);
    }

    #[test]
    fn metadata_sets_duration_even_when_nan() {
        let mut view = mounted(FakeMedia::with_duration(42.0));
        view.handle_event(MediaEvent::LoadedMetadata);
        assert_eq!(view.display().duration, 42.0);

        element_mut(&mut view).duration = f64::NAN;
        view.handle_event(MediaEvent::DurationChange);
        assert!(view.display().duration.is_nan(), "duration mirrors the element");
        assert_eq!(view.display().duration_label(), "0:00");
    }

    #[test]
    fn double_toggle_returns_to_paused() {
        let mut view = mounted(FakeMedia::with_duration(60.0));
        assert_eq!(view.display().playback(), PlaybackState::Paused);

        view.toggle_play();
        assert_eq!(view.display().playback(), PlaybackState::Playing);
        view.toggle_play();
        assert_eq!(view.display().playback(), PlaybackState::Paused);

        assert_eq!(commands(&view), &[Command::Play, Command::Pause]);
    }

    #[test]
    fn toggle_play_is_optimistic_by_default() {
        let mut media = FakeMedia::with_duration(60.0);
        media.refuse_play = true;
        let mut view = mounted(media);

        view.toggle_play();
        assert!(view.display().is_playing, "intent wins over the refusal");

        view.handle_event(MediaEvent::PlayRejected);
        view.handle_event(MediaEvent::Paused);
        assert!(view.display().is_playing, "native events are ignored");
    }

    #[test]
    fn confirmed_sync_reconciles_with_the_element() {
        let config = PlayerConfig {
            playback_sync: PlaybackSync::Confirmed,
            ..PlayerConfig::default()
        };
        let mut view = PlayerView::new(config);
        let mut autoplaying = FakeMedia::with_duration(60.0);
        autoplaying.paused = false;
        view.attach(autoplaying);
        assert!(view.display().is_playing, "attach mirrors a playing element");
        view.handle_event(MediaEvent::Paused);

        view.toggle_play();
        assert!(view.display().is_playing, "still optimistic on intent");
        view.handle_event(MediaEvent::PlayRejected);
        assert!(!view.display().is_playing, "rejection reverts to paused");

        view.handle_event(MediaEvent::Played);
        assert!(view.display().is_playing, "native play confirms playing");

        element_mut(&mut view).refuse_play = true;
        view.handle_event(MediaEvent::Paused);
        view.toggle_play();
        assert!(!view.display().is_playing, "sync refusal keeps paused");
    }

    #[test]
    fn ended_always_pauses() {
        let mut view = mounted(FakeMedia::with_duration(60.0));
        view.toggle_play();
        view.handle_event(MediaEvent::Ended);
        assert!(!view.display().is_playing, "ended while playing");

        view.handle_event(MediaEvent::Ended);
        assert!(!view.display().is_playing, "ended while paused");
    }

    #[test]
    fn seek_sets_element_and_display_together() {
        let mut view = mounted(FakeMedia::with_duration(200.0));
        view.handle_event(MediaEvent::LoadedMetadata);
        view.take_changes();

        view.seek_to(0.25);
        assert_eq!(commands(&view), &[Command::Seek(50.0)]);
        assert_eq!(view.display().current_time, 50.0);
        assert_eq!(view.display().progress_percent, 25.0);
        assert_eq!(
            view.take_changes(),
            DisplayChanges::TIME | DisplayChanges::PROGRESS
        );

        view.seek_to(1.5);
        assert_eq!(view.display().current_time, 200.0);
        assert_eq!(view.display().progress_percent, 100.0);
    }

    #[test]
    fn seek_is_a_noop_without_duration() {
        for duration in [0.0, f64::NAN, f64::INFINITY] {
            let mut view = mounted(FakeMedia::with_duration(duration));
            view.handle_event(MediaEvent::LoadedMetadata);
            view.take_changes();
            let before = view.display().clone();

            view.seek_to(0.5);
            view.begin_scrub(0.5);

            assert!(commands(&view).is_empty(), "no seek for {duration}");
            assert!(!view.is_scrubbing(), "no scrub for {duration}");
            assert!(view.take_changes().is_empty(), "no changes for {duration}");
            assert_eq!(view.display().current_time, before.current_time);
        }
    }

    #[test]
    fn scrub_seeks_only_while_dragging() {
        let mut view = mounted(FakeMedia::with_duration(100.0));
        view.handle_event(MediaEvent::LoadedMetadata);

        view.scrub_to(0.9);
        assert!(commands(&view).is_empty(), "move without press is ignored");

        view.begin_scrub(0.1);
        view.scrub_to(0.4);
        view.end_scrub();
        view.scrub_to(0.8);

        assert_eq!(commands(&view), &[Command::Seek(10.0), Command::Seek(40.0)]);
        assert!(!view.is_scrubbing(), "released");
    }

    #[test]
    fn skip_clamps_to_media_bounds() {
        let mut view = mounted(FakeMedia::with_duration(20.0));
        view.handle_event(MediaEvent::LoadedMetadata);

        element_mut(&mut view).current_time = 5.0;
        view.skip(-10.0);
        assert_eq!(element_mut(&mut view).current_time, 0.0);

        element_mut(&mut view).current_time = 5.0;
        view.skip(1000.0);
        assert_eq!(element_mut(&mut view).current_time, 20.0);

        element_mut(&mut view).current_time = 5.0;
        view.skip_forward();
        assert_eq!(element_mut(&mut view).current_time, 15.0);
        view.skip_back();
        assert_eq!(element_mut(&mut view).current_time, 5.0);
    }

    #[test]
    fn skip_before_metadata_pins_to_start() {
        let mut view = mounted(FakeMedia::new());
        element_mut(&mut view).current_time = 3.0;
        view.skip(10.0);
        assert_eq!(element_mut(&mut view).current_time, 0.0);

        view.display.duration = f64::NAN;
        view.skip(10.0);
        assert_eq!(commands(&view), &[Command::Seek(0.0)]);
    }

    #[test]
    fn toggle_mute_mirrors_the_element() {
        let mut view = mounted(FakeMedia::with_duration(20.0));
        view.toggle_mute();
        assert!(view.display().is_muted, "muted");
        assert!(element_mut(&mut view).muted, "element muted");

        view.toggle_mute();
        assert!(!view.display().is_muted, "unmuted");
        assert_eq!(view.take_changes(), DisplayChanges::MUTE);
    }

    #[test]
    fn zero_volume_mutes_and_nonzero_unmutes() {
        let mut view = mounted(FakeMedia::with_duration(20.0));
        view.set_volume(0.0);
        assert!(view.display().is_muted, "zero mutes");
        assert!(view.display().speaker_muted(), "speaker shows muted");

        view.set_volume(0.5);
        assert!(!view.display().is_muted, "0.5 unmutes");
        assert_eq!(view.display().volume, 0.5);
        assert!(!element_mut(&mut view).muted, "element unmuted");

        view.set_volume(3.0);
        assert_eq!(view.display().volume, 1.0);
        view.set_volume(f64::NAN);
        assert_eq!(view.display().volume, 1.0);
    }

    #[test]
    fn fullscreen_toggles_between_request_and_exit() {
        let mut view = mounted(FakeMedia::with_duration(20.0));
        let mut host = FakeHost::default();

        view.toggle_fullscreen(&host);
        assert_eq!(view.element().unwrap().fullscreen_requests.get(), 1);
        assert_eq!(host.exits.get(), 0);

        host.fullscreen = true;
        view.toggle_fullscreen(&host);
        assert_eq!(view.element().unwrap().fullscreen_requests.get(), 1);
        assert_eq!(host.exits.get(), 1);
    }

    #[test]
    fn denied_fullscreen_is_silent() {
        let mut media = FakeMedia::with_duration(20.0);
        media.refuse_fullscreen = true;
        let mut view = mounted(media);
        view.toggle_fullscreen(&FakeHost::default());
        assert!(view.take_changes().is_empty(), "nothing to present");

        view.handle_event(MediaEvent::FullscreenChanged(true));
        assert!(view.display().fullscreen, "host reported fullscreen");
        assert_eq!(view.take_changes(), DisplayChanges::FULLSCREEN);
    }

    #[test]
    fn hover_shows_and_hides_controls() {
        let mut view = mounted(FakeMedia::new());
        view.pointer_leave();
        assert!(!view.display().controls_visible, "hidden on leave");
        view.pointer_enter();
        assert!(view.display().controls_visible, "shown on enter");
        assert_eq!(view.take_changes(), DisplayChanges::CONTROLS);

        view.pointer_enter();
        assert!(view.take_changes().is_empty(), "repeat enter changes nothing");
    }

    #[test]
    fn present_hands_pending_changes_once() {
        let mut view = mounted(FakeMedia::with_duration(120.0));
        let mut presenter = RecordingPresenter::default();

        view.present(&mut presenter);
        assert!(presenter.applied.is_empty(), "nothing pending after mount");

        view.toggle_play();
        element_mut(&mut view).current_time = 60.0;
        view.handle_event(MediaEvent::TimeUpdate);
        view.present(&mut presenter);
        view.present(&mut presenter);

        assert_eq!(
            presenter.applied,
            [(
                DisplayChanges::PLAYBACK | DisplayChanges::TIME | DisplayChanges::PROGRESS,
                true,
                50.0
            )]
        );
    }
}
