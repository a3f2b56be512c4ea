// Copyright 2026 the Playhead Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page configuration.
//!
//! [`PageConfig::default`] describes the stock player page. A host element
//! can override parts of it with `data-*` attributes, read by
//! [`PageConfig::apply_attributes`]:
//!
//! | Attribute | Field |
//! |---|---|
//! | `data-title` | [`title`](PageConfig::title) |
//! | `data-src` | replaces [`sources`](PageConfig::sources) with one MP4 source |
//! | `data-log-level` | [`log_level`](PageConfig::log_level) (`off`, `error`, ..., `trace`) |
//! | `data-skip-seconds` | [`PlayerConfig::skip_interval`] |
//! | `data-playback-sync` | [`PlayerConfig::playback_sync`] (`optimistic` or `confirmed`) |
//!
//! Unparsable values are ignored with a warning.

use playhead_core::config::{PlaybackSync, PlayerConfig};
use tracing::level_filters::LevelFilter;
use web_sys::Element;

/// One `<source>` candidate for the video element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaSource {
    /// Media URL.
    pub url: String,
    /// MIME type hint, e.g. `video/mp4`.
    pub mime: String,
}

impl MediaSource {
    /// An MP4 source at `url`.
    #[must_use]
    pub fn mp4(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            mime: String::from("video/mp4"),
        }
    }
}

/// Tooltips shown on the control buttons.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Labels {
    /// Transport button while paused.
    pub play: String,
    /// Transport button while playing.
    pub pause: String,
    /// Mute button while muted.
    pub unmute: String,
    /// Mute button while audible.
    pub mute: String,
    /// Skip back button.
    pub skip_back: String,
    /// Skip forward button.
    pub skip_forward: String,
    /// Fullscreen button.
    pub fullscreen: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            play: String::from("Reproduzir"),
            pause: String::from("Pausar"),
            unmute: String::from("Ativar som"),
            mute: String::from("Silenciar"),
            skip_back: String::from("Voltar 10s"),
            skip_forward: String::from("Avançar 10s"),
            fullscreen: String::from("Tela cheia"),
        }
    }
}

/// Everything needed to build and mount the player page.
#[derive(Clone, Debug, PartialEq)]
pub struct PageConfig {
    /// Title shown in the control bar.
    pub title: String,
    /// Heading of the info panel below the player.
    pub panel_heading: String,
    /// Body text of the info panel.
    pub description: String,
    /// Sources tried by the browser in order.
    pub sources: Vec<MediaSource>,
    /// Text shown by browsers without `<video>` support.
    pub fallback_text: String,
    /// Button tooltips.
    pub labels: Labels,
    /// Volume slider step.
    pub volume_step: f64,
    /// Maximum level forwarded to the console.
    pub log_level: LevelFilter,
    /// Player behavior.
    pub player: PlayerConfig,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: String::from("Douglas o Coelhão"),
            panel_heading: String::from("Reproduzindo Agora"),
            description: String::from(
                "Episódio 1 - O mistério sobrenatural continua enquanto Douglas o Coelhão \
                 navega através de desafios místicos.",
            ),
            sources: vec![
                MediaSource::mp4(
                    "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4",
                ),
                MediaSource::mp4(
                    "https://sample-videos.com/zip/10/mp4/SampleVideo_1280x720_1mb.mp4",
                ),
            ],
            fallback_text: String::from("Seu navegador não suporta o elemento de vídeo."),
            labels: Labels::default(),
            volume_step: 0.1,
            log_level: LevelFilter::INFO,
            player: PlayerConfig::default(),
        }
    }
}

impl PageConfig {
    /// Overlays `data-*` attributes of `host` onto this configuration.
    pub fn apply_attributes(&mut self, host: &Element) {
        self.apply(|name| host.get_attribute(name));
    }

    fn apply(&mut self, attr: impl Fn(&str) -> Option<String>) {
        if let Some(title) = attr("data-title") {
            self.title = title;
        }
        if let Some(src) = attr("data-src") {
            let src = src.trim();
            if src.is_empty() {
                tracing::warn!("ignoring empty data-src");
            } else {
                self.sources = vec![MediaSource::mp4(src)];
            }
        }
        if let Some(raw) = attr("data-log-level") {
            match parse_log_level(&raw) {
                Some(level) => self.log_level = level,
                None => tracing::warn!(value = %raw, "ignoring data-log-level"),
            }
        }
        if let Some(raw) = attr("data-skip-seconds") {
            match parse_skip_seconds(&raw) {
                Some(seconds) => self.player.skip_interval = seconds,
                None => tracing::warn!(value = %raw, "ignoring data-skip-seconds"),
            }
        }
        if let Some(raw) = attr("data-playback-sync") {
            match parse_playback_sync(&raw) {
                Some(sync) => self.player.playback_sync = sync,
                None => tracing::warn!(value = %raw, "ignoring data-playback-sync"),
            }
        }
    }
}

/// Parses a level name such as `debug` or `WARN`.
#[must_use]
pub fn parse_log_level(raw: &str) -> Option<LevelFilter> {
    raw.trim().parse().ok()
}

/// Parses a positive, finite number of seconds.
#[must_use]
pub fn parse_skip_seconds(raw: &str) -> Option<f64> {
    let seconds: f64 = raw.trim().parse().ok()?;
    (seconds.is_finite() && seconds > 0.0).then_some(seconds)
}

/// Parses `optimistic` or `confirmed`, case-insensitively.
#[must_use]
pub fn parse_playback_sync(raw: &str) -> Option<PlaybackSync> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("optimistic") {
        Some(PlaybackSync::Optimistic)
    } else if raw.eq_ignore_ascii_case("confirmed") {
        Some(PlaybackSync::Confirmed)
    } else {
        None
    }
}
