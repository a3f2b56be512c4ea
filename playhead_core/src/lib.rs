// Copyright 2026 the Playhead Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Platform-neutral state for custom video player controls.
//!
//! `playhead_core` keeps a control bar in step with a native media element.
//! It is `no_std` compatible (with `alloc`) and knows nothing about the DOM;
//! backends supply the element, the fullscreen host and the widgets.
//!
//! # Architecture
//!
//! ```text
//!   Media element events           User gestures
//!          │                             │
//!          ▼                             ▼
//!   PlayerView::handle_event()    PlayerView::toggle_play() / seek_to() / ...
//!          │                             │ ──► MediaElement commands
//!          └──────────────┬──────────────┘
//!                         ▼
//!          DisplayState + DisplayChanges
//!                         │
//!                         ▼
//!               Presenter::apply()
//! ```
//!
//! **[`view`]**: [`PlayerView`](view::PlayerView), the single stateful
//! component. Owns the display state and, while mounted, the element.
//!
//! **[`display`]**: [`DisplayState`](display::DisplayState) and the
//! [`DisplayChanges`](display::DisplayChanges) channels that tell a presenter
//! which widgets to refresh.
//!
//! **[`backend`]**: The [`MediaElement`](backend::MediaElement),
//! [`FullscreenHost`](backend::FullscreenHost) and
//! [`Presenter`](backend::Presenter) traits backends implement.
//!
//! **[`event`]**: [`MediaEvent`](event::MediaEvent), the element events the
//! view consumes.
//!
//! **[`time`]**: `M:SS` formatting and duration guards.
//!
//! **[`seek`]**: Pointer-to-fraction mapping for the seek bar.
//!
//! **[`config`]**: [`PlayerConfig`](config::PlayerConfig) and the
//! [`PlaybackSync`](config::PlaybackSync) policy.
//!
//! **[`error`]**: [`PlayerError`](error::PlayerError) for element commands.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod backend;
pub mod config;
pub mod display;
pub mod error;
pub mod event;
pub mod seek;
pub mod time;
pub mod view;

pub use config::{PlaybackSync, PlayerConfig};
pub use error::PlayerError;
pub use event::MediaEvent;
pub use view::PlayerView;
