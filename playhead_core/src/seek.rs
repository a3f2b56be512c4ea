// Copyright 2026 the Playhead Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer geometry for the seek bar.

use kurbo::Rect;

/// Maps a horizontal pointer position to a fraction of `bounds`' width.
///
/// `x` is in the same coordinate space as `bounds` (client pixels in the
/// DOM). The result is clamped to `[0, 1]` so a drag that leaves the bar
/// pins to its ends. Returns `None` for a bar with no width or a `NaN`
/// position.
#[must_use]
pub fn fraction_within(bounds: Rect, x: f64) -> Option<f64> {
    let width = bounds.width();
    if width.is_nan() || width <= 0.0 || x.is_nan() {
        return None;
    }
    Some(((x - bounds.x0) / width).clamp(0.0, 1.0))
}
