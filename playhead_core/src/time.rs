// Copyright 2026 the Playhead Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Media time helpers.
//!
//! Media elements report positions and durations as `f64` seconds, and the
//! duration is `NaN` until metadata has loaded (and `+∞` for unbounded
//! streams). The helpers here keep those values out of arithmetic that would
//! otherwise produce division artifacts.

use alloc::format;
use alloc::string::String;

/// Returns `true` if `duration` can be used as a divisor and seek range.
///
/// That means finite and strictly positive; `0`, `NaN`, negative and
/// infinite durations are all rejected.
#[must_use]
pub fn is_seekable_duration(duration: f64) -> bool {
    duration.is_finite() && duration > 0.0
}

/// Returns `100 * current / duration`, or `None` when the duration is not
/// [seekable](is_seekable_duration).
#[must_use]
pub fn progress_percent(current: f64, duration: f64) -> Option<f64> {
    if is_seekable_duration(duration) {
        Some(100.0 * current / duration)
    } else {
        None
    }
}

/// Formats seconds as `M:SS`.
///
/// Minutes are unpadded and unbounded, seconds are zero-padded to two digits
/// and truncated toward zero. Non-finite and negative inputs format as
/// `0:00`.
///
/// ```
/// use playhead_core::time::format_time;
///
/// assert_eq!(format_time(75.0), "1:15");
/// assert_eq!(format_time(5.9), "0:05");
/// assert_eq!(format_time(f64::NAN), "0:00");
/// ```
#[must_use]
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return String::from("0:00");
    }
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "finite and non-negative; truncation to whole seconds is the intent"
    )]
    let whole = seconds as u64;
    format!("{}:{:02}", whole / 60, whole % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_time_pads_seconds_only() {
        assert_eq!(format_time(75.0), "1:15");
        assert_eq!(format_time(5.0), "0:05");
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(59.999), "0:59");
        assert_eq!(format_time(600.0), "10:00");
        assert_eq!(format_time(3725.0), "62:05");
    }

    #[test]
    fn format_time_falls_back_for_unknown_values() {
        assert_eq!(format_time(f64::NAN), "0:00");
        assert_eq!(format_time(f64::INFINITY), "0:00");
        assert_eq!(format_time(-3.0), "0:00");
    }

    #[test]
    fn progress_percent_requires_a_usable_duration() {
        assert_eq!(progress_percent(30.0, 120.0), Some(25.0));
        assert_eq!(progress_percent(0.0, 120.0), Some(0.0));
        assert_eq!(progress_percent(30.0, 0.0), None);
        assert_eq!(progress_percent(30.0, f64::NAN), None);
        assert_eq!(progress_percent(30.0, f64::INFINITY), None);
    }

    #[test]
    fn seekable_duration_rejects_degenerate_values() {
        assert!(is_seekable_duration(0.5), "positive duration is seekable");
        assert!(!is_seekable_duration(0.0), "zero duration is not seekable");
        assert!(!is_seekable_duration(-1.0), "negative duration is not seekable");
        assert!(!is_seekable_duration(f64::NAN), "NaN duration is not seekable");
    }
}
