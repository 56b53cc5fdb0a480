//! Clock-style formatting of minute counts.
//!
//! Every share shown to the user goes through [`format_clock`], which rounds
//! with a single fixed rule and then renders the result as `HH:MM`.
//!
//! ## Rounding
//!
//! Fractional minutes are rounded **half to even** (banker's rounding):
//! `41.5` becomes `42`, `0.5` becomes `0`, `2.5` becomes `2`. No other
//! rounding rule is used anywhere in the crate.
//!
//! ## Format
//!
//! - Hours are zero-padded to at least 2 digits and never truncated
//!   (`100:00` stays `100:00`)
//! - Minutes are always 2 digits
//! - Negative durations render as `00:00`
//!
//! ```rust
//! use timeshare::libs::formatter::{format_clock, format_duration};
//! use chrono::Duration;
//!
//! assert_eq!(format_clock(41.5), "00:42");
//! assert_eq!(format_clock(83.0), "01:23");
//! assert_eq!(format_duration(&Duration::hours(100)), "100:00");
//! ```

use chrono::Duration;

/// Rounds a fractional minute count to whole minutes, ties to even.
///
/// Values beyond the `i64` range saturate and NaN becomes 0.
pub fn round_minutes(raw: f64) -> i64 {
    raw.round_ties_even() as i64
}

/// Formats a whole minute count as `HH:MM`. Negative counts clamp to zero.
pub fn format_minutes(minutes: i64) -> String {
    let minutes = minutes.max(0);
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Formats a `chrono::Duration` as `HH:MM`, dropping seconds.
pub fn format_duration(duration: &Duration) -> String {
    format_minutes(duration.num_minutes())
}

/// Formats a raw (possibly fractional) minute share as `HH:MM`.
///
/// ```rust
/// use timeshare::libs::formatter::format_clock;
///
/// assert_eq!(format_clock(0.5), "00:00");
/// assert_eq!(format_clock(1.5), "00:02");
/// assert_eq!(format_clock(5999.0), "99:59");
/// ```
pub fn format_clock(raw: f64) -> String {
    format_minutes(round_minutes(raw))
}
