//! Parsing of sanitized field values.
//!
//! ## Duration codes
//!
//! The worked time is typed as four digits, `HHMM`: `0123` means one hour and
//! twenty-three minutes. Hours have no upper bound and the minute pair is not
//! range checked, so `0099` is simply 99 minutes.
//!
//! ## Weights
//!
//! Weights are a comma-separated list of non-negative integers or decimals.
//! Entries that are empty, signed, carry more than one decimal point or
//! contain any other text are dropped silently, so `50,,20` computes with
//! `[50, 20]`.

use tracing::debug;

/// Whole minutes.
pub type Minutes = u32;

/// Parses a 4-digit `HHMM` code into total minutes.
///
/// Returns `None` for anything that is not exactly four ASCII digits.
///
/// ```rust
/// use timeshare::libs::parser::parse_duration;
///
/// assert_eq!(parse_duration("0123"), Some(83));
/// assert_eq!(parse_duration("9959"), Some(5999));
/// assert_eq!(parse_duration("12a3"), None);
/// assert_eq!(parse_duration("123"), None);
/// ```
pub fn parse_duration(s: &str) -> Option<Minutes> {
    if s.len() != 4 || !s.bytes().all(|b| b.is_ascii_digit()) {
        debug!(input = s, "rejected duration code");
        return None;
    }

    let hours: Minutes = s[..2].parse().ok()?;
    let minutes: Minutes = s[2..].parse().ok()?;
    Some(hours * 60 + minutes)
}

/// Checks that a trimmed weight entry is an unsigned integer or decimal.
fn is_weight_literal(piece: &str) -> bool {
    let digits = piece.replacen('.', "", 1);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Parses a comma-separated weight list, keeping entry order.
///
/// ```rust
/// use timeshare::libs::parser::parse_weights;
///
/// assert_eq!(parse_weights("50,30,20"), vec![50.0, 30.0, 20.0]);
/// assert_eq!(parse_weights("50,,20"), vec![50.0, 20.0]);
/// assert_eq!(parse_weights("-5,30"), vec![30.0]);
/// assert!(parse_weights("").is_empty());
/// ```
pub fn parse_weights(s: &str) -> Vec<f64> {
    s.split(',')
        .map(str::trim)
        .filter(|piece| {
            let keep = is_weight_literal(piece);
            if !keep && !piece.is_empty() {
                debug!(entry = *piece, "dropped weight entry");
            }
            keep
        })
        .filter_map(|piece| piece.parse::<f64>().ok())
        .collect()
}
