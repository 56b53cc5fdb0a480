//! Predicates that decide when a field "looks complete".
//!
//! The interactive shell runs a calculation as soon as either field reaches
//! a plausible final shape, without waiting for an explicit request. These
//! checks run on already-normalized text.

use super::normalizer::DURATION_CODE_LEN;

/// A duration field is complete once it holds exactly four digits.
pub fn duration_looks_complete(normalized: &str) -> bool {
    normalized.len() == DURATION_CODE_LEN && normalized.bytes().all(|b| b.is_ascii_digit())
}

/// A weight field is complete once it lists more than one entry.
pub fn weights_looks_complete(normalized: &str) -> bool {
    !normalized.is_empty() && normalized.contains(',')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_completion() {
        assert!(duration_looks_complete("0123"));
        assert!(!duration_looks_complete("012"));
        assert!(!duration_looks_complete(""));
        assert!(!duration_looks_complete("01a3"));
    }

    #[test]
    fn test_weights_completion() {
        assert!(weights_looks_complete("50,30"));
        assert!(weights_looks_complete("50,"));
        assert!(!weights_looks_complete("50"));
        assert!(!weights_looks_complete(""));
    }
}
