//! End-to-end calculation from raw field text to an allocation.

use super::allocator::{allocate, AllocationResult};
use super::error::ValidationError;
use super::normalizer::{normalize, CharacterClass};
use super::parser::{parse_duration, parse_weights};

/// Normalizes, parses and allocates in one step.
///
/// A duration that does not parse counts as zero minutes and therefore fails
/// with [`ValidationError::NoDuration`].
///
/// ```rust
/// use timeshare::libs::split::calculate;
///
/// let result = calculate("０１００", "1，1，1")?;
/// assert_eq!(result.clocks(), vec!["00:20", "00:20", "00:20"]);
/// # Ok::<(), timeshare::libs::error::ValidationError>(())
/// ```
pub fn calculate(raw_duration: &str, raw_weights: &str) -> Result<AllocationResult, ValidationError> {
    let total = parse_duration(&normalize(raw_duration, CharacterClass::Duration)).unwrap_or(0);
    let weights = parse_weights(&normalize(raw_weights, CharacterClass::Weights));
    allocate(total, &weights)
}
