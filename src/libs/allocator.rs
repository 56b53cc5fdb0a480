//! Proportional allocation of a worked duration across weighted tasks.
//!
//! Each task receives `weight / Σweights * total` minutes. Shares are kept
//! unrounded in [`Allocation::minutes`] and rounded only when formatted, so
//! the raw shares always add up to the total while the rounded clock values
//! may drift by a minute or two.
//!
//! ## Example
//!
//! ```rust
//! use timeshare::libs::allocator::allocate;
//!
//! let result = allocate(83, &[50.0, 30.0, 20.0])?;
//! assert_eq!(result.clocks(), vec!["00:42", "00:25", "00:17"]);
//! assert_eq!(result.entries[0].label, "Task 1");
//! # Ok::<(), timeshare::libs::error::ValidationError>(())
//! ```

use super::error::ValidationError;
use super::formatter::format_clock;
use super::parser::Minutes;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One task's share of the total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    /// 1-based position in the weight list.
    pub index: usize,
    /// Display label, `Task <index>`.
    pub label: String,
    pub weight: f64,
    /// Unrounded share in minutes.
    pub minutes: f64,
    /// Share formatted as `HH:MM`.
    pub clock: String,
}

/// The ordered shares produced from one calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationResult {
    pub total: Minutes,
    pub entries: Vec<Allocation>,
}

impl AllocationResult {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The formatted clocks, in weight order.
    pub fn clocks(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.clock.as_str()).collect()
    }

    /// Sum of the unrounded shares.
    pub fn raw_total(&self) -> f64 {
        self.entries.iter().map(|entry| entry.minutes).sum()
    }

    /// All clocks joined one per line, ready to paste into a timesheet.
    pub fn copy_all_text(&self) -> String {
        self.clocks().join("\n")
    }
}

/// Distributes `total` minutes across `weights` in proportion to each weight.
///
/// # Errors
///
/// - [`ValidationError::NoDuration`] if `total` is zero
/// - [`ValidationError::NoWeights`] if `weights` is empty
/// - [`ValidationError::InvalidWeight`] if any weight is negative or not finite
/// - [`ValidationError::ZeroWeightSum`] if every weight is zero
/// - [`ValidationError::WeightOverflow`] if the weights sum to infinity
pub fn allocate(total: Minutes, weights: &[f64]) -> Result<AllocationResult, ValidationError> {
    if total == 0 {
        return Err(ValidationError::NoDuration);
    }
    if weights.is_empty() {
        return Err(ValidationError::NoWeights);
    }
    if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
        return Err(ValidationError::InvalidWeight);
    }

    let weight_sum: f64 = weights.iter().sum();
    if weight_sum == 0.0 {
        return Err(ValidationError::ZeroWeightSum);
    }
    if !weight_sum.is_finite() {
        return Err(ValidationError::WeightOverflow);
    }

    let entries = weights
        .iter()
        .enumerate()
        .map(|(i, &weight)| {
            let minutes = (weight / weight_sum) * f64::from(total);
            Allocation {
                index: i + 1,
                label: format!("Task {}", i + 1),
                weight,
                minutes,
                clock: format_clock(minutes),
            }
        })
        .collect::<Vec<_>>();

    debug!(total, weight_sum, tasks = entries.len(), "allocated duration");
    Ok(AllocationResult { total, entries })
}
