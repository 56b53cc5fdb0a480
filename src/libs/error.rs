//! Error types for the calculation core and the clipboard port.
//!
//! Only two kinds of failure ever reach the user:
//!
//! - [`ValidationError`]: the inputs cannot produce an allocation. The shell
//!   shows a single warning and no partial result.
//! - [`ClipboardError`]: copying failed. The shell falls back to printing the
//!   text so it can be selected by hand.
//!
//! A malformed duration code is not an error of its own. It parses to "no
//! value", which the pipeline treats as a zero total and reports as
//! [`ValidationError::NoDuration`]. Malformed weight entries are dropped
//! without an error.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Enter the worked time as 4 digits (HHMM) greater than 0000")]
    NoDuration,

    #[error("Enter at least one weight, separated by commas")]
    NoWeights,

    #[error("Weights must be non-negative numbers")]
    InvalidWeight,

    #[error("The weights add up to zero, so no share can be computed")]
    ZeroWeightSum,

    #[error("The weights are too large to add up")]
    WeightOverflow,
}

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("No clipboard tool is available on this system")]
    Unavailable,

    #[error("Failed to run clipboard tool '{tool}': {source}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Clipboard tool '{tool}' exited with {status}")]
    Failed { tool: String, status: String },
}
