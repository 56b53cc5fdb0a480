//! State kept by the interactive shell between user actions.
//!
//! The calculation core is stateless. Everything that has to survive from one
//! prompt to the next lives in [`Session`]: the current (normalized) field
//! values, the last successful result, whether an edit should trigger an
//! automatic calculation, and which value was most recently copied.
//!
//! ## Invalid input policy
//!
//! A calculation that fails validation always clears the previous result.
//! The user never sees shares computed from inputs they have since changed.
//!
//! ```rust
//! use timeshare::libs::session::Session;
//!
//! let mut session = Session::new("50,30,20");
//! session.edit_duration("0123");
//! assert!(session.take_auto_calculate());
//! let result = session.calculate()?;
//! assert_eq!(result.len(), 3);
//! # Ok::<(), timeshare::libs::error::ValidationError>(())
//! ```

use super::allocator::{allocate, AllocationResult};
use super::clipboard::Clipboard;
use super::error::{ClipboardError, ValidationError};
use super::normalizer::{normalize, CharacterClass};
use super::parser::{parse_duration, parse_weights};
use super::trigger::{duration_looks_complete, weights_looks_complete};
use tracing::debug;

/// What was copied since the last successful calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyStatus {
    #[default]
    None,
    /// Every clock, one per line.
    All,
    /// A single task's clock, by 1-based index.
    Single(usize),
}

/// Which part of the current result to copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTarget {
    All,
    Single(usize),
}

/// A copy that the clipboard refused, with the text to show instead.
#[derive(Debug)]
pub struct CopyFailure {
    pub error: ClipboardError,
    pub text: String,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    duration_input: String,
    weights_input: String,
    last_result: Option<AllocationResult>,
    copy_status: CopyStatus,
    auto_calculate: bool,
}

impl Session {
    /// Starts a session with the weight field pre-filled.
    pub fn new(default_weights: &str) -> Self {
        Self {
            weights_input: normalize(default_weights, CharacterClass::Weights),
            ..Self::default()
        }
    }

    pub fn duration_input(&self) -> &str {
        &self.duration_input
    }

    pub fn weights_input(&self) -> &str {
        &self.weights_input
    }

    pub fn last_result(&self) -> Option<&AllocationResult> {
        self.last_result.as_ref()
    }

    pub fn copy_status(&self) -> CopyStatus {
        self.copy_status
    }

    /// Replaces the duration field, returning the normalized value.
    pub fn edit_duration(&mut self, raw: &str) -> &str {
        self.duration_input = normalize(raw, CharacterClass::Duration);
        if duration_looks_complete(&self.duration_input) {
            self.auto_calculate = true;
        }
        &self.duration_input
    }

    /// Replaces the weight field, returning the normalized value.
    pub fn edit_weights(&mut self, raw: &str) -> &str {
        self.weights_input = normalize(raw, CharacterClass::Weights);
        if weights_looks_complete(&self.weights_input) {
            self.auto_calculate = true;
        }
        &self.weights_input
    }

    /// Returns whether an edit asked for a calculation, and resets the flag.
    pub fn take_auto_calculate(&mut self) -> bool {
        std::mem::take(&mut self.auto_calculate)
    }

    /// Computes shares from the current fields.
    ///
    /// On success the result replaces the previous one and the copy status
    /// resets. On failure the previous result is discarded.
    pub fn calculate(&mut self) -> Result<&AllocationResult, ValidationError> {
        let total = parse_duration(&self.duration_input).unwrap_or(0);
        let weights = parse_weights(&self.weights_input);

        match allocate(total, &weights) {
            Ok(result) => {
                self.copy_status = CopyStatus::None;
                Ok(&*self.last_result.insert(result))
            }
            Err(e) => {
                debug!(error = %e, "calculation rejected, clearing last result");
                self.last_result = None;
                self.copy_status = CopyStatus::None;
                Err(e)
            }
        }
    }

    /// The text a copy target refers to, if the current result has it.
    pub fn copy_text(&self, target: CopyTarget) -> Option<String> {
        let result = self.last_result.as_ref()?;
        match target {
            CopyTarget::All => Some(result.copy_all_text()),
            CopyTarget::Single(index) => result
                .entries
                .iter()
                .find(|entry| entry.index == index)
                .map(|entry| entry.clock.clone()),
        }
    }

    /// Copies part of the current result through `clipboard`.
    ///
    /// Returns the copied text, or `Ok(None)` when there is nothing to copy.
    /// The copy status only changes when the clipboard accepts the text.
    pub fn copy(&mut self, target: CopyTarget, clipboard: &mut dyn Clipboard) -> Result<Option<String>, CopyFailure> {
        let Some(text) = self.copy_text(target) else {
            return Ok(None);
        };

        match clipboard.copy(&text) {
            Ok(()) => {
                self.copy_status = match target {
                    CopyTarget::All => CopyStatus::All,
                    CopyTarget::Single(index) => CopyStatus::Single(index),
                };
                Ok(Some(text))
            }
            Err(error) => Err(CopyFailure { error, text }),
        }
    }
}
