//! Core library modules for timeshare.
//!
//! ## Calculation core
//!
//! - [`normalizer`]: full-width folding and character filtering
//! - [`parser`]: `HHMM` codes and weight lists
//! - [`allocator`]: proportional shares
//! - [`formatter`]: `HH:MM` rendering with one fixed rounding rule
//! - [`split`]: the three steps composed on raw text
//!
//! These are pure functions with no I/O.
//!
//! ## Shell support
//!
//! - [`session`], [`trigger`]: interactive state and auto-calculation
//! - [`clipboard`]: copying results
//! - [`view`], [`messages`]: terminal output
//! - [`config`], [`data_storage`], [`logger`]: ambient plumbing
//!
//! ## Usage
//!
//! ```rust
//! use timeshare::libs::split::calculate;
//!
//! let result = calculate("0123", "50,30,20")?;
//! assert_eq!(result.copy_all_text(), "00:42\n00:25\n00:17");
//! # Ok::<(), timeshare::libs::error::ValidationError>(())
//! ```

pub mod allocator;
pub mod clipboard;
pub mod config;
pub mod data_storage;
pub mod error;
pub mod formatter;
pub mod logger;
pub mod messages;
pub mod normalizer;
pub mod parser;
pub mod session;
pub mod split;
pub mod trigger;
pub mod view;
