//! # Timeshare - proportional work-time splitter
//!
//! Divides a worked duration among tasks in proportion to their weights and
//! prints each share as `HH:MM`, ready to paste into a timesheet.
//!
//! ## Features
//!
//! - **Forgiving input**: full-width digits and commas are accepted, stray
//!   characters are ignored
//! - **Proportional split**: any number of integer or decimal weights
//! - **Interactive shell**: recalculates as soon as the input looks complete
//!   and copies results to the clipboard
//!
//! ## Usage
//!
//! ```rust,no_run
//! use timeshare::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
