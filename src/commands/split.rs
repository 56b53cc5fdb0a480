//! One-shot split command.
//!
//! ```text
//! $ timeshare split 0123 50,30,20
//! ```
//!
//! Prints one row per task and the copy-all block. With `--json` the result
//! is printed as JSON instead, for use from scripts.

use crate::{
    libs::{
        clipboard::{Clipboard, SystemClipboard},
        config::Config,
        messages::Message,
        session::CopyStatus,
        split::calculate,
        view::View,
    },
    msg_success, msg_warning,
};
use anyhow::{anyhow, Result};
use clap::Args;

#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Worked time as HHMM, e.g. 0123 for 1h 23m
    #[arg(required = true)]
    duration: String,

    /// Comma-separated weights, e.g. 50,30,20 (defaults to the configured weights)
    weights: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Copy all times to the clipboard
    #[arg(short, long)]
    copy: bool,

    /// Show unrounded minutes
    #[arg(long, conflicts_with = "no_raw")]
    raw: bool,

    /// Hide unrounded minutes
    #[arg(long)]
    no_raw: bool,
}

pub fn cmd(split_args: SplitArgs) -> Result<()> {
    let config = Config::read().unwrap_or_else(|e| {
        msg_warning!(Message::ConfigReadFailed(e.to_string()));
        Config::default()
    });

    let weights = split_args.weights.as_deref().unwrap_or(&config.default_weights);
    let result = calculate(&split_args.duration, weights).map_err(|e| anyhow!(Message::InvalidInput(e.to_string())))?;

    if split_args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        let show_raw_minutes = (config.show_raw_minutes || split_args.raw) && !split_args.no_raw;
        View::allocation(&result, show_raw_minutes, CopyStatus::None);
    }

    if split_args.copy {
        match SystemClipboard::new().copy(&result.copy_all_text()) {
            Ok(()) => msg_success!(Message::CopiedAll),
            Err(e) => msg_warning!(Message::CopyFailed(e.to_string())),
        }
    }

    Ok(())
}
