//! Clipboard access as an optional, injectable capability.
//!
//! The shell copies clock values through the [`Clipboard`] trait so that
//! formatting never depends on a clipboard being present. A failed copy is
//! never fatal: callers print the text for manual selection instead.
//!
//! ## Backends
//!
//! - [`SystemClipboard`]: pipes text into the platform's clipboard tool
//!   (`pbcopy` on macOS, `clip` on Windows, `wl-copy`, `xclip` or `xsel`
//!   elsewhere), trying each candidate in order
//! - [`MemoryClipboard`]: keeps copies in memory
//! - [`NoClipboard`]: always reports [`ClipboardError::Unavailable`]

use super::error::ClipboardError;
use std::env::consts::OS;
use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};
use tracing::debug;

pub trait Clipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError>;
}

type Tool = (&'static str, &'static [&'static str]);

const MACOS_TOOLS: &[Tool] = &[("pbcopy", &[])];
const WINDOWS_TOOLS: &[Tool] = &[("clip", &[])];
const UNIX_TOOLS: &[Tool] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

/// A clipboard backed by an external command-line tool.
#[derive(Debug, Clone)]
pub struct SystemClipboard {
    candidates: &'static [Tool],
}

impl SystemClipboard {
    pub fn new() -> Self {
        let candidates = match OS {
            "macos" => MACOS_TOOLS,
            "windows" => WINDOWS_TOOLS,
            _ => UNIX_TOOLS,
        };
        Self { candidates }
    }

    fn run(tool: &str, args: &[&str], text: &str) -> Result<(), ClipboardError> {
        let spawn_error = |source| ClipboardError::Spawn {
            tool: tool.to_string(),
            source,
        };

        let mut child = Command::new(tool)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(spawn_error)?;

        // Dropping stdin closes the pipe so the tool sees EOF
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };

        let status = child.wait().map_err(spawn_error)?;
        if !status.success() {
            return Err(ClipboardError::Failed {
                tool: tool.to_string(),
                status: status.to_string(),
            });
        }
        written.map_err(spawn_error)
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut last_error = ClipboardError::Unavailable;

        for &(tool, args) in self.candidates {
            match Self::run(tool, args, text) {
                Ok(()) => {
                    debug!(tool, "copied to clipboard");
                    return Ok(());
                }
                // A missing tool just means the next candidate gets a turn
                Err(ClipboardError::Spawn { source, .. }) if source.kind() == ErrorKind::NotFound => continue,
                Err(e) => {
                    debug!(tool, error = %e, "clipboard tool failed");
                    last_error = e;
                }
            }
        }

        Err(last_error)
    }
}

/// Records every copy; useful where no system clipboard exists.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    pub history: Vec<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }
}

impl Clipboard for MemoryClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.history.push(text.to_string());
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoClipboard;

impl Clipboard for NoClipboard {
    fn copy(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable)
    }
}
