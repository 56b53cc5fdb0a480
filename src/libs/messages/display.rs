//! Display implementation for timeshare messages.
//!
//! Keeps all message text in one place so wording stays consistent between
//! the `split` command and the interactive shell.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === SHELL MESSAGES ===
            Message::ShellTitle => "⏱ Work time split".to_string(),
            Message::PromptDuration => "Worked time (4 digits, e.g. 0123 = 1h 23m)".to_string(),
            Message::PromptWeights => "Weights, comma separated (e.g. 50,30,20)".to_string(),
            Message::DurationSummary(code, minutes) => format!("Worked time {} = {} minutes", code, minutes),
            Message::InvalidInput(reason) => format!("Please enter the worked time and weights correctly. {}", reason),
            Message::ResultsHeader => "📊 Results (HH:MM)".to_string(),
            Message::CopyAllHeader => "All times (select to copy):".to_string(),
            Message::RoundedTotalDiffers(rounded, total) => {
                format!("Rounded shares add up to {} while the worked time is {}", rounded, total)
            }

            // === TABLE HEADERS ===
            Message::ColumnTask => "TASK".to_string(),
            Message::ColumnWeight => "WEIGHT".to_string(),
            Message::ColumnTime => "TIME".to_string(),
            Message::ColumnRawMinutes => "≈ MINUTES".to_string(),

            // === ACTION MENU ===
            Message::PromptAction => "What next?".to_string(),
            Message::ActionCopyAll => "Copy all times".to_string(),
            Message::ActionCopySingle(label, clock) => format!("Copy {} ({})", label, clock),
            Message::ActionEditDuration => "Change worked time".to_string(),
            Message::ActionEditWeights => "Change weights".to_string(),
            Message::ActionRecalculate => "Calculate".to_string(),
            Message::ActionQuit => "Quit".to_string(),
            Message::CopiedBadge => "✓ copied".to_string(),

            // === CLIPBOARD MESSAGES ===
            Message::CopiedAll => "All times copied to the clipboard".to_string(),
            Message::CopiedSingle(label, clock) => format!("{} time {} copied to the clipboard", label, clock),
            Message::CopyFailed(error) => format!("Copy failed: {}", error),
            Message::CopyManually => "Select the text below and copy it manually:".to_string(),
            Message::NothingToCopy => "Nothing to copy yet, calculate first".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigWizardHeader => "Timeshare settings".to_string(),
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigNotFound => "No configuration file to remove".to_string(),
            Message::ConfigReadFailed(error) => format!("Failed to read config, using defaults: {}", error),
            Message::PromptDefaultWeights => "Default weights".to_string(),
            Message::PromptShowRawMinutes => "Show unrounded minutes next to each time?".to_string(),
            Message::PromptAutoCopy => "Copy all times automatically after each calculation?".to_string(),
        };

        write!(f, "{}", text)
    }
}
