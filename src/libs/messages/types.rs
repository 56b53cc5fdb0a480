//! Every user-facing message timeshare can print.
//!
//! Text lives in the `Display` impl in `display.rs`; call sites only pick a
//! variant and pass its parameters.

#[derive(Debug, Clone)]
pub enum Message {
    // === SHELL MESSAGES ===
    ShellTitle,
    PromptDuration,
    PromptWeights,
    DurationSummary(String, u32), // code, minutes
    InvalidInput(String),         // validation error
    ResultsHeader,
    CopyAllHeader,
    RoundedTotalDiffers(String, String), // rounded sum, total

    // === TABLE HEADERS ===
    ColumnTask,
    ColumnWeight,
    ColumnTime,
    ColumnRawMinutes,

    // === ACTION MENU ===
    PromptAction,
    ActionCopyAll,
    ActionCopySingle(String, String), // label, clock
    ActionEditDuration,
    ActionEditWeights,
    ActionRecalculate,
    ActionQuit,
    CopiedBadge,

    // === CLIPBOARD MESSAGES ===
    CopiedAll,
    CopiedSingle(String, String), // label, clock
    CopyFailed(String),           // error
    CopyManually,
    NothingToCopy,

    // === CONFIGURATION MESSAGES ===
    ConfigWizardHeader,
    ConfigSaved,
    ConfigDeleted,
    ConfigNotFound,
    ConfigReadFailed(String), // error
    PromptDefaultWeights,
    PromptShowRawMinutes,
    PromptAutoCopy,
}
