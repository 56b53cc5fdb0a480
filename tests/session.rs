#[cfg(test)]
mod tests {
    use timeshare::libs::clipboard::{Clipboard, MemoryClipboard, NoClipboard};
    use timeshare::libs::error::{ClipboardError, ValidationError};
    use timeshare::libs::session::{CopyStatus, CopyTarget, Session};

    fn calculated_session() -> Session {
        let mut session = Session::new("50,30,20");
        session.edit_duration("0123");
        session.calculate().unwrap();
        session
    }

    #[test]
    fn test_new_session_prefills_normalized_weights() {
        let session = Session::new("５０，５０");
        assert_eq!(session.weights_input(), "50,50");
        assert_eq!(session.duration_input(), "");
        assert!(session.last_result().is_none());
        assert_eq!(session.copy_status(), CopyStatus::None);
    }

    #[test]
    fn test_edit_duration_normalizes_and_triggers_when_complete() {
        let mut session = Session::new("");

        assert_eq!(session.edit_duration("01"), "01");
        assert!(!session.take_auto_calculate());

        assert_eq!(session.edit_duration("０１２３４"), "0123");
        assert!(session.take_auto_calculate());
        // The flag is consumed
        assert!(!session.take_auto_calculate());
    }

    #[test]
    fn test_edit_weights_triggers_on_separator() {
        let mut session = Session::new("");

        session.edit_weights("50");
        assert!(!session.take_auto_calculate());

        assert_eq!(session.edit_weights("50，50"), "50,50");
        assert!(session.take_auto_calculate());
    }

    #[test]
    fn test_successful_calculation_is_kept() {
        let session = calculated_session();
        let result = session.last_result().unwrap();
        assert_eq!(result.clocks(), vec!["00:42", "00:25", "00:17"]);
    }

    #[test]
    fn test_failed_calculation_clears_last_result() {
        let mut session = calculated_session();

        session.edit_weights("0,0");
        assert_eq!(session.calculate().unwrap_err(), ValidationError::ZeroWeightSum);
        assert!(session.last_result().is_none());
    }

    #[test]
    fn test_new_calculation_replaces_result_and_resets_copy_status() {
        let mut session = calculated_session();
        let mut clipboard = MemoryClipboard::new();
        session.copy(CopyTarget::All, &mut clipboard).unwrap();
        assert_eq!(session.copy_status(), CopyStatus::All);

        session.edit_duration("0100");
        session.edit_weights("1,1,1");
        session.calculate().unwrap();

        assert_eq!(session.copy_status(), CopyStatus::None);
        assert_eq!(session.last_result().unwrap().clocks(), vec!["00:20", "00:20", "00:20"]);
    }

    #[test]
    fn test_copy_all_writes_every_clock() {
        let mut session = calculated_session();
        let mut clipboard = MemoryClipboard::new();

        let copied = session.copy(CopyTarget::All, &mut clipboard).unwrap();

        assert_eq!(copied.as_deref(), Some("00:42\n00:25\n00:17"));
        assert_eq!(clipboard.last(), Some("00:42\n00:25\n00:17"));
        assert_eq!(session.copy_status(), CopyStatus::All);
    }

    #[test]
    fn test_copy_single_tracks_which_task() {
        let mut session = calculated_session();
        let mut clipboard = MemoryClipboard::new();

        let copied = session.copy(CopyTarget::Single(2), &mut clipboard).unwrap();

        assert_eq!(copied.as_deref(), Some("00:25"));
        assert_eq!(session.copy_status(), CopyStatus::Single(2));
    }

    #[test]
    fn test_copy_unknown_task_copies_nothing() {
        let mut session = calculated_session();
        let mut clipboard = MemoryClipboard::new();

        assert_eq!(session.copy(CopyTarget::Single(9), &mut clipboard).unwrap(), None);
        assert!(clipboard.history.is_empty());
        assert_eq!(session.copy_status(), CopyStatus::None);
    }

    #[test]
    fn test_copy_before_calculation_copies_nothing() {
        let mut session = Session::new("1,1");
        let mut clipboard = MemoryClipboard::new();

        assert_eq!(session.copy(CopyTarget::All, &mut clipboard).unwrap(), None);
        assert!(clipboard.history.is_empty());
    }

    #[test]
    fn test_clipboard_failure_returns_text_for_manual_copy() {
        let mut session = calculated_session();
        let mut clipboard = NoClipboard;

        let failure = session.copy(CopyTarget::All, &mut clipboard).unwrap_err();

        assert!(matches!(failure.error, ClipboardError::Unavailable));
        assert_eq!(failure.text, "00:42\n00:25\n00:17");
        assert_eq!(session.copy_status(), CopyStatus::None);
        assert!(session.last_result().is_some());
    }

    #[test]
    fn test_no_clipboard_always_fails() {
        assert!(NoClipboard.copy("00:10").is_err());
    }
}
