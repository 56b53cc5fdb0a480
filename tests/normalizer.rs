#[cfg(test)]
mod tests {
    use timeshare::libs::normalizer::{normalize, CharacterClass};

    #[test]
    fn test_duration_keeps_ascii_digits() {
        assert_eq!(normalize("0123", CharacterClass::Duration), "0123");
        assert_eq!(normalize("01:23", CharacterClass::Duration), "0123");
        assert_eq!(normalize("abc", CharacterClass::Duration), "");
    }

    #[test]
    fn test_duration_folds_fullwidth_digits() {
        assert_eq!(normalize("０１２３", CharacterClass::Duration), "0123");
        assert_eq!(normalize("０1２3", CharacterClass::Duration), "0123");
    }

    #[test]
    fn test_duration_truncates_to_four() {
        assert_eq!(normalize("012345", CharacterClass::Duration), "0123");
        assert_eq!(normalize("１２３４５６", CharacterClass::Duration), "1234");
    }

    #[test]
    fn test_duration_drops_separators() {
        assert_eq!(normalize("1.5", CharacterClass::Duration), "15");
        assert_eq!(normalize("12,34", CharacterClass::Duration), "1234");
        assert_eq!(normalize("１２，３４", CharacterClass::Duration), "1234");
    }

    #[test]
    fn test_weights_keep_digits_dots_and_commas() {
        assert_eq!(normalize("50, 30, 20", CharacterClass::Weights), "50,30,20");
        assert_eq!(normalize("0.5,1.5", CharacterClass::Weights), "0.5,1.5");
        assert_eq!(normalize("-5,30", CharacterClass::Weights), "5,30");
        assert_eq!(normalize("a,b", CharacterClass::Weights), ",");
    }

    #[test]
    fn test_weights_fold_fullwidth_digits_and_comma() {
        assert_eq!(normalize("５０，３０，２０", CharacterClass::Weights), "50,30,20");
    }

    #[test]
    fn test_weights_have_no_length_cap() {
        let raw = "10,".repeat(20);
        assert_eq!(normalize(&raw, CharacterClass::Weights), raw);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize("", CharacterClass::Duration), "");
        assert_eq!(normalize("", CharacterClass::Weights), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let samples = ["", "0123", "０１２３４", "1h 2m", "５０，３０，２０", "-1.5,,x,2", "9999999", "，，．"];
        for class in [CharacterClass::Duration, CharacterClass::Weights] {
            for sample in samples {
                let once = normalize(sample, class);
                assert_eq!(normalize(&once, class), once, "{:?} on {:?}", class, sample);
            }
        }
    }
}
