#[cfg(test)]
mod tests {
    use timeshare::libs::error::ValidationError;
    use timeshare::libs::split::calculate;

    #[test]
    fn test_calculate_from_clean_input() {
        let result = calculate("0123", "50,30,20").unwrap();
        assert_eq!(result.total, 83);
        assert_eq!(result.clocks(), vec!["00:42", "00:25", "00:17"]);
    }

    #[test]
    fn test_calculate_from_fullwidth_input() {
        let result = calculate("０１００", "１，１，１").unwrap();
        assert_eq!(result.clocks(), vec!["00:20", "00:20", "00:20"]);
    }

    #[test]
    fn test_calculate_ignores_noise_characters() {
        let result = calculate("01:00", "1 , x, 1").unwrap();
        assert_eq!(result.clocks(), vec!["00:30", "00:30"]);
    }

    #[test]
    fn test_calculate_negative_sign_is_stripped_by_normalizer() {
        // The normalizer drops '-', so "-5" arrives as weight 5
        let result = calculate("0100", "-5,5").unwrap();
        assert_eq!(result.clocks(), vec!["00:30", "00:30"]);
    }

    #[test]
    fn test_calculate_short_duration_is_rejected() {
        assert_eq!(calculate("123", "50,30,20"), Err(ValidationError::NoDuration));
        assert_eq!(calculate("", "50,30,20"), Err(ValidationError::NoDuration));
        assert_eq!(calculate("0000", "50,30,20"), Err(ValidationError::NoDuration));
    }

    #[test]
    fn test_calculate_without_weights_is_rejected() {
        assert_eq!(calculate("0123", ""), Err(ValidationError::NoWeights));
        assert_eq!(calculate("0123", "abc"), Err(ValidationError::NoWeights));
    }

    #[test]
    fn test_calculate_all_zero_weights_is_rejected() {
        assert_eq!(calculate("0123", "0,0"), Err(ValidationError::ZeroWeightSum));
    }
}
