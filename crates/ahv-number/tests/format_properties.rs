//! Property tests for AHV formatting, checksums and classification.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use ahv_number::{
    AHV_DIGIT_COUNT, AHV_FORMATTED_LEN, AhvErrorKind, complete, complete_formatted, format,
    validate,
};
use proptest::prelude::*;
use proptest::test_runner::Config;

fn digits_of(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn formatting_is_idempotent(input in ".{0,40}") {
        let once = format(&input);
        prop_assert_eq!(format(&once), once);
    }

    #[test]
    fn formatting_preserves_leading_digits(input in ".{0,40}") {
        let expected: String = digits_of(&input).chars().take(AHV_DIGIT_COUNT).collect();
        prop_assert_eq!(digits_of(&format(&input)), expected);
    }

    #[test]
    fn non_ascii_digits_never_reach_the_output(input in "[0-9\u{660}-\u{669}\u{966}-\u{96f}\u{ff10}-\u{ff19} .]{0,40}") {
        let output = format(&input);
        prop_assert!(output.chars().all(|ch| ch.is_ascii_digit() || ch == '.'));
        let expected: String = digits_of(&input).chars().take(AHV_DIGIT_COUNT).collect();
        prop_assert_eq!(digits_of(&output), expected);
    }

    #[test]
    fn formatted_length_is_bounded(input in ".{0,64}") {
        prop_assert!(format(&input).len() <= AHV_FORMATTED_LEN);
    }

    #[test]
    fn completed_payloads_validate(tail in "[0-9]{9}") {
        let payload = format!("756{tail}");
        let formatted = complete_formatted(&payload).expect("payload is twelve digits");
        let result = validate(&formatted);
        prop_assert!(result.is_valid(), "{} rejected: {:?}", formatted, result);
    }

    #[test]
    fn any_other_final_digit_fails_the_checksum(tail in "[0-9]{9}", offset in 1_u32..10) {
        let payload = format!("756{tail}");
        let digits = complete(&payload).expect("payload is twelve digits");
        let check = digits.chars().last().and_then(|ch| ch.to_digit(10)).expect("check digit");
        let wrong = char::from_digit((check + offset).rem_euclid(10), 10).expect("single digit");
        let tampered = format(&format!("{payload}{wrong}"));
        prop_assert_eq!(validate(&tampered).error_kind(), Some(AhvErrorKind::BadChecksum));
    }

    #[test]
    fn validity_matches_absent_error_kind(input in "[0-9.]{0,20}") {
        let result = validate(&input);
        prop_assert_eq!(result.is_valid(), result.error_kind().is_none());
        prop_assert_eq!(result.is_valid(), result.error_code() == "none");
    }

    #[test]
    fn short_inputs_are_incomplete(input in "[0-9]{0,12}") {
        prop_assert_eq!(validate(&input).error_kind(), Some(AhvErrorKind::Incomplete));
    }
}
