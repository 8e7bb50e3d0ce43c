//! Incremental display formatting for AHV numbers.
//!
//! Formatting keeps the first thirteen ASCII digits of the input and groups
//! them as `NNN.NNNN.NNNN.NN`. A separator is only written once a digit of
//! the following group exists, so partially typed values always render as a
//! prefix of the canonical pattern.

/// Number of digits in a complete AHV number.
pub const AHV_DIGIT_COUNT: usize = 13;

/// Length of a fully formatted AHV number, separators included.
pub const AHV_FORMATTED_LEN: usize = AHV_DIGIT_COUNT + SEPARATOR_OFFSETS.len();

/// Separator written between digit groups.
pub const SEPARATOR: char = '.';

/// Digit offsets before which a separator is written (groups of 3, 4, 4, 2).
const SEPARATOR_OFFSETS: [usize; 3] = [3, 7, 11];

/// Return every ASCII digit in `input`, in order.
pub(crate) fn extract_digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Return the first [`AHV_DIGIT_COUNT`] ASCII digits in `input`, in order.
pub(crate) fn leading_digits(input: &str) -> String {
    input
        .chars()
        .filter(char::is_ascii_digit)
        .take(AHV_DIGIT_COUNT)
        .collect()
}

/// Format arbitrary input into the AHV display pattern.
///
/// Non-digits are dropped and digits beyond the thirteenth are ignored. The
/// function is total and idempotent.
///
/// # Examples
///
/// ```
/// use ahv_number::format;
///
/// assert_eq!(format("7561234567897"), "756.1234.5678.97");
/// assert_eq!(format("756 12"), "756.12");
/// assert_eq!(format("756"), "756");
/// assert_eq!(format("abc"), "");
/// ```
#[must_use]
pub fn format(input: &str) -> String {
    group_digits(&leading_digits(input))
}

/// Insert separators into a string that already holds at most thirteen
/// digits.
pub(crate) fn group_digits(digits: &str) -> String {
    let mut formatted = String::with_capacity(AHV_FORMATTED_LEN);
    for (offset, digit) in digits.chars().enumerate() {
        if SEPARATOR_OFFSETS.contains(&offset) {
            formatted.push(SEPARATOR);
        }
        formatted.push(digit);
    }
    formatted
}

#[cfg(test)]
mod tests {
    //! Covers digit extraction and incremental grouping.

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("", "")]
    #[case("7", "7")]
    #[case("756", "756")]
    #[case("7561", "756.1")]
    #[case("7561234", "756.1234")]
    #[case("75612345", "756.1234.5")]
    #[case("75612345678", "756.1234.5678")]
    #[case("756123456789", "756.1234.5678.9")]
    #[case("7561234567897", "756.1234.5678.97")]
    fn groups_digits_incrementally(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(format(input), expected);
    }

    #[rstest]
    #[case("756.1234.5678.97", "756.1234.5678.97")]
    #[case("756-1234-5678-97", "756.1234.5678.97")]
    #[case(" 756 1234 5678 97 ", "756.1234.5678.97")]
    #[case("AHV: 756.1234", "756.1234")]
    #[case("no digits here", "")]
    fn strips_non_digit_characters(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(format(input), expected);
    }

    #[test]
    fn truncates_after_thirteen_digits() {
        assert_eq!(format("75612345678970000"), "756.1234.5678.97");
    }

    #[test]
    fn ignores_non_ascii_digits() {
        // Arabic-Indic digits are decimal in Unicode but not part of the pattern.
        assert_eq!(format("٧٥٦756"), "756");
    }

    #[test]
    fn extract_digits_keeps_every_digit() {
        assert_eq!(extract_digits("756.1234.5678.97.1"), "75612345678971");
    }

    #[test]
    fn formatted_len_matches_pattern() {
        assert_eq!(AHV_FORMATTED_LEN, "756.1234.5678.97".len());
    }
}
