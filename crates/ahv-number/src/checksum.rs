//! EAN-13 check digit used by AHV numbers.
//!
//! The first twelve digits are weighted 1, 3, 1, 3, ... from the left; the
//! check digit brings the weighted sum up to the next multiple of ten.

use crate::format::{AHV_DIGIT_COUNT, group_digits};

/// Number of payload digits covered by the check digit.
pub const PAYLOAD_DIGIT_COUNT: usize = AHV_DIGIT_COUNT - 1;

const WEIGHTS: [u32; 2] = [1, 3];

/// Compute the EAN-13 check digit for a twelve-digit payload.
///
/// Returns `None` unless `payload` consists of exactly
/// [`PAYLOAD_DIGIT_COUNT`] ASCII digits.
///
/// # Examples
///
/// ```
/// use ahv_number::check_digit;
///
/// assert_eq!(check_digit("756123456789"), Some(7));
/// assert_eq!(check_digit("756.1234.5678"), None);
/// ```
#[must_use]
pub fn check_digit(payload: &str) -> Option<u8> {
    let digits = payload_digits(payload)?;
    let sum = weighted_sum(digits.into_iter());
    let check = (10 - sum.rem_euclid(10)).rem_euclid(10);
    u8::try_from(check).ok()
}

/// Append the check digit to a twelve-digit payload.
///
/// Returns the thirteen bare digits, or `None` when the payload is not
/// exactly twelve ASCII digits.
///
/// # Examples
///
/// ```
/// use ahv_number::complete;
///
/// assert_eq!(complete("756123456789").as_deref(), Some("7561234567897"));
/// ```
#[must_use]
pub fn complete(payload: &str) -> Option<String> {
    let check = check_digit(payload)?;
    let mut digits = String::with_capacity(AHV_DIGIT_COUNT);
    digits.push_str(payload);
    digits.push(char::from(b'0' + check));
    Some(digits)
}

/// Like [`complete`], but returns the number in display form.
#[must_use]
pub fn complete_formatted(payload: &str) -> Option<String> {
    complete(payload).map(|digits| group_digits(&digits))
}

/// Return `true` when the last of thirteen bare digits matches the check
/// digit of the first twelve.
pub(crate) fn checksum_matches(digits: &str) -> bool {
    let mut chars = digits.chars();
    let payload: String = chars.by_ref().take(PAYLOAD_DIGIT_COUNT).collect();
    let Some(expected) = chars.next().and_then(|ch| ch.to_digit(10)) else {
        return false;
    };
    if chars.next().is_some() {
        return false;
    }
    check_digit(&payload).is_some_and(|check| u32::from(check) == expected)
}

fn payload_digits(payload: &str) -> Option<Vec<u32>> {
    if payload.len() != PAYLOAD_DIGIT_COUNT || !payload.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    payload.chars().map(|ch| ch.to_digit(10)).collect()
}

fn weighted_sum(digits: impl Iterator<Item = u32>) -> u32 {
    digits
        .zip(WEIGHTS.into_iter().cycle())
        .map(|(digit, weight)| digit * weight)
        .sum()
}
