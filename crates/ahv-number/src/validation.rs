//! AHV number validation.
//!
//! [`validate`] classifies a value in a fixed order: digit count, country
//! code, textual pattern, then checksum. The first failing check decides the
//! [`AhvErrorKind`], so every input maps to exactly one outcome.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::checksum::checksum_matches;
use crate::format::{AHV_DIGIT_COUNT, extract_digits};

/// Country code every AHV number starts with.
pub const COUNTRY_CODE: &str = "756";

/// Reasons an AHV number is rejected.
///
/// The `Display` text is suitable for showing next to the input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AhvErrorKind {
    /// Fewer than thirteen digits have been entered.
    #[error("AHV number is incomplete: 13 digits are required")]
    Incomplete,
    /// More than thirteen digits are present.
    #[error("AHV number must contain exactly 13 digits")]
    WrongLength,
    /// The digits do not start with the Swiss country code.
    #[error("AHV number must start with 756")]
    WrongCountryCode,
    /// Digits are fine but the separators are missing or misplaced.
    #[error("AHV number must be written as 756.XXXX.XXXX.XX")]
    WrongFormat,
    /// The check digit does not match the first twelve digits.
    #[error("AHV number check digit is invalid")]
    BadChecksum,
}

impl AhvErrorKind {
    /// Every failure kind, in evaluation order.
    pub const ALL: [Self; 5] = [
        Self::Incomplete,
        Self::WrongLength,
        Self::WrongCountryCode,
        Self::WrongFormat,
        Self::BadChecksum,
    ];

    /// Stable snake_case identifier for the kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use ahv_number::AhvErrorKind;
    ///
    /// assert_eq!(AhvErrorKind::BadChecksum.code(), "bad_checksum");
    /// ```
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Incomplete => "incomplete",
            Self::WrongLength => "wrong_length",
            Self::WrongCountryCode => "wrong_country_code",
            Self::WrongFormat => "wrong_format",
            Self::BadChecksum => "bad_checksum",
        }
    }
}

/// Outcome of [`validate`].
///
/// A result is valid exactly when it carries no [`AhvErrorKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValidationResult {
    error_kind: Option<AhvErrorKind>,
}

impl ValidationResult {
    /// The result for a valid number.
    pub const VALID: Self = Self { error_kind: None };

    /// Build a failed result of the given kind.
    #[must_use]
    pub const fn invalid(kind: AhvErrorKind) -> Self {
        Self {
            error_kind: Some(kind),
        }
    }

    /// Return `true` when the value passed every check.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.error_kind.is_none()
    }

    /// Return the failure kind, or `None` for a valid number.
    #[must_use]
    pub const fn error_kind(&self) -> Option<AhvErrorKind> {
        self.error_kind
    }

    /// Return the failure code, `"none"` for a valid number.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self.error_kind {
            Some(kind) => kind.code(),
            None => "none",
        }
    }

    /// Convert into a `Result`, keeping the failure kind as the error.
    ///
    /// # Errors
    ///
    /// Returns the [`AhvErrorKind`] when the result is invalid.
    pub const fn into_result(self) -> Result<(), AhvErrorKind> {
        match self.error_kind {
            Some(kind) => Err(kind),
            None => Ok(()),
        }
    }
}

impl From<Result<(), AhvErrorKind>> for ValidationResult {
    fn from(value: Result<(), AhvErrorKind>) -> Self {
        match value {
            Ok(()) => Self::VALID,
            Err(kind) => Self::invalid(kind),
        }
    }
}

static FORMATTED_RE: OnceLock<Regex> = OnceLock::new();

fn formatted_regex() -> &'static Regex {
    FORMATTED_RE.get_or_init(|| {
        // `\d` would admit non-ASCII digits.
        let pattern = format!(
            r"^{}\.[0-9]{{4}}\.[0-9]{{4}}\.[0-9]{{2}}$",
            regex::escape(COUNTRY_CODE)
        );
        Regex::new(&pattern)
            .unwrap_or_else(|error| panic!("AHV pattern regex failed to compile: {error}"))
    })
}

/// Validate a formatted (or raw) AHV number.
///
/// # Examples
///
/// ```
/// use ahv_number::{AhvErrorKind, validate};
///
/// assert!(validate("756.1234.5678.97").is_valid());
/// assert_eq!(
///     validate("755.1234.5678.97").error_kind(),
///     Some(AhvErrorKind::WrongCountryCode)
/// );
/// assert_eq!(
///     validate("7561234567897").error_kind(),
///     Some(AhvErrorKind::WrongFormat)
/// );
/// ```
#[must_use]
pub fn validate(input: &str) -> ValidationResult {
    classify(input).into()
}

fn classify(input: &str) -> Result<(), AhvErrorKind> {
    let digits = extract_digits(input);
    let count = digits.len();
    if count < AHV_DIGIT_COUNT {
        return Err(AhvErrorKind::Incomplete);
    }
    if count != AHV_DIGIT_COUNT {
        return Err(AhvErrorKind::WrongLength);
    }
    if !digits.starts_with(COUNTRY_CODE) {
        return Err(AhvErrorKind::WrongCountryCode);
    }
    if !formatted_regex().is_match(input) {
        return Err(AhvErrorKind::WrongFormat);
    }
    if !checksum_matches(&digits) {
        return Err(AhvErrorKind::BadChecksum);
    }
    Ok(())
}
