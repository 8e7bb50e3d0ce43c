//! AHV number value types.
//!
//! [`AhvInput`] models what the user has typed so far and derives the digit
//! and display views from it. [`AhvNumber`] can only hold a canonical,
//! checksum-valid number.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::format::{extract_digits, group_digits, leading_digits};
use crate::validation::{AhvErrorKind, ValidationResult, validate};

/// Transient view of user-entered AHV input.
///
/// ## Invariants
/// - `digits` holds the first thirteen ASCII digits of `raw`.
/// - `formatted` is always `digits` grouped as `NNN.NNNN.NNNN.NN`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AhvInput {
    raw: String,
    digits: String,
    formatted: String,
}

impl AhvInput {
    /// Build the input view for `raw`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ahv_number::AhvInput;
    ///
    /// let input = AhvInput::new("756-1234");
    /// assert_eq!(input.digits(), "7561234");
    /// assert_eq!(input.formatted(), "756.1234");
    /// ```
    #[must_use]
    pub fn new(raw_input: impl Into<String>) -> Self {
        let raw = raw_input.into();
        let digits = leading_digits(&raw);
        let formatted = group_digits(&digits);
        Self {
            raw,
            digits,
            formatted,
        }
    }

    /// Return a new input with `ch` appended to the raw text.
    ///
    /// # Examples
    ///
    /// ```
    /// use ahv_number::AhvInput;
    ///
    /// let input = "7561".chars().fold(AhvInput::default(), |input, ch| input.push(ch));
    /// assert_eq!(input.formatted(), "756.1");
    /// ```
    #[must_use]
    pub fn push(&self, ch: char) -> Self {
        let mut raw = String::with_capacity(self.raw.len() + ch.len_utf8());
        raw.push_str(&self.raw);
        raw.push(ch);
        Self::new(raw)
    }

    /// The text exactly as typed.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Up to thirteen digits taken from the raw text.
    #[must_use]
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// The digits in display form.
    #[must_use]
    pub fn formatted(&self) -> &str {
        &self.formatted
    }

    /// Return `true` when no digit has been entered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Validate the formatted view.
    #[must_use]
    pub fn validate(&self) -> ValidationResult {
        validate(&self.formatted)
    }

    /// Convert into a validated [`AhvNumber`].
    ///
    /// Raw digits beyond the thirteenth are reported as
    /// [`AhvErrorKind::WrongLength`] rather than silently truncated.
    ///
    /// # Errors
    ///
    /// Returns the [`AhvErrorKind`] describing why the input is not a valid
    /// AHV number.
    pub fn to_number(&self) -> Result<AhvNumber, AhvErrorKind> {
        if extract_digits(&self.raw).len() > self.digits.len() {
            return Err(AhvErrorKind::WrongLength);
        }
        AhvNumber::new(self.formatted.clone())
    }
}

impl From<&str> for AhvInput {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A checksum-valid AHV number in canonical `756.XXXX.XXXX.XX` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AhvNumber(String);

impl AhvNumber {
    /// Validate and construct an [`AhvNumber`] from its formatted text.
    ///
    /// # Errors
    ///
    /// Returns the [`AhvErrorKind`] reported by [`validate`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ahv_number::{AhvErrorKind, AhvNumber};
    ///
    /// let number = AhvNumber::new("756.1234.5678.97").expect("valid number");
    /// assert_eq!(number.digits(), "7561234567897");
    ///
    /// assert_eq!(
    ///     AhvNumber::new("756.1234.5678.00"),
    ///     Err(AhvErrorKind::BadChecksum)
    /// );
    /// ```
    pub fn new(value: impl Into<String>) -> Result<Self, AhvErrorKind> {
        Self::from_owned(value.into())
    }

    fn from_owned(value: String) -> Result<Self, AhvErrorKind> {
        validate(&value).into_result()?;
        Ok(Self(value))
    }

    /// The number in display form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// The thirteen digits without separators.
    #[must_use]
    pub fn digits(&self) -> String {
        extract_digits(&self.0)
    }
}

impl AsRef<str> for AhvNumber {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for AhvNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AhvNumber {
    type Err = AhvErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<AhvNumber> for String {
    fn from(value: AhvNumber) -> Self {
        value.0
    }
}

impl TryFrom<String> for AhvNumber {
    type Error = AhvErrorKind;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}
