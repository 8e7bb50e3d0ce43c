//! Formatting and validation for Swiss AHV/AVS social-insurance numbers.
//!
//! An AHV number has thirteen digits written as `756.XXXX.XXXX.XX`: the
//! Swiss country code, nine digits of payload, and an EAN-13 check digit.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Incremental display formatting of partially typed input ([`format`])
//! - Classifying a value into exactly one [`AhvErrorKind`] or valid
//!   ([`validate`])
//! - Computing check digits for twelve-digit payloads ([`check_digit`])
//! - A validated [`AhvNumber`] newtype with serde support
//! - An input-field model that hides errors until the field is touched
//!   ([`AhvField`])
//!
//! # Example
//!
//! ```
//! use ahv_number::{AhvErrorKind, format, validate};
//!
//! let formatted = format("7561234567897");
//! assert_eq!(formatted, "756.1234.5678.97");
//! assert!(validate(&formatted).is_valid());
//!
//! let result = validate("756.1234.5678.00");
//! assert_eq!(result.error_kind(), Some(AhvErrorKind::BadChecksum));
//! ```

mod checksum;
pub mod cli;
mod config;
mod field;
mod format;
mod number;
mod validation;

pub use checksum::{PAYLOAD_DIGIT_COUNT, check_digit, complete, complete_formatted};
pub use config::AhvCheckSettings;
pub use field::{AhvField, FieldStatus, Interaction};
pub use format::{AHV_DIGIT_COUNT, AHV_FORMATTED_LEN, SEPARATOR, format};
pub use number::{AhvInput, AhvNumber};
pub use validation::{AhvErrorKind, COUNTRY_CODE, ValidationResult, validate};
