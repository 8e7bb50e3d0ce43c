//! Presentation state for an AHV input field.
//!
//! Errors stay hidden until the user has left the field once. After that the
//! field reports [`FieldStatus::TouchedValid`] or
//! [`FieldStatus::TouchedInvalid`] on every edit. Values pushed in from the
//! owning form are adopted only when they differ from the last one seen, so
//! re-rendering with an unchanged prop never clobbers local edits.

use crate::number::{AhvInput, AhvNumber};
use crate::validation::{AhvErrorKind, ValidationResult};

/// Whether the user has interacted with the field yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Interaction {
    /// The field has not lost focus since it was created.
    #[default]
    Pristine,
    /// The field has lost focus at least once.
    Touched,
}

/// What the field should display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    /// No feedback yet.
    Untouched,
    /// Touched and acceptable.
    TouchedValid,
    /// Touched and rejected for the given reason.
    TouchedInvalid(AhvErrorKind),
}

/// Local state owned by one AHV input field.
#[derive(Debug, Clone, Default)]
pub struct AhvField {
    input: AhvInput,
    interaction: Interaction,
    last_external: Option<String>,
    required: bool,
}

impl AhvField {
    /// Create an optional field seeded with the external value, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use ahv_number::{AhvField, FieldStatus};
    ///
    /// let mut field = AhvField::new(None);
    /// field.edit("7561234");
    /// assert_eq!(field.status(), FieldStatus::Untouched);
    ///
    /// field.blur();
    /// assert!(field.visible_error().is_some());
    /// ```
    #[must_use]
    pub fn new(external: Option<&str>) -> Self {
        let mut field = Self::default();
        field.sync_external(external);
        field
    }

    /// Mark the field as required; an empty touched field is then invalid.
    #[must_use]
    pub const fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Replace the current value with freshly typed text.
    pub fn edit(&mut self, raw: &str) {
        self.input = AhvInput::new(raw);
    }

    /// Record that the field lost focus.
    pub const fn blur(&mut self) {
        self.interaction = Interaction::Touched;
    }

    /// Adopt `external` when it changed since the last call.
    ///
    /// Returns `true` when the current value was replaced.
    pub fn sync_external(&mut self, external: Option<&str>) -> bool {
        if self.last_external.as_deref() == external {
            return false;
        }
        self.last_external = external.map(str::to_owned);
        self.input = AhvInput::new(external.unwrap_or_default());
        true
    }

    /// The current input.
    #[must_use]
    pub const fn input(&self) -> &AhvInput {
        &self.input
    }

    /// The current interaction state.
    #[must_use]
    pub const fn interaction(&self) -> Interaction {
        self.interaction
    }

    /// Presentation status for the current value.
    #[must_use]
    pub fn status(&self) -> FieldStatus {
        if self.interaction == Interaction::Pristine {
            return FieldStatus::Untouched;
        }
        if self.input.is_empty() {
            return if self.required {
                FieldStatus::TouchedInvalid(AhvErrorKind::Incomplete)
            } else {
                FieldStatus::TouchedValid
            };
        }
        // Same rule as `committed`: raw digits past the thirteenth are an
        // error even though the display truncates them.
        match ValidationResult::from(self.input.to_number().map(drop)).error_kind() {
            Some(kind) => FieldStatus::TouchedInvalid(kind),
            None => FieldStatus::TouchedValid,
        }
    }

    /// The error to show, if any.
    #[must_use]
    pub fn visible_error(&self) -> Option<AhvErrorKind> {
        match self.status() {
            FieldStatus::TouchedInvalid(kind) => Some(kind),
            FieldStatus::Untouched | FieldStatus::TouchedValid => None,
        }
    }

    /// The validated number, when the current value is one.
    ///
    /// Returns `Some` exactly when a non-empty field would be reported as
    /// [`FieldStatus::TouchedValid`] once touched.
    #[must_use]
    pub fn committed(&self) -> Option<AhvNumber> {
        self.input.to_number().ok()
    }
}
