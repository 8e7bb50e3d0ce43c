//! Behavioural tests for AHV number formatting, validation and field state.
//!
//! These tests bind the Gherkin scenarios in
//! `tests/features/ahv_validation.feature`.

// `expect` is idiomatic in test code for failing fast on precondition violations.
#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use ahv_number::{AhvErrorKind, AhvField, ValidationResult, format, validate};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};

/// Test world holding the input under test and the latest outcomes.
#[derive(Default, ScenarioState)]
struct World {
    raw_input: Slot<String>,
    formatted: Slot<String>,
    result: Slot<ValidationResult>,
    field: Slot<AhvField>,
}

impl World {
    fn raw_input(&self) -> String {
        self.raw_input.get().expect("raw input should be set")
    }

    fn formatted(&self) -> String {
        self.formatted.get().expect("input should be formatted")
    }

    fn result(&self) -> ValidationResult {
        self.result.get().expect("value should be validated")
    }

    fn field(&self) -> AhvField {
        self.field.get().expect("field should be set")
    }

    fn update_field(&self, update: impl FnOnce(&mut AhvField)) {
        let mut field = self.field();
        update(&mut field);
        self.field.set(field);
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

fn unquote(value: &str) -> &str {
    value.trim_matches('"')
}

fn kind_from_code(code: &str) -> AhvErrorKind {
    AhvErrorKind::ALL
        .into_iter()
        .find(|kind| kind.code() == code)
        .unwrap_or_else(|| panic!("unknown error kind {code}"))
}

// ============================================================================
// Given steps
// ============================================================================

#[given("the user entered {input}")]
fn the_user_entered(world: &World, input: String) {
    world.raw_input.set(unquote(&input).to_owned());
}

#[given("an optional AHV field")]
fn an_optional_ahv_field(world: &World) {
    world.field.set(AhvField::new(None));
}

// ============================================================================
// When steps
// ============================================================================

#[when("the input is formatted")]
fn the_input_is_formatted(world: &World) {
    world.formatted.set(format(&world.raw_input()));
}

#[when("the formatted value is validated")]
fn the_formatted_value_is_validated(world: &World) {
    world.result.set(validate(&world.formatted()));
}

#[when("the raw input is validated")]
fn the_raw_input_is_validated(world: &World) {
    world.result.set(validate(&world.raw_input()));
}

#[when("the user types {input}")]
fn the_user_types(world: &World, input: String) {
    world.update_field(|field| field.edit(unquote(&input)));
}

#[when("the field loses focus")]
fn the_field_loses_focus(world: &World) {
    world.update_field(AhvField::blur);
}

// ============================================================================
// Then steps
// ============================================================================

#[then("the display value is {expected}")]
fn the_display_value_is(world: &World, expected: String) {
    assert_eq!(world.formatted(), unquote(&expected));
}

#[then("the value is valid")]
fn the_value_is_valid(world: &World) {
    let result = world.result();
    assert!(result.is_valid(), "expected a valid number, got {result:?}");
    assert_eq!(result.error_kind(), None);
}

#[then("validation fails with {code}")]
fn validation_fails_with(world: &World, code: String) {
    let result = world.result();
    assert!(!result.is_valid());
    assert_eq!(result.error_kind(), Some(kind_from_code(unquote(&code))));
}

#[then("no error is shown")]
fn no_error_is_shown(world: &World) {
    assert_eq!(world.field().visible_error(), None);
}

#[then("the error shown is {code}")]
fn the_error_shown_is(world: &World, code: String) {
    assert_eq!(
        world.field().visible_error(),
        Some(kind_from_code(unquote(&code)))
    );
}

#[then("the field commits {number}")]
fn the_field_commits(world: &World, number: String) {
    let committed = world.field().committed().expect("field should commit");
    assert_eq!(committed.as_str(), unquote(&number));
}

// ============================================================================
// Scenario bindings
// ============================================================================

#[scenario(
    path = "tests/features/ahv_validation.feature",
    name = "Raw digits are formatted and accepted"
)]
fn raw_digits_are_formatted_and_accepted(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/ahv_validation.feature",
    name = "Wrong country code is rejected"
)]
fn wrong_country_code_is_rejected(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/ahv_validation.feature",
    name = "Eleven digits are incomplete"
)]
fn eleven_digits_are_incomplete(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/ahv_validation.feature",
    name = "Non-digit characters are dropped before counting"
)]
fn non_digit_characters_are_dropped_before_counting(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/ahv_validation.feature",
    name = "A wrong check digit is rejected"
)]
fn a_wrong_check_digit_is_rejected(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/ahv_validation.feature",
    name = "Unformatted digits fail the pattern check"
)]
fn unformatted_digits_fail_the_pattern_check(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/ahv_validation.feature",
    name = "Errors stay hidden until the field loses focus"
)]
fn errors_stay_hidden_until_the_field_loses_focus(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/ahv_validation.feature",
    name = "A completed field commits the number"
)]
fn a_completed_field_commits_the_number(world: World) {
    let _ = world;
}
