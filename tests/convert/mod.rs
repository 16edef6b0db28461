use crate::support::capture;
use logerr::convert::{flatten_optional, flatten_outcome, optional_to_outcome, outcome_to_optional};
use logerr::optional::OptionalValue;
use logerr::outcome::Outcome;
use serial_test::serial;

#[test]
#[serial]
fn std_conversions_are_silent() {
    let (converted, records) = capture(|| {
        let optional: OptionalValue<i32> = None.into();
        let outcome: Outcome<i32, &str> = Err("unreachable host").into();
        (optional, outcome)
    });
    assert_eq!(converted.0.reason(), Some("Empty option"));
    assert_eq!(converted.1.error(), Some(&"unreachable host"));
    assert!(records.is_empty());
}

#[test]
fn conversions_back_to_std_types() {
    let option: Option<i32> = OptionalValue::present(1).into();
    assert_eq!(option, Some(1));

    let result: Result<i32, String> = OptionalValue::<i32>::silent("why").into();
    assert_eq!(result, Err("why".to_string()));

    let result: Result<i32, &str> = Outcome::success(2).into();
    assert_eq!(result, Ok(2));
}

#[test]
fn cross_container_helpers() {
    assert_eq!(optional_to_outcome(OptionalValue::present(1), "e"), Outcome::success(1));
    assert_eq!(
        optional_to_outcome(OptionalValue::<i32>::silent("r"), "e"),
        Outcome::silent_failure("e")
    );
    assert_eq!(outcome_to_optional(Outcome::<i32, &str>::silent_failure("bad")).reason(), Some("bad"));
}

#[test]
fn flatten_helpers_keep_outer_failure() {
    let outer = OptionalValue::<OptionalValue<i32>>::silent("outer");
    assert_eq!(flatten_optional(outer).reason(), Some("outer"));
    assert_eq!(flatten_optional(OptionalValue::present(OptionalValue::present(3))), OptionalValue::present(3));

    let nested = Outcome::<Outcome<i32, &str>, &str>::success(Outcome::silent_failure("inner"));
    assert_eq!(flatten_outcome(nested).error(), Some(&"inner"));
}
