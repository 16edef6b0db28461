use crate::support::capture;
use logerr::optional::OptionalValue;
use serial_test::serial;


#[test]
fn present_and_absent_queries() {
    let present = OptionalValue::present(5);
    assert!(present.is_present());
    assert_eq!(present.reason(), None);
    assert_eq!(present.as_ref().into_option(), Some(&5));

    let absent = OptionalValue::<i32>::silent("no value");
    assert!(absent.is_absent());
    assert_eq!(absent.reason(), Some("no value"));
}

#[test]
fn map_filter_unwrap_or_scenario() {
    let result = OptionalValue::present(5).map(|x| x * 2).filter(|x| *x > 5).unwrap_or(0);
    assert_eq!(result, 10);
}

#[test]
#[serial]
fn absent_constructor_logs_once_with_call_site() {
    let (value, records) = capture(|| OptionalValue::<i32>::absent("cache miss"));
    assert_eq!(value.reason(), Some("cache miss"));
    assert_eq!(records.len(), 1);

    let record = &records[0];
    assert_eq!(record.text("reason"), Some("cache miss"));
    assert!(record.text("file").is_some_and(|file| file.ends_with("mod.rs")));
    assert!(record.number("line").is_some());
    assert!(record.message.starts_with("OptionalValue absent in "));
    assert!(record.message.ends_with(" - cache miss"));
}

#[test]
#[serial]
fn silent_and_empty_do_not_log() {
    let (_, records) = capture(|| {
        let _ = OptionalValue::<i32>::silent("quiet");
        let _ = OptionalValue::<i32>::empty();
        let _ = OptionalValue::<i32>::Absent("direct".to_string());
        let _ = OptionalValue::<i32>::default();
    });
    assert!(records.is_empty());
}

#[test]
fn empty_uses_the_empty_option_reason() {
    assert_eq!(OptionalValue::<u8>::empty().reason(), Some("Empty option"));
}

#[test]
#[serial]
fn propagation_through_combinators_is_silent() {
    let (value, records) = capture(|| {
        OptionalValue::<i32>::silent("upstream")
            .map(|x| x + 1)
            .chain(|x| OptionalValue::present(x * 2))
            .filter(|x| *x > 0)
            .filter_map(|x| Some(x - 1))
    });
    assert_eq!(value.reason(), Some("upstream"));
    assert!(records.is_empty());
}

#[test]
#[serial]
fn filter_rejection_is_a_new_logged_absence() {
    let (value, records) = capture(|| OptionalValue::present(3).filter(|x| *x > 5));
    assert_eq!(value.reason(), Some("Value did not pass filter predicate"));
    assert_eq!(records.len(), 1);
}

#[test]
#[serial]
fn filter_map_none_is_a_new_logged_absence() {
    let (value, records) = capture(|| OptionalValue::present("abc").filter_map(|s| s.parse::<i32>().ok()));
    assert_eq!(value.reason(), Some("map function returned no value"));
    assert_eq!(records.len(), 1);
}

#[test]
#[serial]
fn panicking_callbacks_become_logged_absences() {
    let (mapped, records) = capture(|| OptionalValue::present(1).map(|_| -> i32 { panic!("map exploded") }));
    assert_eq!(mapped.reason(), Some("panic: map exploded"));
    assert_eq!(records.len(), 1);

    let (chained, _) = capture(|| {
        OptionalValue::present(1).chain(|_| -> OptionalValue<i32> { panic!("chain exploded") })
    });
    assert_eq!(chained.reason(), Some("panic: chain exploded"));

    let (filtered, _) = capture(|| OptionalValue::present(1).filter(|_| panic!("predicate exploded")));
    assert_eq!(filtered.reason(), Some("panic: predicate exploded"));

    let (recovered, _) = capture(|| {
        OptionalValue::<i32>::silent("gone").or_else(|| panic!("fallback exploded"))
    });
    assert_eq!(recovered.reason(), Some("panic: fallback exploded"));
}

#[test]
fn or_else_only_runs_on_absence() {
    let kept = OptionalValue::present(1).or_else(|| OptionalValue::present(2));
    assert_eq!(kept, OptionalValue::present(1));

    let replaced = OptionalValue::<i32>::silent("missing").or_else(|| OptionalValue::present(2));
    assert_eq!(replaced, OptionalValue::present(2));
}

#[test]
fn unwrap_panics_with_reason() {
    let result = std::panic::catch_unwind(|| OptionalValue::<i32>::silent("no user").unwrap());
    let payload = result.unwrap_err();
    let message = payload.downcast_ref::<String>().unwrap();
    assert!(message.contains("no user"));
    assert!(message.contains("OptionalValue::unwrap()"));
}

#[test]
fn expect_panics_with_caller_message() {
    let result = std::panic::catch_unwind(|| OptionalValue::<i32>::silent("gone").expect("need a port"));
    let payload = result.unwrap_err();
    let message = payload.downcast_ref::<String>().unwrap();
    assert!(message.starts_with("need a port"));
}

#[test]
fn try_unwrap_returns_invalid_unwrap() {
    assert_eq!(OptionalValue::present(3).try_unwrap(), Ok(3));

    let err = OptionalValue::<i32>::silent("nothing").try_unwrap().unwrap_err();
    assert!(err.message().contains("nothing"));
}

#[test]
fn unwrap_or_else_callback_panic_surfaces_as_invalid_unwrap() {
    assert_eq!(OptionalValue::<i32>::silent("x").unwrap_or_else(|| 7), 7);

    let result = std::panic::catch_unwind(|| {
        OptionalValue::<i32>::silent("x").unwrap_or_else(|| panic!("no default"))
    });
    let payload = result.unwrap_err();
    let message = payload.downcast_ref::<String>().unwrap();
    assert!(message.contains("unwrap_or_else callback failed"));
    assert!(message.contains("no default"));
}

#[test]
fn unwrap_or_default_uses_default() {
    assert_eq!(OptionalValue::<String>::silent("x").unwrap_or_default(), String::new());
}

#[test]
#[serial]
fn ok_or_builds_a_silent_failure() {
    let (outcome, records) = capture(|| OptionalValue::<i32>::silent("missing").ok_or("no value"));
    assert_eq!(outcome.error(), Some(&"no value"));
    assert!(records.is_empty());

    let from_reason = OptionalValue::<i32>::silent("missing").ok_or_else(|reason| reason.len());
    assert_eq!(from_reason.error(), Some(&7));
}

#[test]
fn equality_and_hash_follow_variant_and_payload() {
    use std::collections::HashSet;

    assert_eq!(OptionalValue::present(1), OptionalValue::present(1));
    assert_ne!(OptionalValue::present(1), OptionalValue::present(2));
    assert_eq!(OptionalValue::<i32>::silent("a"), OptionalValue::silent("a"));
    assert_ne!(OptionalValue::<i32>::silent("a"), OptionalValue::silent("b"));

    let set: HashSet<_> =
        [OptionalValue::present(1), OptionalValue::present(1), OptionalValue::silent("x")].into();
    assert_eq!(set.len(), 2);
}

#[test]
fn absences_sort_before_present_values() {
    let mut values = vec![
        OptionalValue::present(3),
        OptionalValue::silent("b"),
        OptionalValue::present(1),
        OptionalValue::silent("a"),
    ];
    values.sort();
    assert_eq!(
        values,
        vec![
            OptionalValue::silent("a"),
            OptionalValue::silent("b"),
            OptionalValue::present(1),
            OptionalValue::present(3),
        ]
    );
}

#[test]
fn display_shows_variant_and_payload() {
    assert_eq!(OptionalValue::present(4).to_string(), "Present(4)");
    assert_eq!(OptionalValue::<i32>::silent("gone").to_string(), "Absent(gone)");
}

#[cfg(feature = "serde")]
#[test]
fn serde_round_trip_keeps_variant() {
    let value = OptionalValue::<i32>::silent("offline");
    let json = serde_json::to_string(&value).unwrap();
    assert_eq!(json, r#"{"Absent":"offline"}"#);

    let back: OptionalValue<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, value);
}
