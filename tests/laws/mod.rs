use logerr::optional::{self, OptionalValue};
use logerr::outcome::{self, Outcome};
use proptest::prelude::*;
use std::cmp::Ordering;

fn halve(x: i32) -> OptionalValue<i32> {
    if x % 2 == 0 {
        OptionalValue::present(x / 2)
    } else {
        OptionalValue::silent("odd")
    }
}

fn checked_double(x: i32) -> Outcome<i32, String> {
    match x.checked_mul(2) {
        Some(doubled) => Outcome::success(doubled),
        None => Outcome::silent_failure("overflow".to_string()),
    }
}

proptest! {
    #[test]
    fn optional_right_identity(v in any::<i32>()) {
        prop_assert_eq!(OptionalValue::present(v).chain(OptionalValue::present), OptionalValue::present(v));
    }

    #[test]
    fn optional_left_identity(v in any::<i32>()) {
        prop_assert_eq!(OptionalValue::present(v).chain(halve), halve(v));
    }

    #[test]
    fn outcome_identities(v in any::<i32>()) {
        prop_assert_eq!(Outcome::<i32, String>::success(v).chain(Outcome::success), Outcome::success(v));
        prop_assert_eq!(Outcome::<i32, String>::success(v).chain(checked_double), checked_double(v));
    }

    #[test]
    fn absence_absorbs_combinators(reason in "[a-z ]{0,16}") {
        let absent = OptionalValue::<i32>::silent(reason.clone());
        prop_assert!(absent.clone().map(|x| x + 1).is_absent());
        let chained = absent.clone().chain(halve);
        prop_assert_eq!(chained.reason(), Some(reason.as_str()));
        prop_assert!(absent.filter(|_| true).is_absent());
    }

    #[test]
    fn failure_absorbs_combinators(error in "[a-z ]{0,16}") {
        let failed = Outcome::<i32, String>::silent_failure(error.clone());
        let mapped = failed.clone().map(|x| x + 1);
        prop_assert_eq!(mapped.error(), Some(&error));
        let chained = failed.chain(checked_double);
        prop_assert_eq!(chained.error(), Some(&error));
    }

    #[test]
    fn present_values_order_like_their_contents(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(OptionalValue::present(a).cmp(&OptionalValue::present(b)), a.cmp(&b));
        prop_assert_eq!(Outcome::<i32, String>::success(a).cmp(&Outcome::success(b)), a.cmp(&b));
    }

    #[test]
    fn absences_are_mutually_equal_and_below_values(r1 in ".{0,8}", r2 in ".{0,8}", v in any::<i32>()) {
        let (a1, a2) = (OptionalValue::<i32>::silent(r1.clone()), OptionalValue::<i32>::silent(r2.clone()));
        prop_assert_eq!(a1.cmp_by_presence(&a2), Ordering::Equal);
        prop_assert!(a1 < OptionalValue::present(v));

        let (f1, f2) = (Outcome::<i32, String>::silent_failure(r1), Outcome::<i32, String>::silent_failure(r2));
        prop_assert_eq!(f1.cmp_by_success(&f2), Ordering::Equal);
        prop_assert!(f2 < Outcome::success(v));
    }

    #[test]
    fn unwrap_or_keeps_present_value(v in any::<i64>(), default in any::<i64>()) {
        prop_assert_eq!(OptionalValue::present(v).unwrap_or(default), v);
        prop_assert_eq!(Outcome::<i64, String>::success(v).unwrap_or(default), v);
    }

    #[test]
    fn from_nullable_round_trips(x in proptest::option::of(any::<u16>()), default in any::<u16>()) {
        prop_assert_eq!(optional::from_nullable(x).unwrap_or(default), x.unwrap_or(default));
    }

    #[test]
    fn from_predicate_succeeds_iff_predicate_holds(v in any::<i32>(), threshold in any::<i32>()) {
        let checked = outcome::from_predicate(v, |x| *x > threshold, "too small".to_string());
        prop_assert_eq!(checked.is_success(), v > threshold);
        if checked.is_failure() {
            prop_assert_eq!(checked.error().map(String::as_str), Some("too small"));
        }
    }
}
