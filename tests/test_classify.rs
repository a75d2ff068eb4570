use maybe_container::{classify, classify_value, Absent, Maybe, NullLike, Present};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

#[derive(Debug, Clone, PartialEq)]
struct Temperature(f64);

impl NullLike for Temperature {
    fn is_null_like(&self) -> bool {
        self.0.is_nan()
    }
}

#[test]
fn test_classify_present_values() {
    assert!(!classify(Some(42)).is_empty());
    assert!(!classify(Some(0)).is_empty());
    assert!(!classify(Some("")).is_empty());
    assert!(!classify(Some(false)).is_empty());
    assert!(!classify(Some(Vec::<u8>::new())).is_empty());
}

#[test]
fn test_classify_absent() {
    assert!(classify::<i32>(None).is_empty());
    assert!(classify_value(Value::Null).is_empty());
}

#[test]
fn test_classify_identity_map() {
    assert_eq!(classify(Some("abc")).map(|v| v), Present("abc"));
}

#[test]
fn test_get_or_else_default_law() {
    for d in [-1, 0, 1, i32::MAX] {
        assert_eq!(classify::<i32>(None).get_or_else(d), d);
    }
    assert_eq!(classify_value(json!(null)).get_or_else(json!("fallback")), json!("fallback"));
}

#[test]
fn test_get_or_else_present_law() {
    assert_eq!(classify(Some(0)).get_or_else(99), 0);
    assert_eq!(classify(Some(String::new())).get_or_else("d".to_string()), String::new());
    assert!(!classify(Some(false)).get_or_else(true));
}

#[test]
fn test_get_or_else_null_like_stored_value() {
    // A present container still yields the default when it holds a null-like value.
    let m: Maybe<Option<i32>> = Present(None);
    assert!(!m.is_empty());
    assert_eq!(m.get_or_else(Some(7)), Some(7));

    let m: Maybe<Value> = Present(Value::Null);
    assert_eq!(m.get_or_else(json!(1)), json!(1));

    assert_eq!(Present(Some(3)).get_or_else(Some(7)), Some(3));
}

#[test]
fn test_user_defined_null_like() {
    assert_eq!(Present(Temperature(21.5)).get_or_else(Temperature(0.0)), Temperature(21.5));
    assert_eq!(Present(Temperature(f64::NAN)).get_or_else(Temperature(0.0)), Temperature(0.0));
    assert_eq!(classify_value(Temperature(f64::NAN)), Absent);
}

#[test]
fn test_option_round_trip_through_from() {
    let m: Maybe<u8> = Some(1).into();
    let back: Option<u8> = m.into();
    assert_eq!(back, Some(1));
}

#[test]
fn test_get_or_else_on_std_types() {
    use std::collections::{BTreeSet, HashSet, VecDeque};
    use std::path::PathBuf;
    use std::rc::Rc;
    use std::sync::Arc;
    use std::time::Duration;

    assert_eq!(Present(Duration::ZERO).get_or_else(Duration::from_secs(1)), Duration::ZERO);
    assert_eq!(Present(PathBuf::from("/tmp")).get_or_else(PathBuf::new()), PathBuf::from("/tmp"));
    assert_eq!(Present([0u8; 4]).get_or_else([1; 4]), [0; 4]);
    let () = Present(()).get_or_else(());
    assert_eq!(Present(HashSet::<u8>::new()).get_or_else(HashSet::from([1])), HashSet::new());
    assert_eq!(Present(BTreeSet::from([2])).get_or_else(BTreeSet::new()), BTreeSet::from([2]));
    assert_eq!(Present(VecDeque::<u8>::new()).get_or_else(VecDeque::from([1])), VecDeque::new());
    assert_eq!(Present((1, 2, 3, 4)).get_or_else((0, 0, 0, 0)), (1, 2, 3, 4));
    assert_eq!(Present(Rc::new(5)).get_or_else(Rc::new(0)), Rc::new(5));
    assert_eq!(Present(Arc::new(None::<u8>)).get_or_else(Arc::new(Some(1))), Arc::new(Some(1)));
}

#[test]
fn test_unwrap_or_keeps_null_like_value() {
    assert_eq!(Present(None::<i32>).unwrap_or(Some(7)), None);
    assert_eq!(Present(Value::Null).unwrap_or(json!(1)), Value::Null);
    assert_eq!(Maybe::<Value>::Absent.unwrap_or(json!(1)), json!(1));
}
