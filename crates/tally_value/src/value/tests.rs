use super::*;
use pretty_assertions::assert_eq;
use rustc_hash::FxHasher;

fn fx(value: &Value) -> u64 {
    let mut hasher = FxHasher::default();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn test_factory_methods() {
    let s = Value::string("hello");
    assert_eq!(s.as_str(), Some("hello"));

    let list = Value::list(vec![Value::int(1), Value::int(2)]);
    assert_eq!(list.as_list().map(<[Value]>::len), Some(2));

    assert_eq!(Value::tuple(vec![]).as_list(), None);
    assert!(Value::Null.is_null());
    assert!(!Value::Unit.is_null());
}

#[test]
fn test_conversions() {
    assert_eq!(Value::from(3i32), Value::int(3i64));
    assert_eq!(Value::from("x"), Value::string("x"));
    assert_eq!(Value::from(None::<i32>), Value::Null);
    assert_eq!(Value::from(Some(true)), Value::Bool(true));
}

#[test]
fn test_default_equality_is_ordered() {
    let a = Value::list(vec![Value::int(1), Value::int(2)]);
    let b = Value::list(vec![Value::int(2), Value::int(1)]);
    assert_ne!(a, b);
    assert_eq!(a, a.clone());
}

#[test]
fn test_variants_never_cross_compare() {
    assert_ne!(Value::int(1), Value::Float(1.0));
    assert_ne!(Value::Null, Value::Unit);
    assert_ne!(
        Value::list(vec![Value::int(1)]),
        Value::tuple(vec![Value::int(1)])
    );
    assert_ne!(Value::string("1"), Value::int(1));
}

#[test]
fn test_float_equality_is_lawful() {
    let nan = Value::Float(f64::NAN);
    assert_eq!(nan, nan.clone());
    assert_eq!(nan, Value::Float(-f64::NAN));
    assert_eq!(fx(&nan), fx(&Value::Float(-f64::NAN)));

    assert_eq!(Value::Float(0.0), Value::Float(-0.0));
    assert_eq!(fx(&Value::Float(0.0)), fx(&Value::Float(-0.0)));

    assert_ne!(Value::Float(1.0), Value::Float(1.5));
}

#[test]
fn test_decimal_values_compare_numerically() {
    let a: Decimal = "2.50".parse().unwrap();
    let b: Decimal = "2.5".parse().unwrap();
    assert_eq!(Value::from(a), Value::from(b));
    assert_eq!(fx(&Value::from(a)), fx(&Value::from(b)));
}

#[test]
fn test_timestamp_and_duration() {
    let t1 = Value::timestamp_millis(1_700_000_000_000);
    let t2 = Value::timestamp_millis(1_700_000_000_000);
    assert!(t1.is_some());
    assert_eq!(t1, t2);
    assert_ne!(t1, Value::timestamp_millis(0));
    assert_eq!(Value::timestamp_millis(i64::MAX), None);

    assert_eq!(Value::duration_millis(-250), Value::duration_millis(-250));
    assert_ne!(Value::duration_millis(250), Value::duration_millis(-250));
}

#[test]
fn test_record_equality_ignores_construction_order() {
    let a = Value::record("Point", vec![("x", Value::int(1)), ("y", Value::int(2))]);
    let b = Value::record("Point", vec![("y", Value::int(2)), ("x", Value::int(1))]);
    let c = Value::record("Other", vec![("x", Value::int(1)), ("y", Value::int(2))]);
    assert_eq!(a, b);
    assert_eq!(fx(&a), fx(&b));
    assert_ne!(a, c);
}

#[test]
fn test_display() {
    assert_eq!(Value::int(42).to_string(), "42");
    assert_eq!(Value::string("hi").to_string(), "\"hi\"");
    assert_eq!(
        Value::list(vec![Value::Bool(true), Value::Null]).to_string(),
        "[true, null]"
    );
    assert_eq!(
        Value::tuple(vec![Value::Char('a'), Value::Unit]).to_string(),
        "('a', ())"
    );
    assert_eq!(
        Value::record("P", vec![("b", Value::int(2)), ("a", Value::int(1))]).to_string(),
        "P { a: 1, b: 2 }"
    );
}

#[test]
fn test_type_name() {
    assert_eq!(Value::Null.type_name(), "null");
    assert_eq!(Value::list(vec![]).type_name(), "list");
    assert_eq!(Value::Decimal(Decimal::from_int(0)).type_name(), "decimal");
}
