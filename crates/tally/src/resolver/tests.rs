use super::*;
use pretty_assertions::assert_eq;
use tally_value::Decimal;

fn ints(xs: &[i64]) -> Value {
    Value::list(xs.iter().copied().map(Value::int).collect())
}

fn strs(xs: &[&str]) -> Value {
    Value::list(xs.iter().copied().map(Value::string).collect())
}

#[test]
fn test_textual_compares_content() {
    let types = TypeInterner::new();
    let r = Resolver::new(&types);

    // Distinct allocations with the same content.
    let a = Value::string(String::from("abc"));
    let b = Value::string("ab".to_string() + "c");
    assert!(r.type_equal(&a, &b, TypeId::STR));
    assert!(!r.type_equal(&a, &Value::string("abd"), TypeId::STR));
    assert_eq!(
        r.type_hash_code(&a, TypeId::STR),
        r.type_hash_code(&b, TypeId::STR)
    );
    assert_eq!(r.type_hash_code(&a, TypeId::STR), fx_hash("abc"));
}

#[test]
fn test_scalar_delegates_to_value() {
    let types = TypeInterner::new();
    let r = Resolver::new(&types);

    assert!(r.type_equal(&Value::int(7), &Value::int(7), TypeId::I64));
    assert!(!r.type_equal(&Value::int(7), &Value::int(8), TypeId::I32));
    assert!(r.type_equal(&Value::Bool(true), &Value::Bool(true), TypeId::BOOL));

    let nan = Value::float(f64::NAN);
    assert!(r.type_equal(&nan, &nan, TypeId::F64));

    let d1: Decimal = "1.50".parse().unwrap();
    let d2: Decimal = "1.5".parse().unwrap();
    let (d1, d2) = (Value::from(d1), Value::from(d2));
    assert!(r.type_equal(&d1, &d2, TypeId::DECIMAL));
    assert_eq!(
        r.type_hash_code(&d1, TypeId::DECIMAL),
        r.type_hash_code(&d2, TypeId::DECIMAL)
    );

    let t = Value::timestamp_millis(86_400_000).unwrap();
    assert!(r.type_equal(&t, &t.clone(), TypeId::TIMESTAMP));
    assert!(r.type_equal(
        &Value::duration_millis(5),
        &Value::duration_millis(5),
        TypeId::DURATION
    ));
}

#[test]
fn test_sequence_is_multiset() {
    let types = TypeInterner::new();
    let r = Resolver::new(&types);
    let ty = types.iterable(TypeId::I32);

    assert!(r.type_equal(&ints(&[1, 2, 3]), &ints(&[3, 1, 2]), ty));
    assert!(!r.type_equal(&ints(&[1, 1, 2]), &ints(&[1, 2, 2]), ty));
    assert!(!r.type_equal(&ints(&[1]), &ints(&[1, 1]), ty));
    assert!(r.type_equal(&ints(&[]), &ints(&[]), ty));
    assert_eq!(
        r.type_hash_code(&ints(&[1, 2, 3]), ty),
        r.type_hash_code(&ints(&[2, 3, 1]), ty)
    );
}

#[test]
fn test_structural_sequences_dispatch_alike() {
    let types = TypeInterner::new();
    let r = Resolver::new(&types);
    let a = strs(&["x", "y", "x"]);
    let b = strs(&["x", "x", "y"]);

    for ty in [
        types.iterable(TypeId::STR),
        types.list(TypeId::STR),
        types.set(TypeId::STR),
        types.array(TypeId::STR),
        types.named_iterable("Bag", TypeId::STR),
    ] {
        assert!(r.type_equal(&a, &b, ty), "{}", types.format_type(ty));
        assert_eq!(r.type_hash_code(&a, ty), r.type_hash_code(&b, ty));
    }
}

#[test]
fn test_declared_type_overrides_value_shape() {
    let types = TypeInterner::new();
    let r = Resolver::new(&types);
    let a = ints(&[1, 2]);
    let b = ints(&[2, 1]);

    // Same values, different declared types, different semantics.
    assert!(r.type_equal(&a, &b, types.iterable(TypeId::I64)));
    assert!(!r.type_equal(&a, &b, TypeId::OBJECT));
    assert!(!r.type_equal(&a, &b, types.named("Pair")));
}

#[test]
fn test_nested_sequences_recurse() {
    let types = TypeInterner::new();
    let r = Resolver::new(&types);
    let inner = types.set(TypeId::I32);
    let outer = types.list(inner);

    let a = Value::list(vec![ints(&[1, 2]), ints(&[3])]);
    let b = Value::list(vec![ints(&[3]), ints(&[2, 1])]);
    assert!(r.type_equal(&a, &b, outer));
    assert_eq!(r.type_hash_code(&a, outer), r.type_hash_code(&b, outer));

    // Untyped elements fall back to ordered list equality.
    let untyped = types.iterable(TypeId::OBJECT);
    assert!(!r.type_equal(&a, &b, untyped));
    let c = Value::list(vec![ints(&[3]), ints(&[1, 2])]);
    assert!(r.type_equal(&a, &c, untyped));
    assert_eq!(r.type_hash_code(&a, untyped), r.type_hash_code(&c, untyped));
}

#[test]
fn test_null_handling() {
    let types = TypeInterner::new();
    let r = Resolver::new(&types);
    let seq = types.list(TypeId::I32);

    for ty in [TypeId::STR, TypeId::I32, seq, TypeId::U8, types.named("T")] {
        assert_eq!(r.type_hash_code(&Value::Null, ty), NULL_HASH);
        assert!(r.type_equal(&Value::Null, &Value::Null, ty));
        assert!(!r.type_equal(&Value::Null, &Value::int(0), ty));
        assert!(!r.type_equal(&Value::string(""), &Value::Null, ty));
    }
}

#[test]
fn test_null_elements_are_present() {
    let types = TypeInterner::new();
    let r = Resolver::new(&types);
    let ty = types.iterable(TypeId::I32);

    let with_null = Value::list(vec![Value::int(1), Value::Null]);
    let without = ints(&[1]);
    let reordered = Value::list(vec![Value::Null, Value::int(1)]);

    assert!(!r.type_equal(&with_null, &without, ty));
    assert!(r.type_equal(&with_null, &reordered, ty));
    assert_ne!(r.type_hash_code(&with_null, ty), r.type_hash_code(&without, ty));
    assert_eq!(
        r.type_hash_code(&with_null, ty),
        r.type_hash_code(&reordered, ty)
    );
}

#[test]
fn test_mismatched_value_uses_default_semantics() {
    let types = TypeInterner::new();
    let r = Resolver::new(&types);
    let seq = types.list(TypeId::I32);

    // Declared sequence, supplied scalars.
    assert!(r.type_equal(&Value::int(4), &Value::int(4), seq));
    assert!(!r.type_equal(&Value::int(4), &ints(&[4]), seq));
    assert_eq!(
        r.type_hash_code(&Value::int(4), seq),
        fx_hash(&Value::int(4))
    );

    // Declared text, supplied a list.
    assert!(r.type_equal(&ints(&[1]), &ints(&[1]), TypeId::STR));
    assert!(!r.type_equal(&Value::string("1"), &Value::int(1), TypeId::STR));
}

#[test]
fn test_unknown_type_id_is_fallback() {
    let other = TypeInterner::new();
    let foreign = other.named_iterable("Elsewhere", TypeId::I32);

    let types = TypeInterner::new();
    let r = Resolver::new(&types);
    assert_eq!(r.classify(foreign), ComparisonCategory::Fallback);
    assert!(!r.type_equal(&ints(&[1, 2]), &ints(&[2, 1]), foreign));
}

#[test]
fn test_typed_value_eq_requires_same_type() {
    let types = TypeInterner::new();
    let r = Resolver::new(&types);
    let v = Value::int(1);

    assert_eq!(r.typed(&v, TypeId::I32), r.typed(&v, TypeId::I32));
    assert_ne!(r.typed(&v, TypeId::I32), r.typed(&v, TypeId::I64));
    assert_eq!(r.typed(&v, TypeId::I32).category(), ComparisonCategory::Scalar);
    assert_eq!(
        format!("{:?}", r.typed(&v, types.list(TypeId::I32))),
        "Int(1): [i32]"
    );
}
