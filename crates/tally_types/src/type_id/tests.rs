use super::*;

#[test]
fn test_primitive_types() {
    assert!(TypeId::STR.is_primitive());
    assert!(TypeId::DURATION.is_primitive());
    assert!(TypeId::OBJECT.is_primitive());
    assert!(!TypeId::from_raw(TypeId::FIRST_COMPOUND).is_primitive());
}

#[test]
fn test_primitive_categories() {
    assert_eq!(
        TypeId::STR.primitive_category(),
        Some(ComparisonCategory::Textual)
    );
    for id in [
        TypeId::BOOL,
        TypeId::I32,
        TypeId::I64,
        TypeId::F32,
        TypeId::F64,
        TypeId::DECIMAL,
        TypeId::TIMESTAMP,
        TypeId::DURATION,
    ] {
        assert_eq!(id.primitive_category(), Some(ComparisonCategory::Scalar));
    }
    // Widths outside the closed scalar set fall through.
    for id in [TypeId::I8, TypeId::I16, TypeId::U64, TypeId::CHAR, TypeId::OBJECT] {
        assert_eq!(id.primitive_category(), Some(ComparisonCategory::Fallback));
    }
    assert_eq!(
        TypeId::from_raw(TypeId::FIRST_COMPOUND).primitive_category(),
        None
    );
}

#[test]
fn test_shard_local_layout() {
    assert_eq!(TypeId::STR.shard(), 0);
    assert_eq!(TypeId::STR.local(), 0);

    let id = TypeId::from_shard_local(5, 1000);
    assert_eq!(id.shard(), 5);
    assert_eq!(id.local(), 1000);
    assert!(!id.is_primitive());

    let max_id = TypeId::from_shard_local(15, TypeId::MAX_LOCAL);
    assert_eq!(max_id.shard(), 15);
    assert_eq!(max_id.local(), TypeId::MAX_LOCAL as usize);
}

#[test]
fn test_raw_roundtrip() {
    let id = TypeId::from_shard_local(7, 12345);
    let recovered = TypeId::from_raw(id.raw());
    assert_eq!(id, recovered);
    assert_eq!(recovered.shard(), 7);
}

#[test]
fn test_debug_names() {
    assert_eq!(format!("{:?}", TypeId::STR), "TypeId::str");
    assert_eq!(format!("{:?}", TypeId::TIMESTAMP), "TypeId::timestamp");
    assert_eq!(
        format!("{:?}", TypeId::from_shard_local(3, 40)),
        "TypeId(3:40)"
    );
}
