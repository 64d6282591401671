//! Global tracing setup. Kept in its own test binary because it installs
//! the process-wide subscriber.

use tally::{equals, init_tracing, TypeId, TypeInterner, Value};

#[test]
fn test_init_tracing_is_idempotent() {
    std::env::set_var("RUST_LOG", "tally=trace");

    init_tracing();
    init_tracing();

    let types = TypeInterner::new();
    let ty = types.iterable(TypeId::I32);
    let one = Value::list(vec![Value::int(1)]);
    let two = Value::list(vec![Value::int(1), Value::int(1)]);
    assert!(!equals(&types, &one, &two, ty));
    assert!(equals(&types, &two, &two.clone(), ty));
}
