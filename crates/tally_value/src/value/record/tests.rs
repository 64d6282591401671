use super::*;
use pretty_assertions::assert_eq;

fn point() -> Value {
    Value::record("Point", vec![("x", Value::int(3)), ("y", Value::int(4))])
}

#[test]
fn test_layout_sorts_and_dedups() {
    let layout = RecordLayout::new(["b", "a", "b"]);
    assert_eq!(layout.names(), ["a".to_string(), "b".to_string()]);
    assert_eq!(layout.get_index("b"), Some(1));
    assert_eq!(layout.get_index("c"), None);
    assert_eq!(layout.len(), 2);
    assert!(!layout.is_empty());
    assert!(RecordLayout::new([]).is_empty());
}

#[test]
fn test_last_duplicate_field_wins() {
    let record = RecordValue::new("R", vec![("a", Value::int(1)), ("a", Value::int(2))]);
    assert_eq!(record.get_field("a"), Some(&Value::int(2)));
    assert_eq!(record.layout().len(), 1);
}

#[test]
fn test_property_value_reads_fields() {
    let p = point();
    assert_eq!(property_value(&p, "x"), Ok(&Value::int(3)));
    assert_eq!(p.property("y"), Some(&Value::int(4)));
}

#[test]
fn test_property_value_missing() {
    let p = point();
    assert_eq!(
        property_value(&p, "z"),
        Err(PropertyError::Missing {
            record: "Point".to_string(),
            name: "z".to_string(),
        })
    );
}

#[test]
fn test_property_value_on_non_record() {
    let one = Value::int(1);
    let err = property_value(&one, "x");
    assert_eq!(
        err,
        Err(PropertyError::NotARecord {
            name: "x".to_string(),
            found: "int",
        })
    );
    assert_eq!(Value::string("s").property("len"), None);
}

#[test]
fn test_error_messages() {
    let missing = PropertyError::Missing {
        record: "Point".to_string(),
        name: "z".to_string(),
    };
    assert_eq!(missing.to_string(), "record `Point` has no property `z`");
    let not_record = PropertyError::NotARecord {
        name: "x".to_string(),
        found: "list",
    };
    assert_eq!(
        not_record.to_string(),
        "cannot read property `x` of a list value"
    );
}

#[test]
fn test_debug_lists_fields_in_layout_order() {
    let record = RecordValue::new("P", vec![("y", Value::int(2)), ("x", Value::int(1))]);
    assert_eq!(format!("{record:?}"), "P { x: Int(1), y: Int(2) }");
}
