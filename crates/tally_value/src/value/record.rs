//! Record values and named property access.
//!
//! Records are the object-shaped values whose properties an equality layer
//! reads one by one. Access goes through the `Properties` capability rather
//! than any form of reflection.

use rustc_hash::FxHashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::{Heap, Value};

/// Error reading a named property.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PropertyError {
    #[error("cannot read property `{name}` of a {found} value")]
    NotARecord { name: String, found: &'static str },
    #[error("record `{record}` has no property `{name}`")]
    Missing { record: String, name: String },
}

/// Capability for reading named properties of a value.
pub trait Properties {
    /// Value of the property called `name`, if present.
    fn property(&self, name: &str) -> Option<&Value>;
}

/// Field layout for O(1) record property access.
///
/// Field names are kept sorted, so two records built from the same fields in
/// different orders share a layout and compare equal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordLayout {
    names: Vec<String>,
    indices: FxHashMap<String, usize>,
}

impl RecordLayout {
    /// Create a layout from field names. Duplicates collapse to one field.
    pub fn new<'a>(field_names: impl IntoIterator<Item = &'a str>) -> Self {
        let mut names: Vec<String> = field_names.into_iter().map(str::to_owned).collect();
        names.sort_unstable();
        names.dedup();
        let indices = names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();
        RecordLayout { names, indices }
    }

    /// Get the index of a field by name.
    pub fn get_index(&self, field: &str) -> Option<usize> {
        self.indices.get(field).copied()
    }

    /// Field names in layout order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Get the number of fields.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the layout has no fields.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Record instance.
#[derive(Clone)]
pub struct RecordValue {
    /// Type name of the record.
    pub type_name: Heap<String>,
    /// Field values in layout order.
    fields: Heap<Vec<Value>>,
    layout: Heap<RecordLayout>,
}

impl RecordValue {
    /// Create a record from a name and `(field, value)` pairs.
    ///
    /// If a field name repeats, the last value wins.
    pub fn new(type_name: &str, field_values: Vec<(&str, Value)>) -> Self {
        let layout = RecordLayout::new(field_values.iter().map(|(name, _)| *name));
        let mut fields = vec![Value::Null; layout.len()];
        for (name, value) in field_values {
            if let Some(idx) = layout.get_index(name) {
                fields[idx] = value;
            }
        }
        RecordValue {
            type_name: Heap::new(type_name.to_owned()),
            fields: Heap::new(fields),
            layout: Heap::new(layout),
        }
    }

    /// Get a field value by name with O(1) lookup.
    pub fn get_field(&self, field: &str) -> Option<&Value> {
        let index = self.layout.get_index(field)?;
        self.fields.get(index)
    }

    /// Iterate `(name, value)` pairs in layout order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.layout
            .names()
            .iter()
            .map(String::as_str)
            .zip(self.fields.iter())
    }

    pub fn layout(&self) -> &RecordLayout {
        &self.layout
    }
}

impl PartialEq for RecordValue {
    fn eq(&self, other: &Self) -> bool {
        self.type_name == other.type_name
            && self.layout.names() == other.layout.names()
            && self.fields == other.fields
    }
}

impl Eq for RecordValue {}

impl Hash for RecordValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_name.hash(state);
        for (name, value) in self.iter() {
            name.hash(state);
            value.hash(state);
        }
    }
}

impl fmt::Debug for RecordValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct(&self.type_name);
        for (name, value) in self.iter() {
            s.field(name, value);
        }
        s.finish()
    }
}

impl Properties for RecordValue {
    fn property(&self, name: &str) -> Option<&Value> {
        self.get_field(name)
    }
}

impl Properties for Value {
    fn property(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Record(record) => record.property(name),
            _ => None,
        }
    }
}

/// Read the property `name` of `value`.
///
/// # Errors
/// `NotARecord` if `value` has no properties at all, `Missing` if it is a
/// record without that property.
pub fn property_value<'v>(value: &'v Value, name: &str) -> Result<&'v Value, PropertyError> {
    match value {
        Value::Record(record) => record.property(name).ok_or_else(|| PropertyError::Missing {
            record: record.type_name.as_str().to_owned(),
            name: name.to_owned(),
        }),
        other => Err(PropertyError::NotARecord {
            name: name.to_owned(),
            found: other.type_name(),
        }),
    }
}

#[cfg(test)]
mod tests;
