//! Runtime values for tally.
//!
//! `Value` is the dynamically shaped data that tally compares and hashes.
//! Its own `PartialEq`/`Hash` implementations are the *default* semantics:
//! ordered, structural, and reflexive (floats included). Type-directed
//! semantics, such as unordered sequences, live in the `tally` crate and are
//! selected by declared type, not by the shape of the value.

mod decimal;
mod value;

pub use decimal::{Decimal, DecimalError};
pub use value::{
    property_value, Heap, Properties, PropertyError, RecordLayout, RecordValue, ScalarInt, Value,
};

// Re-exported so callers can build timestamp/duration values without a
// direct chrono dependency.
pub use chrono::{DateTime, TimeDelta, Utc};
