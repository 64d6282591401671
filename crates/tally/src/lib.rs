//! Structural equality and hashing dispatched by declared type.
//!
//! A caller hands over one or two [`Value`]s and the [`TypeId`] they are
//! declared as. The declared type picks the semantics:
//!
//! - **Textual** (`str`): compare text content.
//! - **Scalar** (`i32`, `i64`, `f32`, `f64`, `bool`, `decimal`, `timestamp`,
//!   `duration`): the value's own equality and hash.
//! - **Sequence** (anything iterable-of-T): multiset equality, where order is
//!   ignored and multiplicity counts, with an order-independent hash.
//! - **Fallback** (everything else): the value's own equality and hash.
//!
//! ```
//! use tally::{equals, hash_code};
//! use tally_types::{TypeId, TypeInterner};
//! use tally_value::Value;
//!
//! let types = TypeInterner::new();
//! let ints = types.iterable(TypeId::I32);
//! let a = Value::list(vec![Value::int(1), Value::int(2), Value::int(3)]);
//! let b = Value::list(vec![Value::int(3), Value::int(1), Value::int(2)]);
//!
//! assert!(equals(&types, &a, &b, ints));
//! assert_eq!(hash_code(&types, &a, ints), hash_code(&types, &b, ints));
//! ```
//!
//! Every operation is a pure function of its inputs. The interner is the
//! only shared structure and is safe to use from many threads.

mod hash;
mod resolver;
mod sequence;
mod typed_value;

pub use hash::{fx_hash, mix, HashCode, NULL_HASH};
pub use resolver::Resolver;
pub use sequence::{
    collection_hash_code, combine_unordered, unsorted_sequences_equal, UNORDERED_SEED,
};
pub use typed_value::TypedValue;

pub use tally_types::{ComparisonCategory, TypeId, TypeInterner};
pub use tally_value::Value;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=tally=debug` to see
/// category mismatches, or `RUST_LOG=tally=trace` for every entry point.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

/// Equality of `a` and `b` under `declared`.
#[tracing::instrument(
    level = "trace",
    skip_all,
    fields(declared = %types.format_type(declared))
)]
pub fn equals(types: &TypeInterner, a: &Value, b: &Value, declared: TypeId) -> bool {
    Resolver::new(types).type_equal(a, b, declared)
}

/// Hash code of `value` under `declared`.
///
/// `0` for null. Equal values under the same declared type hash alike.
#[tracing::instrument(
    level = "trace",
    skip_all,
    fields(declared = %types.format_type(declared))
)]
pub fn hash_code(types: &TypeInterner, value: &Value, declared: TypeId) -> HashCode {
    Resolver::new(types).type_hash_code(value, declared)
}
