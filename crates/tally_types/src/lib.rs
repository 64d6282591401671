//! Declared-type descriptors for tally.
//!
//! Equality and hashing in tally are driven by the *declared* type of a value,
//! never by its runtime shape. This crate owns that declared type:
//!
//! - `TypeId`: a 32-bit interned handle, O(1) to copy and compare
//! - `TypeData`: the structural description stored behind a `TypeId`
//! - `TypeInterner`: deduplicating, sharded storage for `TypeData`
//! - `ComparisonCategory`: the closed dispatch tag computed once per type
//!
//! # Classification
//!
//! Every type maps to exactly one `ComparisonCategory`. The category is
//! computed when the type is interned and cached next to it, so dispatch at
//! comparison time is a table read rather than a structural walk.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-copied types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod category;
mod data;
mod type_id;
mod type_interner;

pub use category::{ComparisonCategory, ScalarKind};
pub use data::TypeData;
pub use type_id::TypeId;
pub use type_interner::{SharedTypeInterner, TypeInternError, TypeInterner};

static_assert_size!(TypeId, 4);
static_assert_size!(ComparisonCategory, 1);
static_assert_size!(ScalarKind, 1);
