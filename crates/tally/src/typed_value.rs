//! A value paired with the type it is compared under.

use std::fmt;
use std::hash::{Hash, Hasher};

use tally_types::{ComparisonCategory, TypeId};
use tally_value::Value;

use crate::hash::HashCode;
use crate::resolver::Resolver;

/// A `(value, declared type)` pair whose `Eq` and `Hash` follow the
/// declared type rather than the value's own implementations.
///
/// This is what lets sequence elements go into a hash map keyed by
/// type-aware equality: two `TypedValue`s are equal iff they share a
/// declared type and [`Resolver::type_equal`] holds, and their hashes are
/// [`Resolver::type_hash_code`].
#[derive(Clone, Copy)]
pub struct TypedValue<'a> {
    value: &'a Value,
    ty: TypeId,
    resolver: Resolver<'a>,
}

impl<'a> TypedValue<'a> {
    pub fn new(value: &'a Value, ty: TypeId, resolver: Resolver<'a>) -> Self {
        TypedValue {
            value,
            ty,
            resolver,
        }
    }

    pub fn category(&self) -> ComparisonCategory {
        self.resolver.classify(self.ty)
    }

    pub fn hash_code(&self) -> HashCode {
        self.resolver.type_hash_code(self.value, self.ty)
    }
}

impl PartialEq for TypedValue<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.ty == other.ty && self.resolver.type_equal(self.value, other.value, self.ty)
    }
}

impl Eq for TypedValue<'_> {}

impl Hash for TypedValue<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl fmt::Debug for TypedValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?}: {}",
            self.value,
            self.resolver.types().format_type(self.ty)
        )
    }
}
