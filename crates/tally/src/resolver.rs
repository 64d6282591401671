//! Type Dispatch Resolver.
//!
//! Routes equality and hashing by the *declared* type of a value. The
//! category comes from [`TypeInterner::classify`], which is cached per type
//! at interning time, so dispatch never inspects type names.
//!
//! | category   | equality                   | hash                          |
//! |------------|----------------------------|-------------------------------|
//! | Textual    | text content               | content hash                  |
//! | Scalar     | value's own `Eq`           | value's own `Hash`            |
//! | Sequence   | multiset of typed elements | unordered sum of element codes|
//! | Fallback   | value's own `Eq`           | value's own `Hash`            |
//!
//! Null is handled before dispatch: it hashes to [`NULL_HASH`], equals only
//! null, and is unequal to every present value.

use tally_types::{ComparisonCategory, TypeId, TypeInterner};
use tally_value::Value;

use crate::hash::{fx_hash, HashCode, NULL_HASH};
use crate::sequence::{combine_unordered, unsorted_sequences_equal};
use crate::typed_value::TypedValue;

/// Dispatches equality and hashing over one type interner.
///
/// Borrowing, `Copy`, and stateless apart from the interner reference, so
/// one resolver can be shared freely across threads and recursive calls.
#[derive(Clone, Copy)]
pub struct Resolver<'a> {
    types: &'a TypeInterner,
}

impl<'a> Resolver<'a> {
    pub fn new(types: &'a TypeInterner) -> Self {
        Resolver { types }
    }

    /// The interner declared types are resolved against.
    pub fn types(&self) -> &'a TypeInterner {
        self.types
    }

    #[inline]
    pub fn classify(&self, ty: TypeId) -> ComparisonCategory {
        self.types.classify(ty)
    }

    /// Pair a value with its declared type.
    pub fn typed<'v>(&self, value: &'v Value, ty: TypeId) -> TypedValue<'v>
    where
        'a: 'v,
    {
        TypedValue::new(value, ty, *self)
    }

    /// Equality of two values under a declared type.
    pub fn type_equal(&self, a: &Value, b: &Value, ty: TypeId) -> bool {
        match (a.is_null(), b.is_null()) {
            (true, true) => return true,
            (true, false) | (false, true) => return false,
            (false, false) => {}
        }

        match self.classify(ty) {
            ComparisonCategory::Textual => match (a.as_str(), b.as_str()) {
                (Some(x), Some(y)) => x == y,
                _ => self.mismatch_equal(a, b, ty, ComparisonCategory::Textual),
            },
            ComparisonCategory::Scalar | ComparisonCategory::Fallback => a == b,
            ComparisonCategory::Sequence => {
                match (a.as_list(), b.as_list(), self.types.element_type(ty)) {
                    (Some(xs), Some(ys), Some(elem)) => self.unsorted_sequences_equal(xs, ys, elem),
                    _ => self.mismatch_equal(a, b, ty, ComparisonCategory::Sequence),
                }
            }
        }
    }

    /// Hash code of a value under a declared type.
    ///
    /// Consistent with [`type_equal`](Self::type_equal) for the same `ty`.
    pub fn type_hash_code(&self, value: &Value, ty: TypeId) -> HashCode {
        if value.is_null() {
            return NULL_HASH;
        }

        match self.classify(ty) {
            ComparisonCategory::Textual => match value.as_str() {
                Some(text) => fx_hash(text),
                None => self.mismatch_hash(value, ty, ComparisonCategory::Textual),
            },
            ComparisonCategory::Scalar | ComparisonCategory::Fallback => fx_hash(value),
            ComparisonCategory::Sequence => {
                match (value.as_list(), self.types.element_type(ty)) {
                    (Some(items), Some(elem)) => self.collection_hash_code(items, elem),
                    _ => self.mismatch_hash(value, ty, ComparisonCategory::Sequence),
                }
            }
        }
    }

    /// Multiset equality of two value sequences with elements of type `elem`.
    pub fn unsorted_sequences_equal(&self, a: &[Value], b: &[Value], elem: TypeId) -> bool {
        unsorted_sequences_equal(
            a.iter().map(|v| self.typed(v, elem)),
            b.iter().map(|v| self.typed(v, elem)),
        )
    }

    /// Order-independent hash of a value sequence with elements of type `elem`.
    pub fn collection_hash_code(&self, items: &[Value], elem: TypeId) -> HashCode {
        combine_unordered(items.iter().map(|v| self.type_hash_code(v, elem)))
    }

    fn mismatch_equal(
        &self,
        a: &Value,
        b: &Value,
        ty: TypeId,
        category: ComparisonCategory,
    ) -> bool {
        tracing::debug!(
            declared = %self.types.format_type(ty),
            %category,
            left = a.type_name(),
            right = b.type_name(),
            "value does not match declared category, using default equality"
        );
        a == b
    }

    fn mismatch_hash(&self, value: &Value, ty: TypeId, category: ComparisonCategory) -> HashCode {
        tracing::debug!(
            declared = %self.types.format_type(ty),
            %category,
            found = value.type_name(),
            "value does not match declared category, using default hash"
        );
        fx_hash(value)
    }
}

impl std::fmt::Debug for Resolver<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("types", &self.types.len())
            .finish()
    }
}

#[cfg(test)]
mod tests;
