//! Shared storage behind string, list, tuple and record values.
//!
//! Cloning a `Value` that holds a `Heap<T>` bumps a reference count instead
//! of copying the payload, so sequences can be handed to the comparison
//! engine and cloned into test fixtures cheaply. `Heap::new` is visible only
//! inside `value`; everything else builds heap data through `Value`'s
//! factory methods.

#![expect(clippy::disallowed_types, reason = "Heap<T> is the one owner of Arc in values")]

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::Arc;

/// Reference-counted, immutable payload of a `Value`.
///
/// Equality and hashing are by content, never by address: two separately
/// built `"abc"` strings are equal. Sharing one allocation only skips the
/// content walk.
#[repr(transparent)]
pub struct Heap<T: ?Sized>(Arc<T>);

impl<T> Heap<T> {
    #[inline]
    pub(super) fn new(payload: T) -> Self {
        Heap(Arc::new(payload))
    }
}

impl<T: ?Sized> Heap<T> {
    /// Whether both handles point at the same allocation.
    #[inline]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.0, &other.0)
    }
}

impl<T: ?Sized> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized> Clone for Heap<T> {
    #[inline]
    fn clone(&self) -> Self {
        Heap(Arc::clone(&self.0))
    }
}

impl<T: ?Sized + PartialEq> PartialEq for Heap<T> {
    fn eq(&self, other: &Self) -> bool {
        // Cloned sequences share storage; skip the element walk for them.
        Heap::ptr_eq(self, other) || **self == **other
    }
}

impl<T: ?Sized + Eq> Eq for Heap<T> {}

impl<T: ?Sized + Hash> Hash for Heap<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

// Transparent: a `Heap<String>` debugs as the string it holds.
impl<T: ?Sized + fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&**self, f)
    }
}
