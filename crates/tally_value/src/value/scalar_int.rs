//! Integer newtype shared by every integer width.
//!
//! A `ScalarInt` holds the value widened to `i64`. The declared type, not
//! the storage, decides whether it is compared as a scalar (`i32`, `i64`) or
//! through fallback semantics (`i8`, `u16`, ...); equality and hashing are
//! the same either way.

use std::fmt;
use std::hash::{Hash, Hasher};

/// A 64-bit signed integer value.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
#[repr(transparent)]
pub struct ScalarInt(i64);

impl ScalarInt {
    /// Create a new `ScalarInt` from a raw `i64`.
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Extract the raw `i64` value.
    #[inline]
    pub const fn raw(self) -> i64 {
        self.0
    }
}

// Conversions

impl From<i64> for ScalarInt {
    #[inline]
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<i32> for ScalarInt {
    #[inline]
    fn from(value: i32) -> Self {
        Self(i64::from(value))
    }
}

impl From<ScalarInt> for i64 {
    #[inline]
    fn from(value: ScalarInt) -> Self {
        value.0
    }
}

// Formatting

impl fmt::Debug for ScalarInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ScalarInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Hashing

impl Hash for ScalarInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}
