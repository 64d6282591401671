//! Comparison category for declared types.
//!
//! The category decides which equality/hash strategy applies to a value of
//! the type. It is a closed set: anything not recognized as textual, scalar,
//! or sequence-like falls through to `Fallback`.

use std::fmt;

/// Equality/hash strategy selected for a declared type.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ComparisonCategory {
    /// The string type: content equality, content hash.
    Textual,
    /// A member of the closed scalar set: the value's own equality/hash.
    Scalar,
    /// Iterable of some element type: order-independent multiset semantics.
    Sequence,
    /// Everything else: the value's default equality/hash.
    Fallback,
}

impl ComparisonCategory {
    #[inline]
    pub const fn is_sequence(self) -> bool {
        matches!(self, Self::Sequence)
    }

    /// Get a human-readable name for this category.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Textual => "textual",
            Self::Scalar => "scalar",
            Self::Sequence => "sequence",
            Self::Fallback => "fallback",
        }
    }
}

impl fmt::Display for ComparisonCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The closed set of scalar kinds.
///
/// Integer widths other than 32/64 bits are deliberately absent; they
/// classify as `Fallback`.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScalarKind {
    I32,
    I64,
    F32,
    F64,
    Bool,
    Decimal,
    Timestamp,
    Duration,
}

impl ScalarKind {
    pub const ALL: [ScalarKind; 8] = [
        Self::I32,
        Self::I64,
        Self::F32,
        Self::F64,
        Self::Bool,
        Self::Decimal,
        Self::Timestamp,
        Self::Duration,
    ];

    #[inline]
    pub const fn is_integer(self) -> bool {
        matches!(self, Self::I32 | Self::I64)
    }

    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }
}
