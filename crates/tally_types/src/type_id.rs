//! Interned type identifier.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::ComparisonCategory;

/// Interned type identifier.
///
/// # Layout
/// 32-bit index split into shard (4 bits) + local index (28 bits):
/// - Bits 31-28: Shard index (0-15)
/// - Bits 27-0: Local index within shard
///
/// # Pre-interned Types
/// Primitive types live in shard 0 at fixed local indices, so their
/// classification never needs the interner.
#[derive(Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct TypeId(u32);

impl TypeId {
    // Textual
    pub const STR: TypeId = TypeId(0);

    // Scalar (the closed set)
    pub const BOOL: TypeId = TypeId(1);
    pub const I32: TypeId = TypeId(2);
    pub const I64: TypeId = TypeId(3);
    pub const F32: TypeId = TypeId(4);
    pub const F64: TypeId = TypeId(5);
    pub const DECIMAL: TypeId = TypeId(6);
    pub const TIMESTAMP: TypeId = TypeId(7);
    pub const DURATION: TypeId = TypeId(8);

    // Primitives outside the scalar set (classified as fallback)
    pub const I8: TypeId = TypeId(9);
    pub const I16: TypeId = TypeId(10);
    pub const U8: TypeId = TypeId(11);
    pub const U16: TypeId = TypeId(12);
    pub const U32: TypeId = TypeId(13);
    pub const U64: TypeId = TypeId(14);
    pub const CHAR: TypeId = TypeId(15);
    pub const UNIT: TypeId = TypeId(16);
    /// The dynamic top type. `iterable(OBJECT)` is the untyped iterable.
    pub const OBJECT: TypeId = TypeId(17);

    /// First ID for dynamically allocated compound types.
    pub const FIRST_COMPOUND: u32 = 18;

    /// Maximum local index per shard (2^28 - 1).
    pub const MAX_LOCAL: u32 = 0x0FFF_FFFF;

    /// Number of shards for type interning.
    pub const NUM_SHARDS: usize = 16;

    /// Create a `TypeId` from shard and local index.
    #[inline]
    pub const fn from_shard_local(shard: u32, local: u32) -> Self {
        debug_assert!(shard < 16);
        debug_assert!(local <= Self::MAX_LOCAL);
        TypeId((shard << 28) | local)
    }

    /// Extract the shard index (bits 31-28).
    #[inline]
    pub const fn shard(self) -> usize {
        (self.0 >> 28) as usize
    }

    /// Extract the local index within the shard (bits 27-0).
    #[inline]
    pub const fn local(self) -> usize {
        (self.0 & Self::MAX_LOCAL) as usize
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Create from a raw u32 value.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        TypeId(raw)
    }

    /// Check if this is a pre-interned primitive.
    #[inline]
    pub const fn is_primitive(self) -> bool {
        self.0 < Self::FIRST_COMPOUND
    }

    /// Category of a pre-interned primitive, or `None` for compound ids.
    ///
    /// Lets the interner answer `classify` for primitives without locking.
    #[inline]
    pub const fn primitive_category(self) -> Option<ComparisonCategory> {
        match self.0 {
            0 => Some(ComparisonCategory::Textual),
            1..=8 => Some(ComparisonCategory::Scalar),
            9..=17 => Some(ComparisonCategory::Fallback),
            _ => None,
        }
    }

    /// Human-readable name for primitives.
    pub const fn primitive_name(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("str"),
            1 => Some("bool"),
            2 => Some("i32"),
            3 => Some("i64"),
            4 => Some("f32"),
            5 => Some("f64"),
            6 => Some("decimal"),
            7 => Some("timestamp"),
            8 => Some("duration"),
            9 => Some("i8"),
            10 => Some("i16"),
            11 => Some("u8"),
            12 => Some("u16"),
            13 => Some("u32"),
            14 => Some("u64"),
            15 => Some("char"),
            16 => Some("()"),
            17 => Some("object"),
            _ => None,
        }
    }
}

impl Hash for TypeId {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl fmt::Debug for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.primitive_name() {
            Some(name) => write!(f, "TypeId::{name}"),
            None => write!(f, "TypeId({}:{})", self.shard(), self.local()),
        }
    }
}

#[cfg(test)]
mod tests;
