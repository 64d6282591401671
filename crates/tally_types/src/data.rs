//! Internal type representation for the type interner.
//!
//! `TypeData` is what the `TypeInterner` stores. External code works with
//! `TypeId` handles and asks the interner questions about them.

use crate::{ComparisonCategory, ScalarKind, TypeId};

/// Structural description of a declared type.
///
/// Compound types store `TypeId` children, never boxed `TypeData`, so
/// interning gives O(1) type equality.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeData {
    // Primitives (pre-interned at fixed indices)
    /// UTF-8 string.
    Str,
    /// Boolean.
    Bool,
    /// 32-bit signed integer.
    I32,
    /// 64-bit signed integer.
    I64,
    /// 32-bit float.
    F32,
    /// 64-bit float.
    F64,
    /// Fixed-point decimal.
    Decimal,
    /// Absolute point in time (UTC).
    Timestamp,
    /// Signed time span.
    Duration,
    I8,
    I16,
    U8,
    U16,
    U32,
    U64,
    /// Unicode scalar value.
    Char,
    /// Unit type `()`.
    Unit,
    /// Dynamic top type.
    Object,

    // Sequence-capable types
    /// The generic iterable capability itself: `iterable<T>`.
    Iterable(TypeId),
    /// Growable list `[T]`.
    List(TypeId),
    /// Set `{T}`.
    Set(TypeId),
    /// Fixed-size array `[T; _]`.
    Array(TypeId),
    /// User-defined type that conforms to `iterable<elem>`.
    NamedIterable {
        name: Box<str>,
        elem: TypeId,
    },

    // Everything else
    /// Option `T?`.
    Option(TypeId),
    /// Map `{K: V}`.
    Map {
        key: TypeId,
        value: TypeId,
    },
    /// Tuple `(T, U, ...)`.
    Tuple(Box<[TypeId]>),
    /// Opaque user-defined type.
    Named(Box<str>),
    /// Record type with ordered named fields.
    Record {
        name: Box<str>,
        fields: Box<[(Box<str>, TypeId)]>,
    },
}

impl TypeData {
    /// Fixed `TypeId` of a primitive, `None` for compound types.
    pub const fn primitive_id(&self) -> Option<TypeId> {
        let id = match self {
            TypeData::Str => TypeId::STR,
            TypeData::Bool => TypeId::BOOL,
            TypeData::I32 => TypeId::I32,
            TypeData::I64 => TypeId::I64,
            TypeData::F32 => TypeId::F32,
            TypeData::F64 => TypeId::F64,
            TypeData::Decimal => TypeId::DECIMAL,
            TypeData::Timestamp => TypeId::TIMESTAMP,
            TypeData::Duration => TypeId::DURATION,
            TypeData::I8 => TypeId::I8,
            TypeData::I16 => TypeId::I16,
            TypeData::U8 => TypeId::U8,
            TypeData::U16 => TypeId::U16,
            TypeData::U32 => TypeId::U32,
            TypeData::U64 => TypeId::U64,
            TypeData::Char => TypeId::CHAR,
            TypeData::Unit => TypeId::UNIT,
            TypeData::Object => TypeId::OBJECT,
            _ => return None,
        };
        Some(id)
    }

    /// Check if this is a primitive type.
    pub const fn is_primitive(&self) -> bool {
        self.primitive_id().is_some()
    }

    /// Scalar kind, if this type belongs to the closed scalar set.
    pub const fn scalar_kind(&self) -> Option<ScalarKind> {
        match self {
            TypeData::I32 => Some(ScalarKind::I32),
            TypeData::I64 => Some(ScalarKind::I64),
            TypeData::F32 => Some(ScalarKind::F32),
            TypeData::F64 => Some(ScalarKind::F64),
            TypeData::Bool => Some(ScalarKind::Bool),
            TypeData::Decimal => Some(ScalarKind::Decimal),
            TypeData::Timestamp => Some(ScalarKind::Timestamp),
            TypeData::Duration => Some(ScalarKind::Duration),
            _ => None,
        }
    }

    /// Element type if this type conforms to `iterable<T>`.
    ///
    /// `Iterable` matches the capability exactly; the other arms conform to
    /// it structurally.
    pub const fn element_type(&self) -> Option<TypeId> {
        match self {
            TypeData::Iterable(elem)
            | TypeData::List(elem)
            | TypeData::Set(elem)
            | TypeData::Array(elem)
            | TypeData::NamedIterable { elem, .. } => Some(*elem),
            _ => None,
        }
    }

    /// Derive the comparison category. Total: every type gets one.
    pub const fn category(&self) -> ComparisonCategory {
        if matches!(self, TypeData::Str) {
            ComparisonCategory::Textual
        } else if self.scalar_kind().is_some() {
            ComparisonCategory::Scalar
        } else if self.element_type().is_some() {
            ComparisonCategory::Sequence
        } else {
            ComparisonCategory::Fallback
        }
    }
}
