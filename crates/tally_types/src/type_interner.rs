//! Sharded type interner.
//!
//! Provides O(1) type interning, lookup, and classification via `TypeId`.
//! Each interned type has its `ComparisonCategory` computed once, at
//! interning time, and stored alongside its `TypeData`.

// Arc is needed here for SharedTypeInterner - one interner is shared by every
// thread that compares or hashes values.
#![expect(
    clippy::disallowed_types,
    reason = "Arc required for SharedTypeInterner thread-safety"
)]

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::{ComparisonCategory, ScalarKind, TypeData, TypeId};

/// Error when interning a type fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeInternError {
    /// Shard exceeded capacity (over 268 million types per shard).
    #[error("type interner shard {shard_idx} exceeded {} types", TypeId::MAX_LOCAL)]
    ShardOverflow { shard_idx: usize },
}

/// Primitives in `TypeId` order. Shard 0 is seeded from this table.
const PRIMITIVES: [TypeData; TypeId::FIRST_COMPOUND as usize] = [
    TypeData::Str,
    TypeData::Bool,
    TypeData::I32,
    TypeData::I64,
    TypeData::F32,
    TypeData::F64,
    TypeData::Decimal,
    TypeData::Timestamp,
    TypeData::Duration,
    TypeData::I8,
    TypeData::I16,
    TypeData::U8,
    TypeData::U16,
    TypeData::U32,
    TypeData::U64,
    TypeData::Char,
    TypeData::Unit,
    TypeData::Object,
];

/// Per-shard storage for interned types.
struct TypeShard {
    /// Map from type data to local index for deduplication.
    map: FxHashMap<TypeData, u32>,
    /// Storage for type data, indexed by local index.
    types: Vec<TypeData>,
    /// Cached category per local index, parallel to `types`.
    categories: Vec<ComparisonCategory>,
}

impl TypeShard {
    fn new() -> Self {
        Self {
            map: FxHashMap::default(),
            types: Vec::with_capacity(64),
            categories: Vec::with_capacity(64),
        }
    }

    /// Create shard 0 with pre-interned primitives.
    fn with_primitives() -> Self {
        let mut shard = Self::new();
        for data in PRIMITIVES {
            debug_assert_eq!(
                data.primitive_id().map(TypeId::local),
                Some(shard.types.len())
            );
            shard.push(data);
        }
        shard
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "callers check the length against MAX_LOCAL first"
    )]
    fn push(&mut self, data: TypeData) -> u32 {
        let local = self.types.len() as u32;
        self.categories.push(data.category());
        self.types.push(data.clone());
        self.map.insert(data, local);
        local
    }
}

/// Sharded type interner for concurrent access.
///
/// # Thread Safety
/// Uses `RwLock` per shard for concurrent read/write access.
/// Can be shared across threads via `SharedTypeInterner`.
///
/// # Pre-interned Types
/// Primitive types are pre-interned with fixed `TypeId` values matching
/// the constants in `TypeId` (STR, BOOL, I32, ...).
pub struct TypeInterner {
    shards: [RwLock<TypeShard>; TypeId::NUM_SHARDS],
}

impl TypeInterner {
    /// Create a new interner with pre-interned primitives.
    pub fn new() -> Self {
        let shards = std::array::from_fn(|i| {
            if i == 0 {
                RwLock::new(TypeShard::with_primitives())
            } else {
                RwLock::new(TypeShard::new())
            }
        });

        Self { shards }
    }

    /// Compute shard index for a type based on its hash.
    #[inline]
    fn shard_for(data: &TypeData) -> usize {
        let mut hasher = rustc_hash::FxHasher::default();
        data.hash(&mut hasher);
        #[expect(
            clippy::cast_possible_truncation,
            reason = "truncation is fine for hash-based shard selection"
        )]
        let hash_usize = hasher.finish() as usize;
        hash_usize % TypeId::NUM_SHARDS
    }

    /// Try to intern a type, returning its `TypeId` or an error on overflow.
    ///
    /// If the type is already interned, returns the existing `TypeId`.
    /// Primitives always return their fixed `TypeId` constants.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "shard_idx is bounded by NUM_SHARDS (16)"
    )]
    pub fn try_intern(&self, data: TypeData) -> Result<TypeId, TypeInternError> {
        if let Some(id) = data.primitive_id() {
            return Ok(id);
        }

        let shard_idx = Self::shard_for(&data);
        let shard = &self.shards[shard_idx];

        // Fast path: check if already interned
        {
            let guard = shard.read();
            if let Some(&local) = guard.map.get(&data) {
                return Ok(TypeId::from_shard_local(shard_idx as u32, local));
            }
        }

        let mut guard = shard.write();

        // Double-check after acquiring write lock
        if let Some(&local) = guard.map.get(&data) {
            return Ok(TypeId::from_shard_local(shard_idx as u32, local));
        }

        if guard.types.len() > TypeId::MAX_LOCAL as usize {
            return Err(TypeInternError::ShardOverflow { shard_idx });
        }

        let local = guard.push(data);
        Ok(TypeId::from_shard_local(shard_idx as u32, local))
    }

    /// Intern a type, returning its `TypeId`.
    ///
    /// # Panics
    /// Panics if a shard exceeds capacity (over 268 million types per shard).
    /// Use `try_intern` for fallible interning.
    pub fn intern(&self, data: TypeData) -> TypeId {
        self.try_intern(data).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Look up the type data for a `TypeId`, or `None` if this interner
    /// never produced it.
    pub fn try_lookup(&self, id: TypeId) -> Option<TypeData> {
        self.shards[id.shard()].read().types.get(id.local()).cloned()
    }

    /// Look up the type data for a `TypeId`.
    ///
    /// # Panics
    /// Panics if the `TypeId` was not created by this interner.
    pub fn lookup(&self, id: TypeId) -> TypeData {
        self.try_lookup(id)
            .unwrap_or_else(|| panic!("{id:?} was not interned by this interner"))
    }

    /// Classify a declared type.
    ///
    /// Total: ids unknown to this interner classify as `Fallback`.
    pub fn classify(&self, id: TypeId) -> ComparisonCategory {
        if let Some(category) = id.primitive_category() {
            return category;
        }
        self.shards[id.shard()]
            .read()
            .categories
            .get(id.local())
            .copied()
            .unwrap_or(ComparisonCategory::Fallback)
    }

    /// Element type of a sequence-category type.
    pub fn element_type(&self, id: TypeId) -> Option<TypeId> {
        if id.is_primitive() {
            return None;
        }
        self.shards[id.shard()]
            .read()
            .types
            .get(id.local())
            .and_then(TypeData::element_type)
    }

    /// Scalar kind of a scalar-category type.
    pub fn scalar_kind(&self, id: TypeId) -> Option<ScalarKind> {
        if !id.is_primitive() {
            return None;
        }
        PRIMITIVES.get(id.local()).and_then(TypeData::scalar_kind)
    }

    /// Render a type for diagnostics and logs.
    pub fn format_type(&self, id: TypeId) -> String {
        let mut out = String::new();
        self.format_into(id, &mut out);
        out
    }

    fn format_into(&self, id: TypeId, out: &mut String) {
        if let Some(name) = id.primitive_name() {
            out.push_str(name);
            return;
        }
        let Some(data) = self.try_lookup(id) else {
            out.push_str("<unknown>");
            return;
        };
        match data {
            TypeData::Iterable(elem) => self.format_generic("iterable", &[elem], out),
            TypeData::Set(elem) => self.format_generic("set", &[elem], out),
            TypeData::Option(elem) => self.format_generic("option", &[elem], out),
            TypeData::Map { key, value } => self.format_generic("map", &[key, value], out),
            TypeData::NamedIterable { name, elem } => self.format_generic(&name, &[elem], out),
            TypeData::List(elem) => {
                out.push('[');
                self.format_into(elem, out);
                out.push(']');
            }
            TypeData::Array(elem) => {
                out.push('[');
                self.format_into(elem, out);
                out.push_str("; _]");
            }
            TypeData::Tuple(elems) => {
                out.push('(');
                self.format_list(&elems, out);
                out.push(')');
            }
            TypeData::Named(name) | TypeData::Record { name, .. } => out.push_str(&name),
            // Primitives were handled by the id fast path.
            primitive => out.push_str(
                primitive
                    .primitive_id()
                    .and_then(TypeId::primitive_name)
                    .unwrap_or("?"),
            ),
        }
    }

    fn format_generic(&self, head: &str, args: &[TypeId], out: &mut String) {
        out.push_str(head);
        out.push('<');
        self.format_list(args, out);
        out.push('>');
    }

    fn format_list(&self, ids: &[TypeId], out: &mut String) {
        for (i, &id) in ids.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            self.format_into(id, out);
        }
    }

    // Convenience constructors. All go through `intern()`, so the same
    // arguments always produce the same `TypeId`.

    /// Create the generic iterable capability `iterable<elem>`.
    pub fn iterable(&self, elem: TypeId) -> TypeId {
        self.intern(TypeData::Iterable(elem))
    }

    /// Create a List type.
    pub fn list(&self, elem: TypeId) -> TypeId {
        self.intern(TypeData::List(elem))
    }

    /// Create a Set type.
    pub fn set(&self, elem: TypeId) -> TypeId {
        self.intern(TypeData::Set(elem))
    }

    /// Create an Array type.
    pub fn array(&self, elem: TypeId) -> TypeId {
        self.intern(TypeData::Array(elem))
    }

    /// Create an Option type.
    pub fn option(&self, inner: TypeId) -> TypeId {
        self.intern(TypeData::Option(inner))
    }

    /// Create a Map type.
    pub fn map(&self, key: TypeId, value: TypeId) -> TypeId {
        self.intern(TypeData::Map { key, value })
    }

    /// Create a Tuple type.
    pub fn tuple(&self, types: impl Into<Box<[TypeId]>>) -> TypeId {
        self.intern(TypeData::Tuple(types.into()))
    }

    /// Create an opaque Named type.
    pub fn named(&self, name: &str) -> TypeId {
        self.intern(TypeData::Named(name.into()))
    }

    /// Create a Named type that conforms to `iterable<elem>`.
    pub fn named_iterable(&self, name: &str, elem: TypeId) -> TypeId {
        self.intern(TypeData::NamedIterable {
            name: name.into(),
            elem,
        })
    }

    /// Create a Record type with ordered named fields.
    pub fn record(&self, name: &str, fields: &[(&str, TypeId)]) -> TypeId {
        self.intern(TypeData::Record {
            name: name.into(),
            fields: fields
                .iter()
                .map(|&(field, ty)| (Box::from(field), ty))
                .collect(),
        })
    }

    /// Get the number of interned types.
    pub fn len(&self) -> usize {
        self.shards.iter().map(|s| s.read().types.len()).sum()
    }

    /// Check if the interner has only pre-interned primitives.
    pub fn is_empty(&self) -> bool {
        self.len() <= PRIMITIVES.len()
    }
}

impl Default for TypeInterner {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared type interner for comparing values across threads.
///
/// This newtype enforces that all thread-safe interner sharing goes through
/// this type, preventing accidental direct `Arc<TypeInterner>` usage.
#[derive(Clone)]
pub struct SharedTypeInterner(Arc<TypeInterner>);

impl std::fmt::Debug for SharedTypeInterner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedTypeInterner")
            .field("len", &self.0.len())
            .finish()
    }
}

impl SharedTypeInterner {
    /// Create a new shared type interner.
    pub fn new() -> Self {
        SharedTypeInterner(Arc::new(TypeInterner::new()))
    }
}

impl Default for SharedTypeInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Deref for SharedTypeInterner {
    type Target = TypeInterner;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
