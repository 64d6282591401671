//! Order-independent sequence equality and hashing.
//!
//! Sequences are compared as multisets: element order carries no meaning,
//! element multiplicity does. Both operations are generic over any
//! `T: Eq + Hash`; `Value` sequences reach them through [`TypedValue`].
//!
//! The hash combiner is a wrapping sum of mixed element hashes, so it is
//! commutative and associative. A positional (rolling) combiner here would
//! break `equal => same hash` for permuted sequences.
//!
//! [`TypedValue`]: crate::TypedValue

use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::hash::{fx_hash, mix, HashCode};

/// Starting accumulator for [`combine_unordered`].
pub const UNORDERED_SEED: HashCode = 0x2545_F491_4F6C_DD1D;

/// Multiset equality of two sequences.
///
/// Sequences of different length are unequal without any element being
/// compared or hashed. Otherwise a frequency map of `a` is built and
/// drained by `b`; the sequences are equal iff every element of `b` finds a
/// positive remaining count.
pub fn unsorted_sequences_equal<A, B, T>(a: A, b: B) -> bool
where
    A: IntoIterator<Item = T>,
    A::IntoIter: ExactSizeIterator,
    B: IntoIterator<Item = T>,
    B::IntoIter: ExactSizeIterator,
    T: Eq + Hash,
{
    let (a, b) = (a.into_iter(), b.into_iter());
    let len = a.len();
    if len != b.len() {
        tracing::trace!(left = len, right = b.len(), "sequence lengths differ");
        return false;
    }
    if len == 0 {
        return true;
    }

    let mut counts: FxHashMap<T, usize> = FxHashMap::default();
    counts.reserve(len);
    for item in a {
        *counts.entry(item).or_insert(0) += 1;
    }

    for item in b {
        match counts.get_mut(&item) {
            Some(count) if *count > 0 => *count -= 1,
            _ => return false,
        }
    }

    // Equal lengths plus no underflow means every count is back at zero.
    debug_assert!(counts.values().all(|&count| count == 0));
    true
}

/// Fold element hash codes into one order-independent code.
///
/// Each code is mixed and added to [`UNORDERED_SEED`]; the element count
/// is folded in last. A null element's code is `0`, and `mix(0) == 0`, so
/// it contributes nothing to the sum but still counts toward the length.
pub fn combine_unordered<I>(hashes: I) -> HashCode
where
    I: IntoIterator<Item = HashCode>,
{
    let mut acc = UNORDERED_SEED;
    let mut count: u64 = 0;
    for h in hashes {
        acc = acc.wrapping_add(mix(h));
        count = count.wrapping_add(1);
    }
    mix(acc ^ count)
}

/// Order-independent hash of a sequence whose elements hash themselves.
///
/// Consistent with [`unsorted_sequences_equal`]: multiset-equal sequences
/// produce the same code.
pub fn collection_hash_code<I, T>(items: I) -> HashCode
where
    I: IntoIterator<Item = T>,
    T: Hash,
{
    combine_unordered(items.into_iter().map(|item| fx_hash(&item)))
}
