//! Hash-code primitives.
//!
//! All hashing goes through `FxHasher`, which is unseeded: the same value
//! hashes to the same code in every process.

use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};

/// Hash code produced by `hash_code` and friends.
pub type HashCode = u64;

/// Hash code of an absent value, in every category.
pub const NULL_HASH: HashCode = 0;

/// Hash any `Hash` value with `FxHasher`.
#[inline]
pub fn fx_hash<T: Hash + ?Sized>(value: &T) -> HashCode {
    let mut hasher = FxHasher::default();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Bijective 64-bit finalizer (splitmix64).
///
/// Spreads per-element hashes before they are summed, so that weak element
/// hashes (small integers hash to small codes) do not cancel each other out.
/// `mix(0) == 0`, which keeps the null sentinel a zero contribution.
#[inline]
pub const fn mix(h: HashCode) -> HashCode {
    let mut z = h;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mix_fixes_zero() {
        assert_eq!(mix(NULL_HASH), 0);
        assert_ne!(mix(1), 1);
        assert_ne!(mix(1), mix(2));
    }

    #[test]
    fn test_fx_hash_is_deterministic() {
        assert_eq!(fx_hash("abc"), fx_hash("abc"));
        assert_ne!(fx_hash("abc"), fx_hash("abd"));
        assert_eq!(fx_hash(&42u64), fx_hash(&42u64));
    }
}
