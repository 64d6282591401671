//! Fixed-point decimal scalar.
//!
//! A `Decimal` is `mantissa * 10^-scale`. Equality is numeric: `1.50` and
//! `1.5` are equal and hash identically, because both compare and hash
//! through the normalized form (no trailing zeros in the mantissa).

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Error constructing or parsing a `Decimal`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecimalError {
    #[error("empty decimal literal")]
    Empty,
    #[error("invalid character {found:?} at byte {position} in decimal literal")]
    InvalidDigit { found: char, position: usize },
    #[error("decimal scale {scale} exceeds the maximum of {}", Decimal::MAX_SCALE)]
    ScaleTooLarge { scale: u32 },
    #[error("decimal literal does not fit in 128 bits")]
    Overflow,
}

/// Fixed-point decimal number.
#[derive(Copy, Clone)]
pub struct Decimal {
    mantissa: i128,
    scale: u8,
}

impl Decimal {
    /// Largest supported number of fractional digits.
    pub const MAX_SCALE: u32 = 28;

    /// Create `mantissa * 10^-scale`.
    pub fn new(mantissa: i128, scale: u32) -> Result<Self, DecimalError> {
        match u8::try_from(scale) {
            Ok(scale) if u32::from(scale) <= Self::MAX_SCALE => Ok(Self { mantissa, scale }),
            _ => Err(DecimalError::ScaleTooLarge { scale }),
        }
    }

    /// Create an integral decimal.
    pub fn from_int(value: i64) -> Self {
        Self {
            mantissa: i128::from(value),
            scale: 0,
        }
    }

    #[inline]
    pub fn scale(self) -> u32 {
        u32::from(self.scale)
    }

    /// Strip trailing zeros from the mantissa.
    ///
    /// Two decimals are numerically equal iff their normalized forms are
    /// identical.
    pub const fn normalized(self) -> Self {
        let mut mantissa = self.mantissa;
        let mut scale = self.scale;
        while scale > 0 && mantissa % 10 == 0 {
            mantissa /= 10;
            scale -= 1;
        }
        Self { mantissa, scale }
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        let (a, b) = (self.normalized(), other.normalized());
        a.mantissa == b.mantissa && a.scale == b.scale
    }
}

impl Eq for Decimal {}

impl Hash for Decimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let n = self.normalized();
        n.mantissa.hash(state);
        n.scale.hash(state);
    }
}

impl FromStr for Decimal {
    type Err = DecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, body) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        let offset = s.len() - body.len();

        let mut mantissa: i128 = 0;
        let mut scale: u32 = 0;
        let mut digits = 0usize;
        let mut seen_point = false;

        for (i, c) in body.char_indices() {
            match c {
                '.' if !seen_point => seen_point = true,
                digit @ '0'..='9' => {
                    let digit = i128::from(digit.to_digit(10).unwrap_or_default());
                    mantissa = mantissa
                        .checked_mul(10)
                        .and_then(|m| m.checked_add(digit))
                        .ok_or(DecimalError::Overflow)?;
                    digits += 1;
                    if seen_point {
                        scale += 1;
                    }
                }
                found => {
                    return Err(DecimalError::InvalidDigit {
                        found,
                        position: offset + i,
                    })
                }
            }
        }

        if digits == 0 {
            return Err(DecimalError::Empty);
        }
        if negative {
            mantissa = -mantissa;
        }
        Decimal::new(mantissa, scale)
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.mantissa.unsigned_abs().to_string();
        let scale = usize::from(self.scale);
        if self.mantissa < 0 {
            f.write_str("-")?;
        }
        if scale == 0 {
            return f.write_str(&digits);
        }
        if digits.len() > scale {
            let (int, frac) = digits.split_at(digits.len() - scale);
            write!(f, "{int}.{frac}")
        } else {
            write!(f, "0.{digits:0>scale$}")
        }
    }
}

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Decimal({self})")
    }
}
