//! Positional digit-string codec for share values
//!
//! Share values are written as digit strings in any base from 2 to 36, using
//! the alphabet `0-9` followed by `a-z`. Decoding is case-insensitive,
//! ignores surrounding whitespace and skips `_` separators, so
//! `"DEAD_beef"` in base 16 is the same value as `"deadbeef"`.
//!
//! # Examples
//!
//! ```rust
//! use lagrange_recover::codec::{decode, encode};
//! use lagrange_recover::domain::Radix;
//! use num_bigint::BigInt;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let value = decode(" FF_ff ", 16)?;
//! assert_eq!(value, BigInt::from(0xffff));
//!
//! let digits = encode(value.magnitude(), Radix::new(36)?);
//! assert_eq!(decode(&digits, 36)?, value);
//! # Ok(())
//! # }
//! ```

use num_bigint::{BigInt, BigUint};
use num_traits::Zero;
use zeroize::Zeroizing;

use crate::domain::Radix;
use crate::error::{ReconstructError, Result};

/// Visual separator that may appear anywhere in a digit string
pub const SEPARATOR: char = '_';

/// Decodes a digit string in the given base into a non-negative integer
///
/// An empty (or all-whitespace) string decodes to 0.
///
/// # Errors
/// Returns [`ReconstructError::InvalidBase`] if `base` is outside 2..=36 and
/// [`ReconstructError::InvalidDigit`] for a character outside the alphabet or
/// whose digit value is not below `base`
pub fn decode(value: &str, base: u32) -> Result<BigInt> {
    let radix = Radix::new(base)?;
    let normalized = Zeroizing::new(value.trim().to_lowercase());

    let mut acc = BigInt::zero();
    for ch in normalized.chars() {
        if ch == SEPARATOR {
            continue;
        }
        let Some(digit) = ch.to_digit(*radix) else {
            return Err(ReconstructError::InvalidDigit {
                digit: ch,
                base,
                value: normalized.clone(),
            });
        };
        acc = acc * *radix + digit;
    }

    Ok(acc)
}

/// Encodes a non-negative integer as a lowercase digit string in `radix`
///
/// The output never contains separators and uses `"0"` for zero.
#[must_use]
pub fn encode(value: &BigUint, radix: Radix) -> String {
    value.to_str_radix(*radix)
}
