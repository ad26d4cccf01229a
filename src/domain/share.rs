//! Share records and decoded interpolation points

use num_bigint::BigInt;
use zeroize::Zeroizing;

use super::ShareIndex;

/// One `(index, base, value)` share as read from the input document
///
/// The value is kept exactly as written; it is only decoded if the share is
/// selected for reconstruction. The digit string is wrapped in `Zeroizing`
/// so it is wiped when the share is dropped, and `Debug` never prints it.
#[derive(Clone, PartialEq)]
pub struct Share {
    index: ShareIndex,
    base: u32,
    value: Zeroizing<String>,
}

impl Share {
    /// Creates a share; the base is validated when the value is decoded
    pub fn new(index: ShareIndex, base: u32, value: impl Into<String>) -> Self {
        Self {
            index,
            base,
            value: Zeroizing::new(value.into()),
        }
    }

    #[must_use]
    pub fn index(&self) -> ShareIndex {
        self.index
    }

    #[must_use]
    pub fn base(&self) -> u32 {
        self.base
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Debug for Share {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Share")
            .field("index", &self.index)
            .field("base", &self.base)
            .field("value", &"<redacted>")
            .finish()
    }
}

/// A share decoded into a point `(x, y)` on the secret polynomial
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Point {
    pub x: BigInt,
    pub y: BigInt,
}

impl Point {
    pub fn new(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}
