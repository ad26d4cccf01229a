//! `Radix` newtype for positional digit strings

use crate::error::{ReconstructError, Result};

/// Numeric base of a share value (2..=36)
///
/// The upper bound is the size of the `0-9a-z` digit alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Radix(u32);

impl Radix {
    /// Smallest supported base
    pub const MIN: u32 = 2;

    /// Largest supported base (one digit per `0-9a-z` symbol)
    pub const MAX: u32 = 36;

    /// Creates a new radix
    ///
    /// # Errors
    /// Returns [`ReconstructError::InvalidBase`] if `value` is outside 2..=36
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lagrange_recover::domain::Radix;
    ///
    /// let hex = Radix::new(16).unwrap();
    /// assert_eq!(*hex, 16);
    ///
    /// assert!(Radix::new(1).is_err());
    /// assert!(Radix::new(37).is_err());
    /// ```
    pub fn new(value: u32) -> Result<Self> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ReconstructError::InvalidBase(value));
        }
        Ok(Self(value))
    }
}

impl std::ops::Deref for Radix {
    type Target = u32;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
