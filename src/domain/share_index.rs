//! `ShareIndex` newtype for threshold shares

use anyhow::{Result, bail};

/// Share index (1..=`u64::MAX`)
///
/// The index is the x-coordinate of a share's point on the secret
/// polynomial. Index 0 would be the secret itself, so it is never a valid
/// share index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShareIndex(u64);

impl ShareIndex {
    /// Smallest valid share index
    pub const MIN: u64 = 1;

    /// Creates a new share index
    ///
    /// # Errors
    /// Returns an error if index is 0
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lagrange_recover::domain::ShareIndex;
    ///
    /// let index = ShareIndex::new(3).unwrap();
    /// assert_eq!(*index, 3);
    ///
    /// // Invalid: 0 is the secret's own coordinate
    /// assert!(ShareIndex::new(0).is_err());
    /// ```
    pub fn new(value: u64) -> Result<Self> {
        if value < Self::MIN {
            bail!("Share index must be at least {} (got {value})", Self::MIN);
        }
        Ok(Self(value))
    }
}

impl std::ops::Deref for ShareIndex {
    type Target = u64;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for ShareIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
