//! Domain types for threshold secret reconstruction
//!
//! This module contains validated newtypes and the share records handed to the
//! interpolator:
//! - [`ShareIndex`] - Share x-coordinate (1..=`u64::MAX`)
//! - [`Radix`] - Base of a share's digit string (2..=36)
//! - [`Share`] - Raw `(index, base, value)` record
//! - [`Point`] - Decoded `(x, y)` pair

mod radix;
mod share;
mod share_index;

pub use radix::Radix;
pub use share::{Point, Share};
pub use share_index::ShareIndex;
