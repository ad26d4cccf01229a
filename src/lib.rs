//! Threshold secret reconstruction by exact Lagrange interpolation
//!
//! Shares are `(index, base, value)` records whose values are digit strings
//! in bases 2 through 36. The secret is the constant term of the polynomial
//! through the `k` lowest-indexed shares, computed with exact rationals.

#[cfg(feature = "cli")]
pub mod cli;
pub mod codec;
pub mod commands;
pub mod document;
pub mod domain;
pub mod error;
pub mod interpolate;
pub mod rational;

pub use error::{ReconstructError, Result};
pub use rational::Rational;
