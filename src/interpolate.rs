//! Lagrange interpolation at zero over exact rationals
//!
//! Given `k` points `(x_j, y_j)` on a polynomial of degree `k - 1`, the
//! polynomial's constant term is
//!
//! ```text
//! f(0) = Σ_j  y_j · Π_{i≠j} (−x_i) / (x_j − x_i)
//! ```
//!
//! Every basis term is built as an exact [`Rational`], so the result is the
//! true constant term even when it is not an integer.

use num_bigint::BigInt;
use num_traits::{One, Zero};

use crate::codec;
use crate::domain::{Point, Share};
use crate::error::{ReconstructError, Result};
use crate::rational::Rational;

/// Picks the `threshold` lowest-indexed shares
///
/// The input is left untouched; the returned references are ordered by
/// ascending index. Shares with equal indices keep their input order.
///
/// # Errors
/// Returns [`ReconstructError::InsufficientShares`] if `threshold` is 0 or
/// exceeds the number of shares
pub fn select_shares(shares: &[Share], threshold: usize) -> Result<Vec<&Share>> {
    if threshold == 0 || shares.len() < threshold {
        return Err(ReconstructError::InsufficientShares {
            needed: threshold,
            available: shares.len(),
        });
    }

    let mut ordered: Vec<&Share> = shares.iter().collect();
    ordered.sort_by_key(|share| share.index());
    ordered.truncate(threshold);
    Ok(ordered)
}

/// Decodes each share's value into a point with `x = index`
///
/// # Errors
/// Returns the first decoding error encountered
pub fn decode_points(shares: &[&Share]) -> Result<Vec<Point>> {
    shares
        .iter()
        .map(|share| -> Result<Point> {
            let y = codec::decode(share.value(), share.base())?;
            Ok(Point::new(*share.index(), y))
        })
        .collect()
}

/// Evaluates the interpolating polynomial through `points` at `x = 0`
///
/// The result does not depend on the order of `points`. No points at all
/// interpolate to zero.
///
/// # Errors
/// Returns [`ReconstructError::DivisionByZero`] if two points share an
/// x-coordinate
pub fn lagrange_at_zero(points: &[Point]) -> Result<Rational> {
    let mut total = Rational::zero();

    for (j, pj) in points.iter().enumerate() {
        let mut numer = BigInt::one();
        let mut denom = BigInt::one();
        for (i, pi) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            numer *= -&pi.x;
            denom *= &pj.x - &pi.x;
        }

        let term = Rational::new(&pj.y * numer, denom)?;
        total = &total + &term;
    }

    Ok(total)
}

/// Reconstructs the secret (the constant term) from a set of shares
///
/// Selects the `threshold` lowest-indexed shares, decodes only those, and
/// interpolates them at zero. Any failure aborts the whole computation.
///
/// # Errors
/// Returns [`ReconstructError::InsufficientShares`] when too few shares are
/// supplied, a decoding error for a malformed selected share, or
/// [`ReconstructError::DivisionByZero`] when two selected shares have the
/// same index
///
/// # Examples
///
/// ```rust
/// use lagrange_recover::domain::{Share, ShareIndex};
/// use lagrange_recover::interpolate::reconstruct;
///
/// # fn main() -> anyhow::Result<()> {
/// // f(x) = x^2 + x + 4
/// let shares = vec![
///     Share::new(ShareIndex::new(1)?, 10, "6"),
///     Share::new(ShareIndex::new(2)?, 2, "1010"),
///     Share::new(ShareIndex::new(3)?, 16, "10"),
/// ];
///
/// let secret = reconstruct(&shares, 3)?;
/// assert_eq!(secret.to_string(), "4");
/// # Ok(())
/// # }
/// ```
pub fn reconstruct(shares: &[Share], threshold: usize) -> Result<Rational> {
    let selected = select_shares(shares, threshold)?;
    let points = decode_points(&selected)?;
    lagrange_at_zero(&points)
}
