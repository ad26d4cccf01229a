//! Property tests for secret reconstruction

use lagrange_recover::domain::Point;
use lagrange_recover::interpolate::{lagrange_at_zero, reconstruct};
use lagrange_recover::{Rational, ReconstructError};
use num_bigint::BigInt;
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

use super::generators::{AnyBigInt, DistinctPoints, PolynomialShares, permute};

/// Reconstruction returns the constant term of the sharing polynomial
#[quickcheck]
fn prop_recovers_constant_term(case: PolynomialShares) -> bool {
    let expected = Rational::from(BigInt::from(case.secret));
    reconstruct(&case.shares, case.threshold) == Ok(expected)
}

/// The order shares arrive in does not matter
#[quickcheck]
fn prop_share_order_irrelevant(case: PolynomialShares, seed: usize) -> bool {
    let shuffled = permute(&case.shares, seed);
    reconstruct(&case.shares, case.threshold) == reconstruct(&shuffled, case.threshold)
}

/// Summation order over the points does not change the reduced result
#[quickcheck]
fn prop_summation_order_irrelevant(points: DistinctPoints, seed: usize) -> bool {
    let DistinctPoints(points) = points;
    let reordered = permute(&points, seed);
    let (Ok(a), Ok(b)) = (lagrange_at_zero(&points), lagrange_at_zero(&reordered)) else {
        return false;
    };
    a == b
}

/// Fewer shares than the threshold never reconstruct
#[quickcheck]
fn prop_below_threshold_fails(case: PolynomialShares) -> bool {
    let available = case.threshold - 1;
    let partial = &case.shares[..available];
    reconstruct(partial, case.threshold)
        == Err(ReconstructError::InsufficientShares {
            needed: case.threshold,
            available,
        })
}

/// A repeated x-coordinate is a division by zero, never a wrong answer
#[quickcheck]
fn prop_duplicate_x_fails(points: DistinctPoints, y: AnyBigInt, seed: usize) -> TestResult {
    let DistinctPoints(mut points) = points;
    if points.is_empty() {
        return TestResult::discard();
    }

    let x = points[seed % points.len()].x.clone();
    points.push(Point { x, y: y.0 });
    TestResult::from_bool(lagrange_at_zero(&points) == Err(ReconstructError::DivisionByZero))
}
