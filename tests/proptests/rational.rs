//! Property tests for exact rational arithmetic

use lagrange_recover::{Rational, ReconstructError};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

use super::generators::{AnyBigInt, AnyRational};

fn is_reduced(r: &Rational) -> bool {
    r.denom().is_positive() && r.numer().abs().gcd(r.denom()).is_one()
}

/// Every constructed rational is reduced with a positive denominator
#[quickcheck]
fn prop_construct_is_reduced(numer: AnyBigInt, denom: AnyBigInt) -> TestResult {
    let (AnyBigInt(numer), AnyBigInt(denom)) = (numer, denom);
    if denom.is_zero() {
        return TestResult::discard();
    }

    let r = Rational::new(numer.clone(), denom.clone()).unwrap();

    // Same value: numer / denom == r.numer / r.denom
    TestResult::from_bool(is_reduced(&r) && numer * r.denom() == denom * r.numer())
}

/// A zero denominator is rejected for every numerator
#[quickcheck]
fn prop_zero_denominator_fails(numer: AnyBigInt) -> bool {
    Rational::new(numer.0, BigInt::zero()) == Err(ReconstructError::DivisionByZero)
}

/// Arithmetic results stay reduced
#[quickcheck]
fn prop_operations_stay_reduced(a: AnyRational, b: AnyRational) -> bool {
    let (a, b) = (a.0, b.0);
    let quotient_ok = match a.checked_div(&b) {
        Ok(q) => is_reduced(&q),
        Err(e) => b.is_zero() && e == ReconstructError::DivisionByZero,
    };
    is_reduced(&(&a + &b)) && is_reduced(&(&a - &b)) && is_reduced(&(&a * &b)) && quotient_ok
}

#[quickcheck]
fn prop_add_commutative(a: AnyRational, b: AnyRational) -> bool {
    &a.0 + &b.0 == &b.0 + &a.0
}

#[quickcheck]
fn prop_add_associative(a: AnyRational, b: AnyRational, c: AnyRational) -> bool {
    let (a, b, c) = (a.0, b.0, c.0);
    &(&a + &b) + &c == &a + &(&b + &c)
}

#[quickcheck]
fn prop_mul_commutative(a: AnyRational, b: AnyRational) -> bool {
    &a.0 * &b.0 == &b.0 * &a.0
}

#[quickcheck]
fn prop_mul_associative(a: AnyRational, b: AnyRational, c: AnyRational) -> bool {
    let (a, b, c) = (a.0, b.0, c.0);
    &(&a * &b) * &c == &a * &(&b * &c)
}

#[quickcheck]
fn prop_mul_distributes_over_add(a: AnyRational, b: AnyRational, c: AnyRational) -> bool {
    let (a, b, c) = (a.0, b.0, c.0);
    &a * &(&b + &c) == &(&a * &b) + &(&a * &c)
}

/// Subtraction undoes addition
#[quickcheck]
fn prop_sub_inverts_add(a: AnyRational, b: AnyRational) -> bool {
    let (a, b) = (a.0, b.0);
    &(&a + &b) - &b == a
}

/// Division undoes multiplication by a non-zero value
#[quickcheck]
fn prop_div_inverts_mul(a: AnyRational, b: AnyRational) -> TestResult {
    let (a, b) = (a.0, b.0);
    if b.is_zero() {
        return TestResult::discard();
    }
    TestResult::from_bool((&a * &b).checked_div(&b) == Ok(a))
}

/// Integers print bare, fractions print as `n/d`
#[quickcheck]
fn prop_display_matches_parts(a: AnyRational) -> bool {
    let a = a.0;
    let text = a.to_string();
    if a.is_integer() {
        text == a.numer().to_string() && a.to_integer() == Some(a.numer())
    } else {
        text == format!("{}/{}", a.numer(), a.denom()) && a.to_integer().is_none()
    }
}
