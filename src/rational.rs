//! Exact rational arithmetic over arbitrary-precision integers
//!
//! A [`Rational`] is always stored in reduced form: the denominator is
//! strictly positive and shares no common factor with the numerator. Two
//! rationals are therefore equal exactly when their fields are equal, and
//! the derived `PartialEq`/`Hash` are sound.
//!
//! # Examples
//!
//! ```rust
//! use lagrange_recover::rational::Rational;
//! use num_bigint::BigInt;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let half = Rational::new(BigInt::from(-2), BigInt::from(-4))?;
//! assert_eq!(half.to_string(), "1/2");
//!
//! let one = &half + &half;
//! assert!(one.is_integer());
//! assert_eq!(one.to_string(), "1");
//!
//! // A zero denominator is never constructible
//! assert!(Rational::new(BigInt::from(1), BigInt::from(0)).is_err());
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Neg, Sub};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::error::{ReconstructError, Result};

/// Exact fraction `numer / denom` in canonical reduced form
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    numer: BigInt,
    denom: BigInt,
}

impl Rational {
    /// Creates a reduced rational from a numerator and denominator
    ///
    /// The sign is moved onto the numerator and both parts are divided by
    /// their greatest common divisor, so `0/d` always becomes `0/1`.
    ///
    /// # Errors
    /// Returns [`ReconstructError::DivisionByZero`] if `denom` is zero
    pub fn new(numer: BigInt, denom: BigInt) -> Result<Self> {
        if denom.is_zero() {
            return Err(ReconstructError::DivisionByZero);
        }
        Ok(Self::reduced(numer, denom))
    }

    /// Creates the rational `n/1`
    #[must_use]
    pub fn from_integer(n: BigInt) -> Self {
        Self {
            numer: n,
            denom: BigInt::one(),
        }
    }

    // Callers guarantee a non-zero denominator.
    fn reduced(numer: BigInt, denom: BigInt) -> Self {
        debug_assert!(!denom.is_zero());
        let (numer, denom) = if denom.is_negative() {
            (-numer, -denom)
        } else {
            (numer, denom)
        };

        // gcd is non-negative and gcd(0, d) = d
        let divisor = numer.gcd(&denom);
        if divisor.is_one() {
            return Self { numer, denom };
        }
        Self {
            numer: numer / &divisor,
            denom: denom / &divisor,
        }
    }

    /// Gets the numerator (carries the sign)
    #[must_use]
    pub fn numer(&self) -> &BigInt {
        &self.numer
    }

    /// Gets the denominator (always positive)
    #[must_use]
    pub fn denom(&self) -> &BigInt {
        &self.denom
    }

    /// Returns true if the denominator is 1
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.denom.is_one()
    }

    /// Exact integer view of this value, `None` when it is a proper fraction
    #[must_use]
    pub fn to_integer(&self) -> Option<&BigInt> {
        self.is_integer().then_some(&self.numer)
    }

    /// Divides `self` by `other`
    ///
    /// # Errors
    /// Returns [`ReconstructError::DivisionByZero`] if `other` is zero
    pub fn checked_div(&self, other: &Rational) -> Result<Rational> {
        if other.numer.is_zero() {
            return Err(ReconstructError::DivisionByZero);
        }
        Rational::new(&self.numer * &other.denom, &self.denom * &other.numer)
    }
}

impl From<BigInt> for Rational {
    fn from(n: BigInt) -> Self {
        Self::from_integer(n)
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::from_integer(BigInt::from(n))
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(BigInt::from(n))
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

impl Add<&Rational> for &Rational {
    type Output = Rational;

    fn add(self, other: &Rational) -> Rational {
        Rational::reduced(
            &self.numer * &other.denom + &other.numer * &self.denom,
            &self.denom * &other.denom,
        )
    }
}

impl Sub<&Rational> for &Rational {
    type Output = Rational;

    fn sub(self, other: &Rational) -> Rational {
        Rational::reduced(
            &self.numer * &other.denom - &other.numer * &self.denom,
            &self.denom * &other.denom,
        )
    }
}

impl Mul<&Rational> for &Rational {
    type Output = Rational;

    fn mul(self, other: &Rational) -> Rational {
        Rational::reduced(&self.numer * &other.numer, &self.denom * &other.denom)
    }
}

impl Add for Rational {
    type Output = Rational;

    fn add(self, other: Rational) -> Rational {
        &self + &other
    }
}

impl Sub for Rational {
    type Output = Rational;

    fn sub(self, other: Rational) -> Rational {
        &self - &other
    }
}

impl Mul for Rational {
    type Output = Rational;

    fn mul(self, other: Rational) -> Rational {
        &self * &other
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational {
            numer: -self.numer,
            denom: self.denom,
        }
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self::from_integer(BigInt::zero())
    }

    fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self::from_integer(BigInt::one())
    }
}

impl Sum for Rational {
    fn sum<I: Iterator<Item = Rational>>(iter: I) -> Self {
        iter.fold(Rational::zero(), |acc, term| &acc + &term)
    }
}

impl<'a> Sum<&'a Rational> for Rational {
    fn sum<I: Iterator<Item = &'a Rational>>(iter: I) -> Self {
        iter.fold(Rational::zero(), |acc, term| &acc + term)
    }
}
