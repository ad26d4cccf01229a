//! Property tests for base-N decoding

use lagrange_recover::ReconstructError;
use lagrange_recover::codec::{SEPARATOR, decode, encode};
use lagrange_recover::domain::Radix;
use num_bigint::BigInt;
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

use super::generators::{AnyBigUint, AnyRadix};

/// Decoding an encoded value gives back the original integer
#[quickcheck]
fn prop_decode_encode_round_trip(value: AnyBigUint, radix: AnyRadix) -> bool {
    let (AnyBigUint(value), AnyRadix(radix)) = (value, radix);
    let digits = encode(&value, radix);
    decode(&digits, *radix) == Ok(BigInt::from(value))
}

/// Case, surrounding whitespace and separators never change the value
#[quickcheck]
fn prop_formatting_is_ignored(value: AnyBigUint, radix: AnyRadix, stride: u8) -> bool {
    let (AnyBigUint(value), AnyRadix(radix)) = (value, radix);
    let stride = usize::from(stride % 4) + 1;

    let digits = encode(&value, radix);
    let mut decorated = String::from("  ");
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && i % stride == 0 {
            decorated.push(SEPARATOR);
        }
        decorated.push(ch.to_ascii_uppercase());
    }
    decorated.push('\t');

    decode(&decorated, *radix) == Ok(BigInt::from(value))
}

/// Bases outside 2..=36 are rejected before any digit is read
#[quickcheck]
fn prop_unsupported_base_rejected(base: u32, value: String) -> TestResult {
    if (Radix::MIN..=Radix::MAX).contains(&base) {
        return TestResult::discard();
    }
    TestResult::from_bool(decode(&value, base) == Err(ReconstructError::InvalidBase(base)))
}

/// The first digit not below the base is reported
#[quickcheck]
fn prop_digit_at_base_rejected(radix: AnyRadix, prefix: AnyBigUint) -> TestResult {
    let AnyRadix(radix) = radix;
    let Some(digit) = char::from_digit(*radix, 36) else {
        // base 36 has no digit equal to the base
        return TestResult::discard();
    };

    let value = format!("{}{digit}", encode(&prefix.0, radix));
    TestResult::from_bool(matches!(
        decode(&value, *radix),
        Err(ReconstructError::InvalidDigit { digit: d, base, .. }) if d == digit && base == *radix
    ))
}
