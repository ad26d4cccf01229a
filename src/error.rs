use thiserror::Error;
use zeroize::Zeroizing;

/// Result type specialized for reconstruction operations.
pub type Result<T> = std::result::Result<T, ReconstructError>;

/// Errors raised by the arithmetic, decoding and interpolation core.
///
/// Every variant is terminal: a failed reconstruction never yields a
/// partial result. The offending digit string in `InvalidDigit` is named in
/// the diagnostic and wiped when the error is dropped.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReconstructError {
    #[error("Invalid digit {digit:?} for base {base} in value {:?}", .value.as_str())]
    InvalidDigit {
        digit: char,
        base: u32,
        value: Zeroizing<String>,
    },
    #[error("Invalid base {0}: supported bases are 2 through 36")]
    InvalidBase(u32),
    #[error("Insufficient shares: need {needed}, have {available}")]
    InsufficientShares { needed: usize, available: usize },
    #[error("Division by zero")]
    DivisionByZero,
}
