//! Definitions.

use core::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default rounding mode.
pub const DEFAULT_RM: RoundingMode = RoundingMode::ToEven;

/// Default precision in bits.
pub const DEFAULT_P: usize = 128;

/// Maximum precision in bits accepted by any operation.
pub const PRECISION_MAX: usize = 1 << 32;

/// Number of bits per decimal digit, log2(10).
pub const BITS_PER_DIGIT: f64 = 3.321928094887362;

/// Extra bits carried by the final composition of the Chudnovsky series.
/// They absorb the rounding error of the square root, the multiplication, and the division
/// which follow the exact binary splitting.
pub const PI_GUARD_BITS: usize = 64;

/// Smallest guard margin accepted by the Pi engine.
pub const MIN_GUARD_BITS: usize = 64;

/// Extra bits carried while summing a truncated power series.
/// Additionally, log2 of the number of terms is added, because each term contributes
/// at most one unit of rounding error in the last place.
pub const SERIES_GUARD_BITS: usize = 16;

/// Sign.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
pub enum Sign {
    /// Negative.
    Neg = -1,

    /// Positive.
    Pos = 1,
}

impl Sign {
    /// Changes the sign to the opposite.
    pub fn invert(&self) -> Self {
        match *self {
            Sign::Pos => Sign::Neg,
            Sign::Neg => Sign::Pos,
        }
    }

    /// Returns true if `self` is positive.
    pub fn is_positive(&self) -> bool {
        *self == Sign::Pos
    }

    /// Returns true if `self` is negative.
    pub fn is_negative(&self) -> bool {
        *self == Sign::Neg
    }
}

/// Kinds of arithmetic failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    /// Divisor is zero.
    DivisionByZero,

    /// Square root of a negative number.
    NegativeSqrt,
}

/// Possible errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Invalid argument. Contains the name of the offending parameter.
    InvalidArgument(&'static str),

    /// Argument is outside of the convergence radius of a series.
    /// Contains the name of the offending parameter.
    DomainError(&'static str),

    /// Arithmetic operation is undefined for its operands.
    ArithmeticError(ArithmeticError),

    /// Requested precision exceeds `PRECISION_MAX`. Contains the requested precision in bits.
    PrecisionOverflow(usize),
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::InvalidArgument(name) => write!(f, "invalid argument `{}`", name),
            Error::DomainError(name) => {
                write!(f, "argument `{}` is outside of the convergence radius", name)
            }
            Error::ArithmeticError(ArithmeticError::DivisionByZero) => {
                f.write_str("division by zero")
            }
            Error::ArithmeticError(ArithmeticError::NegativeSqrt) => {
                f.write_str("square root of a negative number")
            }
            Error::PrecisionOverflow(p) => write!(
                f,
                "precision of {} bits exceeds the maximum of {} bits",
                p, PRECISION_MAX
            ),
        }
    }
}

/// Rounding modes.
/// All modes except `None` round to the nearest representable value and differ in how ties are broken.
#[derive(Eq, PartialEq, Debug, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundingMode {
    /// Skip rounding operation, i.e. truncate toward zero.
    None = 1,

    /// Round half toward positive infinity.
    Up = 2,

    /// Round half toward negative infinity.
    Down = 4,

    /// Round half toward zero.
    ToZero = 8,

    /// Round half away from zero.
    FromZero = 16,

    /// Round half to even.
    ToEven = 32,

    /// Round half to odd.
    ToOdd = 64,
}

impl Default for RoundingMode {
    fn default() -> Self {
        DEFAULT_RM
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(Error::InvalidArgument("n").to_string(), "invalid argument `n`");
        assert_eq!(
            Error::ArithmeticError(ArithmeticError::DivisionByZero).to_string(),
            "division by zero"
        );
        assert!(Error::PrecisionOverflow(PRECISION_MAX + 1).to_string().contains("exceeds"));
        assert_ne!(Error::InvalidArgument("n"), Error::InvalidArgument("m"));
    }
}
