//! Definitions.

use core::fmt::Display;

/// Default number of fractional digits retained by results.
pub const DEFAULT_SCALE: usize = 50;

/// Rounding mode applied by every engine to every division and truncation.
pub const DEFAULT_RM: RoundingMode = RoundingMode::ToEven;

/// Extra digits carried by the engines above the result scale.
pub(crate) const GUARD_DIGITS: usize = 6;

/// Extra digits the constants are held with above the working scale.
pub(crate) const CONST_GUARD_DIGITS: usize = 24;

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

    /// Returns 1 for the positive sign and -1 for the negative sign.
    pub fn to_int(&self) -> i8 {
        *self as i8
    }
}

/// Possible errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Logarithm or power of a zero or negative number.
    NonPositiveArgument,

    /// Divisor is zero, or rounds to zero at the working scale.
    DivisionByZero,

    /// Invalid argument, e.g. unparsable text or a non-finite float.
    InvalidArgument,
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let repr = match self {
            Error::NonPositiveArgument => "argument is not positive",
            Error::DivisionByZero => "division by zero",
            Error::InvalidArgument => "invalid argument",
        };
        f.write_str(repr)
    }
}

/// Rounding modes.
///
/// Values which are not exactly halfway between two representable numbers
/// are always rounded to the nearest one; the mode decides ties only.
#[derive(Eq, PartialEq, Debug, Copy, Clone)]
pub enum RoundingMode {
    /// Skip rounding: discard the digits (truncate toward zero).
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
