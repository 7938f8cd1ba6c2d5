//! Decimal definition and basic arithmetic, comparison, and number manipulation operations.

use crate::common::util::pow10;
use crate::common::util::round_div;
use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::defs::Sign;
use core::cmp::Ordering;
use num_bigint::BigInt;
use num_traits::One;
use num_traits::Signed;
use num_traits::Zero;

/// Fixed-scale decimal number: an unscaled integer `m` and the number of
/// fractional digits `scale`, so that the value is `m * 10^-scale`.
///
/// Addition, subtraction and multiplication are exact. Division, reciprocal
/// and rescaling round to an explicitly requested scale.
#[derive(Clone, Debug, Default)]
pub struct Decimal {
    pub(crate) m: BigInt,
    pub(crate) scale: usize,
}

impl Decimal {
    /// Returns a new number with value of 0 and scale 0.
    pub fn new() -> Self {
        Decimal {
            m: BigInt::zero(),
            scale: 0,
        }
    }

    /// Returns 1 with scale 0.
    pub fn one() -> Self {
        Decimal {
            m: BigInt::one(),
            scale: 0,
        }
    }

    /// Constructs a number from the unscaled value `m` and the number of fractional digits `scale`.
    pub fn from_parts(m: BigInt, scale: usize) -> Self {
        Decimal { m, scale }
    }

    /// Decomposes the number into the unscaled value and the scale.
    pub fn into_parts(self) -> (BigInt, usize) {
        (self.m, self.scale)
    }

    /// Returns the unscaled value.
    pub fn mantissa(&self) -> &BigInt {
        &self.m
    }

    /// Returns the number of fractional digits.
    pub fn scale(&self) -> usize {
        self.scale
    }

    /// Returns true if the number is zero.
    pub fn is_zero(&self) -> bool {
        self.m.is_zero()
    }

    /// Returns true if the number is strictly negative.
    pub fn is_negative(&self) -> bool {
        self.m.is_negative()
    }

    /// Returns true if the number is strictly positive.
    pub fn is_positive(&self) -> bool {
        self.m.is_positive()
    }

    /// Returns the sign of the number. Zero is positive.
    pub fn sign(&self) -> Sign {
        if self.m.is_negative() {
            Sign::Neg
        } else {
            Sign::Pos
        }
    }

    /// Returns the absolute value.
    pub fn abs(&self) -> Self {
        Decimal {
            m: self.m.abs(),
            scale: self.scale,
        }
    }

    /// Returns the integer part, truncated toward zero.
    pub fn trunc(&self) -> BigInt {
        if self.scale == 0 {
            self.m.clone()
        } else {
            &self.m / pow10(self.scale)
        }
    }

    /// Returns the unscaled value of `self` expressed with `scale` fractional digits.
    /// `scale` must not be less than the scale of `self`.
    fn m_at(&self, scale: usize) -> BigInt {
        debug_assert!(scale >= self.scale);
        if scale == self.scale {
            self.m.clone()
        } else {
            &self.m * pow10(scale - self.scale)
        }
    }

    /// Changes the number of fractional digits to `scale`,
    /// rounding with `rm` if digits are dropped.
    pub fn set_scale(&mut self, scale: usize, rm: RoundingMode) {
        if scale >= self.scale {
            self.m = self.m_at(scale);
        } else {
            self.m = round_div(&self.m, &pow10(self.scale - scale), rm);
        }
        self.scale = scale;
    }

    /// Returns the number with `scale` fractional digits, rounded with `rm` if digits are dropped.
    pub fn with_scale(mut self, scale: usize, rm: RoundingMode) -> Self {
        self.set_scale(scale, rm);
        self
    }

    /// Removes trailing zero fractional digits.
    pub fn normalize(&self) -> Self {
        let mut m = self.m.clone();
        let mut scale = self.scale;
        let ten = BigInt::from(10u32);
        while scale > 0 && !m.is_zero() && (&m % &ten).is_zero() {
            m /= &ten;
            scale -= 1;
        }
        if m.is_zero() {
            scale = 0;
        }
        Decimal { m, scale }
    }

    /// Adds `d2` to `self`. The result is exact.
    pub fn add(&self, d2: &Self) -> Self {
        let scale = self.scale.max(d2.scale);
        Decimal {
            m: self.m_at(scale) + d2.m_at(scale),
            scale,
        }
    }

    /// Subtracts `d2` from `self`. The result is exact.
    pub fn sub(&self, d2: &Self) -> Self {
        let scale = self.scale.max(d2.scale);
        Decimal {
            m: self.m_at(scale) - d2.m_at(scale),
            scale,
        }
    }

    /// Multiplies `self` by `d2`. The result is exact and has the sum of the operand scales.
    pub fn mul(&self, d2: &Self) -> Self {
        Decimal {
            m: &self.m * &d2.m,
            scale: self.scale + d2.scale,
        }
    }

    /// Multiplies `self` by `d2` and rounds the product to `scale` digits using rounding mode `rm`.
    pub fn mul_round(&self, d2: &Self, scale: usize, rm: RoundingMode) -> Self {
        self.mul(d2).with_scale(scale, rm)
    }

    /// Divides `self` by `d2`. The result is rounded to `scale` digits using rounding mode `rm`.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `d2` is zero.
    pub fn div(&self, d2: &Self, scale: usize, rm: RoundingMode) -> Result<Self, Error> {
        if d2.is_zero() {
            return Err(Error::DivisionByZero);
        }

        // self.m * 10^-s1 / (d2.m * 10^-s2) = (self.m * 10^(scale + s2 - s1) / d2.m) * 10^-scale
        let up = scale + d2.scale;
        let (n, d) = if up >= self.scale {
            (&self.m * pow10(up - self.scale), d2.m.clone())
        } else {
            (self.m.clone(), &d2.m * pow10(self.scale - up))
        };

        Ok(Decimal {
            m: round_div(&n, &d, rm),
            scale,
        })
    }

    /// Divides `self` by 2^`n`. The result is rounded to `scale` digits using rounding mode `rm`.
    pub fn div_pow2(&self, n: usize, scale: usize, rm: RoundingMode) -> Self {
        let d = BigInt::one() << n;
        let (num, den) = if scale >= self.scale {
            (self.m_at(scale), d)
        } else {
            (self.m.clone(), d * pow10(self.scale - scale))
        };

        Decimal {
            m: round_div(&num, &den, rm),
            scale,
        }
    }

    /// Computes the reciprocal `1 / self` rounded to `scale` digits using rounding mode `rm`.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `self` is zero.
    pub fn reciprocal(&self, scale: usize, rm: RoundingMode) -> Result<Self, Error> {
        Self::one().div(self, scale, rm)
    }

    /// Computes the remainder of the truncated division of `self` by `d2`.
    /// The result has the sign of `self` and is exact.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `d2` is zero.
    pub fn rem(&self, d2: &Self) -> Result<Self, Error> {
        if d2.is_zero() {
            return Err(Error::DivisionByZero);
        }

        let scale = self.scale.max(d2.scale);
        Ok(Decimal {
            m: self.m_at(scale) % d2.m_at(scale),
            scale,
        })
    }

    /// Returns the integer quotient of the truncated division of `self` by `d2`.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `d2` is zero.
    pub fn div_trunc(&self, d2: &Self) -> Result<BigInt, Error> {
        if d2.is_zero() {
            return Err(Error::DivisionByZero);
        }

        let scale = self.scale.max(d2.scale);
        Ok(self.m_at(scale) / d2.m_at(scale))
    }

    /// Compares absolute values of `self` and `d2`.
    pub fn abs_cmp(&self, d2: &Self) -> Ordering {
        let scale = self.scale.max(d2.scale);
        self.m_at(scale).abs().cmp(&d2.m_at(scale).abs())
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.scale == other.scale {
            self.m.cmp(&other.m)
        } else {
            let scale = self.scale.max(other.scale);
            self.m_at(scale).cmp(&other.m_at(scale))
        }
    }
}

impl From<i32> for Decimal {
    fn from(v: i32) -> Self {
        Decimal::from_parts(BigInt::from(v), 0)
    }
}

impl From<i64> for Decimal {
    fn from(v: i64) -> Self {
        Decimal::from_parts(BigInt::from(v), 0)
    }
}

impl From<u64> for Decimal {
    fn from(v: u64) -> Self {
        Decimal::from_parts(BigInt::from(v), 0)
    }
}

impl From<usize> for Decimal {
    fn from(v: usize) -> Self {
        Decimal::from_parts(BigInt::from(v), 0)
    }
}

impl From<BigInt> for Decimal {
    fn from(v: BigInt) -> Self {
        Decimal::from_parts(v, 0)
    }
}

// Operators are implemented for references only, so that method call syntax
// resolves to the inherent methods taking `&self`.
macro_rules! impl_bin_op {
    ($trait:ident, $fn:ident) => {
        impl<'a, 'b> core::ops::$trait<&'b Decimal> for &'a Decimal {
            type Output = Decimal;
            fn $fn(self, rhs: &'b Decimal) -> Decimal {
                Decimal::$fn(self, rhs)
            }
        }
    };
}

impl_bin_op!(Add, add);
impl_bin_op!(Sub, sub);
impl_bin_op!(Mul, mul);

impl core::ops::Neg for Decimal {
    type Output = Decimal;
    fn neg(self) -> Decimal {
        Decimal {
            m: -self.m,
            scale: self.scale,
        }
    }
}

impl<'a> core::ops::Neg for &'a Decimal {
    type Output = Decimal;
    fn neg(self) -> Decimal {
        Decimal {
            m: -&self.m,
            scale: self.scale,
        }
    }
}
