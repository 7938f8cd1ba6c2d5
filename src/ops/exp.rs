//! Exponential.

use crate::common::consts::ONE;
use crate::common::util::exp_digits;
use crate::common::util::pow2_digits;
use crate::common::util::sqrt_int;
use crate::defs::Error;
use crate::defs::DEFAULT_RM;
use crate::defs::GUARD_DIGITS;
use crate::num::Decimal;
use crate::ops::series::reduce_converge_restore;
use crate::ops::series::series_run;
use crate::ops::series::ArgReduction;
use crate::ops::series::PolycoeffGen;
use num_traits::ToPrimitive;

// Polynomial coefficient generator: 1/n!
struct ExpPolycoeffGen {
    inc: Decimal,
    fct: Decimal,
}

impl ExpPolycoeffGen {
    fn new() -> Self {
        ExpPolycoeffGen {
            inc: Decimal::new(),
            fct: Decimal::one(),
        }
    }
}

impl PolycoeffGen for ExpPolycoeffGen {
    fn next(&mut self, scale: usize) -> Result<&Decimal, Error> {
        self.inc = self.inc.add(&ONE);
        self.fct = self.fct.div(&self.inc, scale, DEFAULT_RM)?;

        Ok(&self.fct)
    }
}

struct ExpArgReduction;

impl ArgReduction for ExpArgReduction {
    fn series(&self, x: &Decimal, scale: usize) -> Result<Decimal, Error> {
        // e^x = 1 + x + x^2/2! + x^3/3! + ...
        let mut polycoeff_gen = ExpPolycoeffGen::new();
        series_run(ONE.clone(), x.clone(), x, &mut polycoeff_gen, scale)
    }

    #[inline]
    fn restore_step(&self, v: &Decimal, scale: usize) -> Decimal {
        // e^(2x) = (e^x)^2
        v.mul_round(v, scale, DEFAULT_RM)
    }
}

/// Exponential function engine.
///
/// The argument is halved until it is well below 1, the Taylor series is
/// summed at the reduced argument, and the result is squared back.
#[derive(Debug, Clone)]
pub struct Exponential {
    scale: usize,
}

impl Exponential {
    /// Creates the engine producing results with `scale` fractional digits.
    pub fn new(scale: usize) -> Self {
        Exponential { scale }
    }

    /// Returns the number of fractional digits of the results.
    pub fn scale(&self) -> usize {
        self.scale
    }

    /// Computes `e` to the power of `x`.
    ///
    /// ## Errors
    ///
    /// No errors are expected for any finite argument; the signature keeps the
    /// error channel of the underlying decimal division.
    pub fn value(&self, x: &Decimal) -> Result<Decimal, Error> {
        self.compute(x, self.scale)
    }

    /// Computes `e` to the power of `x` with `scale` fractional digits.
    pub(crate) fn compute(&self, x: &Decimal, scale: usize) -> Result<Decimal, Error> {
        if x.is_zero() {
            return Ok(Decimal::one().with_scale(scale, DEFAULT_RM));
        }

        // e^(-x) = 1 / e^x, so every squared value stays >= 1.
        let a = x.abs();
        let int = a.trunc();

        // |x| / 2^k0 < 1
        let k0 = int.bits() as usize;
        let n = k0 + sqrt_int(scale as u32) as usize;

        // squaring n times amplifies the relative error 2^n times;
        // a positive argument also needs the digits of the integer part of the result.
        let mag = if x.is_positive() {
            exp_digits(int.to_usize().unwrap_or(usize::MAX).saturating_add(1))
        } else {
            0
        };
        let p_wrk = scale + mag + pow2_digits(n) + GUARD_DIGITS;

        let ret = reduce_converge_restore(&ExpArgReduction, &a, n, p_wrk)?;

        if x.is_negative() {
            ret.reciprocal(scale, DEFAULT_RM)
        } else {
            Ok(ret.with_scale(scale, DEFAULT_RM))
        }
    }
}
