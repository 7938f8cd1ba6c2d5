//! Cosine.

use crate::common::consts::ONE;
use crate::common::consts::TWO;
use crate::common::util::decimal_digits;
use crate::common::util::sqrt_int;
use crate::defs::Error;
use crate::defs::Sign;
use crate::defs::DEFAULT_RM;
use crate::defs::GUARD_DIGITS;
use crate::num::Decimal;
use crate::ops::consts::Consts;
use crate::ops::series::reduce_converge_restore;
use crate::ops::series::series_run;
use crate::ops::series::ArgReduction;
use crate::ops::series::PolycoeffGen;
use std::sync::Arc;

// Polynomial coefficient generator: -1/2!, 1/4!, -1/6!, ...
struct CosPolycoeffGen {
    inc: Decimal,
    fct: Decimal,
    val: Decimal,
    sign: Sign,
}

impl CosPolycoeffGen {
    fn new() -> Self {
        CosPolycoeffGen {
            inc: Decimal::new(),
            fct: Decimal::one(),
            val: Decimal::one(),
            sign: Sign::Pos,
        }
    }
}

impl PolycoeffGen for CosPolycoeffGen {
    fn next(&mut self, scale: usize) -> Result<&Decimal, Error> {
        self.inc = self.inc.add(&ONE);
        self.fct = self.fct.div(&self.inc, scale, DEFAULT_RM)?;

        self.inc = self.inc.add(&ONE);
        self.fct = self.fct.div(&self.inc, scale, DEFAULT_RM)?;

        self.sign = self.sign.invert();
        self.val = if self.sign.is_positive() {
            self.fct.clone()
        } else {
            -&self.fct
        };

        Ok(&self.val)
    }
}

struct CosArgReduction;

impl ArgReduction for CosArgReduction {
    fn series(&self, x: &Decimal, scale: usize) -> Result<Decimal, Error> {
        // cos:  1 - x^2/2! + x^4/4! - x^6/6! + ...
        let x_step = x.mul_round(x, scale, DEFAULT_RM); // x^2
        let x_first = x_step.clone(); // x^2

        let mut polycoeff_gen = CosPolycoeffGen::new();
        series_run(ONE.clone(), x_first, &x_step, &mut polycoeff_gen, scale)
    }

    #[inline]
    fn restore_step(&self, v: &Decimal, scale: usize) -> Decimal {
        // cos(2*x) = 2*cos(x)^2 - 1
        v.mul(v).mul(&TWO).sub(&ONE).with_scale(scale, DEFAULT_RM)
    }
}

/// Cosine engine.
///
/// Expects an argument already reduced by the caller, but folds any argument
/// into [0, π/2] using the symmetries of the cosine. The angle is then halved,
/// the Taylor series is summed, and the double-angle identity restores the value.
#[derive(Debug, Clone)]
pub struct Cosine {
    cc: Arc<Consts>,
}

impl Cosine {
    /// Creates the engine using the constants cache `cc`.
    /// Results have the working scale of `cc`.
    pub fn new(cc: Arc<Consts>) -> Self {
        Cosine { cc }
    }

    /// Returns the number of fractional digits of the results.
    pub fn scale(&self) -> usize {
        self.cc.scale()
    }

    /// Computes the cosine of `x` (radians).
    ///
    /// ## Errors
    ///
    /// No errors are expected; the signature keeps the error channel of the
    /// underlying decimal division.
    pub fn value(&self, x: &Decimal) -> Result<Decimal, Error> {
        self.compute(x, self.cc.scale())
    }

    /// Computes the cosine of `x` with `scale` fractional digits.
    pub(crate) fn compute(&self, x: &Decimal, scale: usize) -> Result<Decimal, Error> {
        if x.is_zero() {
            return Ok(Decimal::one().with_scale(scale, DEFAULT_RM));
        }

        let extra = sqrt_int(scale as u32) as usize;

        // each restoration step amplifies the error up to 4 times: log10(4) ~ 0.61
        let p_wrk = scale + GUARD_DIGITS + ((extra + 1) * 61 + 99) / 100;

        let (a, sign) = self.fold(x, p_wrk)?;

        let n = if a >= *ONE { extra + 1 } else { extra };

        let ret = reduce_converge_restore(&CosArgReduction, &a, n, p_wrk)?;

        let ret = if sign.is_negative() { -ret } else { ret };

        Ok(ret.with_scale(scale, DEFAULT_RM))
    }

    // Maps x to a in [0, π/2] and the sign s, so that cos(x) = s*cos(a).
    fn fold(&self, x: &Decimal, scale: usize) -> Result<(Decimal, Sign), Error> {
        let mut a = x.abs();

        // more digits of π for larger multiples of 2π
        let p_pi = scale + decimal_digits(&a.trunc()) + 1;
        let pi = self.cc.pi_at(p_pi)?;
        let pi2 = pi.mul(&TWO);

        if a >= pi2 {
            a = a.rem(&pi2)?;
        }

        // cos(x) = cos(2π - x)
        if a > pi {
            a = pi2.sub(&a);
        }

        // cos(x) = -cos(π - x)
        let half_pi = pi.div_pow2(1, p_pi, DEFAULT_RM);
        let sign = if a > half_pi {
            a = pi.sub(&a);
            Sign::Neg
        } else {
            Sign::Pos
        };

        Ok((a.with_scale(scale, DEFAULT_RM), sign))
    }
}
