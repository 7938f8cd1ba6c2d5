//! Natural logarithm.

use crate::common::consts::ONE;
use crate::common::consts::TWO;
use crate::common::util::decimal_digits;
use crate::defs::Error;
use crate::defs::DEFAULT_RM;
use crate::defs::GUARD_DIGITS;
use crate::num::Decimal;
use crate::ops::consts::Consts;
use crate::ops::series::series_run;
use crate::ops::series::PolycoeffGen;
use num_bigint::BigInt;
use std::sync::Arc;

// Polynomial coefficient generator: 1/3, 1/5, 1/7, ...
struct AtanhPolycoeffGen {
    acc: Decimal,
    val: Decimal,
}

impl AtanhPolycoeffGen {
    fn new() -> Self {
        AtanhPolycoeffGen {
            acc: Decimal::one(),
            val: Decimal::one(),
        }
    }
}

impl PolycoeffGen for AtanhPolycoeffGen {
    fn next(&mut self, scale: usize) -> Result<&Decimal, Error> {
        self.acc = self.acc.add(&TWO);
        self.val = self.acc.reciprocal(scale, DEFAULT_RM)?;

        Ok(&self.val)
    }
}

/// Natural logarithm engine.
///
/// The argument is factored as `y * 2^n` with `1 <= y < 2`, and `ln(y)`
/// is computed by the series of `2*atanh((y-1)/(y+1))`.
#[derive(Debug, Clone)]
pub struct Logarithm {
    cc: Arc<Consts>,
}

impl Logarithm {
    /// Creates the engine using the constants cache `cc`.
    /// Results have the working scale of `cc`.
    pub fn new(cc: Arc<Consts>) -> Self {
        Logarithm { cc }
    }

    /// Returns the number of fractional digits of the results.
    pub fn scale(&self) -> usize {
        self.cc.scale()
    }

    /// Computes the natural logarithm of `x`.
    ///
    /// ## Errors
    ///
    ///  - NonPositiveArgument: `x` is zero or negative.
    pub fn value(&self, x: &Decimal) -> Result<Decimal, Error> {
        self.compute(x, self.cc.scale())
    }

    /// Computes the natural logarithm of `x` with `scale` fractional digits.
    pub(crate) fn compute(&self, x: &Decimal, scale: usize) -> Result<Decimal, Error> {
        if !x.is_positive() {
            return Err(Error::NonPositiveArgument);
        }

        if *x < *ONE {
            // ln(x) = -ln(1/x)
            let inv = x.reciprocal(scale + GUARD_DIGITS, DEFAULT_RM)?;
            let ret = self.ln_ge_one(&inv, scale)?;
            return Ok(-ret);
        }

        self.ln_ge_one(x, scale)
    }

    // ln for the argument x >= 1
    fn ln_ge_one(&self, x: &Decimal, scale: usize) -> Result<Decimal, Error> {
        debug_assert!(*x >= *ONE);

        // factoring: ln(x) = ln(y * 2^n) = ln(y) + n*ln(2), 1 <= y < 2
        // 2^n <= trunc(x) < 2^(n+1)
        let n = (x.trunc().bits() as usize).saturating_sub(1);

        let p_wrk = scale + GUARD_DIGITS;
        let y = x.div_pow2(n, p_wrk, DEFAULT_RM);

        let p1 = ln_series(&y, p_wrk)?;

        let ret = if n == 0 {
            p1
        } else {
            let n = BigInt::from(n);
            let p_ln2 = p_wrk + decimal_digits(&n);
            let p2 = self.cc.ln_2_at(p_ln2)?.mul(&Decimal::from(n));

            p1.add(&p2)
        };

        Ok(ret.with_scale(scale, DEFAULT_RM))
    }
}

// ln(y) = 2*atanh(z), z = (y-1)/(y+1)
// atanh(z) = z + z^3/3 + z^5/5 + ...
fn ln_series(y: &Decimal, scale: usize) -> Result<Decimal, Error> {
    let x1 = y.sub(&ONE);
    let x2 = y.add(&ONE);
    let z = x1.div(&x2, scale, DEFAULT_RM)?;

    if z.is_zero() {
        return Ok(z);
    }

    let x_step = z.mul_round(&z, scale, DEFAULT_RM); // z^2
    let x_first = z.mul_round(&x_step, scale, DEFAULT_RM); // z^3

    let mut polycoeff_gen = AtanhPolycoeffGen::new();
    let ret = series_run(z, x_first, &x_step, &mut polycoeff_gen, scale)?;

    Ok(ret.mul(&TWO))
}
