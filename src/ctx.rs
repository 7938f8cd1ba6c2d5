//! All operations on numbers are performed in some context.
//!
//! The context fixes the working scale, owns the constants cache and one
//! instance of each engine, and composes the engines into the public
//! transcendental functions.

use crate::common::util::decimal_digits;
use crate::common::util::exp_digits;
use crate::defs::Error;
use crate::defs::DEFAULT_RM;
use crate::defs::DEFAULT_SCALE;
use crate::defs::GUARD_DIGITS;
use crate::num::Decimal;
use crate::ops::consts::Consts;
use crate::ops::Cosine;
use crate::ops::Exponential;
use crate::ops::Logarithm;
use num_traits::ToPrimitive;
use std::sync::Arc;

/// Context contains the working scale, the constants, and the engines.
///
/// A context is immutable and can be shared between threads.
#[derive(Debug, Clone)]
pub struct Context {
    cc: Arc<Consts>,
    exp: Exponential,
    ln: Logarithm,
    cos: Cosine,
}

impl Context {
    /// Create a new context with the default scale.
    pub fn new() -> Result<Self, Error> {
        Self::with_scale(DEFAULT_SCALE)
    }

    /// Create a new context with results having `scale` fractional digits.
    pub fn with_scale(scale: usize) -> Result<Self, Error> {
        let cc = Consts::new(scale)?;
        Ok(Self::with_consts(Arc::new(cc)))
    }

    /// Create a new context with constant cache `cc`.
    /// The scale of the cache becomes the working scale.
    pub fn with_consts(cc: Arc<Consts>) -> Self {
        Context {
            exp: Exponential::new(cc.scale()),
            ln: Logarithm::new(cc.clone()),
            cos: Cosine::new(cc.clone()),
            cc,
        }
    }

    /// Returns the working scale of the context.
    pub fn scale(&self) -> usize {
        self.cc.scale()
    }

    /// Returns the constant cache of the context.
    pub fn consts(&self) -> &Arc<Consts> {
        &self.cc
    }

    /// Returns the exponential engine.
    pub fn exponential(&self) -> &Exponential {
        &self.exp
    }

    /// Returns the logarithm engine.
    pub fn logarithm(&self) -> &Logarithm {
        &self.ln
    }

    /// Returns the cosine engine.
    pub fn cosine(&self) -> &Cosine {
        &self.cos
    }

    /// Returns `e` to the power of `x`.
    pub fn exp(&self, x: &Decimal) -> Result<Decimal, Error> {
        self.exp.value(x)
    }

    /// Returns the natural logarithm of `x`.
    ///
    /// ## Errors
    ///
    ///  - NonPositiveArgument: `x` is zero or negative.
    pub fn log(&self, x: &Decimal) -> Result<Decimal, Error> {
        self.ln.value(x)
    }

    /// Returns `base` to the power of `e`, computed as `exp(e * ln(base))`.
    ///
    /// ## Errors
    ///
    ///  - NonPositiveArgument: `base` is zero or negative.
    pub fn pow(&self, base: &Decimal, e: &Decimal) -> Result<Decimal, Error> {
        if !base.is_positive() {
            return Err(Error::NonPositiveArgument);
        }

        let scale = self.scale();

        // The error of ln(base) is multiplied by e, and then by the result of exp.
        // A rough estimate of e * ln(base) gives the number of integer digits of the result,
        // it must stay within one unit, so ln(base) carries as many digits as e has.
        let p_est = GUARD_DIGITS + decimal_digits(&e.trunc());
        let y0 = self.ln.compute(base, p_est)?.mul(e);
        let mag = if y0.is_positive() {
            exp_digits(y0.trunc().to_usize().unwrap_or(usize::MAX).saturating_add(1))
        } else {
            0
        };

        let p_wrk = scale + mag + p_est;

        let y = self.ln.compute(base, p_wrk)?.mul_round(e, p_wrk, DEFAULT_RM);

        self.exp.compute(&y, scale)
    }

    /// Returns the cosine of `rad` (radians).
    pub fn cos(&self, rad: &Decimal) -> Result<Decimal, Error> {
        let p_wrk = self.scale() + GUARD_DIGITS;
        let x = self.reduce_angle(rad, p_wrk)?;

        self.cos.compute(&x, self.scale())
    }

    /// Returns the sine of `rad` (radians), computed as `cos(rad - π/2)`.
    pub fn sin(&self, rad: &Decimal) -> Result<Decimal, Error> {
        let p_wrk = self.scale() + GUARD_DIGITS;
        let x = self.reduce_angle(rad, p_wrk)?;
        let x = x.sub(&self.cc.pi_2div_at(p_wrk)?);

        self.cos.compute(&x, self.scale())
    }

    /// Returns the tangent of `rad` (radians), computed as `sin(rad) / cos(rad)`.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: the cosine of `rad` rounds to zero at the working scale.
    pub fn tan(&self, rad: &Decimal) -> Result<Decimal, Error> {
        let scale = self.scale();
        let mut p_wrk = scale + GUARD_DIGITS;

        loop {
            let x = self.reduce_angle(rad, p_wrk)?;
            let c = self.cos.compute(&x, p_wrk)?;

            if c.clone().with_scale(scale, DEFAULT_RM).is_zero() {
                return Err(Error::DivisionByZero);
            }

            // leading zeros of a small cosine are lost twice in sin / cos
            let lost = p_wrk.saturating_sub(decimal_digits(c.mantissa()));
            let p_req = scale + GUARD_DIGITS + 2 * lost;

            if p_wrk >= p_req {
                let s = self
                    .cos
                    .compute(&x.sub(&self.cc.pi_2div_at(p_wrk)?), p_wrk)?;

                return s.div(&c, scale, DEFAULT_RM);
            }

            p_wrk = p_req + 2;
        }
    }

    // rad rem 2π with `scale` fractional digits.
    fn reduce_angle(&self, rad: &Decimal, scale: usize) -> Result<Decimal, Error> {
        // the error of 2π is multiplied by the integer quotient
        let p = scale + decimal_digits(&rad.trunc());
        let pi2 = self.cc.pi_2mul_at(p)?;

        Ok(rad.rem(&pi2)?.with_scale(scale, DEFAULT_RM))
    }
}
