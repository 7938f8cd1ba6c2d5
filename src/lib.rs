//! Transdec is a library of transcendental functions over fixed-scale decimal numbers.
//!
//! ## Introduction
//!
//! **Numbers**
//!
//! The number is defined by the data type `Decimal`: an arbitrary precision integer
//! together with the number of fractional digits, the scale.
//! Addition, subtraction, and multiplication of decimals are exact.
//! Division and rescaling round to the requested scale.
//!
//! **Functions**
//!
//! `exp`, `log`, `pow`, `sin`, `cos`, and `tan` are computed by three engines
//! (exponential, logarithm, cosine) sharing one power series appliance:
//! the argument is reduced, the Taylor series is summed until the next term
//! drops below one unit in the last digit, and the value is restored by an identity.
//! Every result has exactly the working scale of fractional digits.
//! Intermediate values carry guard digits and are rounded half to even.
//!
//! **Constants**
//!
//! π and ln(2) are computed once per context by binary splitting and cached in `Consts`.
//! The cache is immutable, and a context can be shared between threads.
//!
//! **Error handling**
//!
//! Functions return `Result`. A logarithm or power of a non-positive number fails with
//! `Error::NonPositiveArgument`, and a tangent whose cosine rounds to zero fails with
//! `Error::DivisionByZero`.
//!
//! ## Examples
//!
//! ```
//! use transdec::Context;
//! use transdec::Decimal;
//!
//! // Results with 20 fractional digits.
//! let ctx = Context::with_scale(20).expect("Constants cache initialized");
//!
//! let e = ctx.exp(&Decimal::from(1)).unwrap();
//! assert_eq!(e.to_string(), "2.71828182845904523536");
//!
//! let x: Decimal = "0.5".parse().unwrap();
//! assert_eq!(ctx.cos(&x).unwrap().to_string(), "0.87758256189037271612");
//!
//! // Functions of the default context use scale 50.
//! let ln2 = transdec::log(&Decimal::from(2)).unwrap();
//! assert_eq!(ln2.to_string(), "0.69314718055994530941723212145817656807550013436026");
//! ```

#![deny(missing_docs)]
#![deny(clippy::suspicious)]
#![allow(clippy::comparison_chain)]
#![allow(clippy::should_implement_trait)]
#![allow(clippy::new_without_default)]

mod common;
mod conv;
pub mod ctx;
mod defs;
mod num;
mod ops;
mod parser;
mod strop;

#[cfg(feature = "serde")]
mod for_3rd;

pub use crate::ctx::Context;
pub use crate::defs::Error;
pub use crate::defs::RoundingMode;
pub use crate::defs::Sign;
pub use crate::defs::DEFAULT_RM;
pub use crate::defs::DEFAULT_SCALE;
pub use crate::num::Decimal;
pub use crate::ops::consts::Consts;
pub use crate::ops::series;
pub use crate::ops::Cosine;
pub use crate::ops::Exponential;
pub use crate::ops::Logarithm;

use lazy_static::lazy_static;

lazy_static! {
    static ref DEFAULT_CONTEXT: Context = Context::new().expect("Default context initialized");
}

/// Returns `e` to the power of `x` with the default scale.
pub fn exp(x: &Decimal) -> Result<Decimal, Error> {
    DEFAULT_CONTEXT.exp(x)
}

/// Returns the natural logarithm of `x` with the default scale.
///
/// ## Errors
///
///  - NonPositiveArgument: `x` is zero or negative.
pub fn log(x: &Decimal) -> Result<Decimal, Error> {
    DEFAULT_CONTEXT.log(x)
}

/// Returns `base` to the power of `e` with the default scale.
///
/// ## Errors
///
///  - NonPositiveArgument: `base` is zero or negative.
pub fn pow(base: &Decimal, e: &Decimal) -> Result<Decimal, Error> {
    DEFAULT_CONTEXT.pow(base, e)
}

/// Returns the sine of `rad` (radians) with the default scale.
pub fn sin(rad: &Decimal) -> Result<Decimal, Error> {
    DEFAULT_CONTEXT.sin(rad)
}

/// Returns the cosine of `rad` (radians) with the default scale.
pub fn cos(rad: &Decimal) -> Result<Decimal, Error> {
    DEFAULT_CONTEXT.cos(rad)
}

/// Returns the tangent of `rad` (radians) with the default scale.
///
/// ## Errors
///
///  - DivisionByZero: the cosine of `rad` rounds to zero.
pub fn tan(rad: &Decimal) -> Result<Decimal, Error> {
    DEFAULT_CONTEXT.tan(rad)
}

#[cfg(test)]
mod tests {

    #[test]
    fn test_transdec() {
        use crate::Context;
        use crate::Decimal;
        use crate::Error;

        // Scale with some space for error.
        let p = 100 + 8;

        // tan(π/4) = 1
        let ctx = Context::with_scale(p).expect("Constants cache initialized");
        let pi = ctx.consts().pi();
        let quarter = pi.div_pow2(2, p, crate::DEFAULT_RM);
        let one = ctx.tan(&quarter).unwrap();
        assert!(one.sub(&Decimal::one()).abs() <= Decimal::from_parts(1.into(), p - 1));

        // e^(ln(2) * 10) = 1024
        let ln2 = ctx.log(&Decimal::from(2)).unwrap();
        let v = ctx.exp(&ln2.mul(&Decimal::from(10))).unwrap();
        let v = v.with_scale(100, crate::DEFAULT_RM);
        assert_eq!(v, Decimal::from(1024));

        // free functions
        assert_eq!(crate::exp(&Decimal::new()).unwrap(), Decimal::one());
        assert!(crate::log(&Decimal::one()).unwrap().is_zero());
        assert!(crate::sin(&Decimal::new()).unwrap().is_zero());
        assert_eq!(crate::cos(&Decimal::new()).unwrap(), Decimal::one());
        assert!(crate::tan(&Decimal::new()).unwrap().is_zero());
        assert_eq!(
            crate::pow(&Decimal::from(2), &Decimal::from(10)).unwrap(),
            Decimal::from(1024)
        );
        assert_eq!(crate::log(&Decimal::from(-1)), Err(Error::NonPositiveArgument));
        assert_eq!(crate::log(&Decimal::new()), Err(Error::NonPositiveArgument));
        let half_pi = crate::DEFAULT_CONTEXT.consts().pi_2div();
        assert_eq!(crate::tan(&half_pi), Err(Error::DivisionByZero));
        assert_eq!(crate::exp(&Decimal::one()).unwrap().scale(), crate::DEFAULT_SCALE);
    }
}
