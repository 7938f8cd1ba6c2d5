//! Power series computation appliance.

use crate::defs::Error;
use crate::defs::DEFAULT_RM;
use crate::num::Decimal;
use core::cmp::Ordering;
use num_bigint::BigInt;

//
// Public part
//

/// Generator of polynomial coefficients.
pub trait PolycoeffGen {
    /// Returns the next polynomial coefficient value rounded to `scale` digits.
    fn next(&mut self, scale: usize) -> Result<&Decimal, Error>;
}

/// Argument reduction by halving, and the identity which restores the function value.
pub trait ArgReduction {
    /// Evaluates the function series at the reduced argument `x` with `scale` digits.
    fn series(&self, x: &Decimal, scale: usize) -> Result<Decimal, Error>;

    /// Given f(x), returns f(2*x) with `scale` digits.
    fn restore_step(&self, v: &Decimal, scale: usize) -> Decimal;
}

/// Halves `x` `n` times, evaluates the series at the reduced argument,
/// and restores the function value by applying the doubling identity `n` times.
/// All intermediate values are rounded to `scale` digits.
pub fn reduce_converge_restore<R: ArgReduction>(
    reduction: &R,
    x: &Decimal,
    n: usize,
    scale: usize,
) -> Result<Decimal, Error> {
    let arg = x.div_pow2(n, scale, DEFAULT_RM);

    let mut ret = reduction.series(&arg, scale)?;

    for _ in 0..n {
        ret = reduction.restore_step(&ret, scale);
    }

    Ok(ret)
}

/// Computes `acc + c1*x_first + c2*x_first*x_step + c3*x_first*x_step^2 + ...`,
/// where `ci` are produced by `polycoeff_gen`.
/// The summation stops as soon as the next term is smaller than one unit
/// in the last retained digit.
/// Terms and powers of x are rounded to `scale` digits.
pub fn series_run<T: PolycoeffGen>(
    acc: Decimal,
    x_first: Decimal,
    x_step: &Decimal,
    polycoeff_gen: &mut T,
    scale: usize,
) -> Result<Decimal, Error> {
    let ulp = Decimal::from_parts(BigInt::from(1u32), scale);
    let mut acc = acc;
    let mut x_pow = x_first;

    loop {
        let coeff = polycoeff_gen.next(scale)?;
        let part = x_pow.mul(coeff);

        if part.abs_cmp(&ulp) == Ordering::Less {
            break;
        }

        acc = acc.add(&part.with_scale(scale, DEFAULT_RM));
        x_pow = x_pow.mul_round(x_step, scale, DEFAULT_RM);
    }

    Ok(acc.with_scale(scale, DEFAULT_RM))
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::common::consts::ONE;

    // Coefficients 1, 1, 1, ...: geometric series.
    struct OnesGen {
        one: Decimal,
    }

    impl PolycoeffGen for OnesGen {
        fn next(&mut self, _scale: usize) -> Result<&Decimal, Error> {
            Ok(&self.one)
        }
    }

    // Driver mechanics only: geometric series restored by squaring.
    struct SquareReduction;

    impl ArgReduction for SquareReduction {
        fn series(&self, x: &Decimal, scale: usize) -> Result<Decimal, Error> {
            let mut gen = OnesGen { one: ONE.clone() };
            series_run(ONE.clone(), x.clone(), x, &mut gen, scale)
        }

        fn restore_step(&self, v: &Decimal, scale: usize) -> Decimal {
            v.mul_round(v, scale, DEFAULT_RM)
        }
    }

    #[test]
    fn test_series_run() {
        // 1 + 0.5 + 0.25 + ... = 2
        let half = Decimal::from_parts(BigInt::from(5), 1);
        let mut gen = OnesGen { one: ONE.clone() };
        let ret = series_run(ONE.clone(), half.clone(), &half, &mut gen, 20).unwrap();

        let diff = Decimal::from(2).sub(&ret).abs();
        assert!(diff <= Decimal::from_parts(BigInt::from(1), 19));
        assert_eq!(ret.scale(), 20);
    }

    #[test]
    fn test_reduce_converge_restore() {
        // no reduction is the plain series
        let x = Decimal::from_parts(BigInt::from(2), 1);
        let r0 = reduce_converge_restore(&SquareReduction, &x, 0, 30).unwrap();
        let r1 = SquareReduction.series(&x, 30).unwrap();
        assert_eq!(r0, r1);

        // zero argument yields the leading accumulator
        let r = reduce_converge_restore(&SquareReduction, &Decimal::new(), 5, 30).unwrap();
        assert_eq!(r, *ONE);
    }
}
