//! Auxiliary functions.

use crate::defs::RoundingMode;
use core::cmp::Ordering;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Signed;
use num_traits::Zero;

/// square root integer approximation.
pub fn sqrt_int(a: u32) -> u32 {
    let a = a as u64;
    let mut x = a;
    for _ in 0..20 {
        if x == 0 {
            break;
        }
        x = (a / x + x) >> 1;
    }
    x as u32
}

/// 10 to the power of `n`.
pub fn pow10(n: usize) -> BigInt {
    num_traits::pow(BigInt::from(10u32), n)
}

/// Upper estimate of the number of decimal digits in `m`.
pub fn decimal_digits(m: &BigInt) -> usize {
    // log10(2) ~ 0.30103
    (m.bits() as usize * 30103) / 100000 + 1
}

/// Upper estimate of the number of decimal digits of `e^n`.
pub fn exp_digits(n: usize) -> usize {
    // log10(e) ~ 0.4343
    n.saturating_mul(4343) / 10000 + 1
}

/// Upper estimate of the number of decimal digits of `2^n`.
pub fn pow2_digits(n: usize) -> usize {
    n.saturating_mul(30103) / 100000 + 1
}

/// Divides `n` by `d` and rounds the quotient to an integer using rounding mode `rm`.
/// `d` must not be zero.
pub fn round_div(n: &BigInt, d: &BigInt, rm: RoundingMode) -> BigInt {
    debug_assert!(!d.is_zero());

    let (q, r) = n.div_rem(d);

    if r.is_zero() || rm == RoundingMode::None {
        return q;
    }

    let neg = n.is_negative() != d.is_negative();
    let twice: BigInt = r.abs() << 1;

    let away = match twice.cmp(&d.abs()) {
        Ordering::Greater => true,
        Ordering::Less => false,
        Ordering::Equal => match rm {
            RoundingMode::None | RoundingMode::ToZero => false,
            RoundingMode::Up => !neg,
            RoundingMode::Down => neg,
            RoundingMode::FromZero => true,
            RoundingMode::ToEven => q.is_odd(),
            RoundingMode::ToOdd => q.is_even(),
        },
    };

    if !away {
        q
    } else if neg {
        q - 1
    } else {
        q + 1
    }
}
