//! ln(2)

use crate::defs::Error;
use crate::defs::DEFAULT_RM;
use crate::num::Decimal;
use num_bigint::BigInt;

// Binary splitting of ln(2) = 2/3 * (1 + 1/(3*9) + 1/(5*9^2) + ...).
fn pqr(a: usize, b: usize) -> (BigInt, BigInt, BigInt) {
    if a == b - 1 {
        let r = BigInt::from(2 * b + 1);
        let q = &r * 9u32;

        (BigInt::from(1u32), q, r)
    } else {
        let m = (a + b) / 2;

        let (pa, qa, ra) = pqr(a, m);
        let (pb, qb, rb) = pqr(m, b);

        let p = pa * &qb + pb * &ra;
        let q = qa * qb;
        let r = ra * rb;

        (p, q, r)
    }
}

/// Returns ln(2) rounded to `scale` fractional digits.
pub fn ln2_num(scale: usize) -> Result<Decimal, Error> {
    // each term adds log10(9) ~ 0.95 digits
    let n = scale + scale / 16 + 4;

    let (p, q, _) = pqr(0, n);

    // 2 * (1 + p / q) / 3
    let num = Decimal::from((p + &q) * 2u32);
    let den = Decimal::from(q * 3u32);

    num.div(&den, scale, DEFAULT_RM)
}
