//! π number

use crate::common::util::pow10;
use crate::defs::Error;
use crate::defs::DEFAULT_RM;
use crate::num::Decimal;
use num_bigint::BigInt;

// Binary splitting of the Chudnovsky series.
fn pqr(a: usize, b: usize) -> (BigInt, BigInt, BigInt) {
    if a == b - 1 {
        let n0 = BigInt::from(6 * b - 5);
        let n1 = BigInt::from(2 * b - 1);
        let n2 = BigInt::from(6 * b - 1);
        let r = n0 * n1 * n2;

        let bb = BigInt::from(b);
        let q = BigInt::from(10939058860032000u64) * &bb * &bb * &bb;

        let n0 = BigInt::from(13591409u64) + BigInt::from(545140134u64) * bb;
        let mut p = &r * n0;

        if b & 1 != 0 {
            p = -p;
        }

        (p, q, r)
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

/// Returns π rounded to `scale` fractional digits.
pub fn pi_num(scale: usize) -> Result<Decimal, Error> {
    // each term adds ~14.18 digits
    let n = scale / 14 + 2;
    let wrk = scale + 10;

    let (p, q, _) = pqr(0, n);

    // pi = 426880 * sqrt(10005) * q / (13591409 * q + p)
    //    = 4270934400 * q / ((13591409 * q + p) * sqrt(10005))
    let sqrt = (BigInt::from(10005u32) * pow10(2 * wrk)).sqrt();
    let sqrt = Decimal::from_parts(sqrt, wrk);

    let num = Decimal::from(&q * 4270934400u64);
    let den = Decimal::from(q * 13591409u64 + p).mul(&sqrt);

    num.div(&den, scale, DEFAULT_RM)
}
