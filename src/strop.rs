//! Decimal formatting and parsing.

use crate::common::util::pow10;
use crate::defs::Error;
use crate::num::Decimal;
use crate::parser;
use core::fmt::Display;
use core::fmt::Formatter;
use core::str::FromStr;
use num_bigint::BigInt;
use num_traits::Signed;

impl Display for Decimal {
    /// Formats the number in positional notation with exactly `scale` fractional digits.
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let mut s = self.m.abs().to_string();

        if self.scale > 0 {
            if s.len() <= self.scale {
                let zeroes = "0".repeat(self.scale + 1 - s.len());
                s.insert_str(0, &zeroes);
            }
            s.insert(s.len() - self.scale, '.');
        }

        f.pad_integral(!self.m.is_negative(), "", &s)
    }
}

impl FromStr for Decimal {
    type Err = Error;

    /// Parses a number like `-123.456`, `.5`, or `1.5e-3`.
    /// The scale of the result is the number of fractional digits the literal denotes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ps = parser::parse(s)?;
        let (sign, digits, frac_len, e) = ps.raw_parts();

        let mut m = BigInt::parse_bytes(digits.as_bytes(), 10).ok_or(Error::InvalidArgument)?;

        let scale = frac_len as isize - e;
        let scale = if scale < 0 {
            m *= pow10(scale.unsigned_abs());
            0
        } else {
            scale as usize
        };

        if sign.is_negative() {
            m = -m;
        }

        Ok(Decimal::from_parts(m, scale))
    }
}
