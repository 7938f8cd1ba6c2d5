//! Conversion utilities.

use crate::defs::Error;
use crate::num::Decimal;

impl Decimal {
    /// Converts `f` to a decimal number. The result is the shortest decimal
    /// literal which converts back to the same `f64`.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `f` is NaN or infinite.
    pub fn from_f64(f: f64) -> Result<Self, Error> {
        if !f.is_finite() {
            return Err(Error::InvalidArgument);
        }

        format!("{:e}", f).parse()
    }

    /// Returns the `f64` value nearest to the number.
    /// Numbers out of the range of `f64` convert to infinity.
    pub fn to_f64(&self) -> f64 {
        // the decimal string is always a valid f64 literal
        self.to_string().parse::<f64>().unwrap_or(f64::NAN)
    }

    #[cfg(feature = "random")]
    /// Returns a random number with up to `int_digits` integer digits
    /// and exactly `scale` fractional digits.
    /// The sign can be positive and negative.
    /// Function does not follow any specific distribution law.
    /// The intended use of this function is for testing.
    pub fn random(int_digits: usize, scale: usize) -> Self {
        use num_bigint::BigInt;

        let mut digits = String::with_capacity(int_digits + scale + 1);
        digits.push('0');
        for _ in 0..int_digits + scale {
            digits.push(char::from(b'0' + rand::random::<u8>() % 10));
        }

        let m = BigInt::parse_bytes(digits.as_bytes(), 10).unwrap_or_default();
        let m = if rand::random::<u8>() & 1 == 0 { m } else { -m };

        Decimal::from_parts(m, scale)
    }
}
