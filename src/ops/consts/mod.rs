mod ln2;
mod pi;

use crate::common::consts::TWO;
use crate::defs::Error;
use crate::defs::CONST_GUARD_DIGITS;
use crate::defs::DEFAULT_RM;
use crate::num::Decimal;
use crate::ops::consts::ln2::ln2_num;
use crate::ops::consts::pi::pi_num;

/// Constants cache contains mathematical constants for a fixed working scale.
///
/// The values are computed once at construction with some extra digits and
/// are never modified afterwards, so a single instance can be shared between
/// threads (e.g. behind `Arc`).
#[derive(Debug, Clone)]
pub struct Consts {
    scale: usize,
    ln2: Decimal,
    pi: Decimal,
}

/// In an ideal situation, the `Consts` structure is initialized with `Consts::new` only once,
/// and then used where needed.
impl Consts {
    /// Initializes the constants cache for the working scale `scale`.
    pub fn new(scale: usize) -> Result<Self, Error> {
        let held = scale + CONST_GUARD_DIGITS;

        Ok(Consts {
            scale,
            ln2: ln2_num(held)?,
            pi: pi_num(held)?,
        })
    }

    /// Returns the working scale: the number of fractional digits of every result.
    pub fn scale(&self) -> usize {
        self.scale
    }

    /// Returns the natural logarithm of 2 at the working scale.
    pub fn ln_2(&self) -> Decimal {
        self.ln2.clone().with_scale(self.scale, DEFAULT_RM)
    }

    /// Returns π at the working scale.
    pub fn pi(&self) -> Decimal {
        self.pi.clone().with_scale(self.scale, DEFAULT_RM)
    }

    /// Returns π/2 at the working scale.
    pub fn pi_2div(&self) -> Decimal {
        self.pi.div_pow2(1, self.scale, DEFAULT_RM)
    }

    /// Returns 2π at the working scale.
    pub fn pi_2mul(&self) -> Decimal {
        self.pi.mul(&TWO).with_scale(self.scale, DEFAULT_RM)
    }

    // Precision actually held by the cache.
    #[inline]
    fn held_scale(&self) -> usize {
        self.ln2.scale()
    }

    /// Returns ln(2) with `scale` fractional digits.
    /// If more digits are requested than are held, the value is computed for this call only.
    pub(crate) fn ln_2_at(&self, scale: usize) -> Result<Decimal, Error> {
        if scale <= self.held_scale() {
            Ok(self.ln2.clone().with_scale(scale, DEFAULT_RM))
        } else {
            ln2_num(scale)
        }
    }

    /// Returns π with `scale` fractional digits.
    pub(crate) fn pi_at(&self, scale: usize) -> Result<Decimal, Error> {
        if scale <= self.held_scale() {
            Ok(self.pi.clone().with_scale(scale, DEFAULT_RM))
        } else {
            pi_num(scale)
        }
    }

    /// Returns π/2 with `scale` fractional digits.
    pub(crate) fn pi_2div_at(&self, scale: usize) -> Result<Decimal, Error> {
        let pi = self.pi_at(scale + 1)?;
        Ok(pi.div_pow2(1, scale, DEFAULT_RM))
    }

    /// Returns 2π with `scale` fractional digits.
    pub(crate) fn pi_2mul_at(&self, scale: usize) -> Result<Decimal, Error> {
        let pi = self.pi_at(scale + 1)?;
        Ok(pi.mul(&TWO).with_scale(scale, DEFAULT_RM))
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_consts() {
        let cc = Consts::new(50).unwrap();

        assert_eq!(cc.scale(), 50);
        assert_eq!(cc.ln_2().to_string(), "0.69314718055994530941723212145817656807550013436026");
        assert_eq!(cc.pi().to_string(), "3.14159265358979323846264338327950288419716939937511");
        assert_eq!(
            cc.pi_2div().to_string(),
            "1.57079632679489661923132169163975144209858469968755"
        );
        assert_eq!(
            cc.pi_2mul().to_string(),
            "6.28318530717958647692528676655900576839433879875021"
        );

        assert_eq!(cc.pi_2div().scale(), 50);
        assert_eq!(cc.pi_2mul().scale(), 50);
    }

    #[test]
    fn test_consts_beyond_cache() {
        let cc = Consts::new(10).unwrap();
        let wide = Consts::new(120).unwrap();

        // served from the cache
        assert_eq!(cc.ln_2_at(20).unwrap(), wide.ln_2_at(20).unwrap());
        // computed on demand
        assert_eq!(cc.ln_2_at(100).unwrap(), wide.ln_2_at(100).unwrap());
        assert_eq!(cc.pi_at(100).unwrap(), wide.pi_at(100).unwrap());
        assert_eq!(cc.pi_2mul_at(90).unwrap(), wide.pi_2mul_at(90).unwrap());
        assert_eq!(cc.pi_2div_at(90).unwrap(), wide.pi_2div_at(90).unwrap());
    }
}
