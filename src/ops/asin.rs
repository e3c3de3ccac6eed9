//! Arcsine.

use core::cmp::Ordering;

use num_bigint::BigInt;
use num_traits::One;

use crate::common::consts::ONE;
use crate::common::util::extend_p;
use crate::common::util::log2_ceil;
use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::defs::SERIES_GUARD_BITS;
use crate::num::BigFloat;
use crate::ops::series::series_linear;
use crate::ops::series::PolycoeffGen;

// Polynomial coefficient generator: (2i-1)!! / ((2i)!! * (2i+1)).
// The double factorials are accumulated incrementally.
struct AsinPolycoeffGen {
    i: u64,
    num: BigInt,
    den: BigInt,
}

impl AsinPolycoeffGen {
    fn new() -> Self {
        AsinPolycoeffGen {
            i: 0,
            num: BigInt::one(),
            den: BigInt::from(2),
        }
    }
}

impl PolycoeffGen for AsinPolycoeffGen {
    fn next(&mut self, p: usize, rm: RoundingMode) -> Result<BigFloat, Error> {
        let i = self.i;
        self.i += 1;

        if i == 0 {
            return BigFloat::from_int(&BigInt::one(), p, rm);
        }

        let d = &self.den * (2 * i + 1);
        let ret = BigFloat::from_ratio(&self.num, &d, p, rm)?;

        self.num *= 2 * i + 1;
        self.den *= 2 * i + 2;

        Ok(ret)
    }
}

impl BigFloat {
    /// Computes the arcsine of a number as the sum of the first `terms` terms of its binomial series
    /// `x + (1/2) x^3/3 + (1*3)/(2*4) x^5/5 + ...`. The result has precision `p` and is rounded using the rounding mode `rm`.
    ///
    /// The series converges for `|x| <= 1`, slowly near the ends of the interval.
    /// The argument is not checked. See `asin_checked` for the checked version.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `terms` is zero, or the precision is zero.
    ///  - PrecisionOverflow: the precision exceeds the maximum.
    pub fn asin(&self, terms: usize, p: usize, rm: RoundingMode) -> Result<Self, Error> {
        if terms == 0 {
            return Err(Error::InvalidArgument("terms"));
        }

        let p_wrk = extend_p(p, SERIES_GUARD_BITS + log2_ceil(terms))?;

        let xx = self.mul(self, p_wrk, RoundingMode::None)?;

        let mut polycoeff_gen = AsinPolycoeffGen::new();
        let mut ret = series_linear(self, &xx, terms, &mut polycoeff_gen, p_wrk, RoundingMode::None)?;

        ret.set_precision(p, rm)?;

        Ok(ret)
    }

    /// Same as `asin`, but fails if the argument is outside of the convergence radius.
    ///
    /// ## Errors
    ///
    ///  - DomainError: `|x| > 1`.
    ///  - InvalidArgument: `terms` is zero, or the precision is zero.
    ///  - PrecisionOverflow: the precision exceeds the maximum.
    pub fn asin_checked(&self, terms: usize, p: usize, rm: RoundingMode) -> Result<Self, Error> {
        if self.abs_cmp(&ONE) == Ordering::Greater {
            return Err(Error::DomainError("x"));
        }

        self.asin(terms, p, rm)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    // Taylor series of sine with many terms.
    fn sin(x: &BigFloat, p: usize) -> BigFloat {
        let rm = RoundingMode::ToEven;
        let xx = x.mul(x, p, rm).unwrap();
        let mut term = x.clone();
        let mut acc = x.clone();
        for i in 1..40u64 {
            let d = BigFloat::from_u64((2 * i) * (2 * i + 1), p).unwrap();
            term = term.mul(&xx, p, rm).unwrap().div(&d, p, rm).unwrap().neg();
            acc = acc.add(&term, p, rm).unwrap();
        }
        acc
    }

    #[test]
    fn test_arcsine() {
        let p = 320;
        let rm = RoundingMode::ToEven;

        let x = BigFloat::parse("0.5", p, rm).unwrap();
        let v = x.asin(300, p, rm).unwrap();

        // asin(1/2) = pi/6
        assert_eq!(
            v.format(80, RoundingMode::None).unwrap(),
            "5.2359877559829887307710723054658381403286156656251763682915743205130273438103483e-1"
        );

        assert_eq!(x.asin(1, p, rm).unwrap(), x);
        assert!(BigFloat::new(p).unwrap().asin(7, p, rm).unwrap().is_zero());
        assert_eq!(x.asin(0, p, rm).unwrap_err(), Error::InvalidArgument("terms"));

        // x + x^3/6
        let v = x.asin(2, p, rm).unwrap();
        let expected = BigFloat::parse("0.5208333333333333333333333333333333333333333333333333", 64, rm).unwrap();
        assert_eq!(v.with_precision(64, rm).unwrap(), expected);
    }

    #[test]
    fn test_arcsine_convergence() {
        let p = 256;
        let rm = RoundingMode::ToEven;

        let x = BigFloat::parse("0.1", p, rm).unwrap();
        let s = sin(&x, p);

        let mut prev_err: Option<BigFloat> = None;
        for terms in 1..25 {
            let v = s.asin(terms, p, rm).unwrap();
            let err = v.sub(&x, p, rm).unwrap().abs();
            if let Some(pe) = prev_err {
                assert!(err <= pe, "terms {}", terms);
            }
            prev_err = Some(err);
        }

        // the error is small after all
        let err = prev_err.unwrap();
        assert!(err.exponent() < -140);
    }

    #[test]
    fn test_arcsine_domain() {
        let p = 128;
        let rm = RoundingMode::ToEven;

        let x = BigFloat::parse("1.5", p, rm).unwrap();
        assert!(x.asin(10, p, rm).is_ok());
        assert_eq!(x.asin_checked(10, p, rm).unwrap_err(), Error::DomainError("x"));
        assert!(ONE.asin_checked(10, p, rm).is_ok());
        assert!(ONE.neg().asin_checked(10, p, rm).is_ok());
    }
}
