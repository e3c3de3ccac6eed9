//! Arccosine.

use core::cmp::Ordering;

use crate::common::consts::ONE;
use crate::common::util::extend_p;
use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::defs::SERIES_GUARD_BITS;
use crate::num::BigFloat;
use crate::ops::consts::pi::pi;

/// Number of decimal digits of π used by `Context::acos`.
pub const ACOS_PI_DIGITS: usize = 50;

impl BigFloat {
    /// Computes the arccosine of a number as `π/2 - asin(x)`, where `asin(x)` is the sum of the first `terms` terms
    /// of its series, and π is computed with `pi_digits` decimal digits.
    /// The result has precision `p` and is rounded using the rounding mode `rm`.
    ///
    /// The accuracy of the result is bounded by both `terms` and `pi_digits`.
    /// The argument is not checked. See `acos_checked` for the checked version.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `terms` or `pi_digits` is zero, or the precision is zero.
    ///  - PrecisionOverflow: the precision exceeds the maximum.
    pub fn acos(&self, terms: usize, pi_digits: usize, p: usize, rm: RoundingMode) -> Result<Self, Error> {
        let p_wrk = extend_p(p, SERIES_GUARD_BITS)?;

        let asin = self.asin(terms, p_wrk, RoundingMode::None)?;
        let half_pi = pi(pi_digits)?.mul_pow2(-1);

        half_pi.sub(&asin, p, rm)
    }

    /// Same as `acos`, but fails if the argument is outside of the convergence radius.
    ///
    /// ## Errors
    ///
    ///  - DomainError: `|x| > 1`.
    ///  - InvalidArgument: `terms` or `pi_digits` is zero, or the precision is zero.
    ///  - PrecisionOverflow: the precision exceeds the maximum.
    pub fn acos_checked(&self, terms: usize, pi_digits: usize, p: usize, rm: RoundingMode) -> Result<Self, Error> {
        if self.abs_cmp(&ONE) == Ordering::Greater {
            return Err(Error::DomainError("x"));
        }

        self.acos(terms, pi_digits, p, rm)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    const ACOS_HALF: &str = "1.0471975511965977461542144610931676280657231331250352736583148641026054687620696662093449417807056893273826955";
    const ACOS_NEG_03: &str = "1.8754889808102941272033246528672806090531447313943292978804502449003811956551376587526173699024216827228089999";

    fn err_exp(v: &BigFloat, expected: &str) -> i64 {
        let rm = RoundingMode::ToEven;
        let r = BigFloat::parse(expected, 512, rm).unwrap();
        let d = v.sub(&r, 512, rm).unwrap();
        if d.is_zero() {
            i64::MIN
        } else {
            d.exponent()
        }
    }

    #[test]
    fn test_arccosine() {
        let rm = RoundingMode::ToEven;

        let x = BigFloat::parse("0.5", 256, rm).unwrap();

        // limited by the digits of pi
        let v = x.acos(200, ACOS_PI_DIGITS, 256, rm).unwrap();
        assert!(err_exp(&v, ACOS_HALF) < -150);

        let v = x.acos(400, 100, 400, rm).unwrap();
        assert!(err_exp(&v, ACOS_HALF) < -300);

        let x = BigFloat::parse("-0.3", 256, rm).unwrap();
        let v = x.acos(200, ACOS_PI_DIGITS, 256, rm).unwrap();
        assert!(err_exp(&v, ACOS_NEG_03) < -150);
    }

    #[test]
    fn test_arccosine_errors() {
        let p = 128;
        let rm = RoundingMode::ToEven;

        let x = BigFloat::parse("-1.01", p, rm).unwrap();
        assert_eq!(x.acos_checked(10, 20, p, rm).unwrap_err(), Error::DomainError("x"));
        assert!(x.acos(10, 20, p, rm).is_ok());

        assert_eq!(ONE.acos(0, 20, p, rm).unwrap_err(), Error::InvalidArgument("terms"));
        assert_eq!(ONE.acos(10, 0, p, rm).unwrap_err(), Error::InvalidArgument("digits"));
    }
}
