//! Arctangent.

use core::cmp::Ordering;

use num_bigint::BigInt;

use crate::common::consts::ONE;
use crate::common::util::extend_p;
use crate::common::util::log2_ceil;
use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::defs::SERIES_GUARD_BITS;
use crate::num::BigFloat;
use crate::ops::series::series_linear;
use crate::ops::series::PolycoeffGen;

// Polynomial coefficient generator: 1, -1/3, 1/5, -1/7, ...
struct AtanPolycoeffGen {
    d: i64,
}

impl AtanPolycoeffGen {
    fn new() -> Self {
        AtanPolycoeffGen { d: 1 }
    }
}

impl PolycoeffGen for AtanPolycoeffGen {
    fn next(&mut self, p: usize, rm: RoundingMode) -> Result<BigFloat, Error> {
        let ret = BigFloat::from_ratio(&BigInt::from(1), &BigInt::from(self.d), p, rm)?;

        self.d = if self.d > 0 { -self.d - 2 } else { -self.d + 2 };

        Ok(ret)
    }
}

impl BigFloat {
    /// Computes the arctangent of a number as the sum of the first `terms` terms of its Maclaurin series
    /// `x - x^3/3 + x^5/5 - ...`. The result has precision `p` and is rounded using the rounding mode `rm`.
    ///
    /// The series converges only for `|x| < 1`, and the accuracy depends on `terms` and `|x|` alone.
    /// The argument is not checked: outside of the convergence radius the result is meaningless.
    /// See `atan_checked` for the checked version.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `terms` is zero, or the precision is zero.
    ///  - PrecisionOverflow: the precision exceeds the maximum.
    pub fn atan(&self, terms: usize, p: usize, rm: RoundingMode) -> Result<Self, Error> {
        if terms == 0 {
            return Err(Error::InvalidArgument("terms"));
        }

        let p_wrk = extend_p(p, SERIES_GUARD_BITS + log2_ceil(terms))?;

        let xx = self.mul(self, p_wrk, RoundingMode::None)?;

        let mut polycoeff_gen = AtanPolycoeffGen::new();
        let mut ret = series_linear(self, &xx, terms, &mut polycoeff_gen, p_wrk, RoundingMode::None)?;

        ret.set_precision(p, rm)?;

        Ok(ret)
    }

    /// Same as `atan`, but fails if the argument is outside of the convergence radius.
    ///
    /// ## Errors
    ///
    ///  - DomainError: `|x| >= 1`.
    ///  - InvalidArgument: `terms` is zero, or the precision is zero.
    ///  - PrecisionOverflow: the precision exceeds the maximum.
    pub fn atan_checked(&self, terms: usize, p: usize, rm: RoundingMode) -> Result<Self, Error> {
        if self.abs_cmp(&ONE) != Ordering::Less {
            return Err(Error::DomainError("x"));
        }

        self.atan(terms, p, rm)
    }
}
