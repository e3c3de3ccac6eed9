//! All operations on numbers are performed in some context.

use crate::common::util::bits_to_digits;
use crate::common::util::check_p;
use crate::common::util::digits_to_bits;
use crate::common::util::extend_p;
use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::defs::DEFAULT_P;
use crate::defs::DEFAULT_RM;
use crate::defs::MIN_GUARD_BITS;
use crate::num::BigFloat;
use crate::ops::consts::pi::pi;
use crate::ops::consts::to_degrees;
use crate::ops::consts::to_radians;
use crate::ops::ACOS_PI_DIGITS;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Context contains the precision and the rounding mode used by operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawContext"))]
pub struct Context {
    #[cfg_attr(feature = "serde", serde(rename = "precision"))]
    p: usize,

    #[cfg_attr(feature = "serde", serde(rename = "rounding_mode"))]
    rm: RoundingMode,
}

impl Context {
    /// Create a new context with precision `p` and rounding mode `rm`.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the precision is zero.
    ///  - PrecisionOverflow: the precision exceeds the maximum.
    pub fn new(p: usize, rm: RoundingMode) -> Result<Self, Error> {
        Ok(Context { p: check_p(p)?, rm })
    }

    /// Create a new context with precision sufficient for `digits` decimal digits plus `MIN_GUARD_BITS`,
    /// and the default rounding mode.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `digits` is zero.
    ///  - PrecisionOverflow: the precision exceeds the maximum.
    pub fn for_digits(digits: usize) -> Result<Self, Error> {
        if digits == 0 {
            return Err(Error::InvalidArgument("digits"));
        }

        let p = extend_p(digits_to_bits(digits), MIN_GUARD_BITS)?;
        Self::new(p, DEFAULT_RM)
    }

    /// Sets the precision of the context.
    pub fn precision(&mut self, p: usize) -> &mut Self {
        self.p = p;
        self
    }

    /// Sets the rounding mode of the context.
    pub fn rounding_mode(&mut self, rm: RoundingMode) -> &mut Self {
        self.rm = rm;
        self
    }

    /// Returns the precision of the context.
    pub fn get_precision(&self) -> usize {
        self.p
    }

    /// Returns the rounding mode of the context.
    pub fn get_rounding_mode(&self) -> RoundingMode {
        self.rm
    }

    /// Parses a decimal number.
    pub fn parse(&self, s: &str) -> Result<BigFloat, Error> {
        BigFloat::parse(s, self.p, self.rm)
    }

    /// Returns π.
    pub fn pi(&self) -> Result<BigFloat, Error> {
        check_p(self.p)?;
        pi(bits_to_digits(self.p))?.with_precision(self.p, self.rm)
    }

    /// Returns the arccosine of `x` computed with `terms` terms of the series.
    /// π/2 is taken with `ACOS_PI_DIGITS` decimal digits.
    pub fn acos(&self, x: &BigFloat, terms: usize) -> Result<BigFloat, Error> {
        x.acos(terms, ACOS_PI_DIGITS, self.p, self.rm)
    }

    /// Same as `acos`, but fails if `x` is outside of the convergence radius.
    pub fn acos_checked(&self, x: &BigFloat, terms: usize) -> Result<BigFloat, Error> {
        x.acos_checked(terms, ACOS_PI_DIGITS, self.p, self.rm)
    }

    /// Returns a uniformly distributed random number in [0, 1).
    #[cfg(feature = "random")]
    pub fn random(&self) -> Result<BigFloat, Error> {
        crate::ops::random::random_real(self.p)
    }
}

/// The default context has a precision of `DEFAULT_P` bits and the rounding mode `DEFAULT_RM`.
impl Default for Context {
    fn default() -> Self {
        Context {
            p: DEFAULT_P,
            rm: DEFAULT_RM,
        }
    }
}

macro_rules! impl_fun_arg {
    ($comment:literal, $fname:ident) => {
        #[doc=$comment]
        pub fn $fname(&self, a: &BigFloat, b: &BigFloat) -> Result<BigFloat, Error> {
            a.$fname(b, self.p, self.rm)
        }
    };
}

macro_rules! impl_fun_series {
    ($comment:literal, $fname:ident) => {
        #[doc=$comment]
        pub fn $fname(&self, x: &BigFloat, terms: usize) -> Result<BigFloat, Error> {
            x.$fname(terms, self.p, self.rm)
        }
    };
}

macro_rules! impl_fun_conv {
    ($comment:literal, $fname:ident) => {
        #[doc=$comment]
        pub fn $fname(&self, x: &BigFloat) -> Result<BigFloat, Error> {
            $fname(x, self.p, self.rm)
        }
    };
}

impl Context {
    impl_fun_arg!("Returns the sum of two numbers.", add);
    impl_fun_arg!("Returns the difference of two numbers.", sub);
    impl_fun_arg!("Returns the product of two numbers.", mul);
    impl_fun_arg!("Returns the quotient of two numbers.", div);

    /// Returns the square root of a number.
    pub fn sqrt(&self, x: &BigFloat) -> Result<BigFloat, Error> {
        x.sqrt(self.p, self.rm)
    }

    impl_fun_series!("Returns the arctangent of a number computed with `terms` terms of the series.", atan);
    impl_fun_series!("Returns the arcsine of a number computed with `terms` terms of the series.", asin);
    impl_fun_series!("Same as `atan`, but fails if the argument is outside of the convergence radius.", atan_checked);
    impl_fun_series!("Same as `asin`, but fails if the argument is outside of the convergence radius.", asin_checked);

    impl_fun_conv!("Converts an angle in degrees to radians.", to_radians);
    impl_fun_conv!("Converts an angle in radians to degrees.", to_degrees);
}

// Unvalidated form of a deserialized context.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawContext {
    precision: usize,

    #[serde(default)]
    rounding_mode: RoundingMode,
}

#[cfg(feature = "serde")]
impl TryFrom<RawContext> for Context {
    type Error = Error;

    fn try_from(raw: RawContext) -> Result<Self, Self::Error> {
        Context::new(raw.precision, raw.rounding_mode)
    }
}
