//! BigFloat definition and basic arithmetic, comparison, and number manipulation operations.

use core::cmp::Ordering;

use num_bigint::{BigInt, BigUint, Sign as BigSign};
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::common::util::check_p;
use crate::common::util::extend_p;
use crate::common::util::log2_ceil;
use crate::common::util::shift_right_round;
use crate::defs::ArithmeticError;
use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::defs::Sign;
use crate::defs::DEFAULT_RM;

/// A finite binary floating point number `m * 2^e` with a signed mantissa `m` of at most `p` bits.
///
/// The representation is canonical: the mantissa is either zero (and then the exponent is zero),
/// or odd. Thus, two numbers are equal if and only if their mantissas and exponents are equal.
/// Precision does not take part in comparison.
#[derive(Debug, Clone)]
pub struct BigFloat {
    m: BigInt,
    e: i64,
    p: usize,
}

impl BigFloat {
    /// Returns a new number with value of 0 and precision of `p` bits.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the precision is zero.
    ///  - PrecisionOverflow: the precision exceeds the maximum.
    pub fn new(p: usize) -> Result<Self, Error> {
        check_p(p)?;
        Ok(BigFloat {
            m: BigInt::zero(),
            e: 0,
            p,
        })
    }

    // Rounds `m * 2^e` to `p` bits. The precision must be checked by the caller.
    pub(crate) fn from_parts(m: BigInt, e: i64, p: usize, rm: RoundingMode) -> Self {
        let bits = m.bits();

        let (m, e) = if bits > p as u64 {
            let n = bits - p as u64;
            (shift_right_round(&m, n, rm), e + n as i64)
        } else {
            (m, e)
        };

        match m.trailing_zeros() {
            Some(tz) if tz > 0 => BigFloat {
                m: m >> tz,
                e: e + tz as i64,
                p,
            },
            Some(_) => BigFloat { m, e, p },
            None => BigFloat {
                m,
                e: 0,
                p,
            },
        }
    }

    /// Constructs a number with precision `p` from the integer `n`. The result is rounded using the rounding mode `rm`.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the precision is zero.
    ///  - PrecisionOverflow: the precision exceeds the maximum.
    pub fn from_int(n: &BigInt, p: usize, rm: RoundingMode) -> Result<Self, Error> {
        check_p(p)?;
        Ok(Self::from_parts(n.clone(), 0, p, rm))
    }

    /// Constructs a number with precision `p` equal to `n / d`. The result is rounded using the rounding mode `rm`.
    ///
    /// ## Errors
    ///
    ///  - ArithmeticError: `d` is zero.
    ///  - InvalidArgument: the precision is zero.
    ///  - PrecisionOverflow: the precision exceeds the maximum.
    pub fn from_ratio(n: &BigInt, d: &BigInt, p: usize, rm: RoundingMode) -> Result<Self, Error> {
        check_p(p)?;
        Self::div_parts(n, 0, d, 0, p, rm)
    }

    /// Constructs a number with precision `p` from `f`.
    /// The conversion is exact if `p` is at least 53 bits.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `f` is NaN or infinite, or the precision is zero.
    ///  - PrecisionOverflow: the precision exceeds the maximum.
    pub fn from_f64(f: f64, p: usize) -> Result<Self, Error> {
        check_p(p)?;

        if !f.is_finite() {
            return Err(Error::InvalidArgument("f"));
        }

        let bits = f.to_bits();
        let neg = bits >> 63 != 0;
        let exp = ((bits >> 52) & 0x7ff) as i64;
        let frac = bits & 0x000f_ffff_ffff_ffff;

        let (m, e) = if exp == 0 {
            (frac, -1074)
        } else {
            (frac | (1u64 << 52), exp - 1075)
        };

        let m = if neg { -BigInt::from(m) } else { BigInt::from(m) };

        Ok(Self::from_parts(m, e, p, DEFAULT_RM))
    }

    /// Converts the number to `f64`, rounding to the nearest value.
    /// Values out of the range of `f64` become infinite or zero.
    pub fn to_f64(&self) -> f64 {
        if self.is_zero() {
            return 0.0;
        }

        let n = self.m.bits().saturating_sub(53);
        let m = shift_right_round(&self.m, n, RoundingMode::ToEven);
        let e = self.e + n as i64;

        // m has at most 54 bits and is exactly representable
        let f = m.to_f64().unwrap_or(0.0);

        if e > 2048 {
            f * f64::INFINITY
        } else if e < -1130 {
            f * 0.0
        } else if e < -1022 {
            // avoid underflow of the intermediate power of two
            f * 2f64.powi((e + 200) as i32) * 2f64.powi(-200)
        } else {
            f * 2f64.powi(e as i32)
        }
    }

    /// Returns a copy of the number with the sign reversed.
    pub fn neg(&self) -> Self {
        BigFloat {
            m: -&self.m,
            e: self.e,
            p: self.p,
        }
    }

    /// Returns the absolute value of the number.
    pub fn abs(&self) -> Self {
        BigFloat {
            m: self.m.abs(),
            e: self.e,
            p: self.p,
        }
    }

    /// Returns `self * 2^n`. The operation is exact.
    pub fn mul_pow2(&self, n: i64) -> Self {
        if self.is_zero() {
            self.clone()
        } else {
            BigFloat {
                m: self.m.clone(),
                e: self.e + n,
                p: self.p,
            }
        }
    }

    /// Adds `d2` to `self` and returns the result of the operation with precision `p` rounded according to `rm`.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the precision is zero.
    ///  - PrecisionOverflow: the precision exceeds the maximum.
    pub fn add(&self, d2: &Self, p: usize, rm: RoundingMode) -> Result<Self, Error> {
        check_p(p)?;
        Ok(Self::add_parts(&self.m, self.e, &d2.m, d2.e, p, rm))
    }

    /// Subtracts `d2` from `self` and returns the result of the operation with precision `p` rounded according to `rm`.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the precision is zero.
    ///  - PrecisionOverflow: the precision exceeds the maximum.
    pub fn sub(&self, d2: &Self, p: usize, rm: RoundingMode) -> Result<Self, Error> {
        check_p(p)?;
        Ok(Self::add_parts(&self.m, self.e, &-&d2.m, d2.e, p, rm))
    }

    fn add_parts(m1: &BigInt, e1: i64, m2: &BigInt, e2: i64, p: usize, rm: RoundingMode) -> Self {
        if m2.is_zero() {
            return Self::from_parts(m1.clone(), e1, p, rm);
        }

        if m1.is_zero() {
            return Self::from_parts(m2.clone(), e2, p, rm);
        }

        let top1 = e1 + m1.bits() as i64;
        let top2 = e2 + m2.bits() as i64;

        let ((hm, he), (lm, le, ltop)) = if top1 >= top2 {
            ((m1, e1), (m2, e2, top2))
        } else {
            ((m2, e2), (m1, e1, top1))
        };

        // A low operand lying entirely below both the last bit of the high operand
        // and the rounding position only affects the result as a sticky bit.
        let htop = top1.max(top2);
        let lim = he.min(htop - p as i64 - 3);

        let sticky;
        let (lm, le) = if ltop < lim {
            sticky = if lm.is_negative() { -BigInt::one() } else { BigInt::one() };
            (&sticky, lim - 1)
        } else {
            (lm, le)
        };

        let e = he.min(le);
        let m = (hm << (he - e) as u64) + (lm << (le - e) as u64);

        Self::from_parts(m, e, p, rm)
    }

    /// Multiplies `d2` by `self` and returns the result of the operation with precision `p` rounded according to `rm`.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the precision is zero.
    ///  - PrecisionOverflow: the precision exceeds the maximum.
    pub fn mul(&self, d2: &Self, p: usize, rm: RoundingMode) -> Result<Self, Error> {
        check_p(p)?;
        Ok(Self::from_parts(&self.m * &d2.m, self.e + d2.e, p, rm))
    }

    /// Divides `self` by `d2` and returns the result of the operation with precision `p` rounded according to `rm`.
    ///
    /// ## Errors
    ///
    ///  - ArithmeticError: `d2` is zero.
    ///  - InvalidArgument: the precision is zero.
    ///  - PrecisionOverflow: the precision exceeds the maximum.
    pub fn div(&self, d2: &Self, p: usize, rm: RoundingMode) -> Result<Self, Error> {
        check_p(p)?;
        Self::div_parts(&self.m, self.e, &d2.m, d2.e, p, rm)
    }

    fn div_parts(
        m1: &BigInt,
        e1: i64,
        m2: &BigInt,
        e2: i64,
        p: usize,
        rm: RoundingMode,
    ) -> Result<Self, Error> {
        if m2.is_zero() {
            return Err(Error::ArithmeticError(ArithmeticError::DivisionByZero));
        }

        if m1.is_zero() {
            return Ok(Self::from_parts(BigInt::zero(), 0, p, rm));
        }

        // the quotient receives at least p + 2 bits
        let k = (p as i64 + 2 + m2.bits() as i64 - m1.bits() as i64).max(0);
        let n = m1 << k as u64;
        let (q, r) = n.div_rem(m2);

        let mut q = q << 1u32;
        if !r.is_zero() {
            if q.is_negative() {
                q -= 1;
            } else {
                q += 1;
            }
        }

        Ok(Self::from_parts(q, e1 - e2 - k - 1, p, rm))
    }

    /// Computes the square root of a number with precision `p`. The result is rounded using the rounding mode `rm`.
    ///
    /// ## Errors
    ///
    ///  - ArithmeticError: the number is negative.
    ///  - InvalidArgument: the precision is zero.
    ///  - PrecisionOverflow: the precision exceeds the maximum.
    pub fn sqrt(&self, p: usize, rm: RoundingMode) -> Result<Self, Error> {
        check_p(p)?;

        if self.is_negative() {
            return Err(Error::ArithmeticError(ArithmeticError::NegativeSqrt));
        }

        if self.is_zero() {
            return Self::new(p);
        }

        let mut m: BigUint = self.m.magnitude().clone();
        let mut e = self.e;

        if e % 2 != 0 {
            m <<= 1u32;
            e -= 1;
        }

        // the root receives at least p + 2 bits
        let need = 2 * (p as i64 + 2) - m.bits() as i64 + 2;
        let k = if need > 0 { (need + 1) / 2 } else { 0 };
        m <<= (2 * k) as u64;
        e -= 2 * k;

        let s = m.sqrt();
        let exact = &s * &s == m;

        let mut s = s << 1u32;
        if !exact {
            s += 1u32;
        }

        Ok(Self::from_parts(BigInt::from(s), e / 2 - 1, p, rm))
    }

    /// Computes `self` to the power of `n` with precision `p`. The result is rounded using the rounding mode `rm`.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the precision is zero.
    ///  - PrecisionOverflow: the precision exceeds the maximum.
    pub fn powi(&self, mut n: usize, p: usize, rm: RoundingMode) -> Result<Self, Error> {
        check_p(p)?;

        if n == 0 {
            return Self::from_int(&BigInt::one(), p, rm);
        }

        let p_wrk = extend_p(p, 2 * log2_ceil(n) + 8)?;

        let mut acc: Option<Self> = None;
        let mut x = self.clone();

        loop {
            if n & 1 != 0 {
                acc = Some(match acc {
                    Some(a) => a.mul(&x, p_wrk, RoundingMode::None)?,
                    None => x.clone(),
                });
            }

            n >>= 1;
            if n == 0 {
                break;
            }

            x = x.mul(&x, p_wrk, RoundingMode::None)?;
        }

        match acc {
            Some(mut a) => {
                a.set_precision(p, rm)?;
                Ok(a)
            }
            None => Self::new(p),
        }
    }

    /// Rounds the number to an integer using the rounding mode `rm`.
    pub fn to_int(&self, rm: RoundingMode) -> BigInt {
        if self.e >= 0 {
            &self.m << self.e as u64
        } else {
            shift_right_round(&self.m, self.e.unsigned_abs(), rm)
        }
    }

    /// Returns true if the number is an integer.
    pub fn is_int(&self) -> bool {
        self.e >= 0 || self.is_zero()
    }

    /// Sets the precision of the number to `p` bits. The value is rounded using the rounding mode `rm`.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the precision is zero.
    ///  - PrecisionOverflow: the precision exceeds the maximum.
    pub fn set_precision(&mut self, p: usize, rm: RoundingMode) -> Result<(), Error> {
        check_p(p)?;
        let m = core::mem::take(&mut self.m);
        *self = Self::from_parts(m, self.e, p, rm);
        Ok(())
    }

    /// Returns a copy of the number with the precision set to `p` bits.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the precision is zero.
    ///  - PrecisionOverflow: the precision exceeds the maximum.
    pub fn with_precision(&self, p: usize, rm: RoundingMode) -> Result<Self, Error> {
        let mut ret = self.clone();
        ret.set_precision(p, rm)?;
        Ok(ret)
    }

    /// Returns the precision of the number in bits.
    pub fn precision(&self) -> usize {
        self.p
    }

    /// Returns the exponent `E` of the number such that `2^(E-1) <= |self| < 2^E`.
    /// Returns 0 for zero.
    pub fn exponent(&self) -> i64 {
        if self.is_zero() {
            0
        } else {
            self.e + self.m.bits() as i64
        }
    }

    /// Returns the sign of the number. Zero is positive.
    pub fn sign(&self) -> Sign {
        if self.m.is_negative() {
            Sign::Neg
        } else {
            Sign::Pos
        }
    }

    /// Returns true if the number is zero.
    pub fn is_zero(&self) -> bool {
        self.m.is_zero()
    }

    /// Returns true if the number is strictly positive.
    pub fn is_positive(&self) -> bool {
        self.m.is_positive()
    }

    /// Returns true if the number is strictly negative.
    pub fn is_negative(&self) -> bool {
        self.m.is_negative()
    }

    /// Returns the mantissa and the binary exponent: the value of the number is `m * 2^e`.
    pub fn as_raw_parts(&self) -> (&BigInt, i64) {
        (&self.m, self.e)
    }

    /// Compares absolute values of `self` and `d2`.
    pub fn abs_cmp(&self, d2: &Self) -> Ordering {
        match (self.is_zero(), d2.is_zero()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }

        match self.exponent().cmp(&d2.exponent()) {
            Ordering::Equal => {
                let e = self.e.min(d2.e);
                let m1 = self.m.magnitude() << (self.e - e) as u64;
                let m2 = d2.m.magnitude() << (d2.e - e) as u64;
                m1.cmp(&m2)
            }
            o => o,
        }
    }
}

impl PartialEq for BigFloat {
    fn eq(&self, other: &Self) -> bool {
        self.m == other.m && self.e == other.e
    }
}

impl Eq for BigFloat {}

impl PartialOrd for BigFloat {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigFloat {
    fn cmp(&self, other: &Self) -> Ordering {
        let s1 = self.m.sign();
        let s2 = other.m.sign();

        if s1 != s2 {
            return s1.cmp(&s2);
        }

        match s1 {
            BigSign::NoSign => Ordering::Equal,
            BigSign::Plus => self.abs_cmp(other),
            BigSign::Minus => other.abs_cmp(self),
        }
    }
}

macro_rules! impl_int_conv {
    ($s:ty, $u:ty, $from_s:ident, $from_u:ident) => {
        impl BigFloat {
            /// Constructs BigFloat with precision `p` from a signed integer value `i`.
            /// If the value does not fit in `p` bits it is rounded to even.
            ///
            /// ## Errors
            ///
            ///  - InvalidArgument: the precision is zero.
            ///  - PrecisionOverflow: the precision exceeds the maximum.
            pub fn $from_s(i: $s, p: usize) -> Result<Self, Error> {
                Self::from_int(&BigInt::from(i), p, DEFAULT_RM)
            }

            /// Constructs BigFloat with precision `p` from an unsigned integer value `u`.
            /// If the value does not fit in `p` bits it is rounded to even.
            ///
            /// ## Errors
            ///
            ///  - InvalidArgument: the precision is zero.
            ///  - PrecisionOverflow: the precision exceeds the maximum.
            pub fn $from_u(u: $u, p: usize) -> Result<Self, Error> {
                Self::from_int(&BigInt::from(u), p, DEFAULT_RM)
            }
        }
    };
}

impl_int_conv!(i8, u8, from_i8, from_u8);
impl_int_conv!(i16, u16, from_i16, from_u16);
impl_int_conv!(i32, u32, from_i32, from_u32);
impl_int_conv!(i64, u64, from_i64, from_u64);

#[cfg(test)]
mod tests {

    use super::*;
    use rand::random;

    fn n(v: i64) -> BigFloat {
        BigFloat::from_i64(v, 64).unwrap()
    }

    #[test]
    fn test_canonical() {
        let a = BigFloat::from_u64(96, 64).unwrap();
        let (m, e) = a.as_raw_parts();
        assert_eq!(*m, BigInt::from(3));
        assert_eq!(e, 5);
        assert_eq!(a.exponent(), 7);

        let z = BigFloat::new(10).unwrap();
        assert!(z.is_zero());
        assert_eq!(z, n(5).sub(&n(5), 10, RoundingMode::ToEven).unwrap());

        assert_eq!(BigFloat::new(0).unwrap_err(), Error::InvalidArgument("p"));
    }

    #[test]
    fn test_rounding() {
        // 0b1011 = 11 with 3 bits of precision is a tie between 10 and 12
        let v = BigFloat::from_int(&BigInt::from(11), 3, RoundingMode::ToEven).unwrap();
        assert_eq!(v, n(12));
        let v = BigFloat::from_int(&BigInt::from(11), 3, RoundingMode::ToOdd).unwrap();
        assert_eq!(v, n(10));
        let v = BigFloat::from_int(&BigInt::from(11), 3, RoundingMode::None).unwrap();
        assert_eq!(v, n(10));

        // carry to the next power of two
        let v = BigFloat::from_int(&BigInt::from(15), 3, RoundingMode::ToEven).unwrap();
        assert_eq!(v, n(16));
        assert_eq!(v.precision(), 3);
    }

    #[test]
    fn test_add_sub() {
        let p = 64;
        let rm = RoundingMode::ToEven;
        assert_eq!(n(2).add(&n(3), p, rm).unwrap(), n(5));
        assert_eq!(n(2).sub(&n(3), p, rm).unwrap(), n(-1));
        assert_eq!(n(-2).add(&n(2), p, rm).unwrap(), n(0));

        // 1 + 2^-200 rounds to 1 at 64 bits
        let tiny = n(1).mul_pow2(-200);
        assert_eq!(n(1).add(&tiny, p, rm).unwrap(), n(1));

        // truncation sees the sticky bit of a tiny negative addend
        let one = n(1);
        let r = one.sub(&tiny, p, RoundingMode::None).unwrap();
        assert!(r < one);
        assert_eq!(r.exponent(), 0);

        // exact with enough precision
        let r = n(1).add(&tiny, 256, rm).unwrap();
        assert_eq!(r.sub(&n(1), 256, rm).unwrap(), tiny);
    }

    #[test]
    fn test_mul_div() {
        let p = 128;
        let rm = RoundingMode::ToEven;
        assert_eq!(n(6).mul(&n(-7), p, rm).unwrap(), n(-42));
        assert_eq!(n(42).div(&n(-7), p, rm).unwrap(), n(-6));

        let third = n(1).div(&n(3), p, rm).unwrap();
        let back = third.mul(&n(3), p, rm).unwrap();
        let err = back.sub(&n(1), p, rm).unwrap();
        assert!(err.is_zero() || err.exponent() < -(p as i64) + 2);

        assert_eq!(
            n(1).div(&n(0), p, rm).unwrap_err(),
            Error::ArithmeticError(ArithmeticError::DivisionByZero)
        );
        assert!(n(0).div(&n(5), p, rm).unwrap().is_zero());
    }

    #[test]
    fn test_sqrt() {
        let p = 256;
        let rm = RoundingMode::ToEven;
        assert_eq!(n(49).sqrt(p, rm).unwrap(), n(7));
        assert_eq!(n(1).mul_pow2(-4).sqrt(p, rm).unwrap(), n(1).mul_pow2(-2));

        let s = n(2).sqrt(p, rm).unwrap();
        let sq = s.mul(&s, p, rm).unwrap();
        let err = sq.sub(&n(2), p, rm).unwrap();
        assert!(err.is_zero() || err.exponent() < -(p as i64) + 4);

        assert_eq!(
            n(-1).sqrt(p, rm).unwrap_err(),
            Error::ArithmeticError(ArithmeticError::NegativeSqrt)
        );
        assert!(n(0).sqrt(p, rm).unwrap().is_zero());
    }

    #[test]
    fn test_powi() {
        let p = 128;
        let rm = RoundingMode::ToEven;
        assert_eq!(n(3).powi(5, p, rm).unwrap(), n(243));
        assert_eq!(n(-2).powi(3, p, rm).unwrap(), n(-8));
        assert_eq!(n(7).powi(0, p, rm).unwrap(), n(1));
    }

    #[test]
    fn test_cmp() {
        assert!(n(-3) < n(2));
        assert!(n(-3) < n(-2));
        assert!(n(0) < n(1).mul_pow2(-1000));
        assert!(n(0) > n(-1).mul_pow2(-1000));
        assert!(n(3).mul_pow2(-1) > n(1));
        assert_eq!(n(4).abs_cmp(&n(-4)), Ordering::Equal);
    }

    #[test]
    fn test_to_int() {
        let half = n(1).mul_pow2(-1);
        let v = n(2).add(&half, 64, RoundingMode::ToEven).unwrap();
        assert_eq!(v.to_int(RoundingMode::ToEven), BigInt::from(2));
        let v = n(3).add(&half, 64, RoundingMode::ToEven).unwrap();
        assert_eq!(v.to_int(RoundingMode::ToEven), BigInt::from(4));
        assert_eq!(v.neg().to_int(RoundingMode::ToEven), BigInt::from(-4));
        assert_eq!(n(96).to_int(RoundingMode::ToEven), BigInt::from(96));
    }

    #[test]
    fn test_f64_conv() {
        for _ in 0..1000 {
            let i: i8 = random::<i8>() % 10i8;
            let mut f: f64 = random::<f64>().powf(i as f64);
            if i & 1 == 0 {
                f = -f;
            }
            let d1 = BigFloat::from_f64(f, 64).unwrap();
            assert_eq!(d1.to_f64(), f);
        }

        assert_eq!(BigFloat::from_f64(f64::NAN, 64).unwrap_err(), Error::InvalidArgument("f"));
        assert_eq!(BigFloat::from_f64(0.5, 64).unwrap(), n(1).mul_pow2(-1));
        assert_eq!(BigFloat::from_f64(f64::MIN_POSITIVE / 4.0, 64).unwrap().to_f64(), f64::MIN_POSITIVE / 4.0);
    }
}
