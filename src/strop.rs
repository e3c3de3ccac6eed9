//! BigFloat formatting and parsing.

use core::fmt::Display;
use core::str::FromStr;

use num_bigint::BigInt;
use num_traits::{One, Signed};

use crate::common::util::bits_to_digits;
use crate::common::util::check_p;
use crate::common::util::digits_to_bits;
use crate::common::util::div_round;
use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::defs::DEFAULT_P;
use crate::defs::DEFAULT_RM;
use crate::num::BigFloat;

const LOG10_2: f64 = 0.3010299956639812;

impl BigFloat {
    /// Parses the decimal number from the string `s` using precision `p` and rounding mode `rm`.
    /// Both positional (`-12.5`) and scientific (`6.67430e-11`) notations are accepted.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: failed to parse input, or the precision is zero.
    ///  - PrecisionOverflow: the precision exceeds the maximum.
    pub fn parse(s: &str, p: usize, rm: RoundingMode) -> Result<Self, Error> {
        check_p(p)?;

        let ps = crate::parser::parse(s)?;
        let (d, x) = ps.raw_parts();

        let pow = BigInt::from(10u32).pow(x.unsigned_abs() as u32);

        if x >= 0 {
            Self::from_int(&(d * pow), p, rm)
        } else {
            Self::from_ratio(&d, &pow, p, rm)
        }
    }

    /// Formats the number in decimal radix with `digits` significant digits using rounding mode `rm`.
    /// The result looks like `3.14159`, `-1.25e-3`, or `5.9722e+24`.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `digits` is zero.
    pub fn format(&self, digits: usize, rm: RoundingMode) -> Result<String, Error> {
        if digits == 0 {
            return Err(Error::InvalidArgument("digits"));
        }

        if self.is_zero() {
            return Ok("0.0".to_owned());
        }

        // initial estimate of the decimal exponent
        let mut d = ((self.exponent() - 1) as f64 * LOG10_2).floor() as i64;

        let mstr = loop {
            let n = self.scaled_int(digits as i64 - 1 - d, rm).abs().to_string();

            if n.len() > digits {
                d += 1;
            } else if n.len() < digits {
                d -= 1;
            } else {
                break n;
            }
        };

        let mut ret = String::with_capacity(digits + 24);

        if self.is_negative() {
            ret.push('-');
        }

        ret.push_str(&mstr[..1]);
        ret.push('.');

        if digits > 1 {
            ret.push_str(&mstr[1..]);
        } else {
            ret.push('0');
        }

        if d > 0 {
            ret.push_str(&format!("e+{}", d));
        } else if d < 0 {
            ret.push_str(&format!("e{}", d));
        }

        Ok(ret)
    }

    // Returns self * 10^k rounded to an integer.
    fn scaled_int(&self, k: i64, rm: RoundingMode) -> BigInt {
        let (m, e) = self.as_raw_parts();

        let mut num = m.clone();
        let mut den = BigInt::one();

        if e >= 0 {
            num <<= e as u64;
        } else {
            den <<= e.unsigned_abs();
        }

        let pow = BigInt::from(10u32).pow(k.unsigned_abs() as u32);
        if k >= 0 {
            num *= pow;
        } else {
            den *= pow;
        }

        div_round(&num, &den, rm)
    }
}

/// Formats the number with as many decimal digits as its precision holds.
impl Display for BigFloat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.format(bits_to_digits(self.precision()), DEFAULT_RM) {
            Ok(s) => f.write_str(&s),
            Err(_) => Err(core::fmt::Error),
        }
    }
}

/// Parses the number with precision sufficient to hold every digit of the input, but not less than `DEFAULT_P`.
impl FromStr for BigFloat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let p = DEFAULT_P.max(digits_to_bits(s.len()));
        BigFloat::parse(s, p, DEFAULT_RM)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_parse() {
        let p = 128;
        let rm = RoundingMode::ToEven;

        let v = BigFloat::parse("-12.5", p, rm).unwrap();
        assert_eq!(v, BigFloat::from_i64(-25, p).unwrap().mul_pow2(-1));

        let v = BigFloat::parse("5.9722e24", p, rm).unwrap();
        assert_eq!(v.to_int(rm), BigInt::from(59722u64) * BigInt::from(10u64).pow(20));

        let v = BigFloat::parse("0.1", p, rm).unwrap();
        let w = BigFloat::from_i64(1, p).unwrap().div(&BigFloat::from_i64(10, p).unwrap(), p, rm).unwrap();
        assert_eq!(v, w);

        assert!(BigFloat::parse("abc", p, rm).is_err());
        assert_eq!(BigFloat::parse("1", 0, rm).unwrap_err(), Error::InvalidArgument("p"));
    }

    #[test]
    fn test_format() {
        let p = 128;
        let rm = RoundingMode::ToEven;

        let v = BigFloat::parse("3.14159", p, rm).unwrap();
        assert_eq!(v.format(3, rm).unwrap(), "3.14");
        assert_eq!(v.format(4, rm).unwrap(), "3.142");
        assert_eq!(v.format(4, RoundingMode::None).unwrap(), "3.141");
        assert_eq!(v.neg().format(2, rm).unwrap(), "-3.1");
        assert_eq!(v.format(1, rm).unwrap(), "3.0");

        let v = BigFloat::parse("9.9996", p, rm).unwrap();
        assert_eq!(v.format(3, rm).unwrap(), "1.00e+1");

        let v = BigFloat::parse("6.67430e-11", p, rm).unwrap();
        assert_eq!(v.format(6, rm).unwrap(), "6.67430e-11");

        let v = BigFloat::parse("149597870700", p, rm).unwrap();
        assert_eq!(v.format(12, rm).unwrap(), "1.49597870700e+11");

        assert_eq!(BigFloat::new(p).unwrap().format(5, rm).unwrap(), "0.0");
        assert!(v.format(0, rm).is_err());
    }

    #[test]
    fn test_display_from_str() {
        let v: BigFloat = "0.3".parse().unwrap();
        let s = v.to_string();
        assert!(s.starts_with("2.99999") || s.starts_with("3.0000"), "{}", s);
        let w: BigFloat = s.parse().unwrap();
        assert_eq!(w.format(20, DEFAULT_RM).unwrap(), v.format(20, DEFAULT_RM).unwrap());

        assert_eq!("-0.5".parse::<BigFloat>().unwrap().to_f64(), -0.5);
    }
}
