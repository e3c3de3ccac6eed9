//! Auxiliary functions.

use core::cmp::Ordering;

use num_bigint::{BigInt, BigUint, Sign as BigSign};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::defs::{Error, RoundingMode, Sign, BITS_PER_DIGIT, PRECISION_MAX};

/// Ceiling of the logarithm base 2 of a number.
pub fn log2_ceil(mut n: usize) -> usize {
    let mut ret = 0;
    let mut sticky = 0;
    while n > 1 {
        if n & 1 != 0 {
            sticky = 1;
        }
        ret += 1;
        n >>= 1;
    }
    ret + sticky
}

/// Number of bits required to hold `digits` decimal digits.
pub fn digits_to_bits(digits: usize) -> usize {
    (digits as f64 * BITS_PER_DIGIT).ceil() as usize
}

/// Number of decimal digits representable with `p` bits.
pub fn bits_to_digits(p: usize) -> usize {
    (p as f64 / BITS_PER_DIGIT).ceil() as usize
}

/// Validates precision `p`.
pub fn check_p(p: usize) -> Result<usize, Error> {
    if p == 0 {
        Err(Error::InvalidArgument("p"))
    } else if p > PRECISION_MAX {
        Err(Error::PrecisionOverflow(p))
    } else {
        Ok(p)
    }
}

/// Adds `extra` bits to precision `p` and validates the result.
pub fn extend_p(p: usize, extra: usize) -> Result<usize, Error> {
    match p.checked_add(extra) {
        Some(v) => check_p(v),
        None => Err(Error::PrecisionOverflow(usize::MAX)),
    }
}

/// Decides whether a magnitude truncated toward zero must be incremented.
/// `half` is the comparison of the discarded part with half of the unit in the last place,
/// `odd` is the parity of the truncated magnitude.
pub fn round_away(rm: RoundingMode, s: Sign, half: Ordering, odd: bool) -> bool {
    match rm {
        RoundingMode::None => false,
        _ => match half {
            Ordering::Less => false,
            Ordering::Greater => true,
            Ordering::Equal => match rm {
                RoundingMode::Up => s.is_positive(),
                RoundingMode::Down => s.is_negative(),
                RoundingMode::ToZero => false,
                RoundingMode::FromZero => true,
                RoundingMode::ToEven => odd,
                RoundingMode::ToOdd => !odd,
                RoundingMode::None => false,
            },
        },
    }
}

#[inline]
pub fn sign_of(n: &BigInt) -> Sign {
    if n.is_negative() {
        Sign::Neg
    } else {
        Sign::Pos
    }
}

fn with_sign(s: Sign, mag: BigUint) -> BigInt {
    let bs = if s.is_negative() { BigSign::Minus } else { BigSign::Plus };
    BigInt::from_biguint(bs, mag)
}

/// Shifts `m` right by `n` bits and rounds the result using rounding mode `rm`.
pub fn shift_right_round(m: &BigInt, n: u64, rm: RoundingMode) -> BigInt {
    if n == 0 || m.is_zero() {
        return m.clone();
    }

    let s = sign_of(m);
    let mag = m.magnitude();
    let q = mag >> n;
    let r = mag - (&q << n);
    let half = r.cmp(&(BigUint::one() << (n - 1)));
    let odd = q.is_odd();

    let q = if round_away(rm, s, half, odd) { q + 1u32 } else { q };

    with_sign(s, q)
}

/// Divides `n` by `d` and rounds the quotient using rounding mode `rm`.
/// `d` must not be zero.
pub fn div_round(n: &BigInt, d: &BigInt, rm: RoundingMode) -> BigInt {
    debug_assert!(!d.is_zero());

    let s = if n.is_negative() != d.is_negative() { Sign::Neg } else { Sign::Pos };
    let (q, r) = n.magnitude().div_rem(d.magnitude());
    let half = (r << 1u32).cmp(d.magnitude());
    let odd = q.is_odd();

    let q = if round_away(rm, s, half, odd) { q + 1u32 } else { q };

    with_sign(s, q)
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_log2() {
        assert_eq!(log2_ceil(1), 0);
        assert_eq!(log2_ceil(5), 3);
        assert_eq!(log2_ceil(8), 3);
    }

    #[test]
    fn test_digits_bits() {
        assert_eq!(digits_to_bits(1), 4);
        assert_eq!(digits_to_bits(100), 333);
        assert!(bits_to_digits(digits_to_bits(50)) >= 50);
        assert_eq!(check_p(0), Err(Error::InvalidArgument("p")));
        assert_eq!(check_p(PRECISION_MAX + 1), Err(Error::PrecisionOverflow(PRECISION_MAX + 1)));
        assert!(extend_p(usize::MAX, 1).is_err());
    }

    #[test]
    fn test_shift_right_round() {
        let n = BigInt::from(0b1011); // 11 / 2 = 5.5
        assert_eq!(shift_right_round(&n, 1, RoundingMode::ToEven), BigInt::from(6));
        assert_eq!(shift_right_round(&n, 1, RoundingMode::ToOdd), BigInt::from(5));
        assert_eq!(shift_right_round(&n, 1, RoundingMode::None), BigInt::from(5));
        assert_eq!(shift_right_round(&n, 1, RoundingMode::Up), BigInt::from(6));
        assert_eq!(shift_right_round(&n, 1, RoundingMode::Down), BigInt::from(5));

        let n = BigInt::from(-11);
        assert_eq!(shift_right_round(&n, 1, RoundingMode::Up), BigInt::from(-5));
        assert_eq!(shift_right_round(&n, 1, RoundingMode::Down), BigInt::from(-6));
        assert_eq!(shift_right_round(&n, 1, RoundingMode::ToZero), BigInt::from(-5));
        assert_eq!(shift_right_round(&n, 1, RoundingMode::FromZero), BigInt::from(-6));

        // not a tie
        let n = BigInt::from(0b10111); // 23 / 4 = 5.75
        assert_eq!(shift_right_round(&n, 2, RoundingMode::ToZero), BigInt::from(6));
        assert_eq!(shift_right_round(&n, 2, RoundingMode::None), BigInt::from(5));
    }

    #[test]
    fn test_div_round() {
        let d = BigInt::from(4);
        assert_eq!(div_round(&BigInt::from(10), &d, RoundingMode::ToEven), BigInt::from(2));
        assert_eq!(div_round(&BigInt::from(14), &d, RoundingMode::ToEven), BigInt::from(4));
        assert_eq!(div_round(&BigInt::from(-14), &d, RoundingMode::ToEven), BigInt::from(-4));
        assert_eq!(div_round(&BigInt::from(-13), &d, RoundingMode::None), BigInt::from(-3));
        assert_eq!(div_round(&BigInt::from(13), &-d, RoundingMode::ToEven), BigInt::from(-3));
    }
}
