//! Integer operations.

use core::cmp::Ordering;

use itertools::Itertools;
use itertools::MinMaxResult;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::defs::ArithmeticError;
use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::num::BigFloat;

// Ranges of at most this many factors are multiplied sequentially.
const PRODUCT_LEAF: u64 = 16;

/// Computes `n!`.
///
/// ## Errors
///
///  - InvalidArgument: `n` is negative.
pub fn factorial(n: i64) -> Result<BigInt, Error> {
    if n < 0 {
        return Err(Error::InvalidArgument("n"));
    }

    if n < 2 {
        return Ok(BigInt::one());
    }

    Ok(range_product(2, n as u64 + 1))
}

// Product of the integers in [a, b), split in halves so that the operands stay balanced.
fn range_product(a: u64, b: u64) -> BigInt {
    if b - a <= PRODUCT_LEAF {
        let mut ret = BigInt::one();
        for k in a..b {
            ret *= k;
        }
        return ret;
    }

    let m = a + (b - a) / 2;
    range_product(a, m) * range_product(m, b)
}

/// Returns the absolute value of `x`.
pub fn abs_val(x: &BigFloat) -> BigFloat {
    x.abs()
}

/// Rounds `x` to the nearest integer, ties go to the even integer.
pub fn round_val(x: &BigFloat) -> BigInt {
    x.to_int(RoundingMode::ToEven)
}

/// Returns `n mod m`. The result has the sign of `m`, i.e. `n = floor(n / m) * m + mod_val(n, m)`.
///
/// ## Errors
///
///  - ArithmeticError: `m` is zero.
pub fn mod_val(n: &BigInt, m: &BigInt) -> Result<BigInt, Error> {
    if m.is_zero() {
        return Err(Error::ArithmeticError(ArithmeticError::DivisionByZero));
    }

    Ok(n.mod_floor(m))
}

/// Decomposes `n` into prime factors using trial division.
/// Factors are returned in ascending order, each repeated according to its multiplicity.
/// The number 1 has no prime factors.
///
/// ## Errors
///
///  - InvalidArgument: `n` is less than 1.
pub fn factor_integer(n: &BigInt) -> Result<Vec<BigInt>, Error> {
    if !n.is_positive() {
        return Err(Error::InvalidArgument("n"));
    }

    let mut ret = Vec::new();
    let mut n = n.clone();

    let two = BigInt::from(2);
    while n.is_even() {
        n /= &two;
        ret.push(two.clone());
    }

    let mut d = BigInt::from(3);
    while &d * &d <= n {
        let (q, r) = n.div_rem(&d);
        if r.is_zero() {
            n = q;
            ret.push(d.clone());
        } else {
            d += 2u32;
        }
    }

    if !n.is_one() {
        ret.push(n);
    }

    Ok(ret)
}

fn partial_order<T: PartialOrd>(a: &&T, b: &&T) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

/// Returns the largest of `args`. Incomparable values are treated as equal.
///
/// ## Errors
///
///  - InvalidArgument: `args` is empty.
pub fn max_val<T: PartialOrd + Clone>(args: &[T]) -> Result<T, Error> {
    match args.iter().minmax_by(partial_order) {
        MinMaxResult::NoElements => Err(Error::InvalidArgument("args")),
        MinMaxResult::OneElement(v) => Ok(v.clone()),
        MinMaxResult::MinMax(_, v) => Ok(v.clone()),
    }
}

/// Returns the smallest of `args`. Incomparable values are treated as equal.
///
/// ## Errors
///
///  - InvalidArgument: `args` is empty.
pub fn min_val<T: PartialOrd + Clone>(args: &[T]) -> Result<T, Error> {
    match args.iter().minmax_by(partial_order) {
        MinMaxResult::NoElements => Err(Error::InvalidArgument("args")),
        MinMaxResult::OneElement(v) => Ok(v.clone()),
        MinMaxResult::MinMax(v, _) => Ok(v.clone()),
    }
}
