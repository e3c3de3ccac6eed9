//! π number computed with the Chudnovsky series using binary splitting.

use num_bigint::BigInt;
use num_traits::One;
use smallvec::SmallVec;

use crate::common::util::digits_to_bits;
use crate::common::util::extend_p;
use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::defs::DEFAULT_RM;
use crate::defs::MIN_GUARD_BITS;
use crate::defs::PI_GUARD_BITS;
use crate::num::BigFloat;

/// Decimal digits contributed by each term of the Chudnovsky series.
pub const DIGITS_PER_TERM: f64 = 14.181647462725477;

/// 640320^3 / 24
const C3_OVER_24: u64 = 10939058860032000;

const A: u64 = 13591409;
const B: u64 = 545140134;

// Ranges narrower than this are not split between threads.
#[cfg(feature = "parallel")]
const PAR_THRESHOLD: u64 = 64;

/// Partial sums `(P, Q, T)` of the Chudnovsky series over the index range `[a, b)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triple {
    /// Product of the numerators of the term ratios.
    pub p: BigInt,

    /// Product of the denominators of the term ratios.
    pub q: BigInt,

    /// Series numerator scaled consistently with `p` and `q`.
    pub t: BigInt,
}

impl Triple {
    /// Returns the triple of the range `[a, a + 1)`.
    pub fn term(a: u64) -> Self {
        if a == 0 {
            return Triple {
                p: BigInt::one(),
                q: BigInt::one(),
                t: BigInt::from(A),
            };
        }

        let ab = BigInt::from(a);

        // (6a - 5)(2a - 1)(6a - 1)
        let p = (&ab * 6u32 - 5u32) * (&ab * 2u32 - 1u32) * (&ab * 6u32 - 1u32);

        // a^3 * C^3 / 24
        let q = &ab * &ab * &ab * C3_OVER_24;

        let mut t = &p * (ab * B + A);
        if a & 1 != 0 {
            t = -t;
        }

        Triple { p, q, t }
    }

    /// Combines the triple of `[a, mid)` (`self`) with the triple of `[mid, b)` (`right`)
    /// into the triple of `[a, b)`.
    pub fn merge(&self, right: &Triple) -> Triple {
        Triple {
            t: &right.q * &self.t + &self.p * &right.t,
            p: &self.p * &right.p,
            q: &self.q * &right.q,
        }
    }

    /// Computes the triple of the range `[a, b)`.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the range is empty.
    pub fn split(a: u64, b: u64) -> Result<Self, Error> {
        if a >= b {
            return Err(Error::InvalidArgument("b"));
        }

        Ok(Self::split_range(a, b))
    }

    #[cfg(not(feature = "parallel"))]
    #[inline]
    fn split_range(a: u64, b: u64) -> Self {
        Self::split_seq(a, b)
    }

    #[cfg(feature = "parallel")]
    #[inline]
    fn split_range(a: u64, b: u64) -> Self {
        Self::split_par(a, b)
    }

    // Terms are merged in order while the two topmost entries cover ranges of equal width,
    // so the stack depth never exceeds log2(b - a) + 1.
    fn split_seq(a: u64, b: u64) -> Self {
        let mut stack = SmallVec::<[(Triple, u64); 64]>::new();

        for k in a..b {
            let mut node = (Triple::term(k), 1);

            while let Some((top, w)) = stack.last() {
                if *w != node.1 {
                    break;
                }
                let merged = top.merge(&node.0);
                let w = w + node.1;
                stack.pop();
                node = (merged, w);
            }

            stack.push(node);
        }

        let mut acc: Option<Triple> = None;
        while let Some((left, _)) = stack.pop() {
            acc = Some(match acc {
                Some(right) => left.merge(&right),
                None => left,
            });
        }

        // the range is not empty
        acc.unwrap_or_else(|| Triple::term(a))
    }

    #[cfg(feature = "parallel")]
    fn split_par(a: u64, b: u64) -> Self {
        if b - a <= PAR_THRESHOLD {
            return Self::split_seq(a, b);
        }

        let m = (a + b) / 2;
        let (left, right) = rayon::join(|| Self::split_par(a, m), || Self::split_par(m, b));

        left.merge(&right)
    }
}

/// Returns the number of series terms required for `digits` decimal digits.
pub fn terms_for_digits(digits: usize) -> u64 {
    (digits as f64 / DIGITS_PER_TERM) as u64 + 1
}

/// Computes π with `digits` correct decimal digits.
/// The result has the precision of `digits` decimal digits plus `PI_GUARD_BITS` bits.
///
/// ## Errors
///
///  - InvalidArgument: `digits` is zero.
///  - PrecisionOverflow: the required precision exceeds the maximum.
pub fn pi(digits: usize) -> Result<BigFloat, Error> {
    pi_with_guard(digits, PI_GUARD_BITS, DEFAULT_RM)
}

/// Computes π with `digits` correct decimal digits carrying `guard_bits` extra bits of precision.
/// The result is rounded using the rounding mode `rm`.
///
/// ## Errors
///
///  - InvalidArgument: `digits` is zero, or `guard_bits` is smaller than `MIN_GUARD_BITS`.
///  - PrecisionOverflow: the required precision exceeds the maximum.
pub fn pi_with_guard(digits: usize, guard_bits: usize, rm: RoundingMode) -> Result<BigFloat, Error> {
    if digits == 0 {
        return Err(Error::InvalidArgument("digits"));
    }

    if guard_bits < MIN_GUARD_BITS {
        return Err(Error::InvalidArgument("guard_bits"));
    }

    let p = extend_p(digits_to_bits(digits), guard_bits)?;
    let n = terms_for_digits(digits);

    tracing::debug!(digits, terms = n, precision = p, "computing pi");

    let Triple { q, t, .. } = Triple::split(0, n)?;

    // pi = 426880 * sqrt(10005) * Q / T
    let f0 = BigFloat::from_u64(10005, p)?.sqrt(p, RoundingMode::None)?;
    let f1 = BigFloat::from_int(&(q * 426880u32), p, RoundingMode::None)?;
    let f2 = f0.mul(&f1, p, RoundingMode::None)?;
    let f3 = BigFloat::from_int(&t, p, RoundingMode::None)?;

    f2.div(&f3, p, rm)
}
