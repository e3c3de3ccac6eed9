//! Random numbers.

use num_bigint::{BigInt, BigUint};
use rand::Rng;

use crate::common::util::check_p;
use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::num::BigFloat;

const WORD_BITS: usize = u32::BITS as usize;

/// Returns a uniformly distributed random number in the interval [0, 1) with precision `p`.
/// All `p` bits of the mantissa are random. The thread-local generator of `rand` is used.
///
/// ## Errors
///
///  - InvalidArgument: the precision is zero.
///  - PrecisionOverflow: the precision exceeds the maximum.
pub fn random_real(p: usize) -> Result<BigFloat, Error> {
    random_real_with(&mut rand::thread_rng(), p)
}

/// Same as `random_real`, but draws bits from `rng`.
///
/// ## Errors
///
///  - InvalidArgument: the precision is zero.
///  - PrecisionOverflow: the precision exceeds the maximum.
pub fn random_real_with<R: Rng + ?Sized>(rng: &mut R, p: usize) -> Result<BigFloat, Error> {
    check_p(p)?;

    let n = (p + WORD_BITS - 1) / WORD_BITS;
    let words: Vec<u32> = (0..n).map(|_| rng.gen::<u32>()).collect();

    // drop the excess bits of the most significant word
    let m = BigUint::new(words) >> (n * WORD_BITS - p);

    Ok(BigFloat::from_parts(BigInt::from(m), -(p as i64), p, RoundingMode::None))
}

#[cfg(test)]
mod tests {

    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_real() {
        let zero = BigFloat::new(64).unwrap();
        let one = BigFloat::from_u8(1, 64).unwrap();

        for p in [1, 31, 32, 33, 100, 1000] {
            for _ in 0..100 {
                let v = random_real(p).unwrap();
                assert!(v >= zero && v < one, "{}", v);
                assert_eq!(v.precision(), p);
                let (m, _) = v.as_raw_parts();
                assert!(m.bits() <= p as u64);
            }
        }

        assert_eq!(random_real(0).unwrap_err(), Error::InvalidArgument("p"));
    }

    #[test]
    fn test_random_real_seeded() {
        let mut r1 = StdRng::seed_from_u64(7);
        let mut r2 = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            assert_eq!(random_real_with(&mut r1, 256).unwrap(), random_real_with(&mut r2, 256).unwrap());
        }

        // the mean of many samples is close to 1/2
        let p = 64;
        let rm = RoundingMode::ToEven;
        let mut acc = BigFloat::new(p).unwrap();
        for _ in 0..2000 {
            acc = acc.add(&random_real_with(&mut r1, p).unwrap(), p, rm).unwrap();
        }
        let mean = acc.to_f64() / 2000.0;
        assert!((mean - 0.5).abs() < 0.05, "{}", mean);
    }
}
