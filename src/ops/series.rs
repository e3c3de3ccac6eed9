//! Truncated power series computation appliance.

use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::num::BigFloat;

/// Generator of polynomial coefficients.
pub(crate) trait PolycoeffGen {
    /// Returns the next polynomial coefficient value with precision `p`.
    fn next(&mut self, p: usize, rm: RoundingMode) -> Result<BigFloat, Error>;
}

/// Sums the first `terms` terms `c(i) * x_first * x_step^i` of a series, where `c(i)` are produced by `polycoeff_gen`.
/// All intermediate values have precision `p` and are rounded using the rounding mode `rm`.
pub(crate) fn series_linear<T: PolycoeffGen>(
    x_first: &BigFloat,
    x_step: &BigFloat,
    terms: usize,
    polycoeff_gen: &mut T,
    p: usize,
    rm: RoundingMode,
) -> Result<BigFloat, Error> {
    let mut acc = BigFloat::new(p)?;
    let mut x_pow = x_first.clone();

    for i in 0..terms {
        let coeff = polycoeff_gen.next(p, rm)?;
        let part = x_pow.mul(&coeff, p, rm)?;
        acc = acc.add(&part, p, rm)?;

        if i + 1 < terms {
            x_pow = x_pow.mul(x_step, p, rm)?;
        }
    }

    Ok(acc)
}
