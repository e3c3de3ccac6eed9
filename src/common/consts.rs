//! Static constants.

use crate::defs::DEFAULT_P;
use crate::num::BigFloat;
use lazy_static::lazy_static;

lazy_static! {

    /// 1
    pub(crate) static ref ONE: BigFloat = BigFloat::from_u64(1, DEFAULT_P).expect("Constant ONE initialization.");
}
