//! Xmath computes mathematical constants and inverse trigonometric functions with arbitrary precision.
//!
//! Numbers are represented by [`BigFloat`], a binary floating point number whose mantissa is an exact big integer
//! limited to a given number of bits. Every operation takes the precision of its result and a rounding mode,
//! or takes them from a [`Context`].
//!
//! π is computed by the Chudnovsky series evaluated with binary splitting, see [`pi`].
//! Arctangent, arcsine, and arccosine are computed as truncated power series with a caller-supplied number of terms.
//!
//! ```
//! use xmath::{pi, BigFloat, RoundingMode};
//!
//! let v = pi(30).unwrap();
//! assert_eq!(v.format(30, RoundingMode::None).unwrap(), "3.14159265358979323846264338327");
//!
//! let x = BigFloat::parse("0.5", 128, RoundingMode::ToEven).unwrap();
//! let y = x.atan(100, 128, RoundingMode::ToEven).unwrap();
//! assert_eq!(y.format(20, RoundingMode::ToEven).unwrap(), "4.6364760900080611621e-1");
//! ```

#![deny(missing_docs)]
#![deny(clippy::suspicious)]
#![allow(clippy::comparison_chain)]
#![allow(clippy::should_implement_trait)]

mod common;
pub mod ctx;
mod defs;
mod for_3rd;
mod num;
mod ops;
mod parser;
mod strop;

pub use num_bigint::BigInt;

pub use crate::ctx::Context;
pub use crate::defs::ArithmeticError;
pub use crate::defs::Error;
pub use crate::defs::RoundingMode;
pub use crate::defs::Sign;
pub use crate::num::BigFloat;
pub use crate::ops::consts::pi::pi;
pub use crate::ops::consts::pi::pi_with_guard;
pub use crate::ops::consts::pi::terms_for_digits;
pub use crate::ops::consts::pi::Triple;
pub use crate::ops::consts::to_degrees;
pub use crate::ops::consts::to_radians;
pub use crate::ops::consts::Consts;
pub use crate::ops::int::abs_val;
pub use crate::ops::int::factor_integer;
pub use crate::ops::int::factorial;
pub use crate::ops::int::max_val;
pub use crate::ops::int::min_val;
pub use crate::ops::int::mod_val;
pub use crate::ops::int::round_val;

#[cfg(feature = "random")]
pub use crate::ops::random::random_real;
#[cfg(feature = "random")]
pub use crate::ops::random::random_real_with;

pub use crate::defs::DEFAULT_P;
pub use crate::defs::DEFAULT_RM;
pub use crate::defs::MIN_GUARD_BITS;
pub use crate::defs::PI_GUARD_BITS;
pub use crate::defs::PRECISION_MAX;
pub use crate::defs::SERIES_GUARD_BITS;
pub use crate::ops::consts::pi::DIGITS_PER_TERM;
pub use crate::ops::consts::REGISTRY_DIGITS;
pub use crate::ops::ACOS_PI_DIGITS;
