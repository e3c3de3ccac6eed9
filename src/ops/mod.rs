//! High-level operations on the numbers.

pub mod consts;
pub mod int;
#[cfg(feature = "random")]
pub mod random;

mod acos;
mod asin;
mod atan;
mod series;

pub use acos::ACOS_PI_DIGITS;
