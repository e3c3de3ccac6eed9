//! Registry of constants computed once per process.

pub mod pi;

use lazy_static::lazy_static;

use crate::common::util::digits_to_bits;
use crate::defs::Error;
use crate::defs::DEFAULT_RM;
use crate::defs::RoundingMode;
use crate::defs::PI_GUARD_BITS;
use crate::num::BigFloat;
use crate::ops::consts::pi::pi;

/// Number of decimal digits of π held by the registry.
pub const REGISTRY_DIGITS: usize = 100;

/// Speed of light in vacuum, m/s.
const SPEED_OF_LIGHT: &str = "299792458";

/// Newtonian constant of gravitation, m^3 kg^-1 s^-2.
const GRAVITATIONAL_CONSTANT: &str = "6.67430e-11";

/// Astronomical unit, m.
const ASTRONOMICAL_UNIT: &str = "149597870700";

/// Mass of the Earth, kg.
const EARTH_MASS: &str = "5.9722e24";

/// Mean radius of the Earth, m.
const EARTH_RADIUS: &str = "6371000";

lazy_static! {
    static ref CONSTS: Result<Consts, Error> = Consts::compute();
}

/// Mathematical and physical constants.
/// The values are computed on the first access and never change afterwards.
#[derive(Debug)]
pub struct Consts {
    pi: BigFloat,
    degree: BigFloat,
    speed_of_light: BigFloat,
    gravitational_constant: BigFloat,
    astronomical_unit: BigFloat,
    earth_mass: BigFloat,
    earth_radius: BigFloat,
}

impl Consts {
    fn compute() -> Result<Self, Error> {
        let p = digits_to_bits(REGISTRY_DIGITS) + PI_GUARD_BITS;

        tracing::debug!(digits = REGISTRY_DIGITS, precision = p, "initializing constants");

        let pi = pi(REGISTRY_DIGITS)?;
        let degree = pi.div(&BigFloat::from_u8(180, p)?, p, DEFAULT_RM)?;

        let parse = |s: &str| BigFloat::parse(s, p, DEFAULT_RM);

        Ok(Consts {
            pi,
            degree,
            speed_of_light: parse(SPEED_OF_LIGHT)?,
            gravitational_constant: parse(GRAVITATIONAL_CONSTANT)?,
            astronomical_unit: parse(ASTRONOMICAL_UNIT)?,
            earth_mass: parse(EARTH_MASS)?,
            earth_radius: parse(EARTH_RADIUS)?,
        })
    }

    /// Computes the constants if they were not computed yet.
    ///
    /// ## Errors
    ///
    /// Returns the error of the computation, if any. The error is persistent.
    pub fn init() -> Result<(), Error> {
        lazy_static::initialize(&CONSTS);
        Self::global().map(|_| ())
    }

    /// Returns the constants, computing them on the first call.
    ///
    /// ## Errors
    ///
    /// Returns the error of the computation, if any. The error is persistent.
    pub fn global() -> Result<&'static Consts, Error> {
        CONSTS.as_ref().map_err(|e| *e)
    }

    /// π with 100 correct decimal digits.
    pub fn pi(&self) -> &BigFloat {
        &self.pi
    }

    /// Degree, π/180.
    pub fn degree(&self) -> &BigFloat {
        &self.degree
    }

    /// Speed of light in vacuum, m/s.
    pub fn speed_of_light(&self) -> &BigFloat {
        &self.speed_of_light
    }

    /// Newtonian constant of gravitation, m^3 kg^-1 s^-2.
    pub fn gravitational_constant(&self) -> &BigFloat {
        &self.gravitational_constant
    }

    /// Astronomical unit, m.
    pub fn astronomical_unit(&self) -> &BigFloat {
        &self.astronomical_unit
    }

    /// Mass of the Earth, kg.
    pub fn earth_mass(&self) -> &BigFloat {
        &self.earth_mass
    }

    /// Mean radius of the Earth, m.
    pub fn earth_radius(&self) -> &BigFloat {
        &self.earth_radius
    }
}

/// Converts the angle `deg` in degrees to radians.
/// The result has precision `p` and is rounded using the rounding mode `rm`.
///
/// ## Errors
///
///  - InvalidArgument: the precision is zero.
///  - PrecisionOverflow: the precision exceeds the maximum.
pub fn to_radians(deg: &BigFloat, p: usize, rm: RoundingMode) -> Result<BigFloat, Error> {
    deg.mul(Consts::global()?.degree(), p, rm)
}

/// Converts the angle `rad` in radians to degrees.
/// The result has precision `p` and is rounded using the rounding mode `rm`.
///
/// ## Errors
///
///  - InvalidArgument: the precision is zero.
///  - PrecisionOverflow: the precision exceeds the maximum.
pub fn to_degrees(rad: &BigFloat, p: usize, rm: RoundingMode) -> Result<BigFloat, Error> {
    rad.div(Consts::global()?.degree(), p, rm)
}
