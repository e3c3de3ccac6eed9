//! Deserialization of BigFloat.

use core::fmt::Formatter;

use serde::de::Error;
use serde::de::Visitor;
use serde::{Deserialize, Deserializer};

use crate::defs::DEFAULT_P;
use crate::num::BigFloat;

pub struct BigFloatVisitor {}

impl<'de> Deserialize<'de> for BigFloat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(BigFloatVisitor {})
    }
}

impl<'de> Visitor<'de> for BigFloatVisitor {
    type Value = BigFloat;

    fn expecting(&self, formatter: &mut Formatter) -> core::fmt::Result {
        write!(formatter, "a decimal string or a number")
    }

    fn visit_u64<E: Error>(self, v: u64) -> Result<Self::Value, E> {
        BigFloat::from_u64(v, DEFAULT_P).map_err(Error::custom)
    }

    fn visit_i64<E: Error>(self, v: i64) -> Result<Self::Value, E> {
        BigFloat::from_i64(v, DEFAULT_P).map_err(Error::custom)
    }

    fn visit_f64<E: Error>(self, v: f64) -> Result<Self::Value, E> {
        BigFloat::from_f64(v, DEFAULT_P).map_err(Error::custom)
    }

    fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse::<BigFloat>().map_err(Error::custom)
    }
}
