//! Serialization of BigFloat.
//! A number is serialized to a decimal string holding as many digits as its precision allows.

use serde::ser::Error;
use serde::{Serialize, Serializer};

use crate::common::util::bits_to_digits;
use crate::defs::RoundingMode;
use crate::num::BigFloat;

impl Serialize for BigFloat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.format(bits_to_digits(self.precision()), RoundingMode::ToEven) {
            Ok(s) => serializer.serialize_str(&s),
            Err(e) => Err(Error::custom(e)),
        }
    }
}

#[cfg(test)]
mod tests {

    use serde_json::to_string;

    use crate::num::BigFloat;

    #[test]
    fn to_json() {
        assert_eq!(to_string(&BigFloat::new(64).unwrap()).unwrap(), "\"0.0\"");
        assert_eq!(to_string(&BigFloat::from_u8(5, 8).unwrap()).unwrap(), "\"5.00\"");
        assert_eq!(to_string(&BigFloat::from_f64(-0.375, 16).unwrap()).unwrap(), "\"-3.7500e-1\"");
    }
}
