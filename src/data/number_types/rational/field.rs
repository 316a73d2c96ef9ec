use std::fmt;
use std::str::FromStr;

use log::debug;

use super::error::RationalError;

/// One of the two stored parts of a rational, addressable by the keys `"n"` and `"d"`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Field {
    Numerator,
    Denominator,
}

impl FromStr for Field {
    type Err = RationalError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        match key {
            "n" => Ok(Field::Numerator),
            "d" => Ok(Field::Denominator),
            other => {
                debug!("rejected field key {:?}", other);
                Err(RationalError::InvalidKey { key: other.to_owned() })
            }
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Numerator => "n",
            Field::Denominator => "d",
        })
    }
}
