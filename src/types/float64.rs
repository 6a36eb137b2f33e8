//! Nullable `f64`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::driver::{DriverValue, Scanner, Valuer};
use crate::error::{Error, Result};

/// A nullable `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NullFloat64 {
    pub value: f64,
    pub valid: bool,
}

impl NullFloat64 {
    /// Creates a wrapper with exactly the given value and validity flag.
    pub fn new(value: f64, valid: bool) -> Self {
        Self { value, valid }
    }

    /// Creates a wrapper from an optional value. `None` is invalid.
    pub fn from_option(opt: Option<f64>) -> Self {
        match opt {
            Some(v) => Self::new(v, true),
            None => Self::new(0.0, false),
        }
    }

    /// Returns a copy of the value, or `None` if invalid.
    pub fn to_option(&self) -> Option<f64> {
        if self.valid {
            Some(self.value)
        } else {
            None
        }
    }
}

impl From<Option<f64>> for NullFloat64 {
    fn from(opt: Option<f64>) -> Self {
        Self::from_option(opt)
    }
}

impl Valuer for NullFloat64 {
    fn value(&self) -> Result<DriverValue> {
        if !self.valid {
            return Ok(DriverValue::Null);
        }

        Ok(DriverValue::Double(self.value))
    }
}

impl Scanner for NullFloat64 {
    /// Accepts a double, a signed integer, a byte sequence holding a decimal
    /// numeral, or NULL.
    fn scan(&mut self, src: DriverValue) -> Result<()> {
        match src {
            DriverValue::Null => {
                *self = Self::new(0.0, false);
                Ok(())
            }
            DriverValue::Double(f) => {
                *self = Self::new(f, true);
                Ok(())
            }
            DriverValue::Int(i) => {
                *self = Self::new(i as f64, true);
                Ok(())
            }
            DriverValue::Bytes(b) => {
                let text = std::str::from_utf8(&b)
                    .map_err(|e| Error::malformed("f64 bytes", e.to_string()))?;
                let v = text
                    .parse::<f64>()
                    .map_err(|e| Error::malformed("f64 bytes", e.to_string()))?;
                *self = Self::new(v, true);
                Ok(())
            }
            other => Err(Error::UnsupportedSource(other.type_name())),
        }
    }
}

impl Serialize for NullFloat64 {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if !self.valid {
            return serializer.serialize_none();
        }

        serializer.serialize_f64(self.value)
    }
}

impl<'de> Deserialize<'de> for NullFloat64 {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<f64>::deserialize(deserializer).map(Self::from_option)
    }
}
