//! Nullable `bool`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::driver::{DriverValue, Scanner, Valuer};
use crate::error::{Error, Result};

/// A nullable `bool`.
///
/// When `valid` is false the carried value is semantically absent; the
/// external JSON form is `null` and the driver form is `DriverValue::Null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NullBool {
    pub value: bool,
    pub valid: bool,
}

impl NullBool {
    /// Creates a wrapper with exactly the given value and validity flag.
    pub fn new(value: bool, valid: bool) -> Self {
        Self { value, valid }
    }

    /// Creates a wrapper from an optional value. `None` is invalid.
    pub fn from_option(opt: Option<bool>) -> Self {
        match opt {
            Some(v) => Self::new(v, true),
            None => Self::new(false, false),
        }
    }

    /// Returns a copy of the value, or `None` if invalid.
    pub fn to_option(&self) -> Option<bool> {
        if self.valid {
            Some(self.value)
        } else {
            None
        }
    }
}

impl From<Option<bool>> for NullBool {
    fn from(opt: Option<bool>) -> Self {
        Self::from_option(opt)
    }
}

impl Valuer for NullBool {
    fn value(&self) -> Result<DriverValue> {
        if !self.valid {
            return Ok(DriverValue::Null);
        }

        Ok(DriverValue::Bool(self.value))
    }
}

impl Scanner for NullBool {
    /// Accepts a boolean, an integer `0`/`1` (drivers without a native
    /// boolean column type deliver these), or NULL.
    fn scan(&mut self, src: DriverValue) -> Result<()> {
        match src {
            DriverValue::Null => {
                *self = Self::new(false, false);
                Ok(())
            }
            DriverValue::Bool(b) => {
                *self = Self::new(b, true);
                Ok(())
            }
            DriverValue::Int(0) => {
                *self = Self::new(false, true);
                Ok(())
            }
            DriverValue::Int(1) => {
                *self = Self::new(true, true);
                Ok(())
            }
            DriverValue::Int(i) => Err(Error::malformed(
                "bool source",
                format!("integer {i} is neither 0 nor 1"),
            )),
            other => Err(Error::UnsupportedSource(other.type_name())),
        }
    }
}

impl Serialize for NullBool {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if !self.valid {
            return serializer.serialize_none();
        }

        serializer.serialize_bool(self.value)
    }
}

impl<'de> Deserialize<'de> for NullBool {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<bool>::deserialize(deserializer).map(Self::from_option)
    }
}
