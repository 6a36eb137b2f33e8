//! Nullable `u64`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::driver::{DriverValue, Scanner, Valuer};
use crate::error::{Error, Result};

/// A nullable `u64`.
///
/// The driver codec accepts decimal byte sequences in addition to integer
/// sources, because drivers without a native unsigned 64-bit column type
/// deliver text numerals. The JSON codec is deliberately narrower: only a
/// bare non-negative JSON number is accepted, never a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NullUint64 {
    pub value: u64,
    pub valid: bool,
}

impl NullUint64 {
    /// Creates a wrapper with exactly the given value and validity flag.
    pub fn new(value: u64, valid: bool) -> Self {
        Self { value, valid }
    }

    /// Creates a wrapper from an optional value. `None` is invalid.
    pub fn from_option(opt: Option<u64>) -> Self {
        match opt {
            Some(v) => Self::new(v, true),
            None => Self::new(0, false),
        }
    }

    /// Returns a copy of the value, or `None` if invalid.
    pub fn to_option(&self) -> Option<u64> {
        if self.valid {
            Some(self.value)
        } else {
            None
        }
    }
}

impl From<Option<u64>> for NullUint64 {
    fn from(opt: Option<u64>) -> Self {
        Self::from_option(opt)
    }
}

impl Valuer for NullUint64 {
    fn value(&self) -> Result<DriverValue> {
        if !self.valid {
            return Ok(DriverValue::Null);
        }

        Ok(DriverValue::UInt(self.value))
    }
}

impl Scanner for NullUint64 {
    /// Accepts a non-negative signed integer, an unsigned integer, a
    /// non-empty byte sequence holding a non-negative decimal numeral, or
    /// NULL.
    fn scan(&mut self, src: DriverValue) -> Result<()> {
        match src {
            DriverValue::Null => {
                *self = Self::new(0, false);
                Ok(())
            }
            DriverValue::Int(i) => {
                if i < 0 {
                    return Err(Error::NegativeSource(i));
                }
                *self = Self::new(i as u64, true);
                Ok(())
            }
            DriverValue::UInt(u) => {
                *self = Self::new(u, true);
                Ok(())
            }
            DriverValue::Bytes(b) => {
                if b.is_empty() {
                    return Err(Error::malformed("u64 bytes", "empty"));
                }
                let text = std::str::from_utf8(&b)
                    .map_err(|e| Error::malformed("u64 bytes", e.to_string()))?;
                let v = text
                    .parse::<u64>()
                    .map_err(|e| Error::malformed("u64 bytes", e.to_string()))?;
                *self = Self::new(v, true);
                Ok(())
            }
            other => Err(Error::UnsupportedSource(other.type_name())),
        }
    }
}

impl Serialize for NullUint64 {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if !self.valid {
            return serializer.serialize_none();
        }

        serializer.serialize_u64(self.value)
    }
}

impl<'de> Deserialize<'de> for NullUint64 {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<u64>::deserialize(deserializer).map(Self::from_option)
    }
}
