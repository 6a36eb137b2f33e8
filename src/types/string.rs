//! Nullable UTF-8 string.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::driver::{DriverValue, Scanner, Valuer};
use crate::error::{Error, Result};

/// A nullable `String`.
///
/// Beyond the JSON contract shared by every wrapper, the serde impls double
/// as the YAML codec: a valid wrapper emits the bare string scalar, an
/// invalid one emits a YAML null, and any null scalar on decode (`null`,
/// `~`, an empty document, or an explicit `!!null` tag) yields
/// `("", false)`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NullString {
    pub value: String,
    pub valid: bool,
}

impl NullString {
    /// Creates a wrapper with exactly the given value and validity flag.
    pub fn new(value: impl Into<String>, valid: bool) -> Self {
        Self {
            value: value.into(),
            valid,
        }
    }

    /// Creates a wrapper from an optional value. `None` is invalid; the
    /// payload is moved in, so later mutation of the source cannot be
    /// observed.
    pub fn from_option(opt: Option<String>) -> Self {
        match opt {
            Some(v) => Self::new(v, true),
            None => Self::new("", false),
        }
    }

    /// Returns a copy of the value, or `None` if invalid. Mutating the
    /// returned string never affects the wrapper.
    pub fn to_option(&self) -> Option<String> {
        if self.valid {
            Some(self.value.clone())
        } else {
            None
        }
    }

    /// Borrows the value, or `None` if invalid.
    pub fn as_deref(&self) -> Option<&str> {
        if self.valid {
            Some(&self.value)
        } else {
            None
        }
    }
}

impl From<Option<String>> for NullString {
    fn from(opt: Option<String>) -> Self {
        Self::from_option(opt)
    }
}

impl Valuer for NullString {
    fn value(&self) -> Result<DriverValue> {
        if !self.valid {
            return Ok(DriverValue::Null);
        }

        Ok(DriverValue::Text(self.value.clone()))
    }
}

impl Scanner for NullString {
    /// Accepts text, a UTF-8 byte sequence, or NULL.
    fn scan(&mut self, src: DriverValue) -> Result<()> {
        match src {
            DriverValue::Null => {
                *self = Self::new("", false);
                Ok(())
            }
            DriverValue::Text(s) => {
                *self = Self::new(s, true);
                Ok(())
            }
            DriverValue::Bytes(b) => {
                let s = String::from_utf8(b)
                    .map_err(|e| Error::malformed("string bytes", e.to_string()))?;
                *self = Self::new(s, true);
                Ok(())
            }
            other => Err(Error::UnsupportedSource(other.type_name())),
        }
    }
}

impl Serialize for NullString {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if !self.valid {
            return serializer.serialize_none();
        }

        serializer.serialize_str(&self.value)
    }
}

impl<'de> Deserialize<'de> for NullString {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer).map(Self::from_option)
    }
}
