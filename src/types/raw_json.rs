//! Nullable raw JSON payload.

use crate::driver::{DriverValue, Scanner, Valuer};
use crate::error::{Error, Result};

/// A nullable opaque JSON payload.
///
/// The payload passes through the driver boundary untouched; this kind has
/// no text codec of its own (the bytes already are JSON).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NullRawJson {
    pub value: Vec<u8>,
    pub valid: bool,
}

impl NullRawJson {
    /// Creates a wrapper with exactly the given payload and validity flag.
    pub fn new(value: impl Into<Vec<u8>>, valid: bool) -> Self {
        Self {
            value: value.into(),
            valid,
        }
    }

    /// Creates a wrapper from an optional payload. `None` is invalid.
    pub fn from_option(opt: Option<Vec<u8>>) -> Self {
        match opt {
            Some(v) => Self::new(v, true),
            None => Self::new(Vec::new(), false),
        }
    }

    /// Returns a copy of the payload, or `None` if invalid.
    pub fn to_option(&self) -> Option<Vec<u8>> {
        if self.valid {
            Some(self.value.clone())
        } else {
            None
        }
    }
}

impl From<Option<Vec<u8>>> for NullRawJson {
    fn from(opt: Option<Vec<u8>>) -> Self {
        Self::from_option(opt)
    }
}

impl Valuer for NullRawJson {
    fn value(&self) -> Result<DriverValue> {
        if !self.valid {
            return Ok(DriverValue::Null);
        }

        Ok(DriverValue::Bytes(self.value.clone()))
    }
}

impl Scanner for NullRawJson {
    /// Accepts a byte sequence, or NULL. Any other source type is an error.
    fn scan(&mut self, src: DriverValue) -> Result<()> {
        match src {
            DriverValue::Null => {
                *self = Self::new(Vec::new(), false);
                Ok(())
            }
            DriverValue::Bytes(b) => {
                *self = Self::new(b, true);
                Ok(())
            }
            other => Err(Error::UnsupportedSource(other.type_name())),
        }
    }
}
