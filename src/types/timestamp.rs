//! Nullable unix-second timestamp.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::string::NullString;
use crate::domain::Timestamp;
use crate::driver::{DriverValue, Scanner, Valuer};
use crate::error::Result;

/// A nullable [`Timestamp`].
///
/// Both the JSON and the driver form are the bare integer second count,
/// delegated to the domain type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NullTimestamp {
    pub value: Timestamp,
    pub valid: bool,
}

impl NullTimestamp {
    /// Creates a wrapper with exactly the given value and validity flag.
    pub fn new(value: Timestamp, valid: bool) -> Self {
        Self { value, valid }
    }

    /// Creates a wrapper from an optional value. `None` is invalid.
    pub fn from_option(opt: Option<Timestamp>) -> Self {
        match opt {
            Some(v) => Self::new(v, true),
            None => Self::new(Timestamp::default(), false),
        }
    }

    /// Returns a copy of the value, or `None` if invalid.
    pub fn to_option(&self) -> Option<Timestamp> {
        if self.valid {
            Some(self.value)
        } else {
            None
        }
    }

    /// Projects to a nullable string carrying the decimal second count.
    pub fn to_null_string(&self) -> NullString {
        if !self.valid {
            return NullString::new("", false);
        }

        NullString::new(self.value.to_string(), true)
    }
}

impl From<Option<Timestamp>> for NullTimestamp {
    fn from(opt: Option<Timestamp>) -> Self {
        Self::from_option(opt)
    }
}

impl Valuer for NullTimestamp {
    fn value(&self) -> Result<DriverValue> {
        if !self.valid {
            return Ok(DriverValue::Null);
        }

        self.value.value()
    }
}

impl Scanner for NullTimestamp {
    /// Accepts the sources of [`Timestamp::scan`], or NULL.
    fn scan(&mut self, src: DriverValue) -> Result<()> {
        if src.is_null() {
            *self = Self::new(Timestamp::default(), false);
            return Ok(());
        }

        let mut value = Timestamp::default();
        value.scan(src)?;
        *self = Self::new(value, true);

        Ok(())
    }
}

impl Serialize for NullTimestamp {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if !self.valid {
            return serializer.serialize_none();
        }

        self.value.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for NullTimestamp {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<Timestamp>::deserialize(deserializer).map(Self::from_option)
    }
}
