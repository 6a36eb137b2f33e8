//! Unix-second timestamp.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::driver::{DriverValue, Scanner, Valuer};
use crate::error::{Error, Result};

/// A point in time stored as signed 64-bit unix seconds.
///
/// The canonical string form is the decimal second count. Both the JSON and
/// the driver form are the bare integer seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Creates a timestamp from unix seconds.
    pub fn from_unix(secs: i64) -> Self {
        Self(secs)
    }

    /// Creates a timestamp from a `chrono` datetime, truncating sub-second
    /// precision.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt.timestamp())
    }

    /// Unix seconds.
    pub fn unix(&self) -> i64 {
        self.0
    }

    /// Converts to a `chrono` datetime. `None` if the second count falls
    /// outside chrono's representable range.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.0, 0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Timestamp {
    fn from(secs: i64) -> Self {
        Self(secs)
    }
}

impl Valuer for Timestamp {
    fn value(&self) -> Result<DriverValue> {
        Ok(DriverValue::Int(self.0))
    }
}

impl Scanner for Timestamp {
    /// Accepts a signed integer, an unsigned integer within `i64` range, or
    /// a byte sequence holding a decimal second count.
    fn scan(&mut self, src: DriverValue) -> Result<()> {
        match src {
            DriverValue::Int(i) => {
                self.0 = i;
                Ok(())
            }
            DriverValue::UInt(u) => {
                let i = i64::try_from(u).map_err(|_| Error::out_of_range("timestamp", u))?;
                self.0 = i;
                Ok(())
            }
            DriverValue::Bytes(b) => {
                let text = std::str::from_utf8(&b)
                    .map_err(|e| Error::malformed("timestamp bytes", e.to_string()))?;
                let i = text
                    .parse::<i64>()
                    .map_err(|e| Error::malformed("timestamp bytes", e.to_string()))?;
                self.0 = i;
                Ok(())
            }
            other => Err(Error::UnsupportedSource(other.type_name())),
        }
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.0)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        i64::deserialize(deserializer).map(Self)
    }
}
