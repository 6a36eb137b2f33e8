//! Nullable `i64`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::driver::{DriverValue, Scanner, Valuer};
use crate::error::{Error, Result};

/// A nullable `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NullInt64 {
    pub value: i64,
    pub valid: bool,
}

impl NullInt64 {
    /// Creates a wrapper with exactly the given value and validity flag.
    pub fn new(value: i64, valid: bool) -> Self {
        Self { value, valid }
    }

    /// Creates a wrapper from an optional value. `None` is invalid.
    pub fn from_option(opt: Option<i64>) -> Self {
        match opt {
            Some(v) => Self::new(v, true),
            None => Self::new(0, false),
        }
    }

    /// Returns a copy of the value, or `None` if invalid.
    pub fn to_option(&self) -> Option<i64> {
        if self.valid {
            Some(self.value)
        } else {
            None
        }
    }
}

impl From<Option<i64>> for NullInt64 {
    fn from(opt: Option<i64>) -> Self {
        Self::from_option(opt)
    }
}

impl Valuer for NullInt64 {
    fn value(&self) -> Result<DriverValue> {
        if !self.valid {
            return Ok(DriverValue::Null);
        }

        Ok(DriverValue::Int(self.value))
    }
}

impl Scanner for NullInt64 {
    /// Accepts a signed integer, an unsigned integer within `i64` range, a
    /// byte sequence holding a decimal numeral, or NULL.
    fn scan(&mut self, src: DriverValue) -> Result<()> {
        match src {
            DriverValue::Null => {
                *self = Self::new(0, false);
                Ok(())
            }
            DriverValue::Int(i) => {
                *self = Self::new(i, true);
                Ok(())
            }
            DriverValue::UInt(u) => {
                let v = i64::try_from(u).map_err(|_| Error::out_of_range("i64", u))?;
                *self = Self::new(v, true);
                Ok(())
            }
            DriverValue::Bytes(b) => {
                let text = std::str::from_utf8(&b)
                    .map_err(|e| Error::malformed("i64 bytes", e.to_string()))?;
                let v = text
                    .parse::<i64>()
                    .map_err(|e| Error::malformed("i64 bytes", e.to_string()))?;
                *self = Self::new(v, true);
                Ok(())
            }
            other => Err(Error::UnsupportedSource(other.type_name())),
        }
    }
}

impl Serialize for NullInt64 {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if !self.valid {
            return serializer.serialize_none();
        }

        serializer.serialize_i64(self.value)
    }
}

impl<'de> Deserialize<'de> for NullInt64 {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<i64>::deserialize(deserializer).map(Self::from_option)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_projection() {
        assert_eq!(NullInt64::from_option(Some(-7)), NullInt64::new(-7, true));
        assert_eq!(NullInt64::from_option(None), NullInt64::new(0, false));
        assert_eq!(NullInt64::new(9, true).to_option(), Some(9));
        assert_eq!(NullInt64::new(9, false).to_option(), None);
    }

    #[test]
    fn test_value() {
        assert_eq!(NullInt64::new(5, false).value().unwrap(), DriverValue::Null);
        assert_eq!(
            NullInt64::new(i64::MIN, true).value().unwrap(),
            DriverValue::Int(i64::MIN)
        );
    }

    #[test]
    fn test_scan() {
        let mut n = NullInt64::default();
        n.scan(DriverValue::Int(i64::MAX)).unwrap();
        assert_eq!(n, NullInt64::new(i64::MAX, true));

        n.scan(DriverValue::UInt(42)).unwrap();
        assert_eq!(n, NullInt64::new(42, true));

        n.scan(DriverValue::Bytes(b"-9223372036854775808".to_vec()))
            .unwrap();
        assert_eq!(n, NullInt64::new(i64::MIN, true));

        n.scan(DriverValue::Null).unwrap();
        assert_eq!(n, NullInt64::new(0, false));
    }

    #[test]
    fn test_scan_rejects_bad_sources() {
        let mut n = NullInt64::new(1, true);
        assert!(matches!(
            n.scan(DriverValue::UInt(u64::MAX)),
            Err(Error::OutOfRange { .. })
        ));
        assert!(matches!(
            n.scan(DriverValue::Bytes(b"9223372036854775808".to_vec())),
            Err(Error::Malformed { .. })
        ));
        assert!(matches!(
            n.scan(DriverValue::Bool(true)),
            Err(Error::UnsupportedSource("bool"))
        ));
        assert_eq!(n, NullInt64::new(1, true));
    }

    #[test]
    fn test_json_encode_boundary() {
        // Max i64 must serialize as a bare number, never quoted.
        assert_eq!(
            serde_json::to_string(&NullInt64::new(9223372036854775807, true)).unwrap(),
            "9223372036854775807"
        );
        assert_eq!(
            serde_json::to_string(&NullInt64::new(7, false)).unwrap(),
            "null"
        );
    }

    #[test]
    fn test_json_decode() {
        let n: NullInt64 = serde_json::from_str("null").unwrap();
        assert_eq!(n, NullInt64::new(0, false));

        let n: NullInt64 = serde_json::from_str("-9223372036854775808").unwrap();
        assert_eq!(n, NullInt64::new(i64::MIN, true));

        let n: NullInt64 = serde_json::from_str("9223372036854775807").unwrap();
        assert_eq!(n, NullInt64::new(i64::MAX, true));
    }

    #[test]
    fn test_json_rejects_non_integers_and_overflow() {
        assert!(serde_json::from_str::<NullInt64>("9223372036854775808").is_err());
        assert!(serde_json::from_str::<NullInt64>("-9223372036854775809").is_err());
        assert!(serde_json::from_str::<NullInt64>("1.5").is_err());
        assert!(serde_json::from_str::<NullInt64>("\"1\"").is_err());
        assert!(serde_json::from_str::<NullInt64>("false").is_err());
    }
}
