//! Nullable `i32`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::driver::{DriverValue, Scanner, Valuer};
use crate::error::{Error, Result};

/// A nullable `i32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NullInt32 {
    pub value: i32,
    pub valid: bool,
}

impl NullInt32 {
    /// Creates a wrapper with exactly the given value and validity flag.
    pub fn new(value: i32, valid: bool) -> Self {
        Self { value, valid }
    }

    /// Creates a wrapper from an optional value. `None` is invalid.
    pub fn from_option(opt: Option<i32>) -> Self {
        match opt {
            Some(v) => Self::new(v, true),
            None => Self::new(0, false),
        }
    }

    /// Returns a copy of the value, or `None` if invalid.
    pub fn to_option(&self) -> Option<i32> {
        if self.valid {
            Some(self.value)
        } else {
            None
        }
    }
}

impl From<Option<i32>> for NullInt32 {
    fn from(opt: Option<i32>) -> Self {
        Self::from_option(opt)
    }
}

impl Valuer for NullInt32 {
    fn value(&self) -> Result<DriverValue> {
        if !self.valid {
            return Ok(DriverValue::Null);
        }

        Ok(DriverValue::Int(i64::from(self.value)))
    }
}

impl Scanner for NullInt32 {
    /// Accepts a signed or unsigned integer within `i32` range, a byte
    /// sequence holding a decimal numeral, or NULL.
    fn scan(&mut self, src: DriverValue) -> Result<()> {
        match src {
            DriverValue::Null => {
                *self = Self::new(0, false);
                Ok(())
            }
            DriverValue::Int(i) => {
                let v = i32::try_from(i).map_err(|_| Error::out_of_range("i32", i))?;
                *self = Self::new(v, true);
                Ok(())
            }
            DriverValue::UInt(u) => {
                let v = i32::try_from(u).map_err(|_| Error::out_of_range("i32", u))?;
                *self = Self::new(v, true);
                Ok(())
            }
            DriverValue::Bytes(b) => {
                let text = std::str::from_utf8(&b)
                    .map_err(|e| Error::malformed("i32 bytes", e.to_string()))?;
                let v = text
                    .parse::<i32>()
                    .map_err(|e| Error::malformed("i32 bytes", e.to_string()))?;
                *self = Self::new(v, true);
                Ok(())
            }
            other => Err(Error::UnsupportedSource(other.type_name())),
        }
    }
}

impl Serialize for NullInt32 {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if !self.valid {
            return serializer.serialize_none();
        }

        serializer.serialize_i32(self.value)
    }
}

impl<'de> Deserialize<'de> for NullInt32 {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<i32>::deserialize(deserializer).map(Self::from_option)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_projection() {
        assert_eq!(NullInt32::from_option(Some(-7)), NullInt32::new(-7, true));
        assert_eq!(NullInt32::from_option(None), NullInt32::new(0, false));
        assert_eq!(NullInt32::new(-7, true).to_option(), Some(-7));
        assert_eq!(NullInt32::new(-7, false).to_option(), None);
    }

    #[test]
    fn test_value() {
        assert_eq!(
            NullInt32::new(5, false).value().unwrap(),
            DriverValue::Null
        );
        assert_eq!(
            NullInt32::new(i32::MIN, true).value().unwrap(),
            DriverValue::Int(-2147483648)
        );
    }

    #[test]
    fn test_scan() {
        let mut n = NullInt32::default();
        n.scan(DriverValue::Int(2147483647)).unwrap();
        assert_eq!(n, NullInt32::new(i32::MAX, true));

        n.scan(DriverValue::Int(-2147483648)).unwrap();
        assert_eq!(n, NullInt32::new(i32::MIN, true));

        n.scan(DriverValue::UInt(42)).unwrap();
        assert_eq!(n, NullInt32::new(42, true));

        n.scan(DriverValue::Bytes(b"-123".to_vec())).unwrap();
        assert_eq!(n, NullInt32::new(-123, true));

        n.scan(DriverValue::Null).unwrap();
        assert_eq!(n, NullInt32::new(0, false));
    }

    #[test]
    fn test_scan_rejects_out_of_range_and_bad_sources() {
        let mut n = NullInt32::new(1, true);
        assert!(matches!(
            n.scan(DriverValue::Int(2147483648)),
            Err(Error::OutOfRange { .. })
        ));
        assert!(matches!(
            n.scan(DriverValue::Int(-2147483649)),
            Err(Error::OutOfRange { .. })
        ));
        assert!(matches!(
            n.scan(DriverValue::Bytes(b"2147483648".to_vec())),
            Err(Error::Malformed { .. })
        ));
        assert!(matches!(
            n.scan(DriverValue::Double(1.0)),
            Err(Error::UnsupportedSource("f64"))
        ));
        assert_eq!(n, NullInt32::new(1, true));
    }

    #[test]
    fn test_json() {
        assert_eq!(
            serde_json::to_string(&NullInt32::new(7, false)).unwrap(),
            "null"
        );
        assert_eq!(
            serde_json::to_string(&NullInt32::new(i32::MAX, true)).unwrap(),
            "2147483647"
        );

        let n: NullInt32 = serde_json::from_str("null").unwrap();
        assert_eq!(n, NullInt32::new(0, false));

        let n: NullInt32 = serde_json::from_str("-2147483648").unwrap();
        assert_eq!(n, NullInt32::new(i32::MIN, true));
    }

    #[test]
    fn test_json_rejects_non_integers_and_overflow() {
        assert!(serde_json::from_str::<NullInt32>("2147483648").is_err());
        assert!(serde_json::from_str::<NullInt32>("-2147483649").is_err());
        assert!(serde_json::from_str::<NullInt32>("1.5").is_err());
        assert!(serde_json::from_str::<NullInt32>("1e2").is_err());
        assert!(serde_json::from_str::<NullInt32>("\"1\"").is_err());
        assert!(serde_json::from_str::<NullInt32>("true").is_err());
    }
}
