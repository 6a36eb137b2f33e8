//! Nullable 256-bit unsigned integer.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::string::NullString;
use crate::domain::Uint256;
use crate::driver::{DriverValue, Scanner, Valuer};
use crate::error::Result;

/// A nullable [`Uint256`].
///
/// The JSON encode form is the canonical `0x` hex string; decode additionally
/// accepts a bare integer number or a quoted decimal string of the same
/// magnitude (see [`Uint256`]). The driver form is the minimal big-endian
/// byte sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NullUint256 {
    pub value: Uint256,
    pub valid: bool,
}

impl NullUint256 {
    /// Creates a wrapper with exactly the given value and validity flag.
    pub fn new(value: Uint256, valid: bool) -> Self {
        Self { value, valid }
    }

    /// Creates a wrapper from an optional value. `None` is invalid.
    pub fn from_option(opt: Option<Uint256>) -> Self {
        match opt {
            Some(v) => Self::new(v, true),
            None => Self::new(Uint256::default(), false),
        }
    }

    /// Returns a copy of the value, or `None` if invalid.
    pub fn to_option(&self) -> Option<Uint256> {
        if self.valid {
            Some(self.value.clone())
        } else {
            None
        }
    }

    /// Projects to a nullable string carrying the canonical hex form.
    pub fn to_null_string(&self) -> NullString {
        if !self.valid {
            return NullString::new("", false);
        }

        NullString::new(self.value.to_hex(), true)
    }
}

impl From<Option<Uint256>> for NullUint256 {
    fn from(opt: Option<Uint256>) -> Self {
        Self::from_option(opt)
    }
}

impl Valuer for NullUint256 {
    fn value(&self) -> Result<DriverValue> {
        if !self.valid {
            return Ok(DriverValue::Null);
        }

        self.value.value()
    }
}

impl Scanner for NullUint256 {
    /// Accepts a big-endian byte sequence of at most 32 bytes, or NULL.
    fn scan(&mut self, src: DriverValue) -> Result<()> {
        if src.is_null() {
            *self = Self::new(Uint256::default(), false);
            return Ok(());
        }

        let mut value = Uint256::default();
        value.scan(src)?;
        *self = Self::new(value, true);

        Ok(())
    }
}

impl Serialize for NullUint256 {
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

impl<'de> Deserialize<'de> for NullUint256 {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<Uint256>::deserialize(deserializer).map(Self::from_option)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_option_projection() {
        let v = Uint256::from_u64(7);
        assert_eq!(
            NullUint256::from_option(Some(v.clone())),
            NullUint256::new(v.clone(), true)
        );
        assert_eq!(
            NullUint256::from_option(None),
            NullUint256::new(Uint256::default(), false)
        );
        assert_eq!(NullUint256::new(v.clone(), true).to_option(), Some(v.clone()));
        assert_eq!(NullUint256::new(v, false).to_option(), None);
    }

    #[test]
    fn test_null_string_projection() {
        let n = NullUint256::new(Uint256::from_u64(0), true);
        assert_eq!(n.to_null_string(), NullString::new("0x0", true));

        let n = NullUint256::new(Uint256::from_u64(1), true);
        assert_eq!(n.to_null_string(), NullString::new("0x1", true));

        let n = NullUint256::new(Uint256::max_value(), true);
        assert_eq!(
            n.to_null_string(),
            NullString::new(format!("0x{}", "f".repeat(64)), true)
        );

        let n = NullUint256::new(Uint256::from_u64(1), false);
        assert_eq!(n.to_null_string(), NullString::new("", false));
    }

    #[test]
    fn test_value() {
        assert_eq!(
            NullUint256::new(Uint256::from_u64(1), false).value().unwrap(),
            DriverValue::Null
        );
        assert_eq!(
            NullUint256::new(Uint256::from_u64(0), true).value().unwrap(),
            DriverValue::Bytes(vec![0x00])
        );
        assert_eq!(
            NullUint256::new(Uint256::max_value(), true).value().unwrap(),
            DriverValue::Bytes(vec![0xff; 32])
        );
    }

    #[test]
    fn test_scan() {
        let mut n = NullUint256::default();
        n.scan(DriverValue::Bytes(vec![0x01])).unwrap();
        assert_eq!(n, NullUint256::new(Uint256::from_u64(1), true));

        n.scan(DriverValue::Bytes(vec![0xff; 32])).unwrap();
        assert_eq!(n, NullUint256::new(Uint256::max_value(), true));

        n.scan(DriverValue::Null).unwrap();
        assert_eq!(n, NullUint256::new(Uint256::default(), false));
    }

    #[test]
    fn test_scan_rejects_bad_sources() {
        let mut n = NullUint256::new(Uint256::from_u64(9), true);
        assert!(matches!(
            n.scan(DriverValue::Bytes(vec![0x01; 33])),
            Err(Error::Malformed { .. })
        ));
        assert!(matches!(
            n.scan(DriverValue::Int(1)),
            Err(Error::UnsupportedSource("i64"))
        ));
        assert_eq!(n, NullUint256::new(Uint256::from_u64(9), true));
    }

    #[test]
    fn test_json_encode() {
        assert_eq!(
            serde_json::to_string(&NullUint256::new(Uint256::from_u64(1), false)).unwrap(),
            "null"
        );
        assert_eq!(
            serde_json::to_string(&NullUint256::new(Uint256::from_u64(1), true)).unwrap(),
            "\"0x1\""
        );
    }

    #[test]
    fn test_json_decode_format_equivalence() {
        let n: NullUint256 = serde_json::from_str("null").unwrap();
        assert_eq!(n, NullUint256::new(Uint256::default(), false));

        let one = NullUint256::new(Uint256::from_u64(1), true);
        for doc in ["1", "\"1\"", "\"0x1\"", "\"0X1\""] {
            let n: NullUint256 = serde_json::from_str(doc).unwrap();
            assert_eq!(n, one, "doc: {doc}");
        }
    }

    #[test]
    fn test_json_decode_rejects_malformed() {
        assert!(serde_json::from_str::<NullUint256>("\"0x\"").is_err());
        assert!(serde_json::from_str::<NullUint256>("\"\"").is_err());
        assert!(serde_json::from_str::<NullUint256>("-1").is_err());
        assert!(serde_json::from_str::<NullUint256>("0.5").is_err());
        assert!(serde_json::from_str::<NullUint256>("true").is_err());
    }
}
