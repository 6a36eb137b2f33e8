//! Nullable arbitrary-precision signed integer.

use num_bigint::BigInt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::string::NullString;

/// A nullable [`num_bigint::BigInt`].
///
/// The JSON form is a bare integer number of arbitrary magnitude (encode and
/// decode both go through `serde_json`'s arbitrary-precision number token, so
/// values beyond 64 bits survive intact). There is no driver codec for this
/// kind.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NullBigInt {
    pub value: BigInt,
    pub valid: bool,
}

impl NullBigInt {
    /// Creates a wrapper with exactly the given value and validity flag.
    pub fn new(value: BigInt, valid: bool) -> Self {
        Self { value, valid }
    }

    /// Creates a wrapper from an optional value. `None` is invalid.
    pub fn from_option(opt: Option<BigInt>) -> Self {
        match opt {
            Some(v) => Self::new(v, true),
            None => Self::new(BigInt::default(), false),
        }
    }

    /// Returns a copy of the value, or `None` if invalid.
    pub fn to_option(&self) -> Option<BigInt> {
        if self.valid {
            Some(self.value.clone())
        } else {
            None
        }
    }

    /// Projects to a nullable string carrying the decimal form.
    pub fn to_null_string(&self) -> NullString {
        if !self.valid {
            return NullString::new("", false);
        }

        NullString::new(self.value.to_string(), true)
    }
}

impl From<Option<BigInt>> for NullBigInt {
    fn from(opt: Option<BigInt>) -> Self {
        Self::from_option(opt)
    }
}

impl Serialize for NullBigInt {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if !self.valid {
            return serializer.serialize_none();
        }

        let number = serde_json::Number::from_string_unchecked(self.value.to_string());
        number.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for NullBigInt {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error as DeError;

        let number = match Option::<serde_json::Number>::deserialize(deserializer)? {
            Some(n) => n,
            None => return Ok(Self::from_option(None)),
        };

        let token = number.to_string();
        if token.contains(['.', 'e', 'E']) {
            return Err(DeError::custom(format!(
                "big integer requires an integer number, got {token}"
            )));
        }

        let value = token
            .parse::<BigInt>()
            .map_err(|e| DeError::custom(format!("invalid big integer {token}: {e}")))?;

        Ok(Self::new(value, true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(s: &str) -> BigInt {
        s.parse().unwrap()
    }

    #[test]
    fn test_option_projection() {
        let v = big("-123456789012345678901234567890");
        assert_eq!(
            NullBigInt::from_option(Some(v.clone())),
            NullBigInt::new(v.clone(), true)
        );
        assert_eq!(
            NullBigInt::from_option(None),
            NullBigInt::new(BigInt::default(), false)
        );
        assert_eq!(NullBigInt::new(v.clone(), true).to_option(), Some(v.clone()));
        assert_eq!(NullBigInt::new(v, false).to_option(), None);
    }

    #[test]
    fn test_null_string_projection() {
        let n = NullBigInt::new(big("-42"), true);
        assert_eq!(n.to_null_string(), NullString::new("-42", true));

        let n = NullBigInt::new(big("42"), false);
        assert_eq!(n.to_null_string(), NullString::new("", false));
    }

    #[test]
    fn test_json_encode() {
        assert_eq!(
            serde_json::to_string(&NullBigInt::new(big("1"), false)).unwrap(),
            "null"
        );

        // Magnitudes beyond 64 bits stay bare numbers, never quoted.
        let huge = "123456789012345678901234567890";
        assert_eq!(
            serde_json::to_string(&NullBigInt::new(big(huge), true)).unwrap(),
            huge
        );
    }

    #[test]
    fn test_json_decode() {
        let n: NullBigInt = serde_json::from_str("null").unwrap();
        assert_eq!(n, NullBigInt::new(BigInt::default(), false));

        let huge = "-123456789012345678901234567890";
        let n: NullBigInt = serde_json::from_str(huge).unwrap();
        assert_eq!(n, NullBigInt::new(big(huge), true));

        let n: NullBigInt = serde_json::from_str("0").unwrap();
        assert_eq!(n, NullBigInt::new(big("0"), true));
    }

    #[test]
    fn test_json_roundtrip_preserves_magnitude() {
        let original = NullBigInt::new(big("18446744073709551617"), true);
        let encoded = serde_json::to_string(&original).unwrap();
        let back: NullBigInt = serde_json::from_str(&encoded).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn test_json_rejects_non_integer_forms() {
        assert!(serde_json::from_str::<NullBigInt>("1.5").is_err());
        assert!(serde_json::from_str::<NullBigInt>("1e10").is_err());
        assert!(serde_json::from_str::<NullBigInt>("\"123\"").is_err());
        assert!(serde_json::from_str::<NullBigInt>("true").is_err());
    }
}
