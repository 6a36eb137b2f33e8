//! 256-bit unsigned integer.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;
use num_traits::One;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::driver::{DriverValue, Scanner, Valuer};
use crate::error::{Error, Result};

/// Maximum byte width of a [`Uint256`] in its big-endian driver form.
const MAX_BYTES: usize = 32;

/// Maximum number of hex digits after the `0x` prefix.
const MAX_HEX_DIGITS: usize = 64;

/// An unsigned integer bounded to 256 bits.
///
/// The canonical string form is `0x`-prefixed lowercase hex with no leading
/// zero digits (`0x0` for zero). The driver form is the minimal big-endian
/// byte sequence, a single zero byte for zero.
///
/// JSON decode accepts three equivalent source encodings: a bare non-negative
/// integer number, a quoted decimal string, or a quoted `0x` hex string with
/// 1 to 64 digits of either letter case.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Uint256(BigUint);

impl Uint256 {
    /// Creates a value from a `u64`.
    pub fn from_u64(v: u64) -> Self {
        Self(BigUint::from(v))
    }

    /// Creates a value from an arbitrary-precision unsigned integer,
    /// rejecting magnitudes above 2^256-1.
    pub fn from_biguint(v: BigUint) -> Result<Self> {
        if v.bits() > 256 {
            return Err(Error::out_of_range("uint256", &v));
        }

        Ok(Self(v))
    }

    /// Interprets a big-endian byte sequence of at most 32 bytes. An empty
    /// sequence decodes to zero.
    pub fn from_be_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() > MAX_BYTES {
            return Err(Error::malformed(
                "uint256 bytes",
                format!("expected at most {} bytes, got {}", MAX_BYTES, bytes.len()),
            ));
        }

        Ok(Self(BigUint::from_bytes_be(bytes)))
    }

    /// Returns the minimal big-endian byte form; zero encodes as a single
    /// zero byte.
    pub fn to_be_bytes(&self) -> Vec<u8> {
        self.0.to_bytes_be()
    }

    /// Returns the canonical `0x`-prefixed lowercase hex form.
    pub fn to_hex(&self) -> String {
        format!("0x{:x}", self.0)
    }

    /// Borrows the underlying arbitrary-precision value.
    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    /// The largest representable value, 2^256-1.
    pub fn max_value() -> Self {
        Self((BigUint::one() << 256u32) - 1u8)
    }

    fn parse_decimal(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(Error::malformed("uint256 decimal string", "empty"));
        }
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::malformed(
                "uint256 decimal string",
                format!("invalid digits in {s:?}"),
            ));
        }

        // Digits are pre-validated, so parse_bytes cannot fail here.
        let v = BigUint::parse_bytes(s.as_bytes(), 10)
            .ok_or_else(|| Error::malformed("uint256 decimal string", format!("{s:?}")))?;

        Self::from_biguint(v)
    }

    fn parse_hex(digits: &str) -> Result<Self> {
        if digits.is_empty() {
            return Err(Error::malformed("uint256 hex string", "missing digits"));
        }
        if digits.len() > MAX_HEX_DIGITS {
            return Err(Error::out_of_range("uint256", format!("0x{digits}")));
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::malformed(
                "uint256 hex string",
                format!("invalid digits in {digits:?}"),
            ));
        }

        let v = BigUint::parse_bytes(digits.as_bytes(), 16)
            .ok_or_else(|| Error::malformed("uint256 hex string", format!("{digits:?}")))?;

        Ok(Self(v))
    }
}

impl FromStr for Uint256 {
    type Err = Error;

    /// Accepts a `0x`-prefixed hex string or a bare decimal string.
    fn from_str(s: &str) -> Result<Self> {
        match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            Some(digits) => Self::parse_hex(digits),
            None => Self::parse_decimal(s),
        }
    }
}

impl fmt::Display for Uint256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<u64> for Uint256 {
    fn from(v: u64) -> Self {
        Self::from_u64(v)
    }
}

impl Valuer for Uint256 {
    fn value(&self) -> Result<DriverValue> {
        Ok(DriverValue::Bytes(self.to_be_bytes()))
    }
}

impl Scanner for Uint256 {
    fn scan(&mut self, src: DriverValue) -> Result<()> {
        match src {
            DriverValue::Bytes(b) => {
                *self = Self::from_be_slice(&b)?;
                Ok(())
            }
            other => Err(Error::UnsupportedSource(other.type_name())),
        }
    }
}

impl Serialize for Uint256 {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Uint256 {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error as DeError;

        // Deserialized through serde_json::Value first so the incoming JSON
        // shape (number vs string) can be inspected; arbitrary_precision
        // keeps oversized number tokens intact for the bound check.
        let value = serde_json::Value::deserialize(deserializer)?;
        match value {
            serde_json::Value::Number(n) => {
                let token = n.to_string();
                if token.starts_with('-') {
                    return Err(DeError::custom(format!(
                        "negative value not allowed for uint256: {token}"
                    )));
                }
                if token.contains(['.', 'e', 'E']) {
                    return Err(DeError::custom(format!(
                        "uint256 requires an integer number, got {token}"
                    )));
                }

                Uint256::parse_decimal(&token).map_err(|e| DeError::custom(e.to_string()))
            }
            serde_json::Value::String(s) => {
                Uint256::from_str(&s).map_err(|e| DeError::custom(e.to_string()))
            }
            other => Err(DeError::custom(format!(
                "invalid uint256 source: expected number or string, got {other}"
            ))),
        }
    }
}
