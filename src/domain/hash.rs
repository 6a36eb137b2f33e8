//! 32-byte hash digest.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::driver::{DriverValue, Scanner, Valuer};
use crate::error::{Error, Result};

/// Byte width of a [`Hash`].
pub const HASH_LEN: usize = 32;

/// A fixed-width 32-byte hash.
///
/// The canonical string form is `0x`-prefixed lowercase hex with exactly 64
/// digits; parsing accepts either letter case. The driver form is the raw
/// 32-byte big-endian sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Hash([u8; HASH_LEN]);

impl Hash {
    /// Creates a hash from its raw bytes.
    pub fn new(bytes: [u8; HASH_LEN]) -> Self {
        Self(bytes)
    }

    /// Creates a hash from a byte slice of exactly [`HASH_LEN`] bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let arr: [u8; HASH_LEN] = bytes.try_into().map_err(|_| {
            Error::malformed(
                "hash bytes",
                format!("expected {} bytes, got {}", HASH_LEN, bytes.len()),
            )
        })?;

        Ok(Self(arr))
    }

    /// Parses the canonical `0x`-prefixed hex form.
    pub fn from_hex(s: &str) -> Result<Self> {
        super::decode_fixed_hex("hash", s).map(Self)
    }

    /// Returns the canonical `0x`-prefixed lowercase hex form.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Raw bytes of the hash.
    pub fn as_bytes(&self) -> &[u8; HASH_LEN] {
        &self.0
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Valuer for Hash {
    fn value(&self) -> Result<DriverValue> {
        Ok(DriverValue::Bytes(self.0.to_vec()))
    }
}

impl Scanner for Hash {
    fn scan(&mut self, src: DriverValue) -> Result<()> {
        match src {
            DriverValue::Bytes(b) => {
                *self = Self::from_slice(&b)?;
                Ok(())
            }
            other => Err(Error::UnsupportedSource(other.type_name())),
        }
    }
}

impl Serialize for Hash {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Hash {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{Error as DeError, Visitor};

        struct HashVisitor;

        impl<'de> Visitor<'de> for HashVisitor {
            type Value = Hash;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a 0x-prefixed 64-digit hex string")
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Hash, E>
            where
                E: DeError,
            {
                Hash::from_hex(value).map_err(|e| E::custom(e.to_string()))
            }
        }

        deserializer.deserialize_str(HashVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GENESIS: &str = "0xd4e56740f876aef8c010b86a40d5f56745a118d0906a34e69aec8c0db1cb8fa3";

    #[test]
    fn test_hex_roundtrip() {
        let hash = Hash::from_hex(GENESIS).unwrap();
        assert_eq!(hash.to_hex(), GENESIS);
    }

    #[test]
    fn test_hex_parse_is_case_insensitive() {
        let upper = Hash::from_hex(&GENESIS.to_uppercase().replace("0X", "0x")).unwrap();
        assert_eq!(upper, Hash::from_hex(GENESIS).unwrap());
    }

    #[test]
    fn test_hex_parse_rejects_bad_input() {
        assert!(Hash::from_hex("0xd4e5").is_err());
        assert!(Hash::from_hex("").is_err());
        assert!(Hash::from_hex(&GENESIS[2..]).is_err());
    }

    #[test]
    fn test_from_slice_requires_exact_length() {
        assert!(Hash::from_slice(&[0u8; 32]).is_ok());
        assert!(Hash::from_slice(&[0u8; 31]).is_err());
        assert!(Hash::from_slice(&[0u8; 33]).is_err());
    }

    #[test]
    fn test_driver_roundtrip() {
        let hash = Hash::from_hex(GENESIS).unwrap();
        let v = hash.value().unwrap();

        let mut scanned = Hash::default();
        scanned.scan(v).unwrap();
        assert_eq!(scanned, hash);
    }

    #[test]
    fn test_serde_string_form() {
        let hash = Hash::from_hex(GENESIS).unwrap();
        let json = serde_json::to_string(&hash).unwrap();
        assert_eq!(json, format!("\"{GENESIS}\""));

        let back: Hash = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hash);
    }
}
