//! 20-byte account address.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::driver::{DriverValue, Scanner, Valuer};
use crate::error::{Error, Result};

/// Byte width of an [`Address`].
pub const ADDRESS_LEN: usize = 20;

/// A fixed-width 20-byte address.
///
/// The canonical string form is `0x`-prefixed lowercase hex with exactly 40
/// digits; parsing accepts either letter case. The driver form is the raw
/// 20-byte big-endian sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    /// Creates an address from its raw bytes.
    pub fn new(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    /// Creates an address from a byte slice of exactly [`ADDRESS_LEN`] bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let arr: [u8; ADDRESS_LEN] = bytes.try_into().map_err(|_| {
            Error::malformed(
                "address bytes",
                format!("expected {} bytes, got {}", ADDRESS_LEN, bytes.len()),
            )
        })?;

        Ok(Self(arr))
    }

    /// Parses the canonical `0x`-prefixed hex form.
    pub fn from_hex(s: &str) -> Result<Self> {
        super::decode_fixed_hex("address", s).map(Self)
    }

    /// Returns the canonical `0x`-prefixed lowercase hex form.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Raw bytes of the address.
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Valuer for Address {
    fn value(&self) -> Result<DriverValue> {
        Ok(DriverValue::Bytes(self.0.to_vec()))
    }
}

impl Scanner for Address {
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

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{Error as DeError, Visitor};

        struct AddressVisitor;

        impl<'de> Visitor<'de> for AddressVisitor {
            type Value = Address;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a 0x-prefixed 40-digit hex string")
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Address, E>
            where
                E: DeError,
            {
                Address::from_hex(value).map_err(|e| E::custom(e.to_string()))
            }
        }

        deserializer.deserialize_str(AddressVisitor)
    }
}
