//! Opaque domain value types the nullable wrappers delegate to.
//!
//! Each type owns its canonical string form (`0x` hex for [`Address`],
//! [`Hash`] and [`Uint256`], decimal seconds for [`Timestamp`]) and its own
//! serde and driver codecs. The wrappers in [`crate::types`] add the
//! nullable envelope on top without reinterpreting the value.

mod address;
mod hash;
mod timestamp;
mod uint256;

pub use address::{Address, ADDRESS_LEN};
pub use hash::{Hash, HASH_LEN};
pub use timestamp::Timestamp;
pub use uint256::Uint256;

use crate::error::Error;

/// Decodes a `0x`-prefixed hex string into a fixed-width byte array.
/// Digits are case-insensitive; the digit count must match exactly.
fn decode_fixed_hex<const N: usize>(what: &'static str, s: &str) -> Result<[u8; N], Error> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .ok_or_else(|| Error::malformed(what, "missing 0x prefix"))?;

    if digits.len() != N * 2 {
        return Err(Error::malformed(
            what,
            format!("expected {} hex digits, got {}", N * 2, digits.len()),
        ));
    }

    let mut out = [0u8; N];
    hex::decode_to_slice(digits, &mut out)
        .map_err(|e| Error::malformed(what, e.to_string()))?;

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_fixed_hex() {
        let bytes: [u8; 2] = decode_fixed_hex("pair", "0xbeef").unwrap();
        assert_eq!(bytes, [0xbe, 0xef]);

        let bytes: [u8; 2] = decode_fixed_hex("pair", "0XBEEF").unwrap();
        assert_eq!(bytes, [0xbe, 0xef]);
    }

    #[test]
    fn test_decode_fixed_hex_rejects_bad_input() {
        assert!(decode_fixed_hex::<2>("pair", "beef").is_err());
        assert!(decode_fixed_hex::<2>("pair", "0xbee").is_err());
        assert!(decode_fixed_hex::<2>("pair", "0xzzzz").is_err());
        assert!(decode_fixed_hex::<2>("pair", "").is_err());
    }
}
