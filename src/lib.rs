//! # nullable
//!
//! Nullable scalar wrappers with JSON and database driver codecs.
//!
//! Each wrapper pairs a value with a validity flag; when the flag is false
//! the value is semantically absent regardless of its bit pattern. Wrappers
//! convert to and from three external representations:
//!
//! - a **driver protocol** ([`DriverValue`] plus the [`Valuer`] / [`Scanner`]
//!   traits) standing in for a relational driver's dynamically-typed
//!   parameter binding,
//! - a **JSON codec** (serde): an invalid wrapper encodes as the literal
//!   `null` and a `null` input decodes to an invalid wrapper, symmetrically
//!   for every kind,
//! - a **YAML codec** for [`NullString`], served by the same serde impls.
//!
//! Numeric semantics are exact across the boundary: `u64` values beyond the
//! safe JSON integer range stay bare numbers, big integers keep arbitrary
//! precision, and 256-bit integers decode from bare numbers, decimal strings
//! or `0x` hex strings interchangeably.
//!
//! ## Example
//!
//! ```rust
//! use nullable::{NullUint64, NullString, DriverValue, Scanner, Valuer};
//!
//! let mut n = NullUint64::default();
//! n.scan(DriverValue::Bytes(b"1231006505".to_vec())).unwrap();
//! assert_eq!(n, NullUint64::new(1231006505, true));
//!
//! let s: NullString = serde_json::from_str("null").unwrap();
//! assert!(!s.valid);
//! assert_eq!(s.value().unwrap(), DriverValue::Null);
//! ```

pub mod domain;
pub mod driver;
pub mod error;
pub mod types;

pub use domain::{Address, Hash, Timestamp, Uint256, ADDRESS_LEN, HASH_LEN};
pub use driver::{DriverValue, Scanner, Valuer};
pub use error::{Error, Result};
pub use types::{
    NullAddress, NullBigInt, NullBool, NullFloat64, NullHash, NullInt32, NullInt64, NullRawJson,
    NullString, NullTimestamp, NullUint256, NullUint64,
};
