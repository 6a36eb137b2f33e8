//! The nullable wrappers, one file per kind.
//!
//! Every wrapper follows the same four-operation contract: constructors
//! (`new`, `from_option`), the optional projection (`to_option`), the driver
//! codec ([`crate::driver::Valuer`] / [`crate::driver::Scanner`]) and the
//! JSON codec (serde). Kind-specific behavior is confined to value parsing
//! and formatting.

mod address;
mod bigint;
mod bool;
mod float64;
mod hash;
mod int32;
mod int64;
mod raw_json;
mod string;
mod timestamp;
mod uint256;
mod uint64;

pub use address::NullAddress;
pub use bigint::NullBigInt;
pub use bool::NullBool;
pub use float64::NullFloat64;
pub use hash::NullHash;
pub use int32::NullInt32;
pub use int64::NullInt64;
pub use raw_json::NullRawJson;
pub use string::NullString;
pub use timestamp::NullTimestamp;
pub use uint256::NullUint256;
pub use uint64::NullUint64;
