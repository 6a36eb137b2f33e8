//! Driver value/scan protocol.
//!
//! Relational drivers bind parameters and deliver column results as
//! dynamically-typed values. [`DriverValue`] is the crate-owned enumeration of
//! the shapes a driver may legitimately carry for the kinds in this crate;
//! the actual driver machinery lives outside the crate.
//!
//! Outbound binding goes through [`Valuer::value`], inbound population
//! through [`Scanner::scan`]. A `DriverValue::Null` in either direction
//! signals database NULL.

use crate::error::Result;

/// A dynamically-typed value exchanged with a database driver.
#[derive(Debug, Clone, PartialEq)]
pub enum DriverValue {
    /// Database NULL.
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Double(f64),
    Text(String),
    Bytes(Vec<u8>),
}

impl DriverValue {
    /// Human-readable name of the variant, used in error diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            DriverValue::Null => "null",
            DriverValue::Bool(_) => "bool",
            DriverValue::Int(_) => "i64",
            DriverValue::UInt(_) => "u64",
            DriverValue::Double(_) => "f64",
            DriverValue::Text(_) => "text",
            DriverValue::Bytes(_) => "bytes",
        }
    }

    /// Whether this is the NULL sentinel.
    pub fn is_null(&self) -> bool {
        matches!(self, DriverValue::Null)
    }
}

/// Outbound half of the driver protocol: produce the driver-level
/// representation of a value.
pub trait Valuer {
    /// Returns the driver representation, or `DriverValue::Null` for an
    /// invalid (absent) value. Pure value kinds never fail; delegated kinds
    /// surface the domain conversion error.
    fn value(&self) -> Result<DriverValue>;
}

/// Inbound half of the driver protocol: populate a value from a
/// driver-supplied source.
///
/// On success both the value and the validity flag are replaced together; on
/// failure the receiver is left untouched.
pub trait Scanner {
    fn scan(&mut self, src: DriverValue) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names() {
        assert_eq!(DriverValue::Null.type_name(), "null");
        assert_eq!(DriverValue::Bool(true).type_name(), "bool");
        assert_eq!(DriverValue::Int(-1).type_name(), "i64");
        assert_eq!(DriverValue::UInt(1).type_name(), "u64");
        assert_eq!(DriverValue::Double(0.5).type_name(), "f64");
        assert_eq!(DriverValue::Text("x".into()).type_name(), "text");
        assert_eq!(DriverValue::Bytes(vec![0]).type_name(), "bytes");
    }

    #[test]
    fn test_is_null() {
        assert!(DriverValue::Null.is_null());
        assert!(!DriverValue::Int(0).is_null());
    }
}
