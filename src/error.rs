//! Shared error types for the nullable wrappers.
//!
//! Every decode failure is reported synchronously through [`Error`]; nothing
//! is retried or logged internally. JSON/YAML decode paths surface the same
//! diagnostics through the calling framework's `serde::de::Error` type.

use thiserror::Error;

/// Errors produced by the driver scan/value codec and the domain value
/// parsers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The dynamically-typed driver source does not match any accepted shape
    /// for the target kind.
    #[error("unsupported source type: {0}")]
    UnsupportedSource(&'static str),

    /// A signed source was negative where the target is unsigned.
    #[error("negative source not allowed: {0}")]
    NegativeSource(i64),

    /// A numeral parsed but exceeds the target width (32/64/256 bits) or the
    /// finite double range.
    #[error("{what} out of range: {value}")]
    OutOfRange {
        what: &'static str,
        value: String,
    },

    /// Empty text, invalid hex digits, a fractional or exponential numeral
    /// where an integer is required, or a byte sequence of the wrong length.
    #[error("malformed {what}: {reason}")]
    Malformed {
        what: &'static str,
        reason: String,
    },
}

impl Error {
    /// Shorthand used by the domain parsers.
    pub(crate) fn malformed(what: &'static str, reason: impl Into<String>) -> Self {
        Self::Malformed {
            what,
            reason: reason.into(),
        }
    }

    pub(crate) fn out_of_range(what: &'static str, value: impl ToString) -> Self {
        Self::OutOfRange {
            what,
            value: value.to_string(),
        }
    }
}

/// Result alias for nullable codec operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnsupportedSource("f64");
        assert_eq!(err.to_string(), "unsupported source type: f64");

        let err = Error::NegativeSource(-5);
        assert_eq!(err.to_string(), "negative source not allowed: -5");

        let err = Error::out_of_range("u64", "18446744073709551616");
        assert_eq!(err.to_string(), "u64 out of range: 18446744073709551616");

        let err = Error::malformed("hex string", "missing digits");
        assert_eq!(err.to_string(), "malformed hex string: missing digits");
    }
}
