//! Nullable 32-byte hash.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::string::NullString;
use crate::domain::Hash;
use crate::driver::{DriverValue, Scanner, Valuer};
use crate::error::Result;

/// A nullable [`Hash`].
///
/// Value parsing and formatting are delegated to the domain type; the
/// wrapper only adds the nullable envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NullHash {
    pub value: Hash,
    pub valid: bool,
}

impl NullHash {
    /// Creates a wrapper with exactly the given value and validity flag.
    pub fn new(value: Hash, valid: bool) -> Self {
        Self { value, valid }
    }

    /// Creates a wrapper from an optional value. `None` is invalid.
    pub fn from_option(opt: Option<Hash>) -> Self {
        match opt {
            Some(v) => Self::new(v, true),
            None => Self::new(Hash::default(), false),
        }
    }

    /// Returns a copy of the value, or `None` if invalid.
    pub fn to_option(&self) -> Option<Hash> {
        if self.valid {
            Some(self.value)
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

impl From<Option<Hash>> for NullHash {
    fn from(opt: Option<Hash>) -> Self {
        Self::from_option(opt)
    }
}

impl Valuer for NullHash {
    fn value(&self) -> Result<DriverValue> {
        if !self.valid {
            return Ok(DriverValue::Null);
        }

        self.value.value()
    }
}

impl Scanner for NullHash {
    /// Accepts a 32-byte sequence, or NULL.
    fn scan(&mut self, src: DriverValue) -> Result<()> {
        if src.is_null() {
            *self = Self::new(Hash::default(), false);
            return Ok(());
        }

        let mut value = Hash::default();
        value.scan(src)?;
        *self = Self::new(value, true);

        Ok(())
    }
}

impl Serialize for NullHash {
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

impl<'de> Deserialize<'de> for NullHash {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<Hash>::deserialize(deserializer).map(Self::from_option)
    }
}
