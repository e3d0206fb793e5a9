//! Git object identifier (SHA-1 hash)
//!
//! Object IDs are 40-character hexadecimal strings. Every object in the store
//! is named by exactly one of them.
//!
//! ## Storage
//!
//! Loose objects live at `objects/<first-2-chars>/<remaining-38-chars>`

use crate::artifacts::objects::{OBJECT_ID_LENGTH, SHORT_OBJECT_ID_LENGTH};
use crate::errors::HistoryError;
use std::path::PathBuf;
use std::str::FromStr;

/// Git object identifier (SHA-1 hash)
///
/// Only constructible through [`ObjectId::try_parse`], so a value of this type
/// always has the expected width and hex alphabet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate an object ID
    ///
    /// Fails with [`HistoryError::InvalidHash`] on a wrong length or a non-hex
    /// character. Hex digits are normalized to lowercase so that the same
    /// object always maps to the same location.
    pub fn try_parse(id: impl Into<String>) -> Result<Self, HistoryError> {
        let id = id.into();

        if id.len() != OBJECT_ID_LENGTH {
            return Err(HistoryError::InvalidHash {
                reason: format!("expected {OBJECT_ID_LENGTH} characters, got {}", id.len()),
                hash: id,
            });
        }
        if !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(HistoryError::InvalidHash {
                hash: id,
                reason: "contains non-hexadecimal characters".to_string(),
            });
        }

        Ok(Self(id.to_ascii_lowercase()))
    }

    /// Convert to the loose object location
    ///
    /// Splits the hash as `XX/YYYYYY...` where XX is the first 2 chars.
    /// For example, `abc123...` becomes `ab/c123...`
    pub fn to_path(&self) -> PathBuf {
        let (dir, file) = self.0.split_at(2);
        PathBuf::from(dir).join(file)
    }

    /// First 7 characters of the hash (standard Git abbreviation)
    pub fn to_short_oid(&self) -> String {
        self.0[..SHORT_OBJECT_ID_LENGTH].to_string()
    }
}

impl FromStr for ObjectId {
    type Err = HistoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_parse(s)
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
