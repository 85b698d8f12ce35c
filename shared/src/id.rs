//! Document identifiers
//!
//! Every stored document is keyed by a 12-byte identifier rendered as 24
//! lowercase hex characters (e.g. `"65a1f0c2e4b0a1b2c3d4e5f6"`). Clients only
//! ever see this string form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::util::object_id_bytes;

/// Length of the hex form
pub const DOCUMENT_ID_LEN: usize = 24;

/// Identifier string is not 24 hex characters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid document id: {0:?}")]
pub struct InvalidDocumentId(pub String);

/// Store-assigned document identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId([u8; 12]);

impl DocumentId {
    /// Generate a fresh identifier
    pub fn generate() -> Self {
        Self(object_id_bytes())
    }

    /// Parse the 24-character hex form (case-insensitive)
    pub fn parse(s: &str) -> Result<Self, InvalidDocumentId> {
        if s.len() != DOCUMENT_ID_LEN {
            return Err(InvalidDocumentId(s.to_string()));
        }
        let mut bytes = [0u8; 12];
        hex::decode_to_slice(s, &mut bytes).map_err(|_| InvalidDocumentId(s.to_string()))?;
        Ok(Self(bytes))
    }

    /// Syntactic check only, says nothing about existence
    pub fn is_valid(s: &str) -> bool {
        Self::parse(s).is_ok()
    }

    /// Seconds since the Unix epoch encoded in the leading bytes
    pub fn timestamp(&self) -> u32 {
        u32::from_be_bytes([self.0[0], self.0[1], self.0[2], self.0[3]])
    }

    /// Lowercase hex form, also used as the store record key
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for DocumentId {
    type Err = InvalidDocumentId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for DocumentId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for DocumentId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
