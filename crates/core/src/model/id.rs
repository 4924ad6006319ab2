use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Number of raw bytes in a [`SymbolId`].
pub const SYMBOL_ID_LEN: usize = 8;

/// Stable identity of one logical declaration across translation units.
///
/// Derived by hashing the fully-resolved name (USR) of the declaration, so
/// every unit that sees the same declaration computes the same id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SymbolId([u8; SYMBOL_ID_LEN]);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SymbolIdError {
    #[error("Symbol id must be {expected} hex characters, got {found}")]
    BadLength { expected: usize, found: usize },
    #[error("Symbol id contains a non-hex character: {0:?}")]
    BadDigit(char),
}

impl SymbolId {
    /// Hash a USR into an id (first 8 bytes of its SHA-256 digest).
    pub fn from_usr(usr: &str) -> Self {
        let digest = Sha256::digest(usr.as_bytes());
        let mut raw = [0u8; SYMBOL_ID_LEN];
        raw.copy_from_slice(&digest[..SYMBOL_ID_LEN]);
        Self(raw)
    }

    pub const fn from_raw(raw: [u8; SYMBOL_ID_LEN]) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> &[u8; SYMBOL_ID_LEN] {
        &self.0
    }

    /// Lowercase hex rendering, 16 characters.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }

    pub fn from_hex(hex: &str) -> Result<Self, SymbolIdError> {
        if hex.len() != SYMBOL_ID_LEN * 2 {
            return Err(SymbolIdError::BadLength { expected: SYMBOL_ID_LEN * 2, found: hex.len() });
        }
        let mut raw = [0u8; SYMBOL_ID_LEN];
        for (slot, pair) in raw.iter_mut().zip(hex.as_bytes().chunks(2)) {
            *slot = (hex_digit(pair[0])? << 4) | hex_digit(pair[1])?;
        }
        Ok(Self(raw))
    }
}

fn hex_digit(byte: u8) -> Result<u8, SymbolIdError> {
    match byte {
        b'0'..=b'9' => Ok(byte - b'0'),
        b'a'..=b'f' => Ok(byte - b'a' + 10),
        b'A'..=b'F' => Ok(byte - b'A' + 10),
        other => Err(SymbolIdError::BadDigit(other as char)),
    }
}

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for SymbolId {
    type Err = SymbolIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for SymbolId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for SymbolId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}
