//! Hash-or-height identifier accepted by `get_block`.

use std::fmt;
use std::str::FromStr;

use crate::error::ClientError;

const BLOCK_HASH_HEX_LEN: usize = 64;

/// Locates a block either by its hash or by its height.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BlockId {
    Hash(String),
    Height(u64),
}

impl From<u64> for BlockId {
    fn from(height: u64) -> Self {
        Self::Height(height)
    }
}

impl From<&str> for BlockId {
    fn from(hash: &str) -> Self {
        Self::Hash(hash.to_owned())
    }
}

impl From<String> for BlockId {
    fn from(hash: String) -> Self {
        Self::Hash(hash)
    }
}

/// Accepts a JSON string (hash) or a non-negative integer (height). Any
/// other value is rejected without contacting the node.
impl TryFrom<serde_json::Value> for BlockId {
    type Error = ClientError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::String(hash) => Ok(Self::Hash(hash)),
            serde_json::Value::Number(ref n) => n.as_u64().map(Self::Height).ok_or_else(|| {
                ClientError::InvalidParameter(format!(
                    "block height must be an unsigned integer, got {value}"
                ))
            }),
            other => Err(ClientError::InvalidParameter(format!(
                "block id must be a hash string or a height, got {other}"
            ))),
        }
    }
}

impl FromStr for BlockId {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        // A full-length hex string is a hash even when every character is a digit.
        if s.len() == BLOCK_HASH_HEX_LEN && s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Ok(Self::Hash(s.to_ascii_lowercase()));
        }
        if let Ok(height) = s.parse::<u64>() {
            return Ok(Self::Height(height));
        }
        Err(ClientError::InvalidParameter(format!(
            "`{s}` is neither a block height nor a {BLOCK_HASH_HEX_LEN}-character hex hash"
        )))
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hash(hash) => f.write_str(hash),
            Self::Height(height) => write!(f, "{height}"),
        }
    }
}
