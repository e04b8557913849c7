//! Digest value and its hex rendering.

use std::fmt;
use std::str::FromStr;

use crate::constants::BLOCK_BYTES;
use crate::error::Mirror256Error;
use crate::wire::Block;

/// A 32-byte Mirror256 digest.
///
/// The default value is all zeroes, which is what a hasher reports before it
/// has processed any block.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Digest([u8; BLOCK_BYTES]);

impl Digest {
    /// Wraps raw digest bytes.
    pub const fn new(bytes: [u8; BLOCK_BYTES]) -> Self {
        Digest(bytes)
    }

    /// Returns the raw bytes.
    pub fn as_bytes(&self) -> &[u8; BLOCK_BYTES] {
        &self.0
    }

    /// Renders the digest as 64 lowercase hex characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parses a digest from 64 hex characters (either case).
    pub fn from_hex(s: &str) -> Result<Self, Mirror256Error> {
        let mut bytes = [0u8; BLOCK_BYTES];
        hex::decode_to_slice(s, &mut bytes)?;
        Ok(Digest(bytes))
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Digest {
    type Err = Mirror256Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Digest::from_hex(s)
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; BLOCK_BYTES]> for Digest {
    fn from(bytes: [u8; BLOCK_BYTES]) -> Self {
        Digest(bytes)
    }
}

impl From<Digest> for [u8; BLOCK_BYTES] {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl From<Block> for Digest {
    fn from(block: Block) -> Self {
        Digest(block.0)
    }
}
