//! Content checksums for skipping redundant recompilation.
//!
//! Uses CRC-32 with the reflected CRC-32Q polynomial. The checksum is cheap
//! enough to recompute on every cache write and only has to answer "did these
//! bytes change since last time", not resist collisions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reflected form of the CRC-32Q polynomial (0x814141AB).
const CRC32Q_REFLECTED: u32 = 0xD582_8281;

/// Precomputed LSB-first CRC-32 lookup table (256 entries).
const CRC32_TABLE: [u32; 256] = {
    let mut table = [0u32; 256];
    let mut i = 0;
    while i < 256 {
        let mut crc = i as u32;
        let mut j = 0;
        while j < 8 {
            if crc & 1 != 0 {
                crc = (crc >> 1) ^ CRC32Q_REFLECTED;
            } else {
                crc >>= 1;
            }
            j += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
};

/// Computes the CRC-32Q checksum of the given bytes.
///
/// The register is seeded with all ones and inverted on output, so the empty
/// input checksums to `0`, which the cache treats as "never hashed".
pub fn checksum(data: &[u8]) -> u32 {
    let mut crc = !0u32;
    for &byte in data {
        let idx = ((crc ^ byte as u32) & 0xFF) as usize;
        crc = CRC32_TABLE[idx] ^ (crc >> 8);
    }
    !crc
}

/// A 32-bit content checksum recorded alongside a cached artifact.
///
/// [`ContentHash::ZERO`] is reserved to mean the content has never been
/// hashed; a zero hash never counts as a match.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentHash(u32);

impl ContentHash {
    /// The "never hashed" value.
    pub const ZERO: ContentHash = ContentHash(0);

    /// Computes a content hash from a byte slice.
    pub fn from_bytes(data: &[u8]) -> Self {
        Self(checksum(data))
    }

    /// Wraps a raw checksum value, e.g. one computed ahead of a write.
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw checksum value.
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Returns `true` if this is the "never hashed" value.
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if both hashes are set and equal.
    pub fn matches(self, other: ContentHash) -> bool {
        !self.is_zero() && self == other
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentHash({:08x})", self.0)
    }
}
