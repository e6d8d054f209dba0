//! Key material accepted by the Salsa generator.
//!
//! All three types are fixed-length arrays of 32-bit words. Their byte
//! encodings use little-endian words, matching the way Salsa20 reads keys
//! and nonces from bytes.

use std::fmt;

use zeroize::Zeroize;

/// Number of 32-bit words in a [`Key`].
pub const KEY_WORDS: usize = 8;
/// Number of 32-bit words in an [`Iv`].
pub const IV_WORDS: usize = 2;
/// Number of 32-bit words in a [`Seed`].
pub const SEED_WORDS: usize = KEY_WORDS + IV_WORDS;

/// 256-bit cryptographic key.
#[derive(Clone, PartialEq, Eq, Zeroize)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Key(pub [u32; KEY_WORDS]);

/// 64-bit initialization vector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Zeroize)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Iv(pub [u32; IV_WORDS]);

/// 320-bit seed: the key words followed by the IV words.
#[derive(Clone, PartialEq, Eq, Zeroize)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Seed(pub [u32; SEED_WORDS]);

fn words_from_le<const W: usize, const B: usize>(bytes: &[u8; B]) -> [u32; W] {
    let mut out = [0u32; W];

    out.iter_mut()
        .zip(bytes.chunks_exact(4))
        .for_each(|(w, c)| *w = u32::from_le_bytes([c[0], c[1], c[2], c[3]]));

    out
}

fn words_to_le<const W: usize, const B: usize>(words: &[u32; W]) -> [u8; B] {
    let mut out = [0u8; B];

    out.chunks_exact_mut(4)
        .zip(words)
        .for_each(|(c, w)| c.copy_from_slice(&w.to_le_bytes()));

    out
}

impl Key {
    /// Number of 32-bit words.
    pub const WORDS: usize = KEY_WORDS;
    /// Encoded size in bytes.
    pub const BYTES: usize = 32;

    /// Builds a key from 32 bytes, read as little-endian words.
    pub fn from_bytes(bytes: &[u8; Self::BYTES]) -> Self {
        Self(words_from_le(bytes))
    }

    /// Encodes the key as 32 bytes of little-endian words.
    pub fn to_bytes(&self) -> [u8; Self::BYTES] {
        words_to_le(&self.0)
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Key(..)")
    }
}

impl Iv {
    /// Number of 32-bit words.
    pub const WORDS: usize = IV_WORDS;
    /// Encoded size in bytes.
    pub const BYTES: usize = 8;

    /// Builds an IV from 8 bytes, read as little-endian words.
    pub fn from_bytes(bytes: &[u8; Self::BYTES]) -> Self {
        Self(words_from_le(bytes))
    }

    /// Encodes the IV as 8 bytes of little-endian words.
    pub fn to_bytes(&self) -> [u8; Self::BYTES] {
        words_to_le(&self.0)
    }
}

/// Splits a 64-bit value into an IV, low word first.
///
/// Handy for drawing a fresh IV from another generator's `next_u64`.
impl From<u64> for Iv {
    fn from(value: u64) -> Self {
        Self([value as u32, (value >> 32) as u32])
    }
}

impl Seed {
    /// Number of 32-bit words.
    pub const WORDS: usize = SEED_WORDS;
    /// Encoded size in bytes.
    pub const BYTES: usize = 40;

    /// Concatenates a key and an IV into a seed.
    pub fn from_key_iv(key: &Key, iv: &Iv) -> Self {
        let mut words = [0u32; Self::WORDS];

        words[..Key::WORDS].copy_from_slice(&key.0);
        words[Key::WORDS..].copy_from_slice(&iv.0);

        Self(words)
    }

    /// Key part of the seed.
    pub fn key(&self) -> Key {
        let mut words = [0u32; Key::WORDS];
        words.copy_from_slice(&self.0[..Key::WORDS]);

        Key(words)
    }

    /// IV part of the seed.
    pub fn iv(&self) -> Iv {
        Iv([self.0[Key::WORDS], self.0[Key::WORDS + 1]])
    }

    /// Builds a seed from 40 bytes, read as little-endian words.
    pub fn from_bytes(bytes: &[u8; Self::BYTES]) -> Self {
        Self(words_from_le(bytes))
    }

    /// Encodes the seed as 40 bytes of little-endian words.
    pub fn to_bytes(&self) -> [u8; Self::BYTES] {
        words_to_le(&self.0)
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Seed(..)")
    }
}
