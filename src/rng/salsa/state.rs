//! Salsa generator state and its persisted form.

use thiserror::Error;
use zeroize::Zeroize;

use crate::rng::generator::{GaussianState, GenState};

/// Number of 32-bit words in the core and in a keystream block.
pub const BLOCK_WORDS: usize = 16;

/// Size of a keystream block in bytes.
pub const BLOCK_BYTES: usize = BLOCK_WORDS * 4;

/// Word positions of the sigma constants.
pub(crate) const SIGMA_POS: [usize; 4] = [0, 5, 10, 15];
/// Word positions of the key.
pub(crate) const KEY_POS: [usize; 8] = [1, 2, 3, 4, 11, 12, 13, 14];
/// Word positions of the IV.
pub(crate) const IV_POS: [usize; 2] = [6, 7];
/// Word positions of the block counter, low word first.
pub(crate) const COUNTER_POS: [usize; 2] = [8, 9];

/// Errors raised when decoding a persisted [`State`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateError {
    /// The blob does not have the length of an encoded state.
    #[error("state blob must be {expected} bytes, got {actual}")]
    InvalidLength {
        /// Expected length.
        expected: usize,
        /// Received length.
        actual: usize,
    },

    /// The keystream cursor points past the end of the cached block.
    #[error("keystream cursor {0} is past the end of the block")]
    CursorOutOfRange(u32),
}

/// Complete state of a Salsa generator.
///
/// - `core` is the 512-bit Salsa input: constants, key, IV and counter.
/// - `cache` holds the keystream block produced by the last step.
/// - `cursor` is the byte offset of the next unread keystream byte;
///   [`BLOCK_BYTES`] means the cache is exhausted.
/// - `gaussian` is the slot reserved for Gaussian samplers.
///
/// The state is a plain value. Cloning it is a checkpoint.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawState"))]
pub struct State {
    pub(crate) core: [u32; BLOCK_WORDS],
    pub(crate) cache: [u32; BLOCK_WORDS],
    pub(crate) cursor: u32,
    pub(crate) gaussian: GaussianState,
}

/// Unchecked field-for-field image of [`State`], validated on conversion.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawState {
    core: [u32; BLOCK_WORDS],
    cache: [u32; BLOCK_WORDS],
    cursor: u32,
    gaussian: GaussianState,
}

#[cfg(feature = "serde")]
impl TryFrom<RawState> for State {
    type Error = StateError;

    fn try_from(raw: RawState) -> Result<Self, StateError> {
        Ok(Self {
            core: raw.core,
            cache: raw.cache,
            cursor: check_cursor(raw.cursor)?,
            gaussian: raw.gaussian,
        })
    }
}

/// Rejects a cursor that points past the cached block.
fn check_cursor(cursor: u32) -> Result<u32, StateError> {
    if cursor as usize > BLOCK_BYTES {
        return Err(StateError::CursorOutOfRange(cursor));
    }

    Ok(cursor)
}

impl Default for State {
    fn default() -> Self {
        Self {
            core: [0; BLOCK_WORDS],
            cache: [0; BLOCK_WORDS],
            cursor: BLOCK_BYTES as u32,
            gaussian: GaussianState::default(),
        }
    }
}

impl State {
    /// Size of the encoding produced by [`State::to_bytes`].
    pub const SERIALIZED_LEN: usize = 2 * BLOCK_BYTES + 4 + 8;

    /// The 16 core words.
    pub fn core(&self) -> &[u32; BLOCK_WORDS] {
        &self.core
    }

    /// The cached keystream block.
    pub fn cache(&self) -> &[u32; BLOCK_WORDS] {
        &self.cache
    }

    /// Byte offset of the next unread keystream byte.
    pub fn cursor(&self) -> u32 {
        self.cursor
    }

    /// The 64-bit block counter stored in the core.
    pub fn block_counter(&self) -> u64 {
        u64::from(self.core[COUNTER_POS[0]]) | (u64::from(self.core[COUNTER_POS[1]]) << 32)
    }

    /// Marks the keystream cache as exhausted.
    pub(crate) fn invalidate(&mut self) {
        self.cursor = BLOCK_BYTES as u32;
    }

    /// Wipes the core and cache words and marks the cache exhausted.
    pub(crate) fn wipe(&mut self) {
        self.core.zeroize();
        self.cache.zeroize();
        self.invalidate();
    }

    /// Encodes the state into its persisted form.
    ///
    /// Layout: core words, cache words (both little-endian), cursor as a
    /// little-endian `u32`, and the Gaussian deviate as little-endian `f64`
    /// bits with `+inf` standing for "no cached value".
    pub fn to_bytes(&self) -> [u8; Self::SERIALIZED_LEN] {
        let mut out = [0u8; Self::SERIALIZED_LEN];
        let (core, rest) = out.split_at_mut(BLOCK_BYTES);
        let (cache, rest) = rest.split_at_mut(BLOCK_BYTES);
        let (cursor, deviate) = rest.split_at_mut(4);

        core.chunks_exact_mut(4)
            .zip(&self.core)
            .for_each(|(c, w)| c.copy_from_slice(&w.to_le_bytes()));
        cache
            .chunks_exact_mut(4)
            .zip(&self.cache)
            .for_each(|(c, w)| c.copy_from_slice(&w.to_le_bytes()));
        cursor.copy_from_slice(&self.cursor.to_le_bytes());

        let d = self.gaussian.deviate.unwrap_or(f64::INFINITY);
        deviate.copy_from_slice(&d.to_le_bytes());

        out
    }

    /// Decodes a state previously produced by [`State::to_bytes`].
    ///
    /// # Errors
    /// - [`StateError::InvalidLength`] if `bytes` is not exactly
    ///   [`State::SERIALIZED_LEN`] long.
    /// - [`StateError::CursorOutOfRange`] if the cursor exceeds the block.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, StateError> {
        if bytes.len() != Self::SERIALIZED_LEN {
            return Err(StateError::InvalidLength {
                expected: Self::SERIALIZED_LEN,
                actual: bytes.len(),
            });
        }

        let (core_bytes, rest) = bytes.split_at(BLOCK_BYTES);
        let (cache_bytes, rest) = rest.split_at(BLOCK_BYTES);
        let (cursor_bytes, deviate_bytes) = rest.split_at(4);

        let cursor = check_cursor(u32::from_le_bytes([
            cursor_bytes[0],
            cursor_bytes[1],
            cursor_bytes[2],
            cursor_bytes[3],
        ]))?;

        let mut core = [0u32; BLOCK_WORDS];
        let mut cache = [0u32; BLOCK_WORDS];
        for (w, c) in core.iter_mut().zip(core_bytes.chunks_exact(4)) {
            *w = u32::from_le_bytes([c[0], c[1], c[2], c[3]]);
        }
        for (w, c) in cache.iter_mut().zip(cache_bytes.chunks_exact(4)) {
            *w = u32::from_le_bytes([c[0], c[1], c[2], c[3]]);
        }

        let mut d = [0u8; 8];
        d.copy_from_slice(deviate_bytes);
        let d = f64::from_le_bytes(d);

        Ok(Self {
            core,
            cache,
            cursor,
            gaussian: GaussianState {
                deviate: (d != f64::INFINITY).then_some(d),
            },
        })
    }
}

impl GenState for State {
    fn gaussian(&self) -> &GaussianState {
        &self.gaussian
    }

    fn gaussian_mut(&mut self) -> &mut GaussianState {
        &mut self.gaussian
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wipe_clears_key_material() {
        let mut state = State {
            core: [0xdead_beef; BLOCK_WORDS],
            cache: [0x0bad_f00d; BLOCK_WORDS],
            cursor: 8,
            gaussian: GaussianState { deviate: Some(0.5) },
        };

        state.wipe();

        assert_eq!(state.core, [0; BLOCK_WORDS]);
        assert_eq!(state.cache, [0; BLOCK_WORDS]);
        assert_eq!(state.cursor as usize, BLOCK_BYTES);
    }
}
