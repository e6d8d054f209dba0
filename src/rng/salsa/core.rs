//! Salsa20/8 random generator.
//!
//! The generator keeps the 512-bit Salsa input (constants, key, IV, block
//! counter), the last keystream block and a byte cursor into it. Keystream
//! is produced one block at a time on demand and consumed either as 64-bit
//! integers ([`Salsa::next_u64`]) or as an XOR mask (see the `stream`
//! module).

use std::fmt;

use log::{debug, trace};
use zeroize::Zeroize;

use super::block::{SIGMA, step};
use super::scramble::scramble;
use super::state::{BLOCK_BYTES, BLOCK_WORDS, COUNTER_POS, IV_POS, KEY_POS, SIGMA_POS, State};
use super::types::{Iv, Key, Seed};
use crate::rng::entropy;
use crate::rng::generator::RandomGen;

/// Number of steps taken after seeding to move away from the seed.
pub const WARMUP_STEPS: usize = 10;

/// Salsa20/8 pseudo-random generator and stream cipher.
///
/// The generator accepts a 256-bit key and a 64-bit IV, which together form
/// a 320-bit seed. Its period is 2⁷⁰ random integers per IV.
///
/// # Random number generation
/// Seed with [`Salsa::new`] (device entropy) or [`Salsa::from_seed`], then
/// call [`Salsa::next_u64`]. Seeds are scrambled before use.
///
/// # Cryptography
/// Use [`Salsa::set_key`], [`Salsa::set_iv`] and the `encrypt`/`decrypt`
/// pair. The key is exchanged once; a fresh IV should be used for every
/// message. Keys are **not** scrambled, so the keystream is the standard
/// Salsa20/8 keystream for that key and IV.
///
/// ```text
/// Sender:                                Receiver:
/// set_key(&key); set_iv(&iv);            set_key(&key); set_iv(&iv);
/// encrypt(msg, c);                       decrypt(c, msg);
/// encrypt(next_iv_bytes, c);             decrypt(c, next_iv_bytes);
/// set_iv(&next_iv);                      set_iv(&next_iv);
/// ```
///
/// A generator is owned by a single stream. Independent streams should use
/// independent instances.
#[derive(Clone)]
pub struct Salsa {
    pub(crate) state: State,
}

impl Salsa {
    /// Creates a generator seeded with entropy gathered from the device.
    ///
    /// The resulting sequence is not reproducible. Use [`Salsa::from_seed`]
    /// or [`Salsa::from_key_iv`] when determinism or secrecy is required.
    pub fn new() -> Self {
        let mut salsa = Self {
            state: State::default(),
        };
        salsa.reseed();

        salsa
    }

    /// Creates a generator from an explicit seed.
    ///
    /// The seed is scrambled before use; equal seeds give equal sequences.
    pub fn from_seed(seed: &Seed) -> Self {
        let mut salsa = Self {
            state: State::default(),
        };
        salsa.set_seed(seed);

        salsa
    }

    /// Creates a generator set up for encryption with a key and an IV.
    pub fn from_key_iv(key: &Key, iv: &Iv) -> Self {
        let mut salsa = Self {
            state: State::default(),
        };
        salsa.set_key(key);
        salsa.set_iv(iv);

        salsa
    }

    /// Reseeds the generator with fresh device entropy.
    pub fn reseed(&mut self) {
        let mut seed = entropy::gather();
        debug!("seeding salsa generator from device entropy");

        self.set_seed(&seed);
        seed.zeroize();
    }

    /// Sets the generator seed.
    ///
    /// The seed is scrambled, loaded as key and IV (resetting the block
    /// counter), and the generator is advanced [`WARMUP_STEPS`] times.
    pub fn set_seed(&mut self, seed: &Seed) {
        let mut scrambled = scramble(seed);

        self.set_key(&scrambled.key());
        self.set_iv(&scrambled.iv());
        scrambled.zeroize();

        for _ in 0..WARMUP_STEPS {
            step(&mut self.state);
        }
    }

    /// Loads a cryptographic key and the sigma constants into the core.
    ///
    /// The block counter is left untouched; any cached keystream is dropped.
    pub fn set_key(&mut self, key: &Key) {
        let core = &mut self.state.core;

        for (&pos, &word) in KEY_POS.iter().zip(&key.0) {
            core[pos] = word;
        }
        for (&pos, &word) in SIGMA_POS.iter().zip(&SIGMA) {
            core[pos] = word;
        }

        self.state.invalidate();
        trace!("salsa key installed");
    }

    /// Loads an IV into the core and resets the block counter to zero.
    ///
    /// Call this for every message so that each message is encrypted with a
    /// distinct keystream. Any cached keystream is dropped.
    pub fn set_iv(&mut self, iv: &Iv) {
        let core = &mut self.state.core;

        for (&pos, &word) in IV_POS.iter().zip(&iv.0) {
            core[pos] = word;
        }
        for pos in COUNTER_POS {
            core[pos] = 0;
        }

        self.state.invalidate();
        trace!("salsa iv installed, block counter reset");
    }

    /// Generates a random number between 0 and 2⁶⁴ − 1 inclusive.
    ///
    /// Two consecutive keystream words are combined, low word first. A
    /// partially consumed word (left behind by the cipher) is skipped.
    pub fn next_u64(&mut self) -> u64 {
        let mut word = (self.state.cursor as usize).div_ceil(4);

        if word + 2 > BLOCK_WORDS {
            step(&mut self.state);
            word = 0;
        }

        let cache = &self.state.cache;
        let res = u64::from(cache[word]) | (u64::from(cache[word + 1]) << 32);
        self.state.cursor = ((word + 2) * 4) as u32;

        res
    }

    /// Returns the current state of the generator.
    ///
    /// Clone the result and pass it to [`Salsa::set_state`] to restore it.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Replaces the state of the generator.
    ///
    /// The key material of the replaced state is wiped.
    pub fn set_state(&mut self, state: State) {
        self.state.wipe();
        self.state = state;
    }

    /// Steps the generator if the cached block has been fully consumed.
    pub(crate) fn refill_if_exhausted(&mut self) {
        if self.state.cursor as usize >= BLOCK_BYTES {
            step(&mut self.state);
        }
    }
}

impl Default for Salsa {
    /// Creates a generator seeded from device entropy.
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Salsa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Salsa")
            .field("block_counter", &self.state.block_counter())
            .field("cursor", &self.state.cursor)
            .finish_non_exhaustive()
    }
}

impl Drop for Salsa {
    fn drop(&mut self) {
        self.state.wipe();
    }
}

impl RandomGen for Salsa {
    type State = State;

    #[inline]
    fn next_u64(&mut self) -> u64 {
        Salsa::next_u64(self)
    }

    fn state(&self) -> &State {
        &self.state
    }

    fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }

    fn set_state(&mut self, state: State) {
        Salsa::set_state(self, state);
    }
}
