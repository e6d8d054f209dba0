//! Salsa20/8 generator.
//!
//! The implementation is split into small layers:
//!
//! - [`block`]
//!   The Salsa20/8 core function and the generator step (keystream refill
//!   and block counter increment).
//!
//! - [`scramble`]
//!   Seed pre-processing that spreads weak or low-entropy seeds over all
//!   320 bits before they reach the core.
//!
//! - `core`
//!   The [`Salsa`] generator: key/IV schedule, seeding and 64-bit draws.
//!
//! - `stream`
//!   Byte-oriented XOR encryption over the same keystream.
//!
//! - `state` and `types`
//!   Fixed-size value types for keys, IVs, seeds and the full generator
//!   state, with their byte encodings.

pub mod block;
mod core;
#[cfg(feature = "rand_core")]
mod interop;
pub mod scramble;
mod state;
mod stream;
mod types;

pub use self::core::{Salsa, WARMUP_STEPS};
pub use self::state::{BLOCK_BYTES, BLOCK_WORDS, State, StateError};
pub use self::stream::CipherError;
pub use self::types::{IV_WORDS, Iv, KEY_WORDS, Key, SEED_WORDS, Seed};
