//! Random number generation module
//!
//! This module provides the [`RandomGen`] capability and its Salsa20/8
//! implementation.
//!
//! The Salsa generator doubles as a symmetric stream cipher: the same
//! keystream that backs `next_u64` can be XORed over byte buffers.
//!
//! Design goals:
//! - Bit-exact, reproducible output for explicit seeds
//! - Explicit dependency injection of generators (no global instance)
//! - Checkpoint/restore of the complete state by value
//! - No heap allocation on the generation path

pub mod entropy;
mod generator;
pub mod salsa;

pub use generator::{GaussianState, GenState, RandomGen};

/// Salsa20/8 generator and stream cipher.
///
/// This type is the primary entry point for generating randomness and
/// for encrypting byte streams.
pub use salsa::Salsa;
