//! Salsa20/8 random generator and stream cipher
//!
//! This crate provides a deterministic, cryptographically oriented random
//! generator built on the Salsa20/8 core, usable both as a general-purpose
//! random source and as a symmetric stream cipher.
//!
//! # Module overview
//!
//! - `os`
//!   Operating system services. Currently limited to the platform random
//!   source used when gathering default seeds.
//!
//! - `rng`
//!   The [`RandomGen`](rng::RandomGen) capability consumed by samplers and
//!   other randomness users, and its Salsa20/8 implementation:
//!   - key/IV schedule and seed scrambling
//!   - the Salsa20/8 core function
//!   - 64-bit draws with checkpoint/restore of the full state
//!   - byte-stream encryption and decryption
//!
//! # Usage
//!
//! ```
//! use salsarng::rng::salsa::{Iv, Key, Salsa, Seed};
//!
//! // Reproducible random numbers
//! let mut rng = Salsa::from_seed(&Seed([7; 10]));
//! let checkpoint = rng.state().clone();
//! let a = rng.next_u64();
//! rng.set_state(checkpoint);
//! assert_eq!(a, rng.next_u64());
//!
//! // Encryption
//! let key = Key::from_bytes(&[0x42; 32]);
//! let iv = Iv::from(0x0123_4567_89ab_cdef);
//!
//! let mut cipher = [0u8; 5];
//! Salsa::from_key_iv(&key, &iv).encrypt(b"hello", &mut cipher).unwrap();
//!
//! let mut plain = [0u8; 5];
//! Salsa::from_key_iv(&key, &iv).decrypt(&cipher, &mut plain).unwrap();
//! assert_eq!(&plain, b"hello");
//! ```
//!
//! # Design goals
//!
//! - No heap allocations in core primitives
//! - Minimal and explicit APIs
//! - Stable, well-defined semantics
//!
//! Salsa20/8 is a reduced-round variant. This crate is not intended to
//! replace full-featured, externally audited cryptographic libraries.

mod os;

pub mod rng;
