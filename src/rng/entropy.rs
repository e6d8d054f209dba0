//! Device entropy gathering for default seeding.
//!
//! A default seed combines two kinds of input:
//!
//! - ambient, non-reproducible values: wall clock, process id, a process-wide
//!   seeding counter, stack/heap/static addresses, the thread id, a digest of
//!   the environment block and a per-process keyed hash;
//! - 40 bytes from the operating system random source.
//!
//! If the OS source is unavailable the ambient words are used alone, so
//! seeding always succeeds. The result is raw: it is scrambled by the
//! generator before use. None of this is suitable as cryptographic key
//! material.

use std::collections::hash_map::RandomState;
use std::ffi::OsString;
use std::hash::{BuildHasher, Hash, Hasher};
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use log::warn;
use zeroize::Zeroize;

use crate::os::{EntropyError, sys_random};
use crate::rng::salsa::{SEED_WORDS, Seed};

/// Number of seeds gathered by this process so far.
static SEED_COUNTER: AtomicU32 = AtomicU32::new(0);

/// Folds a pointer-sized value into 32 bits.
#[inline]
fn fold(value: usize) -> u32 {
    let v = value as u64;
    (v ^ (v >> 32)) as u32
}

/// Keyed digest of environment variables.
fn environment_digest(
    hasher: &RandomState,
    vars: impl IntoIterator<Item = (OsString, OsString)>,
) -> u64 {
    let mut h = hasher.build_hasher();
    for (key, value) in vars {
        key.hash(&mut h);
        value.hash(&mut h);
    }

    h.finish()
}

/// Collects the ambient, non-OS words of a seed.
fn ambient() -> [u32; SEED_WORDS] {
    let mut words = [0u32; SEED_WORDS];

    // Clock: nanoseconds change fast, seconds give a long period
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    words[0] = now.subsec_nanos();
    words[1] = now.as_secs() as u32;

    words[2] = std::process::id();
    words[3] = SEED_COUNTER.fetch_add(1, Ordering::Relaxed);
    words[4] = fold(&SEED_COUNTER as *const AtomicU32 as usize);
    words[5] = fold(&words as *const [u32; SEED_WORDS] as usize);

    let heap = Box::new(0u32);
    words[6] = fold(&*heap as *const u32 as usize);

    // Keyed per process from OS randomness by the standard library
    let hasher = RandomState::new();
    let h = hasher.hash_one((words[0], words[3], std::thread::current().id()));
    words[7] = h as u32;
    words[8] = (h >> 32) as u32;

    let env = environment_digest(&hasher, std::env::vars_os());
    words[9] = fold(hasher.hash_one(now.as_nanos()) as usize) ^ fold(env as usize);

    words
}

/// Gathers a raw seed from device entropy.
///
/// Never fails: when the operating system random source is unavailable, a
/// warning is logged and the ambient words are returned on their own.
pub fn gather() -> Seed {
    gather_with(sys_random)
}

/// Gathers a raw seed, reading the OS contribution from `fill`.
pub(crate) fn gather_with<F>(fill: F) -> Seed
where
    F: FnOnce(&mut [u8]) -> Result<(), EntropyError>,
{
    let mut seed = ambient();
    let mut os = [0u8; Seed::BYTES];

    match fill(&mut os) {
        Ok(()) => {
            seed.iter_mut()
                .zip(os.chunks_exact(4))
                .for_each(|(w, c)| *w ^= u32::from_le_bytes([c[0], c[1], c[2], c[3]]));
        }
        Err(e) => warn!("{e}; seeding from ambient entropy only"),
    }

    os.zeroize();

    Seed(seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unavailable(_: &mut [u8]) -> Result<(), EntropyError> {
        Err(EntropyError::Unavailable(getrandom::Error::UNSUPPORTED))
    }

    #[test]
    fn seeding_survives_missing_os_source() {
        let a = gather_with(unavailable);
        let b = gather_with(unavailable);

        assert_ne!(a.0, [0; SEED_WORDS]);
        assert_ne!(a, b);
    }

    #[test]
    fn os_bytes_are_mixed_in() {
        let seed = gather_with(|buf| {
            buf.fill(0xa5);
            Ok(())
        });

        assert_ne!(seed.0, [0; SEED_WORDS]);
    }

    #[test]
    fn environment_digest_tracks_variables() {
        let hasher = RandomState::new();
        let vars = |v: &str| vec![(OsString::from("HOME"), OsString::from(v))];

        assert_eq!(
            environment_digest(&hasher, vars("/root")),
            environment_digest(&hasher, vars("/root"))
        );
        assert_ne!(
            environment_digest(&hasher, vars("/root")),
            environment_digest(&hasher, vars("/home/user"))
        );
    }
}
