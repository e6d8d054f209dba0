//! Seed scrambling.
//!
//! Raw seeds are often low quality: all zero, mostly zero, or made of a few
//! slowly changing words gathered from the environment. Before a seed is
//! loaded into the Salsa core its entropy is spread across all 320 bits with
//! a cheap integer mixer that shares nothing with the Salsa permutation.

use super::types::{SEED_WORDS, Seed};

/// Golden ratio: (√(5/4) − 1/2) · 2³².
const GOLDEN_RATIO: u32 = 0x9e37_79b9;

/// Shift applied at each position of a mix round. Even positions shift left,
/// odd positions shift right.
const SHIFTS: [u32; SEED_WORDS] = [11, 2, 8, 16, 10, 4, 8, 9, 7, 5];

/// One mix round over the ten seed words.
///
/// For every word `i`, in order: xor in the shifted next word, add it to the
/// word three places ahead, then add the word two places ahead into the next.
#[inline]
fn mix(a: &mut [u32; SEED_WORDS]) {
    for i in 0..SEED_WORDS {
        let next = a[(i + 1) % SEED_WORDS];
        a[i] ^= if i % 2 == 0 {
            next << SHIFTS[i]
        } else {
            next >> SHIFTS[i]
        };
        a[(i + 3) % SEED_WORDS] = a[(i + 3) % SEED_WORDS].wrapping_add(a[i]);
        a[(i + 1) % SEED_WORDS] = a[(i + 1) % SEED_WORDS].wrapping_add(a[(i + 2) % SEED_WORDS]);
    }
}

/// Spreads the entropy of `seed` uniformly across all of its bits.
///
/// This is a pure function: the same input always yields the same output,
/// which keeps explicitly seeded generators reproducible. Even an all-zero
/// seed scrambles to a dense, non-periodic word pattern.
pub fn scramble(seed: &Seed) -> Seed {
    let mut res = [GOLDEN_RATIO; SEED_WORDS];

    for _ in 0..4 {
        mix(&mut res);
    }

    res.iter_mut()
        .zip(&seed.0)
        .for_each(|(r, s)| *r = r.wrapping_add(*s));
    mix(&mut res);

    res.iter_mut().for_each(|r| *r = r.wrapping_add(*r));
    mix(&mut res);

    Seed(res)
}
