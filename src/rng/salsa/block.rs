//! Salsa20/8 core implementation
//!
//! This module provides the Salsa20 core function reduced to 8 rounds
//! (4 double rounds), as published by D. J. Bernstein.
//!
//! The core maps a 512-bit input, laid out as sixteen 32-bit words, to a
//! 512-bit keystream block. It:
//! - avoids heap allocations
//! - runs in constant time (no branching on secret data)
//! - keeps the state layout of the reference design: sigma constants on the
//!   diagonal, key words around it, IV in words 6-7 and the 64-bit block
//!   counter in words 8-9.

use super::state::{BLOCK_WORDS, COUNTER_POS, State};

/// Salsa20 constant words.
///
/// These values correspond to the ASCII string `"expand 32-byte k"` encoded
/// as little-endian `u32` words. They are public, fixed, and non-secret.
pub(crate) const SIGMA: [u32; 4] = [
    0x6170_7865, // "expa"
    0x3320_646e, // "nd 3"
    0x7962_2d32, // "2-by"
    0x6b20_6574, // "te k"
];

/// Number of double rounds in Salsa20/8.
const DOUBLE_ROUNDS: usize = 4;

/// Performs one Salsa20 quarter round.
///
/// Each line adds two words, rotates the sum and XORs it into a third word,
/// using the rotation amounts 7, 9, 13 and 18.
#[inline(always)]
fn quarter_round(x: &mut [u32; BLOCK_WORDS], a: usize, b: usize, c: usize, d: usize) {
    x[b] ^= x[a].wrapping_add(x[d]).rotate_left(7);
    x[c] ^= x[b].wrapping_add(x[a]).rotate_left(9);
    x[d] ^= x[c].wrapping_add(x[b]).rotate_left(13);
    x[a] ^= x[d].wrapping_add(x[c]).rotate_left(18);
}

/// Applies the Salsa20/8 permutation (without feed-forward).
///
/// Every double round mixes the four columns and then the four rows of the
/// 4×4 word matrix, each group starting from its diagonal element.
fn rounds(x: &mut [u32; BLOCK_WORDS]) {
    for _ in 0..DOUBLE_ROUNDS {
        // Column rounds
        quarter_round(x, 0, 4, 8, 12);
        quarter_round(x, 5, 9, 13, 1);
        quarter_round(x, 10, 14, 2, 6);
        quarter_round(x, 15, 3, 7, 11);

        // Row rounds
        quarter_round(x, 0, 1, 2, 3);
        quarter_round(x, 5, 6, 7, 4);
        quarter_round(x, 10, 11, 8, 9);
        quarter_round(x, 15, 12, 13, 14);
    }
}

/// Computes the Salsa20/8 core function.
///
/// The permutation is applied to a copy of `input` and the input words are
/// then added back (mod 2³²) to produce the keystream block.
pub fn salsa20_8(input: &[u32; BLOCK_WORDS]) -> [u32; BLOCK_WORDS] {
    let mut x = *input;

    rounds(&mut x);

    x.iter_mut()
        .zip(input)
        .for_each(|(o, i)| *o = o.wrapping_add(*i));

    x
}

/// Takes one step of the generator.
///
/// The next keystream block is written to the cache, the 64-bit block counter
/// is incremented (carrying into the high word), and the cursor is rewound.
///
/// Running past 2⁶⁴ blocks per IV wraps the counter; staying below that is
/// the caller's responsibility.
pub(crate) fn step(state: &mut State) {
    state.cache = salsa20_8(&state.core);

    let (low, carry) = state.core[COUNTER_POS[0]].overflowing_add(1);
    state.core[COUNTER_POS[0]] = low;
    state.core[COUNTER_POS[1]] = state.core[COUNTER_POS[1]].wrapping_add(carry as u32);

    state.cursor = 0;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Quarter-round examples from the Salsa20 paper, section 3.
    #[test]
    fn quarter_round_reference_vectors() {
        let mut x = [0u32; BLOCK_WORDS];
        x[..4].copy_from_slice(&[1, 0, 0, 0]);
        quarter_round(&mut x, 0, 1, 2, 3);
        assert_eq!(x[..4], [0x0800_8145, 0x0000_0080, 0x0001_0200, 0x2050_0000]);

        let mut x = [0u32; BLOCK_WORDS];
        x[..4].copy_from_slice(&[0xe7e8_c006, 0xc4f9_417d, 0x6479_b4b2, 0x68c6_7137]);
        quarter_round(&mut x, 0, 1, 2, 3);
        assert_eq!(x[..4], [0xe876_d72b, 0x9361_dfd5, 0xf146_0244, 0x9485_41a3]);
    }

    #[test]
    fn zero_input_is_a_fixed_point() {
        assert_eq!(salsa20_8(&[0; BLOCK_WORDS]), [0; BLOCK_WORDS]);
    }

    #[test]
    fn step_carries_into_high_counter_word() {
        let mut state = State::default();
        state.core[COUNTER_POS[0]] = u32::MAX;

        step(&mut state);

        assert_eq!(state.block_counter(), 1 << 32);
        assert_eq!(state.cursor, 0);
    }
}
