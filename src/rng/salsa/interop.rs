//! `rand_core` integration.
//!
//! Lets the generator drive code written against the `rand` ecosystem. All
//! three methods forward to the native API and share its cursor.

use rand_core::RngCore;

use super::core::Salsa;

impl RngCore for Salsa {
    /// Low half of the next 64-bit draw.
    fn next_u32(&mut self) -> u32 {
        Salsa::next_u64(self) as u32
    }

    fn next_u64(&mut self) -> u64 {
        Salsa::next_u64(self)
    }

    /// Fills `dest` with raw keystream bytes.
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0);
        self.apply_keystream(dest);
    }
}
