//! Stream cipher adapter.
//!
//! Encryption XORs the message with the generator keystream, read as the
//! little-endian bytes of the cached block. The byte cursor carries over
//! between calls, so a message may be processed in pieces of any size.
//!
//! Encryption and decryption are the same operation. Both sides must apply
//! the same sequence of `set_key`/`set_iv`/encrypt calls; drawing numbers
//! with `next_u64` from a cipher generator moves the cursor and desynchronizes
//! the two sides. This is not detected: decryption silently yields garbage.

use thiserror::Error;

use super::core::Salsa;
use super::state::BLOCK_BYTES;

/// Errors raised by the cipher adapter.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CipherError {
    /// Input and output buffers do not have the same length.
    #[error("input and output buffers differ in length ({input} vs {output})")]
    LengthMismatch {
        /// Length of the input buffer.
        input: usize,
        /// Length of the output buffer.
        output: usize,
    },
}

impl Salsa {
    /// XORs `buf` in place with the next bytes of the keystream.
    pub fn apply_keystream(&mut self, buf: &mut [u8]) {
        let mut offset = 0usize;

        while offset < buf.len() {
            self.refill_if_exhausted();

            let cursor = self.state.cursor as usize;
            let take = (BLOCK_BYTES - cursor).min(buf.len() - offset);

            for (i, b) in buf[offset..offset + take].iter_mut().enumerate() {
                let pos = cursor + i;
                *b ^= self.state.cache[pos / 4].to_le_bytes()[pos % 4];
            }

            self.state.cursor = (cursor + take) as u32;
            offset += take;
        }
    }

    /// Encrypts `msg` into `cipher`.
    ///
    /// # Errors
    /// Returns [`CipherError::LengthMismatch`] if the buffers differ in
    /// length. Nothing is consumed from the keystream in that case.
    pub fn encrypt(&mut self, msg: &[u8], cipher: &mut [u8]) -> Result<(), CipherError> {
        if msg.len() != cipher.len() {
            return Err(CipherError::LengthMismatch {
                input: msg.len(),
                output: cipher.len(),
            });
        }

        cipher.copy_from_slice(msg);
        self.apply_keystream(cipher);

        Ok(())
    }

    /// Decrypts `cipher` into `msg`.
    ///
    /// Identical to [`Salsa::encrypt`], since XOR is its own inverse.
    ///
    /// # Errors
    /// Returns [`CipherError::LengthMismatch`] if the buffers differ in
    /// length.
    pub fn decrypt(&mut self, cipher: &[u8], msg: &mut [u8]) -> Result<(), CipherError> {
        self.encrypt(cipher, msg)
    }
}
