//! Operating system abstraction layer
//!
//! This module provides a unified, platform-independent interface to the
//! operating system services the generator relies on.
//!
//! At present, this layer only provides access to operating system entropy.
//! Platform selection is delegated to the `getrandom` crate, which picks the
//! appropriate kernel interface (`getrandom(2)`, `getentropy`,
//! `ProcessPrng`, ...) at compile time.

use thiserror::Error;

/// Errors reported by the operating system entropy source.
#[derive(Debug, Error)]
pub enum EntropyError {
    /// The platform random source refused or failed the request.
    #[error("operating system entropy unavailable: {0}")]
    Unavailable(#[from] getrandom::Error),
}

/// Fills a buffer with cryptographically secure random bytes from the OS.
///
/// Partial reads and interrupted system calls are retried by `getrandom`,
/// so on success the buffer is fully initialized.
///
/// # Errors
/// Returns [`EntropyError::Unavailable`] if the platform source fails. The
/// buffer contents are unspecified in that case.
///
/// # Notes
/// - This is the only call in the crate that may block.
/// - No heap allocation is performed.
pub(crate) fn sys_random(buf: &mut [u8]) -> Result<(), EntropyError> {
    getrandom::fill(buf)?;

    Ok(())
}
