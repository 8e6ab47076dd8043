// wallet-core/src/crypto/entropy.rs
//
// Entropy sources for mnemonic generation.

use crate::error::{WalletError, WalletResult};
use rand::{rngs::OsRng, RngCore};

/// Source of cryptographically secure randomness.
///
/// Implementations must fail rather than hand back weaker bytes; the
/// generator turns any failure into [`WalletError::EntropySourceUnavailable`].
pub trait EntropySource {
    fn fill(&mut self, buf: &mut [u8]) -> WalletResult<()>;
}

/// Operating-system CSPRNG (`getrandom` under the hood).
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&mut self, buf: &mut [u8]) -> WalletResult<()> {
        OsRng
            .try_fill_bytes(buf)
            .map_err(|e| WalletError::EntropySourceUnavailable(e.to_string()))
    }
}

impl<T: EntropySource + ?Sized> EntropySource for &mut T {
    fn fill(&mut self, buf: &mut [u8]) -> WalletResult<()> {
        (**self).fill(buf)
    }
}
