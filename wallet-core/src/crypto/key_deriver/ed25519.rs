// wallet-core/src/crypto/key_deriver/ed25519.rs
//
// SLIP-0010 hierarchical derivation for ed25519 (Solana).
// Reference: https://github.com/satoshilabs/slips/blob/master/slip-0010.md
//
// SLIP-0010 defines no public (non-hardened) derivation for ed25519, so
// every path segment must carry a hardened marker: m/44'/501'/0'/0' is
// accepted, m/44'/501'/0'/0 is rejected.

use crate::error::{CryptoError, WalletResult};
use hmac::{Hmac, Mac};
use sha2::Sha512;
use zeroize::{Zeroize, Zeroizing};

type HmacSha512 = Hmac<Sha512>;

const HARDENED_OFFSET: u32 = 0x8000_0000;

/// SLIP-0010 ed25519 deriver.
///
/// Master: `I = HMAC-SHA512("ed25519 seed", seed)`.
/// Child:  `I = HMAC-SHA512(chain_code, 0x00 || key || ser32(i + 2^31))`.
/// `IL` is the key, `IR` the next chain code. Any 32 bytes are a valid
/// ed25519 secret, so unlike BIP-32 there is no retry on invalid keys.
pub struct Ed25519Deriver;

impl Ed25519Deriver {
    const MASTER_SECRET: &'static [u8] = b"ed25519 seed";

    /// Walk `path` from `seed` and return the 32-byte key seed.
    pub fn derive(seed: &[u8], path: &str) -> WalletResult<Zeroizing<[u8; 32]>> {
        let indices = Self::parse_path(path)?;

        let (mut key, mut chain_code) = Self::split(Self::hmac(Self::MASTER_SECRET, &[seed])?);

        for index in indices {
            let data_index = (index | HARDENED_OFFSET).to_be_bytes();
            let (child_key, child_chain) = Self::split(Self::hmac(
                chain_code.as_slice(),
                &[&[0x00u8][..], key.as_slice(), &data_index[..]],
            )?);
            key = child_key;
            chain_code = child_chain;
        }

        Ok(key)
    }

    fn hmac(key: &[u8], parts: &[&[u8]]) -> WalletResult<Zeroizing<[u8; 64]>> {
        let mut mac = HmacSha512::new_from_slice(key)
            .map_err(|e| CryptoError::DerivationFailed(format!("HMAC init failed: {}", e)))?;
        for part in parts {
            mac.update(part);
        }

        let mut result = mac.finalize().into_bytes();
        let mut out = Zeroizing::new([0u8; 64]);
        out.copy_from_slice(&result);
        result.as_mut_slice().zeroize();
        Ok(out)
    }

    fn split(buf: Zeroizing<[u8; 64]>) -> (Zeroizing<[u8; 32]>, Zeroizing<[u8; 32]>) {
        let mut key = Zeroizing::new([0u8; 32]);
        let mut chain_code = Zeroizing::new([0u8; 32]);
        key.copy_from_slice(&buf[..32]);
        chain_code.copy_from_slice(&buf[32..]);
        (key, chain_code)
    }

    /// `"m/44'/501'/0'/0'"` -> `[44, 501, 0, 0]`
    fn parse_path(path: &str) -> WalletResult<Vec<u32>> {
        let path = path.trim();

        let segments = path
            .strip_prefix("m/")
            .ok_or_else(|| CryptoError::InvalidPath(format!("must start with 'm/': {}", path)))?;

        let mut indices = Vec::new();
        for segment in segments.split('/') {
            let segment = segment.trim();
            if segment.is_empty() {
                return Err(CryptoError::InvalidPath(format!("empty segment in {}", path)).into());
            }

            let num_str = segment
                .strip_suffix('\'')
                .or_else(|| segment.strip_suffix('h'))
                .ok_or_else(|| {
                    CryptoError::InvalidPath(format!(
                        "ed25519 requires every level to be hardened, got '{}'",
                        segment
                    ))
                })?;

            let index: u32 = num_str.parse().map_err(|e| {
                CryptoError::InvalidPath(format!("invalid index '{}': {}", num_str, e))
            })?;
            if index >= HARDENED_OFFSET {
                return Err(
                    CryptoError::InvalidPath(format!("index {} out of range", index)).into()
                );
            }

            indices.push(index);
        }

        Ok(indices)
    }

    pub fn is_valid_path(path: &str) -> bool {
        Self::parse_path(path).is_ok()
    }
}
