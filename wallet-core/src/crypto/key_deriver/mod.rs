// wallet-core/src/crypto/key_deriver/mod.rs
//
//   BIP-39 seed (64 bytes)
//        |
//        +-- secp256k1 / BIP-32 -----> Ethereum  m/44'/60'/0'/0/0
//        |
//        +-- ed25519 / SLIP-0010 ----> Solana    m/44'/501'/0'/0'

pub mod ed25519;
pub mod secp256k1;

pub use ed25519::Ed25519Deriver;
pub use secp256k1::Secp256k1Deriver;

use crate::error::{CryptoError, WalletResult};
use std::fmt;
use zeroize::Zeroizing;

/// PBKDF2-HMAC-SHA512 output size.
pub const SEED_LEN: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveType {
    Secp256k1,
    Ed25519,
}

impl fmt::Display for CurveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurveType::Secp256k1 => f.write_str("secp256k1"),
            CurveType::Ed25519 => f.write_str("ed25519"),
        }
    }
}

/// A child private key tagged with the curve and path it came from, so it
/// cannot be handed to the wrong address encoder by accident.
pub struct DerivedKey {
    secret: Zeroizing<[u8; 32]>,
    curve: CurveType,
    path: String,
}

impl DerivedKey {
    /// For secp256k1 the scalar; for ed25519 the 32-byte key seed.
    #[inline]
    pub fn secret(&self) -> &[u8; 32] {
        &self.secret
    }

    #[inline]
    pub fn curve(&self) -> CurveType {
        self.curve
    }

    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DerivedKey({} @ {})", self.curve, self.path)
    }
}

pub struct KeyDeriver;

impl KeyDeriver {
    pub fn derive(seed: &[u8], path: &str, curve: CurveType) -> WalletResult<DerivedKey> {
        if seed.len() != SEED_LEN {
            return Err(CryptoError::DerivationFailed(format!(
                "seed must be {} bytes, got {}",
                SEED_LEN,
                seed.len()
            ))
            .into());
        }

        let secret = match curve {
            CurveType::Secp256k1 => Secp256k1Deriver::derive(seed, path)?,
            CurveType::Ed25519 => Ed25519Deriver::derive(seed, path)?,
        };

        Ok(DerivedKey {
            secret,
            curve,
            path: path.to_owned(),
        })
    }
}
