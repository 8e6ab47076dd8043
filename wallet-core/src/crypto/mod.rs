// wallet-core/src/crypto/mod.rs

//! Cryptographic building blocks for wallet generation.
//!
//! - **Entropy**: pluggable CSPRNG boundary via [`EntropySource`]; [`OsEntropy`] by default.
//! - **Mnemonic**: BIP-39 phrases and PBKDF2 seeds via [`WalletMnemonic`].
//! - **Key Derivation**: BIP-32 (secp256k1) and SLIP-0010 (ed25519) via [`KeyDeriver`].
//! - **Derivation Paths**: BIP-44 paths per network via [`DerivationPaths`].

pub mod entropy;
pub mod key_deriver;
pub mod mnemonic;
pub mod paths;

pub use entropy::{EntropySource, OsEntropy};
pub use key_deriver::{CurveType, DerivedKey, KeyDeriver};
pub use mnemonic::{WalletMnemonic, WordCount};
pub use paths::DerivationPaths;
