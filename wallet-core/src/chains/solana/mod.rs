// wallet-core/src/chains/solana/mod.rs

//! Solana support.
//!
//! Addresses are raw Ed25519 public keys, base58 encoded with no version
//! byte or checksum, via [`SolanaAddress`].

pub mod address;

pub use address::SolanaAddress;
