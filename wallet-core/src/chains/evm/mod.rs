// wallet-core/src/chains/evm/mod.rs

//! Ethereum and EVM-compatible chains.
//!
//! EIP-55 checksummed address derivation via [`EvmAddress`].

pub mod address;

pub use address::EvmAddress;
