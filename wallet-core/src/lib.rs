//! Deterministic wallet generator core.
//!
//! Turns fresh OS randomness into a 12-word BIP-39 recovery phrase and the
//! public address a standard wallet derives from it:
//!
//! - **Solana**: SLIP-0010 ed25519 at `m/44'/501'/0'/0'`, base58 address
//!   (Phantom, Solflare, `solana-keygen`).
//! - **Ethereum**: BIP-32 secp256k1 at `m/44'/60'/0'/0/0`, EIP-55 address
//!   (MetaMask and other EVM wallets).
//!
//! Nothing is persisted or transmitted. Seeds and private keys are zeroized
//! as soon as the address is extracted; only the phrase survives, inside
//! the returned [`WalletRecord`].
//!
//! ```no_run
//! use walletgen_core::{Network, WalletDerivationService};
//!
//! let record = WalletDerivationService::new().generate(Network::Solana)?;
//! println!("{}", record.public_address());
//! # Ok::<(), walletgen_core::WalletError>(())
//! ```

pub mod api;
pub mod chains;
pub mod config;
pub mod crypto;
pub mod error;
pub mod record;
pub mod service;
pub mod session;

pub use chains::{ChainAddress, EvmAddress, Network, SolanaAddress};
pub use config::{GeneratorConfig, OutputFormat};
pub use crypto::{EntropySource, OsEntropy, WalletMnemonic};
pub use error::{CryptoError, MnemonicError, WalletError, WalletResult};
pub use record::WalletRecord;
pub use service::{derive_address, WalletDerivationService};
pub use session::WalletSession;
