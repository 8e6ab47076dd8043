// wallet-core/src/chains/mod.rs

//! Supported networks and their address formats.
//!
//! | Network  | Curve     | Path                | Address                |
//! |----------|-----------|---------------------|------------------------|
//! | Solana   | ed25519   | `m/44'/501'/0'/0'`  | base58(pubkey)         |
//! | Ethereum | secp256k1 | `m/44'/60'/0'/0/0`  | `0x` + EIP-55 hex      |

pub mod evm;
pub mod solana;

pub use evm::EvmAddress;
pub use solana::SolanaAddress;

use crate::crypto::key_deriver::{CurveType, DerivedKey};
use crate::crypto::paths::{coin_type, DerivationPaths};
use crate::error::{CryptoError, WalletError, WalletResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Turns a derived private key into a displayable public address.
pub trait ChainAddress {
    const NETWORK: Network;

    fn encode_from_private_key(private_key: &[u8; 32]) -> WalletResult<String>;

    fn is_valid_address(address: &str) -> bool;
}

/// Network selector. Solana is the default, as the generator started out
/// as a Solana-only tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    #[serde(alias = "sol")]
    Solana,
    #[serde(alias = "eth", alias = "evm")]
    Ethereum,
}

impl Network {
    pub const ALL: [Network; 2] = [Network::Solana, Network::Ethereum];

    pub const fn curve(self) -> CurveType {
        match self {
            Network::Solana => CurveType::Ed25519,
            Network::Ethereum => CurveType::Secp256k1,
        }
    }

    pub const fn coin_type(self) -> u32 {
        match self {
            Network::Solana => coin_type::SOLANA,
            Network::Ethereum => coin_type::ETHEREUM,
        }
    }

    pub const fn derivation_path(self) -> &'static str {
        match self {
            Network::Solana => DerivationPaths::SOLANA_0,
            Network::Ethereum => DerivationPaths::EVM_0,
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Network::Solana => "SOL",
            Network::Ethereum => "ETH",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Network::Solana => "Solana",
            Network::Ethereum => "Ethereum",
        }
    }

    /// Encode the public address for a key derived on this network's path.
    pub fn encode_address(self, key: &DerivedKey) -> WalletResult<String> {
        if key.curve() != self.curve() {
            return Err(CryptoError::InvalidKeyFormat(format!(
                "{} expects a {} key, got {}",
                self.display_name(),
                self.curve(),
                key.curve()
            ))
            .into());
        }

        match self {
            Network::Solana => SolanaAddress::encode_from_private_key(key.secret()),
            Network::Ethereum => EvmAddress::encode_from_private_key(key.secret()),
        }
    }

    pub fn is_valid_address(self, address: &str) -> bool {
        match self {
            Network::Solana => SolanaAddress::is_valid_address(address),
            Network::Ethereum => EvmAddress::is_valid_address(address),
        }
    }

    /// Classify an address by format. The two formats never overlap: `0`
    /// and `x` are outside the base58 alphabet.
    pub fn detect(address: &str) -> Option<Network> {
        Self::ALL
            .into_iter()
            .find(|network| network.is_valid_address(address))
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Solana => f.write_str("solana"),
            Network::Ethereum => f.write_str("ethereum"),
        }
    }
}

impl FromStr for Network {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "solana" | "sol" | "a" => Ok(Network::Solana),
            "ethereum" | "eth" | "evm" | "b" => Ok(Network::Ethereum),
            other => Err(WalletError::Validation(format!(
                "Unknown network '{}'. Expected 'solana' or 'ethereum'.",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::key_deriver::KeyDeriver;

    const TEST_SEED: &str = "5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc19a5ac40b389cd370d086206dec8aa6c43daea6690f20ad3d8d48b2d2ce9e38e4";

    #[test]
    fn test_parse_network() {
        assert_eq!("solana".parse::<Network>().unwrap(), Network::Solana);
        assert_eq!("SOL".parse::<Network>().unwrap(), Network::Solana);
        assert_eq!("a".parse::<Network>().unwrap(), Network::Solana);
        assert_eq!("Ethereum".parse::<Network>().unwrap(), Network::Ethereum);
        assert_eq!("evm".parse::<Network>().unwrap(), Network::Ethereum);
        assert_eq!("B".parse::<Network>().unwrap(), Network::Ethereum);
        assert!(matches!(
            "bitcoin".parse::<Network>(),
            Err(WalletError::Validation(_))
        ));
    }

    #[test]
    fn test_display_round_trips() {
        for network in Network::ALL {
            assert_eq!(network.to_string().parse::<Network>().unwrap(), network);
        }
    }

    #[test]
    fn test_network_metadata() {
        assert_eq!(Network::Solana.coin_type(), 501);
        assert_eq!(Network::Ethereum.coin_type(), 60);
        assert_eq!(Network::Solana.derivation_path(), "m/44'/501'/0'/0'");
        assert_eq!(Network::Ethereum.derivation_path(), "m/44'/60'/0'/0/0");
        assert_eq!(Network::default(), Network::Solana);
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Network::Ethereum).unwrap(), "\"ethereum\"");
        let parsed: Network = serde_json::from_str("\"eth\"").unwrap();
        assert_eq!(parsed, Network::Ethereum);
    }

    #[test]
    fn test_encode_address_rejects_wrong_curve() {
        let seed = hex::decode(TEST_SEED).unwrap();
        let key = KeyDeriver::derive(&seed, DerivationPaths::SOLANA_0, CurveType::Ed25519).unwrap();
        assert!(Network::Ethereum.encode_address(&key).is_err());
        assert!(Network::Solana.encode_address(&key).is_ok());
    }

    #[test]
    fn test_detect() {
        assert_eq!(
            Network::detect("0x9858EfFD232B4033E47d90003D41EC34EcaEda94"),
            Some(Network::Ethereum)
        );
        assert_eq!(
            Network::detect("HAgk14JpMQLgt6rVgv7cBQFJWFto5Dqxi472uT3DKpqk"),
            Some(Network::Solana)
        );
        assert_eq!(Network::detect("hello"), None);
    }
}
