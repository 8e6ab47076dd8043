// wallet-core/src/crypto/key_deriver/secp256k1.rs
//
// BIP-32 secp256k1 derivation (Ethereum). Normal and hardened children.

use crate::error::{CryptoError, WalletResult};
use bip32::{DerivationPath, XPrv};
use std::str::FromStr;
use zeroize::Zeroizing;

pub struct Secp256k1Deriver;

impl Secp256k1Deriver {
    /// Secret scalar at `path` below the master key of `seed`.
    ///
    /// An invalid intermediate child (probability ~2^-127) is an error; the
    /// walk never skips to the next index the way some wallets do.
    pub fn derive(seed: &[u8], path: &str) -> WalletResult<Zeroizing<[u8; 32]>> {
        let path = Self::parse_path(path)?;

        let xprv = XPrv::derive_from_path(seed, &path)
            .map_err(|e| CryptoError::DerivationFailed(format!("secp256k1: {}", e)))?;

        let mut secret = Zeroizing::new([0u8; 32]);
        secret.copy_from_slice(&xprv.private_key().to_bytes());
        Ok(secret)
    }

    fn parse_path(path: &str) -> WalletResult<DerivationPath> {
        DerivationPath::from_str(path)
            .map_err(|_| CryptoError::InvalidPath(path.to_string()).into())
    }

    #[inline]
    pub fn is_valid_path(path: &str) -> bool {
        Self::parse_path(path).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::mnemonic::WalletMnemonic;
    use crate::crypto::paths::DerivationPaths;
    use crate::error::WalletError;

    const ABANDON_SEED: &str = "5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc19a5ac40b389cd370d086206dec8aa6c43daea6690f20ad3d8d48b2d2ce9e38e4";

    #[test]
    fn test_abandon_first_account() {
        let seed = hex::decode(ABANDON_SEED).unwrap();
        let secret = Secp256k1Deriver::derive(&seed, DerivationPaths::EVM_0).unwrap();
        assert_eq!(
            hex::encode(*secret),
            "1ab42cc412b618bdea3a599e3c9bae199ebf030895b039e9db1e30dafb12b727"
        );
    }

    #[test]
    fn test_anvil_accounts() {
        let phrase = "test test test test test test test test test test test junk";
        let mnemonic = WalletMnemonic::from_phrase(phrase).unwrap();
        let seed = mnemonic.to_seed(None).unwrap();

        let first = Secp256k1Deriver::derive(seed.as_slice(), &DerivationPaths::evm(0)).unwrap();
        let second = Secp256k1Deriver::derive(seed.as_slice(), &DerivationPaths::evm(1)).unwrap();
        assert_eq!(
            hex::encode(*first),
            "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80"
        );
        assert_eq!(
            hex::encode(*second),
            "59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d"
        );
    }

    #[test]
    fn test_bad_path() {
        let seed = hex::decode(ABANDON_SEED).unwrap();
        for path in ["", "44'/60'", "m/44'/x", "m//0"] {
            assert!(matches!(
                Secp256k1Deriver::derive(&seed, path),
                Err(WalletError::DerivationFailure(CryptoError::InvalidPath(_)))
            ));
            assert!(!Secp256k1Deriver::is_valid_path(path));
        }
        assert!(Secp256k1Deriver::is_valid_path(DerivationPaths::SOLANA_0));
    }
}
