// wallet-core/src/service.rs
//
// Wallet generation pipeline:
//
//   entropy (16B) -> mnemonic (12 words) -> seed (64B, PBKDF2)
//     -> path walk (SLIP-0010 or BIP-32) -> keypair -> public address
//
// Seeds and private keys are `Zeroizing` locals of each call; nothing
// secret outlives `generate` except the phrase inside the returned record.

use crate::chains::Network;
use crate::crypto::entropy::{EntropySource, OsEntropy};
use crate::crypto::key_deriver::KeyDeriver;
use crate::crypto::mnemonic::{WalletMnemonic, WordCount};
use crate::error::{CryptoError, WalletError, WalletResult};
use crate::record::WalletRecord;
use tracing::{debug, info, warn};

/// Public address of `mnemonic` on `network` (empty BIP-39 passphrase).
///
/// Deterministic: the same phrase always yields the address a standard
/// wallet (Phantom, MetaMask, ...) shows for it.
pub fn derive_address(mnemonic: &WalletMnemonic, network: Network) -> WalletResult<String> {
    let seed = mnemonic.to_seed(None)?;
    let key = KeyDeriver::derive(seed.as_slice(), network.derivation_path(), network.curve())?;
    drop(seed);

    network.encode_address(&key)
}

/// Generates wallets from a secure entropy source.
///
/// Holds nothing but the entropy source; every call is independent.
#[derive(Debug, Default)]
pub struct WalletDerivationService<E = OsEntropy> {
    entropy: E,
}

impl WalletDerivationService<OsEntropy> {
    pub fn new() -> Self {
        Self { entropy: OsEntropy }
    }

    /// Derive the record for an existing phrase instead of a fresh one.
    ///
    /// Phrase problems are reported as [`WalletError::Mnemonic`].
    pub fn derive_from_phrase(phrase: &str, network: Network) -> WalletResult<WalletRecord> {
        let mnemonic = WalletMnemonic::from_phrase(phrase)?;
        let address = derive_address(&mnemonic, network)?;
        debug!(%network, address = %address, "derived wallet from existing phrase");
        Ok(WalletRecord::new(mnemonic, address, network))
    }

    /// [`generate`](Self::generate) on a blocking worker so async callers
    /// are not stalled by PBKDF2.
    pub async fn generate_async(network: Network) -> WalletResult<WalletRecord> {
        tokio::task::spawn_blocking(move || Self::new().generate(network))
            .await
            .map_err(|e| WalletError::Unknown(format!("generation task failed: {}", e)))?
    }
}

impl<E: EntropySource> WalletDerivationService<E> {
    pub fn with_entropy(entropy: E) -> Self {
        Self { entropy }
    }

    /// Generate a fresh 12-word wallet for `network`.
    ///
    /// Fails with [`WalletError::EntropySourceUnavailable`] if randomness
    /// cannot be drawn and [`WalletError::DerivationFailure`] if any step
    /// after that fails. No partial record is ever returned.
    pub fn generate(&mut self, network: Network) -> WalletResult<WalletRecord> {
        let mnemonic = WalletMnemonic::generate_with(&mut self.entropy, WordCount::Twelve)
            .inspect_err(|e| warn!(%network, error = %e, "could not draw entropy"))?;

        let address = derive_address(&mnemonic, network)
            .map_err(into_derivation_failure)
            .inspect_err(|e| warn!(%network, error = %e, "wallet derivation failed"))?;

        info!(%network, address = %address, "generated wallet");
        Ok(WalletRecord::new(mnemonic, address, network))
    }
}

// A phrase we produced ourselves failing to re-parse is a derivation bug,
// not bad user input.
fn into_derivation_failure(err: WalletError) -> WalletError {
    match err {
        WalletError::DerivationFailure(_) | WalletError::EntropySourceUnavailable(_) => err,
        other => WalletError::DerivationFailure(CryptoError::DerivationFailed(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chains::{EvmAddress, SolanaAddress};

    const TEST_MNEMONIC_12: &str =
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    /// Replays a fixed byte pattern.
    struct FixedEntropy(u8);

    impl EntropySource for FixedEntropy {
        fn fill(&mut self, buf: &mut [u8]) -> WalletResult<()> {
            buf.fill(self.0);
            Ok(())
        }
    }

    struct NoEntropy;

    impl EntropySource for NoEntropy {
        fn fill(&mut self, _buf: &mut [u8]) -> WalletResult<()> {
            Err(WalletError::EntropySourceUnavailable("getrandom: ENOSYS".into()))
        }
    }

    #[test]
    fn test_generate_solana() {
        let record = WalletDerivationService::new().generate(Network::Solana).unwrap();
        assert_eq!(record.network(), Network::Solana);
        assert_eq!(record.mnemonic().word_count(), 12);
        assert!(SolanaAddress::is_valid(record.public_address()));
        assert_eq!(record.derivation_path(), "m/44'/501'/0'/0'");
    }

    #[test]
    fn test_generate_ethereum() {
        let record = WalletDerivationService::new().generate(Network::Ethereum).unwrap();
        assert_eq!(record.network(), Network::Ethereum);
        assert!(EvmAddress::is_valid(record.public_address()));
        assert!(WalletMnemonic::validate(record.mnemonic().phrase()));
    }

    #[test]
    fn test_fixed_entropy_matches_known_vector() {
        let mut service = WalletDerivationService::with_entropy(FixedEntropy(0));
        let record = service.generate(Network::Ethereum).unwrap();
        assert_eq!(record.mnemonic().phrase(), TEST_MNEMONIC_12);
        assert_eq!(record.public_address(), "0x9858EfFD232B4033E47d90003D41EC34EcaEda94");
    }

    #[test]
    fn test_generated_record_matches_rederivation() {
        let mut service = WalletDerivationService::new();
        let record = service.generate(Network::Solana).unwrap();
        let again =
            WalletDerivationService::derive_from_phrase(record.mnemonic().phrase(), Network::Solana)
                .unwrap();
        assert_eq!(record.public_address(), again.public_address());
    }

    #[test]
    fn test_no_entropy_fails_without_record() {
        let mut service = WalletDerivationService::with_entropy(NoEntropy);
        for network in Network::ALL {
            let err = service.generate(network).unwrap_err();
            assert!(matches!(err, WalletError::EntropySourceUnavailable(_)));
            assert!(err.is_fatal());
        }
    }

    #[test]
    fn test_derive_from_phrase_rejects_bad_checksum() {
        let phrase = ["abandon"; 12].join(" ");
        let err =
            WalletDerivationService::derive_from_phrase(&phrase, Network::Solana).unwrap_err();
        assert!(matches!(err, WalletError::Mnemonic(_)));
    }

    #[test]
    fn test_into_derivation_failure() {
        let err = into_derivation_failure(WalletError::Validation("x".into()));
        assert!(matches!(err, WalletError::DerivationFailure(_)));

        let err = into_derivation_failure(WalletError::EntropySourceUnavailable("x".into()));
        assert!(matches!(err, WalletError::EntropySourceUnavailable(_)));
    }

    #[tokio::test]
    async fn test_generate_async() {
        let record = WalletDerivationService::generate_async(Network::Ethereum)
            .await
            .unwrap();
        assert!(EvmAddress::is_valid(record.public_address()));
    }
}
