// wallet-core/src/chains/solana/address.rs
//
// Solana addresses: SLIP-0010 key seed -> Ed25519 keypair -> base58(pubkey).

use crate::chains::{ChainAddress, Network};
use crate::error::{CryptoError, WalletResult};
use ed25519_dalek::SigningKey;

/// Base58 length bounds of a 32-byte value.
const MIN_ADDRESS_LEN: usize = 32;
const MAX_ADDRESS_LEN: usize = 44;

pub struct SolanaAddress;

impl SolanaAddress {
    /// Ed25519 public key for a 32-byte key seed.
    ///
    /// The expanded signing key lives only inside this call and is
    /// zeroized when it drops.
    pub fn public_key_bytes(key_seed: &[u8; 32]) -> [u8; 32] {
        let signing_key = SigningKey::from_bytes(key_seed);
        signing_key.verifying_key().to_bytes()
    }

    /// Base58 address for a 32-byte key seed, as Phantom displays it.
    pub fn from_key_seed(key_seed: &[u8; 32]) -> String {
        bs58::encode(Self::public_key_bytes(key_seed)).into_string()
    }

    /// Decode an address back into its 32 public key bytes.
    pub fn decode(address: &str) -> WalletResult<[u8; 32]> {
        if !(MIN_ADDRESS_LEN..=MAX_ADDRESS_LEN).contains(&address.len()) {
            return Err(CryptoError::InvalidKeyFormat(format!(
                "Solana address must be {}-{} characters, got {}",
                MIN_ADDRESS_LEN,
                MAX_ADDRESS_LEN,
                address.len()
            ))
            .into());
        }

        let bytes = bs58::decode(address)
            .into_vec()
            .map_err(|e| CryptoError::InvalidKeyFormat(format!("Invalid base58: {}", e)))?;

        <[u8; 32]>::try_from(bytes.as_slice()).map_err(|_| {
            CryptoError::InvalidKeyFormat(format!(
                "Solana address must decode to 32 bytes, got {}",
                bytes.len()
            ))
            .into()
        })
    }

    #[inline]
    pub fn is_valid(address: &str) -> bool {
        Self::decode(address).is_ok()
    }
}

impl ChainAddress for SolanaAddress {
    const NETWORK: Network = Network::Solana;

    fn encode_from_private_key(private_key: &[u8; 32]) -> WalletResult<String> {
        Ok(Self::from_key_seed(private_key))
    }

    fn is_valid_address(address: &str) -> bool {
        Self::is_valid(address)
    }
}
