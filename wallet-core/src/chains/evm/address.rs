// wallet-core/src/chains/evm/address.rs
//
// Ethereum account addresses.
//
//   secret key (32B) -> SEC1 uncompressed point (65B, 0x04 || X || Y)
//     -> keccak256(X || Y) -> low 20 bytes -> "0x" + EIP-55 casing

use crate::chains::{ChainAddress, Network};
use crate::error::{CryptoError, WalletResult};
use alloy_primitives::Address;
use k256::{elliptic_curve::sec1::ToEncodedPoint, SecretKey};
use tiny_keccak::{Hasher, Keccak};

const HEX_DIGITS: usize = 40;
const SECRET_LEN: usize = 32;

pub struct EvmAddress;

impl EvmAddress {
    /// Account address owned by a secp256k1 secret key.
    ///
    /// Rejects anything but exactly 32 bytes, as well as zero and
    /// out-of-range scalars. The caller keeps ownership of `secret` and
    /// zeroizes it.
    pub fn from_secret(secret: &[u8]) -> WalletResult<Address> {
        // k256 left-pads short slices; a truncated key must not map to an address.
        if secret.len() != SECRET_LEN {
            return Err(CryptoError::InvalidKeyFormat(format!(
                "secp256k1 secret key must be {} bytes, got {}",
                SECRET_LEN,
                secret.len()
            ))
            .into());
        }

        let secret_key = SecretKey::from_slice(secret).map_err(|_| {
            CryptoError::InvalidKeyFormat("not a valid secp256k1 secret key".to_string())
        })?;

        let point = secret_key.public_key().to_encoded_point(false);

        let mut digest = [0u8; 32];
        let mut keccak = Keccak::v256();
        keccak.update(&point.as_bytes()[1..]);
        keccak.finalize(&mut digest);

        Ok(Address::from_slice(&digest[12..]))
    }

    /// EIP-55 string form, e.g. `0x9858EfFD232B4033E47d90003D41EC34EcaEda94`.
    #[inline]
    pub fn checksummed(secret: &[u8]) -> WalletResult<String> {
        Self::from_secret(secret).map(|address| address.to_checksum(None))
    }

    /// Parse user input. Single-case hex is taken as is; mixed case must
    /// carry a correct EIP-55 checksum.
    pub fn parse(input: &str) -> WalletResult<Address> {
        let invalid =
            || CryptoError::InvalidKeyFormat(format!("'{}' is not an Ethereum address", input));

        let digits = input.strip_prefix("0x").ok_or_else(invalid)?;
        if digits.len() != HEX_DIGITS || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid().into());
        }

        let mixed_case = digits.bytes().any(|b| b.is_ascii_lowercase())
            && digits.bytes().any(|b| b.is_ascii_uppercase());
        let parsed = if mixed_case {
            Address::parse_checksummed(input, None).ok()
        } else {
            input.parse::<Address>().ok()
        };

        parsed.ok_or_else(|| invalid().into())
    }

    #[inline]
    pub fn is_valid(input: &str) -> bool {
        Self::parse(input).is_ok()
    }
}

impl ChainAddress for EvmAddress {
    const NETWORK: Network = Network::Ethereum;

    fn encode_from_private_key(private_key: &[u8; 32]) -> WalletResult<String> {
        Self::checksummed(private_key)
    }

    fn is_valid_address(address: &str) -> bool {
        Self::is_valid(address)
    }
}
