// wallet-core/src/record.rs
//
// The single output of wallet generation, handed to display layers.

use crate::chains::Network;
use crate::crypto::mnemonic::WalletMnemonic;
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

/// A generated wallet: the recovery phrase and the public address derived
/// from it for one network.
///
/// Immutable once built. `Debug` redacts the phrase; serialization emits it
/// because display layers need it, so serialize only for the owner's eyes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletRecord {
    network: Network,
    public_address: String,
    derivation_path: &'static str,
    #[serde(serialize_with = "serialize_phrase")]
    mnemonic: WalletMnemonic,
    generated_at: DateTime<Utc>,
}

impl WalletRecord {
    pub(crate) fn new(mnemonic: WalletMnemonic, public_address: String, network: Network) -> Self {
        Self {
            network,
            public_address,
            derivation_path: network.derivation_path(),
            mnemonic,
            generated_at: Utc::now(),
        }
    }

    #[inline]
    pub fn mnemonic(&self) -> &WalletMnemonic {
        &self.mnemonic
    }

    #[inline]
    pub fn public_address(&self) -> &str {
        &self.public_address
    }

    #[inline]
    pub fn network(&self) -> Network {
        self.network
    }

    #[inline]
    pub fn derivation_path(&self) -> &'static str {
        self.derivation_path
    }

    #[inline]
    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }
}

fn serialize_phrase<S: Serializer>(
    mnemonic: &WalletMnemonic,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(mnemonic.phrase())
}
