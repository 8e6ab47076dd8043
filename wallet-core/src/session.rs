// wallet-core/src/session.rs
//
// Caller-side state: the selected network and the record on display.

use crate::chains::Network;
use crate::crypto::entropy::{EntropySource, OsEntropy};
use crate::error::WalletResult;
use crate::record::WalletRecord;
use crate::service::WalletDerivationService;
use tracing::debug;

/// What a display layer holds between button presses.
///
/// Switching network discards the current record rather than showing it
/// under the new network, and a failed generation leaves nothing on
/// display instead of the previous wallet.
#[derive(Debug)]
pub struct WalletSession<E = OsEntropy> {
    service: WalletDerivationService<E>,
    network: Network,
    current: Option<WalletRecord>,
}

impl WalletSession<OsEntropy> {
    pub fn new(network: Network) -> Self {
        Self::with_service(WalletDerivationService::new(), network)
    }
}

impl<E: EntropySource> WalletSession<E> {
    pub fn with_service(service: WalletDerivationService<E>, network: Network) -> Self {
        Self {
            service,
            network,
            current: None,
        }
    }

    #[inline]
    pub fn network(&self) -> Network {
        self.network
    }

    #[inline]
    pub fn current(&self) -> Option<&WalletRecord> {
        self.current.as_ref()
    }

    pub fn select_network(&mut self, network: Network) {
        if network == self.network {
            return;
        }
        debug!(from = %self.network, to = %network, "network switched, discarding wallet");
        self.network = network;
        self.current = None;
    }

    pub fn generate(&mut self) -> WalletResult<&WalletRecord> {
        // Drop the old record first so a failure never leaves it on display.
        self.current = None;
        let record = self.service.generate(self.network)?;
        let record: &WalletRecord = self.current.insert(record);
        Ok(record)
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WalletError;

    /// Works for a fixed number of draws, then reports the device gone.
    struct FlakyEntropy {
        remaining: usize,
    }

    impl EntropySource for FlakyEntropy {
        fn fill(&mut self, buf: &mut [u8]) -> WalletResult<()> {
            if self.remaining == 0 {
                return Err(WalletError::EntropySourceUnavailable("device removed".into()));
            }
            self.remaining -= 1;
            OsEntropy.fill(buf)
        }
    }

    #[test]
    fn test_generate_sets_current() {
        let mut session = WalletSession::new(Network::Ethereum);
        assert!(session.current().is_none());

        let address = session.generate().unwrap().public_address().to_owned();
        assert_eq!(session.current().unwrap().public_address(), address);
        assert_eq!(session.current().unwrap().network(), Network::Ethereum);
    }

    #[test]
    fn test_switching_network_discards_record() {
        let mut session = WalletSession::new(Network::Solana);
        session.generate().unwrap();

        session.select_network(Network::Ethereum);
        assert!(session.current().is_none());
        assert_eq!(session.network(), Network::Ethereum);
    }

    #[test]
    fn test_reselecting_same_network_keeps_record() {
        let mut session = WalletSession::new(Network::Solana);
        session.generate().unwrap();

        session.select_network(Network::Solana);
        assert!(session.current().is_some());
    }

    #[test]
    fn test_regenerate_after_switch_uses_fresh_phrase() {
        let mut session = WalletSession::new(Network::Solana);
        let first = session.generate().unwrap().mnemonic().phrase().to_owned();

        session.select_network(Network::Ethereum);
        let second = session.generate().unwrap().mnemonic().phrase().to_owned();
        assert_ne!(first, second);
    }

    #[test]
    fn test_failure_clears_stale_record() {
        let service = WalletDerivationService::with_entropy(FlakyEntropy { remaining: 1 });
        let mut session = WalletSession::with_service(service, Network::Solana);

        session.generate().unwrap();
        assert!(session.current().is_some());

        let err = session.generate().unwrap_err();
        assert!(matches!(err, WalletError::EntropySourceUnavailable(_)));
        assert!(session.current().is_none());
    }

    #[test]
    fn test_clear() {
        let mut session = WalletSession::new(Network::Ethereum);
        session.generate().unwrap();
        session.clear();
        assert!(session.current().is_none());
    }
}
