// wallet-core/src/api/mod.rs
//
// Flat entry points for hosts (CLI, FFI bindings) that prefer owned
// arguments and free functions over the service types.

use crate::chains::Network;
use crate::config::GeneratorConfig;
use crate::error::WalletResult;
use crate::record::WalletRecord;
use crate::service::WalletDerivationService;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins; otherwise `verbose` selects `debug` and the config's
/// `log_level` applies. Calling it twice is a no-op.
pub fn init_core(config: &GeneratorConfig, verbose: bool) {
    let level = if verbose { "debug" } else { config.log_level.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // Fails only if a subscriber is already installed.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .try_init();
}

// --- Key Management ---

pub fn create_wallet(network: Network) -> WalletResult<WalletRecord> {
    WalletDerivationService::new().generate(network)
}

pub async fn create_wallet_async(network: Network) -> WalletResult<WalletRecord> {
    WalletDerivationService::generate_async(network).await
}

pub fn restore_wallet(mnemonic: String, network: Network) -> WalletResult<WalletRecord> {
    WalletDerivationService::derive_from_phrase(&mnemonic, network)
}

pub fn default_networks() -> Vec<Network> {
    Network::ALL.to_vec()
}
