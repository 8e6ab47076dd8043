// wallet-core/src/crypto/paths.rs
//
// Derivation paths of the first account on each network.

/// SLIP-44 coin types.
pub mod coin_type {
    pub const ETHEREUM: u32 = 60;
    pub const SOLANA: u32 = 501;
}

const PURPOSE: u32 = 44;

pub struct DerivationPaths;

impl DerivationPaths {
    /// MetaMask's first account.
    pub const EVM_0: &'static str = "m/44'/60'/0'/0/0";

    /// Phantom / Solflare / `solana-keygen` first account. SLIP-0010 ed25519
    /// has no public derivation, so every level is hardened.
    pub const SOLANA_0: &'static str = "m/44'/501'/0'/0'";

    /// `m/44'/60'/0'/0/{index}`: MetaMask's "add account" walks `index`.
    pub fn evm(index: u32) -> String {
        format!("m/{}'/{}'/0'/0/{}", PURPOSE, coin_type::ETHEREUM, index)
    }

    /// `m/44'/501'/{account}'/0'`: Phantom's "add account" walks `account`.
    pub fn solana(account: u32) -> String {
        format!("m/{}'/{}'/{}'/0'", PURPOSE, coin_type::SOLANA, account)
    }
}
