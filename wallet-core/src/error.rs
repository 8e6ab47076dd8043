use thiserror::Error;

pub type WalletResult<T> = std::result::Result<T, WalletError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WalletError {
    /// The OS CSPRNG could not supply entropy. Never substituted.
    #[error("Secure entropy source unavailable: {0}")]
    EntropySourceUnavailable(String),

    #[error("Derivation failure: {0}")]
    DerivationFailure(#[from] CryptoError),

    #[error("Mnemonic Error: {0}")]
    Mnemonic(#[from] MnemonicError),

    #[error("Validation Error: {0}")]
    Validation(String),

    #[error("IO Error: {0}")]
    Io(String),

    #[error("Unknown Error: {0}")]
    Unknown(String),
}

impl WalletError {
    /// Entropy failures cannot be recovered by generating again.
    pub fn is_fatal(&self) -> bool {
        matches!(self, WalletError::EntropySourceUnavailable(_))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MnemonicError {
    #[error("Invalid word count: {0}. Expected 12, 15, 18, 21 or 24 words.")]
    InvalidWordCount(usize),

    #[error("Word #{0} is not in the BIP-39 English wordlist.")]
    UnknownWord(usize),

    #[error("Checksum validation failed.")]
    ChecksumFailed,

    #[error("BIP-39 internal error: {0}")]
    Bip39Error(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CryptoError {
    #[error("Key derivation failed: {0}")]
    DerivationFailed(String),

    #[error("Invalid derivation path: {0}")]
    InvalidPath(String),

    #[error("Invalid key format: {0}")]
    InvalidKeyFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_entropy_failure_is_fatal() {
        assert!(WalletError::EntropySourceUnavailable("os".into()).is_fatal());
        assert!(!WalletError::DerivationFailure(CryptoError::DerivationFailed("x".into()))
            .is_fatal());
        assert!(!WalletError::Mnemonic(MnemonicError::ChecksumFailed).is_fatal());
    }

    #[test]
    fn test_crypto_error_converts_to_derivation_failure() {
        let err: WalletError = CryptoError::InvalidPath("m/x".into()).into();
        assert_eq!(
            err.to_string(),
            "Derivation failure: Invalid derivation path: m/x"
        );
    }
}
