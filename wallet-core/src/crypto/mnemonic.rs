// wallet-core/src/crypto/mnemonic.rs
//
// BIP-39 mnemonic phrases and PBKDF2-HMAC-SHA512 seed derivation.

use crate::crypto::entropy::{EntropySource, OsEntropy};
use crate::error::{MnemonicError, WalletError, WalletResult};
use bip39::{Language, Mnemonic};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Supported phrase lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordCount {
    /// 128-bit entropy; what the generator produces.
    Twelve = 12,
    Fifteen = 15,
    Eighteen = 18,
    TwentyOne = 21,
    /// 256-bit entropy
    TwentyFour = 24,
}

impl WordCount {
    #[inline]
    pub const fn entropy_bytes(self) -> usize {
        match self {
            WordCount::Twelve => 16,
            WordCount::Fifteen => 20,
            WordCount::Eighteen => 24,
            WordCount::TwentyOne => 28,
            WordCount::TwentyFour => 32,
        }
    }

    pub const fn from_len(len: usize) -> Option<Self> {
        match len {
            12 => Some(WordCount::Twelve),
            15 => Some(WordCount::Fifteen),
            18 => Some(WordCount::Eighteen),
            21 => Some(WordCount::TwentyOne),
            24 => Some(WordCount::TwentyFour),
            _ => None,
        }
    }

    #[inline]
    pub const fn strength_bits(self) -> usize {
        self.entropy_bytes() * 8
    }
}

/// A validated BIP-39 English mnemonic.
///
/// The phrase is overwritten on drop and never shows up in `Debug` output.
/// Only [`phrase`](Self::phrase) hands it out, for display to the owner.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct WalletMnemonic {
    phrase: String,
    #[zeroize(skip)]
    word_count: usize,
}

impl std::fmt::Debug for WalletMnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletMnemonic")
            .field("word_count", &self.word_count)
            .field("phrase", &"[REDACTED]")
            .finish()
    }
}

impl WalletMnemonic {
    /// Fresh 12-word mnemonic from the OS CSPRNG.
    pub fn generate() -> WalletResult<Self> {
        Self::generate_with(&mut OsEntropy, WordCount::Twelve)
    }

    /// Fresh mnemonic drawing its entropy from `source`.
    ///
    /// Any failure of the source is reported as
    /// [`WalletError::EntropySourceUnavailable`]; there is no fallback.
    pub fn generate_with<E: EntropySource + ?Sized>(
        source: &mut E,
        word_count: WordCount,
    ) -> WalletResult<Self> {
        let size = word_count.entropy_bytes();
        let mut entropy = Zeroizing::new([0u8; 32]);

        source.fill(&mut entropy[..size]).map_err(|e| match e {
            WalletError::EntropySourceUnavailable(_) => e,
            other => WalletError::EntropySourceUnavailable(other.to_string()),
        })?;

        Self::from_entropy(&entropy[..size])
    }

    /// Encode raw entropy (16..=32 bytes, multiple of 4) as a phrase.
    pub fn from_entropy(entropy: &[u8]) -> WalletResult<Self> {
        let mnemonic = Mnemonic::from_entropy_in(Language::English, entropy)
            .map_err(|e| WalletError::Mnemonic(MnemonicError::Bip39Error(e.to_string())))?;
        Ok(Self::from_parsed(&mnemonic))
    }

    /// Parse a user-supplied phrase.
    ///
    /// Whitespace is normalized and case folded; word count, wordlist
    /// membership and checksum are all checked.
    pub fn from_phrase(phrase: &str) -> WalletResult<Self> {
        let normalized = Zeroizing::new(
            phrase
                .split_whitespace()
                .map(str::to_lowercase)
                .collect::<Vec<_>>(),
        );
        let count = normalized.len();

        if WordCount::from_len(count).is_none() {
            return Err(MnemonicError::InvalidWordCount(count).into());
        }

        let normalized = Zeroizing::new(normalized.join(" "));
        let mnemonic = Mnemonic::parse_in(Language::English, normalized.as_str())
            .map_err(map_bip39_error)?;

        Ok(Self::from_parsed(&mnemonic))
    }

    fn from_parsed(mnemonic: &Mnemonic) -> Self {
        let phrase = mnemonic.to_string();
        let word_count = mnemonic.word_count();
        Self { phrase, word_count }
    }

    /// The phrase itself. Anyone holding it controls the wallet.
    #[inline]
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    #[inline]
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn words(&self) -> Vec<&str> {
        self.phrase.split_whitespace().collect()
    }

    pub fn strength_bits(&self) -> usize {
        WordCount::from_len(self.word_count)
            .map(WordCount::strength_bits)
            .unwrap_or(0)
    }

    /// 64-byte BIP-39 seed (PBKDF2-HMAC-SHA512, 2048 rounds, salt
    /// `"mnemonic" || passphrase`).
    pub fn to_seed(&self, passphrase: Option<&str>) -> WalletResult<Zeroizing<[u8; 64]>> {
        let mnemonic = Mnemonic::parse_in(Language::English, self.phrase.as_str())
            .map_err(map_bip39_error)?;
        Ok(Zeroizing::new(mnemonic.to_seed(passphrase.unwrap_or(""))))
    }

    /// Full validation: word count, wordlist, checksum.
    #[inline]
    pub fn validate(phrase: &str) -> bool {
        Self::from_phrase(phrase).is_ok()
    }

    pub fn is_valid_word(word: &str) -> bool {
        Language::English.find_word(word).is_some()
    }
}

fn map_bip39_error(err: bip39::Error) -> WalletError {
    let mnemonic_err = match err {
        bip39::Error::BadWordCount(n) => MnemonicError::InvalidWordCount(n),
        // bip39 counts words from zero
        bip39::Error::UnknownWord(i) => MnemonicError::UnknownWord(i + 1),
        bip39::Error::InvalidChecksum => MnemonicError::ChecksumFailed,
        other => MnemonicError::Bip39Error(other.to_string()),
    };
    WalletError::Mnemonic(mnemonic_err)
}
