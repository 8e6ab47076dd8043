//! Address derivation from an existing phrase

use anyhow::Result;
use serde::Serialize;
use walletgen_core::{GeneratorConfig, Network, OutputFormat, WalletDerivationService, WalletRecord};
use zeroize::Zeroizing;

use super::{print_address, print_error};

/// JSON view without the phrase the user just typed.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DerivedAddress<'a> {
    network: Network,
    public_address: &'a str,
    derivation_path: &'a str,
}

impl<'a> From<&'a WalletRecord> for DerivedAddress<'a> {
    fn from(record: &'a WalletRecord) -> Self {
        Self {
            network: record.network(),
            public_address: record.public_address(),
            derivation_path: record.derivation_path(),
        }
    }
}

/// Run the derive command
pub fn run(config: &GeneratorConfig) -> Result<()> {
    let phrase = Zeroizing::new(rpassword::prompt_password("Enter recovery phrase: ")?);

    let record = match WalletDerivationService::derive_from_phrase(&phrase, config.network) {
        Ok(record) => record,
        Err(e) => {
            print_error(&e.to_string());
            return Err(e.into());
        }
    };

    match config.output {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&DerivedAddress::from(&record))?);
        }
        OutputFormat::Text => print_address(&record),
    }

    Ok(())
}
