//! Wallet generation command

use anyhow::Result;
use walletgen_core::{api, GeneratorConfig, OutputFormat};
use zeroize::Zeroizing;

use super::{format_phrase_grid, print_address, print_error, print_warning};

/// Run the generate command
pub async fn run(config: &GeneratorConfig) -> Result<()> {
    let record = match api::create_wallet_async(config.network).await {
        Ok(record) => record,
        Err(e) => {
            print_error(&e.to_string());
            if !e.is_fatal() {
                eprintln!("Run the command again to start over with a fresh phrase.");
            }
            return Err(e.into());
        }
    };

    match config.output {
        OutputFormat::Json => {
            let json = Zeroizing::new(serde_json::to_string_pretty(&record)?);
            println!("{}", json.as_str());
        }
        OutputFormat::Text => {
            print_address(&record);
            print_warning("Never share this phrase. Anyone who has it controls your funds.");
            println!();
            println!("Secret Recovery Phrase:");
            println!();
            println!("{}", format_phrase_grid(&record.mnemonic().words()));
            println!();
        }
    }

    Ok(())
}
