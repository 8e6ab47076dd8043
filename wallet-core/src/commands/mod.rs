//! CLI Commands

pub mod derive;
pub mod generate;

use walletgen_core::WalletRecord;

const WORDS_PER_ROW: usize = 3;

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("\x1b[31mError:\x1b[0m {}", message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("\x1b[33mWarning:\x1b[0m {}", message);
}

/// Network, path and address block shared by both commands.
pub fn print_address(record: &WalletRecord) {
    let network = record.network();
    println!();
    println!("Network:  {} ({})", network.display_name(), network.symbol());
    println!("Path:     {}", record.derivation_path());
    println!("Address:  {}", record.public_address());
    println!();
}

/// Numbered word grid, three per row.
pub fn format_phrase_grid(words: &[&str]) -> String {
    words
        .chunks(WORDS_PER_ROW)
        .enumerate()
        .map(|(row, chunk)| {
            chunk
                .iter()
                .enumerate()
                .map(|(col, word)| format!("{:>3}. {:<10}", row * WORDS_PER_ROW + col + 1, word))
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_phrase_grid() {
        let words = ["alpha", "bravo", "charlie", "delta"];
        let grid = format_phrase_grid(&words);
        let lines: Vec<&str> = grid.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("  1. alpha"));
        assert!(lines[0].contains("3. charlie"));
        assert_eq!(lines[1], "  4. delta");
    }
}
