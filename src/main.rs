use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use zeroize::Zeroizing;

use lagrange_recover::cli::Cli;
use lagrange_recover::commands::{load_document, recover_secret, selected_indices};

/// Read the share document from a file, or from stdin when asked to
fn read_document(cli: &Cli) -> Result<Zeroizing<String>> {
    let mut text = Zeroizing::new(String::new());

    if cli.reads_stdin() {
        io::stdin()
            .lock()
            .read_to_string(&mut text)
            .context("Failed to read share document from stdin")?;
    } else {
        let path: &Path = &cli.input;
        *text = fs::read_to_string(path)
            .with_context(|| format!("Cannot read file {}", path.display()))?;
    }

    Ok(text)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let text = read_document(&cli)?;
    let document = load_document(&text)?;

    if cli.verbose {
        eprintln!("Threshold: {}", document.threshold());
        eprintln!("Shares available: {}", document.shares().len());
        let found = document.shares().len();
        match document.declared_total() {
            Some(total) if usize::try_from(total).ok() != Some(found) => {
                eprintln!("Warning: keys.n declares {total} shares but {found} were found");
            }
            _ => {}
        }
        if let Ok(indices) = selected_indices(&document) {
            eprintln!("Selected indices: {indices:?}");
        }
    }

    let secret = recover_secret(&document)?;
    println!("{secret}");

    Ok(())
}
