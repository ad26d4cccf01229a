use std::path::PathBuf;

use clap::Parser;

/// Marker path that reads the share document from stdin
pub const STDIN_PATH: &str = "-";

#[derive(Parser)]
#[command(name = "lagrange-recover")]
#[command(about = "Recover a secret (the polynomial's constant term) from threshold shares")]
pub struct Cli {
    /// JSON share document to read ("-" reads stdin)
    pub input: PathBuf,

    /// Print the threshold and selected share indices to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Returns true if the document should be read from stdin
    #[must_use]
    pub fn reads_stdin(&self) -> bool {
        self.input.as_os_str() == STDIN_PATH
    }
}
