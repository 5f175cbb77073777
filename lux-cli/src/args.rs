use std::path::PathBuf;

use clap::Parser;

/// Command line arguments for the LUXBIN Morse light CLI
#[derive(Parser, Debug)]
#[command(author, version, about = "Encode text as timed LUXBIN Morse light pulses")]
pub struct Cli {
    /// Message to transmit; prompts for one when omitted
    pub text: Option<String>,

    /// Path to a TOML encoder configuration
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable frequency comb expansion
    #[arg(long, default_value_t = false)]
    pub no_comb: bool,

    /// Number of comb lines per pulse (odd, at most 1001)
    #[arg(long)]
    pub comb_size: Option<usize>,

    /// Print the pulse sequence as JSON instead of a table
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, default_value_t = false)]
    pub no_color: bool,

    /// Enable verbose debug output
    #[arg(long, default_value_t = false)]
    pub debug: bool,
}
