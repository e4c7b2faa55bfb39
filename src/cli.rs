//! Command-line interface for strictly_hanoi.

use clap::Parser;
use strictly_hanoi::Format;

/// Strictly Hanoi - narrated iterative Tower of Hanoi solver
#[derive(Parser, Debug)]
#[command(name = "strictly_hanoi")]
#[command(about = "Prints every move of the optimal Tower of Hanoi solution", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Number of rings (0 to 64)
    #[arg(allow_negative_numbers = true)]
    pub rings: String,

    /// Path to a TOML narration config (ignored if missing)
    #[arg(short, long, default_value = "hanoi.toml")]
    pub config: std::path::PathBuf,

    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    pub format: Format,

    /// Only print the final report
    #[arg(short, long)]
    pub quiet: bool,
}
