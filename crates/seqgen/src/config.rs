//! Application configuration from CLI flags and environment.

use clap::Parser;

/// seqgen — stateful integer sequence generator.
#[derive(Parser, Debug)]
#[command(name = "seqgen", version = crate::version::version(), about)]
pub struct AppConfig {
    /// Sequence to generate: fibonacci or lucas.
    #[arg(short, long, default_value = "fibonacci", env = "SEQGEN_SEQUENCE")]
    pub sequence: String,

    /// Index of the last term to generate.
    #[arg(short, long, default_value = "10", env = "SEQGEN_N")]
    pub n: u64,

    /// Index of the first term to display.
    #[arg(long, default_value = "0")]
    pub start: u64,

    /// Verbose output (never truncate terms).
    #[arg(short, long)]
    pub verbose: bool,

    /// Show detailed information about the last term.
    #[arg(short, long)]
    pub details: bool,

    /// Quiet mode (only output the final term).
    #[arg(short, long)]
    pub quiet: bool,

    /// Emit the collected terms as JSON.
    #[arg(long)]
    pub json: bool,

    /// Output file path (one term per line).
    #[arg(short, long)]
    pub output: Option<String>,

    /// List available sequences.
    #[arg(long)]
    pub list: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
