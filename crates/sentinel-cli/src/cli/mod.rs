use clap::Parser;

use sentinel_core::DEFAULT_SEED;

/// Top-level CLI parser for the `sentinel-verify` binary.
#[derive(Debug, Parser)]
#[command(
    name = "sentinel-verify",
    version,
    about = "Write the placeholder Sentinel verification result"
)]
pub struct Cli {
    /// Seed recorded in the result file
    #[arg(long, default_value_t = DEFAULT_SEED, allow_negative_numbers = true)]
    pub seed: i64,

    /// Quiet mode (errors only in the log)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}
