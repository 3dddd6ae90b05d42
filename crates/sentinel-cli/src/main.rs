use anyhow::Context;
use clap::Parser;

mod cli;
mod commands;

fn main() {
    if let Err(error) = run() {
        eprintln!("sentinel-verify error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    let config =
        sentinel_config::SentinelConfig::load().context("failed to load sentinel configuration")?;
    init_tracing(cli.quiet, cli.verbose, &config.log.level)?;

    let path = commands::verify::handle(cli.seed, &config)?;
    println!("Wrote: {}", path.display());
    Ok(())
}

/// Route logs to stderr; stdout carries only the `Wrote:` line.
fn init_tracing(quiet: bool, verbose: bool, configured: &str) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        configured
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("SENTINEL_LOG")
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(level))
        .with_context(|| format!("invalid log level '{level}'"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
