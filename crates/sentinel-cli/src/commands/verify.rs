use std::path::PathBuf;

use anyhow::Context;
use sentinel_config::SentinelConfig;
use sentinel_core::{RecordWriter, VerificationStub};

/// Handle `sentinel-verify`: stamp a stub record for `seed` and persist it.
///
/// Returns the path written so the caller can report it.
pub fn handle(seed: i64, config: &SentinelConfig) -> anyhow::Result<PathBuf> {
    let stub = VerificationStub::new(seed);
    let writer = RecordWriter::new(config.output.path());

    tracing::info!(seed, path = %writer.path().display(), "writing verification stub");

    writer
        .write(&stub)
        .with_context(|| format!("failed to persist verification record for seed {seed}"))
}
