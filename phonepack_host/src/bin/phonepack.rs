use anyhow::Result;
use phonepack_host::cli;
use phonepack_host::config::{HostConfig, RecordKind};
use phonepack_host::ops::PhoneNumberOps;
use phonepack_types::normalize::BasicNormalizer;
use phonepack_types::packed::{FixedPackedRecord, VariablePackedRecord};
use std::io;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let config = HostConfig::from_env()?;
    tracing::debug!(
        region = config.default_region(),
        record = %config.record_kind(),
        "configured"
    );

    let normalizer = Arc::new(BasicNormalizer::new()?);
    let ops = PhoneNumberOps::new(normalizer, config);

    let r = io::stdin().lock();
    let mut w = io::stdout().lock();
    let w_count = match ops.config().record_kind() {
        RecordKind::Fixed => cli::encode_lines::<FixedPackedRecord>(&ops, r, &mut w)?,
        RecordKind::Variable => cli::encode_lines::<VariablePackedRecord>(&ops, r, &mut w)?,
    };
    tracing::debug!(w_count, "done");

    Ok(())
}
