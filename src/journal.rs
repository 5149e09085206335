// src/journal.rs
//
// Journal : registry tracing + couche fmt (stderr, sans cible) + filtre.
// Filtre : `--log` s'il est donné, sinon RUST_LOG, sinon INFO.

use anyhow::Result;
use tracing::metadata::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub fn init(filtre: Option<&str>) -> Result<()> {
    let layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let filter = match filtre {
        Some(f) => EnvFilter::try_new(f)?,
        None => EnvFilter::builder()
            .with_default_directive(LevelFilter::INFO.into())
            .from_env_lossy(),
    };

    tracing_subscriber::registry()
        .with(layer)
        .with(filter)
        .try_init()?;
    Ok(())
}
