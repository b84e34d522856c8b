//! CLI entry point: generate the `.mmbak` fixture set into a directory.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mmbak_fixtures::FixtureGenerator;

/// Generate Money Manager `.mmbak` test fixtures.
#[derive(Debug, Parser)]
#[command(name = "mmbak-fixtures", version, about)]
struct Cli {
    /// Output directory for the five fixture files.
    #[arg(default_value = "testdata")]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let generator = FixtureGenerator::new(&cli.out_dir);
    let written = generator
        .generate_all()
        .with_context(|| format!("generating fixtures into {}", cli.out_dir.display()))?;

    for path in written {
        println!("{}", path.display());
    }
    Ok(())
}
