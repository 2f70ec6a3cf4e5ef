use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, error};

use patient_cleaner::config::{program_dir, Config};
use patient_cleaner::logging;

#[derive(Parser)]
#[command(name = "patient_cleaner")]
#[command(about = "Normalize, filter and deduplicate patient records")]
#[command(version = "0.1.0")]
struct Cli {
    /// TOML config file; its only option is [source] path.
    ///
    /// Without it the source is data/raw/patients.json next to the executable
    /// (target/<profile>/ under cargo run). To use the crate's bundled sample,
    /// pass a config with an absolute [source] path.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let cli = Cli::parse();
    let config = Config::load_or_default(cli.config.as_deref())?;
    // Relative to the executable, not the working directory or the crate root
    let source = config.source_path(&program_dir());
    debug!("Using patient source {}", source.display());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let outcome = patient_cleaner::run(&source, &mut out)
        .inspect_err(|e| error!("Cleaning run failed: {}", e))
        .with_context(|| format!("cleaning patient data from {}", source.display()))?;
    debug!("Run finished: {:?}", outcome);

    Ok(())
}
