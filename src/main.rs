use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use vartype::commands::PatchApplier;
use vartype::config::ConfigLoader;

/// Replace `var ` placeholders in source files with the types listed in an offset log.
#[derive(Parser)]
#[command(name = "vartype")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log file of `<offset> <type> <path>` lines [default: out.txt]
    #[arg(short, long)]
    log: Option<PathBuf>,

    /// Absolute prefix where the file path begins on each log line
    #[arg(short, long)]
    prefix: Option<String>,

    /// TOML config file [default: <config dir>/vartype/config.toml if present]
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Validate every record and print diffs without writing files
    #[arg(long)]
    dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    vartype::init_with_logger(cli.verbose).context("Failed to initialize logging")?;

    let loader = match cli.config {
        Some(path) => ConfigLoader::with_path(path),
        None => ConfigLoader::new(),
    };
    let config = loader
        .load()
        .context("Failed to load configuration")?
        .with_overrides(cli.log, cli.prefix, cli.dry_run);

    let log_file = config.log_file.clone();
    let applier = PatchApplier::new(config);
    let summary = applier
        .run()
        .with_context(|| format!("Failed to apply {}", log_file.display()))?;

    for preview in &summary.previews {
        print!("{}", preview);
    }

    info!("Done");
    Ok(())
}
