// vartype - Replace `var` placeholders with inferred types from an offset log

pub mod commands;
pub mod config;
pub mod diff;
pub mod error;
pub mod record;
pub mod utils;

use anyhow::Result;
use tracing::info;

pub use commands::{ApplySummary, PatchApplier};
pub use config::PatchConfig;
pub use diff::apply_edit;
pub use error::{PatchError, PatchResult};
pub use record::EditRecord;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Initialize logging to stderr.
///
/// `RUST_LOG` wins when set; otherwise `verbose` selects `debug` over `info`.
pub fn init_with_logger(verbose: bool) -> Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt::Subscriber::builder()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logger: {}", e))?;

    info!("vartype v{}", version());
    Ok(())
}
