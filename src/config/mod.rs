// Configuration for the patch applier

#[allow(clippy::module_inception)]
pub mod config;
pub mod config_loader;

pub use config::{PatchConfig, DEFAULT_LOG_FILE, DEFAULT_PATH_PREFIX};
pub use config_loader::ConfigLoader;
