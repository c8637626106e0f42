use std::path::PathBuf;
use tracing::debug;

use super::config::PatchConfig;
use crate::error::PatchResult;
use crate::utils::paths::expand_tilde;

/// The configuration loader
pub struct ConfigLoader {
    config_path: PathBuf,
    explicit: bool,
}

impl ConfigLoader {
    /// Create a new config loader using the per-user config path
    pub fn new() -> Self {
        Self {
            config_path: PatchConfig::default_config_path(),
            explicit: false,
        }
    }

    /// Set a custom config path. A custom path must exist.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            config_path: expand_tilde(path),
            explicit: true,
        }
    }

    /// Load the configuration, falling back to defaults when the
    /// per-user file is absent
    pub fn load(&self) -> PatchResult<PatchConfig> {
        if self.explicit || self.config_path.exists() {
            debug!("Loading config from {}", self.config_path.display());
            return PatchConfig::load(&self.config_path);
        }

        debug!("No config at {}, using defaults", self.config_path.display());
        Ok(PatchConfig::default())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PatchError;
    use tempfile::tempdir;

    #[test]
    fn test_explicit_path_must_exist() {
        let dir = tempdir().unwrap();
        let loader = ConfigLoader::with_path(dir.path().join("missing.toml"));
        assert!(matches!(loader.load(), Err(PatchError::Io { .. })));
    }

    #[test]
    fn test_explicit_path_is_loaded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("vartype.toml");
        std::fs::write(&path, "log_file = \"types.log\"\ndry_run = true\n").unwrap();

        let config = ConfigLoader::with_path(path).load().unwrap();
        assert_eq!(config.log_file, PathBuf::from("types.log"));
        assert!(config.dry_run);
    }
}
