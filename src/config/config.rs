use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{map_io_err, PatchError, PatchResult};
use crate::utils::paths::expand_tilde;

pub const DEFAULT_LOG_FILE: &str = "out.txt";
pub const DEFAULT_PATH_PREFIX: &str = "/Users/nima/Developer/logisim-evolution/src/main/java/";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PatchConfig {
    /// Log of `<offset> <type> <path>` records
    pub log_file: PathBuf,
    /// Absolute prefix that marks where the file path starts on each log line
    pub path_prefix: String,
    /// Validate and print diffs without writing any file
    pub dry_run: bool,
}

impl Default for PatchConfig {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            path_prefix: DEFAULT_PATH_PREFIX.to_string(),
            dry_run: false,
        }
    }
}

impl PatchConfig {
    pub fn load(path: &Path) -> PatchResult<Self> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let content = std::fs::read_to_string(path).map_err(map_io_err(path))?;

        match ext {
            "toml" => Ok(toml::from_str(&content)?),
            _ => Err(PatchError::invalid_argument(format!(
                "Unsupported config format: {}",
                ext
            ))),
        }
    }

    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("vartype")
            .join("config.toml")
    }

    /// Overlay command-line values on top of this configuration
    pub fn with_overrides(
        mut self,
        log_file: Option<PathBuf>,
        path_prefix: Option<String>,
        dry_run: bool,
    ) -> Self {
        if let Some(log_file) = log_file {
            self.log_file = log_file;
        }
        if let Some(path_prefix) = path_prefix {
            self.path_prefix = path_prefix;
        }
        self.dry_run |= dry_run;
        self.log_file = expand_tilde(&self.log_file);
        self
    }

    pub fn validate(&self) -> PatchResult<()> {
        if self.path_prefix.is_empty() {
            return Err(PatchError::invalid_argument("path_prefix must not be empty"));
        }
        if self.log_file.as_os_str().is_empty() {
            return Err(PatchError::invalid_argument("log_file must not be empty"));
        }
        Ok(())
    }
}
