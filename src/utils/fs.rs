use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::debug;

use crate::error::{map_io_err, PatchResult};

/// Read a target source file fully into memory
pub fn read_source(path: impl AsRef<Path>) -> PatchResult<String> {
    let path = path.as_ref();
    debug!("Reading source file: {}", path.display());
    fs::read_to_string(path).map_err(map_io_err(path))
}

/// Truncate `path` and replace its contents. The file must already exist.
pub fn write_source(path: impl AsRef<Path>, content: &str) -> PatchResult<()> {
    let path = path.as_ref();
    debug!("Writing {} bytes to {}", content.len(), path.display());

    let mut file = fs::OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(map_io_err(path))?;
    file.write_all(content.as_bytes()).map_err(map_io_err(path))
}
