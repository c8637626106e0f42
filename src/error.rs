use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for vartype
#[derive(Error, Debug)]
pub enum PatchError {
    #[error("IO error: {source}{}", display_path(.path))]
    Io {
        source: std::io::Error,
        path: Option<PathBuf>,
    },

    #[error("Malformed log line {line}: {message}")]
    MalformedLine { line: usize, message: String },

    #[error("Validation error: \"var \" not found at offset {offset}{} (found {found:?})", display_path(.path))]
    PlaceholderMismatch {
        path: Option<PathBuf>,
        offset: usize,
        found: String,
    },

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Parse error: {message}")]
    ParseError { message: String },
}

fn display_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!(" (path: {})", path.display()),
        None => String::new(),
    }
}

impl PatchError {
    /// Create a new IO error with path context
    pub fn io_error(err: std::io::Error, path: Option<impl Into<PathBuf>>) -> Self {
        Self::Io {
            source: err,
            path: path.map(|p| p.into()),
        }
    }

    /// Create a new malformed line error
    pub fn malformed_line(line: usize, message: impl Into<String>) -> Self {
        Self::MalformedLine {
            line,
            message: message.into(),
        }
    }

    /// Create a placeholder mismatch without a file attached yet
    pub fn placeholder_mismatch(offset: usize, found: impl Into<String>) -> Self {
        Self::PlaceholderMismatch {
            path: None,
            offset,
            found: found.into(),
        }
    }

    /// Create a new invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a new parse error
    pub fn parse_error(message: impl Into<String>) -> Self {
        Self::ParseError {
            message: message.into(),
        }
    }

    /// Attach the file an error refers to, if the variant carries one
    /// and it is not already set.
    pub fn at_path(self, file: &Path) -> Self {
        match self {
            Self::Io { source, path: None } => Self::Io {
                source,
                path: Some(file.to_path_buf()),
            },
            Self::PlaceholderMismatch {
                path: None,
                offset,
                found,
            } => Self::PlaceholderMismatch {
                path: Some(file.to_path_buf()),
                offset,
                found,
            },
            other => other,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::PlaceholderMismatch { .. })
    }
}

impl From<std::io::Error> for PatchError {
    fn from(error: std::io::Error) -> Self {
        PatchError::io_error(error, None::<PathBuf>)
    }
}

impl From<toml::de::Error> for PatchError {
    fn from(error: toml::de::Error) -> Self {
        PatchError::parse_error(error.to_string())
    }
}

/// Result type alias using PatchError
pub type PatchResult<T> = Result<T, PatchError>;

/// Contextual error mapping function
pub fn map_io_err<P: Into<PathBuf>>(path: P) -> impl FnOnce(std::io::Error) -> PatchError {
    let path = path.into();
    move |err| PatchError::io_error(err, Some(path))
}
