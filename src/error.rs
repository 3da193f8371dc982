use std::io;
use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Malformed content. `line` is 1-based, or 0 for whole-model validation failures.
    #[error("error at line {line}: {message}")]
    Format {
        line: usize,
        message: String,
    },
}

impl Error {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        Error::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn format(message: &str, line: usize) -> Self {
        Error::Format {
            line,
            message: message.to_string(),
        }
    }

    /// Line the error was reported at, if this is a format error.
    #[inline]
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Format { line, .. } => Some(*line),
            Error::Io { .. } => None,
        }
    }
}
