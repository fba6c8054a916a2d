use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for mock_open operations.
#[derive(Debug, Error)]
pub enum MockOpenError {
    /// A file other than the mocked one was opened inside the scope.
    ///
    /// `filename` is the first unexpected name in registry order; `also`
    /// carries any further ones.
    #[error("The file {} was opened, but not mocked.", .filename.display())]
    NotMocked { filename: PathBuf, also: Vec<PathBuf> },

    /// The mocked file was never opened inside the scope.
    #[error("The file {} was not opened.", .filename.display())]
    NotOpened { filename: PathBuf },

    /// Mode string not understood by `OpenMode::from_str`.
    #[error("Invalid open mode '{0}': expected one of r, w, a, x with optional '+', 'b' or 't'")]
    InvalidMode(String),

    /// Fixture file could not be parsed.
    #[error("Invalid mock_open fixture: {0}")]
    Fixture(#[from] toml::de::Error),

    /// Underlying I/O failure, passed through from the inner opener.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl MockOpenError {
    pub(crate) fn not_mocked(mut unexpected: Vec<PathBuf>) -> Option<Self> {
        if unexpected.is_empty() {
            return None;
        }
        let filename = unexpected.remove(0);
        Some(MockOpenError::NotMocked { filename, also: unexpected })
    }

    /// The filename this error is about, if it names one.
    pub fn filename(&self) -> Option<&PathBuf> {
        match self {
            MockOpenError::NotMocked { filename, .. } | MockOpenError::NotOpened { filename } => {
                Some(filename)
            }
            _ => None,
        }
    }

    /// Every unexpected filename carried by a `NotMocked` error.
    pub fn unexpected(&self) -> Vec<&PathBuf> {
        match self {
            MockOpenError::NotMocked { filename, also } => {
                std::iter::once(filename).chain(also.iter()).collect()
            }
            _ => Vec::new(),
        }
    }

    /// The I/O error kind, if this wraps a pass-through failure.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            MockOpenError::Io(err) => Some(err.kind()),
            _ => None,
        }
    }
}
