use std::io;

use thiserror::Error;

use crate::storage::StorageError;

/// Failures that end the desktop session. Everything below the host (bad
/// layouts, unknown windows, failed saves) is recovered where it happens.
#[derive(Debug, Error)]
pub enum DesktopError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub type Result<T> = std::result::Result<T, DesktopError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn storage_errors_keep_their_message() {
        let err: DesktopError = StorageError::Corrupt(PathBuf::from("/tmp/layouts.json")).into();
        assert!(err.to_string().contains("layouts.json"));
    }

    #[test]
    fn io_errors_convert() {
        let err: DesktopError = io::Error::other("tty gone").into();
        assert_eq!(err.to_string(), "terminal I/O failed: tty gone");
    }
}
