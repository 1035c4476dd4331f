// Error types for the sound library core
// The CLI layer wraps these in anyhow; the core keeps them typed so callers can match

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LibraryError {
    /// Library base does not exist
    #[error("library base {} does not exist", .path.display())]
    NotFound { path: PathBuf },

    /// Library base exists but is a file (or something else that isn't a directory)
    #[error("library base {} is not a directory", .path.display())]
    NotADirectory { path: PathBuf },

    /// Any other I/O failure, with the path that was being read
    #[error("unable to read {}: {source}", .path.display())]
    General {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// None of the requested libraries produced a file
    #[error("no files available in {libraries:?}")]
    NoFilesAvailable { libraries: Vec<String> },
}

impl LibraryError {
    pub(crate) fn general(path: impl Into<PathBuf>, source: io::Error) -> Self {
        LibraryError::General {
            path: path.into(),
            source,
        }
    }
}

/// Result type for library operations
pub type Result<T> = std::result::Result<T, LibraryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_path() {
        let err = LibraryError::NotFound { path: PathBuf::from("nowhere") };
        assert_eq!(err.to_string(), "library base nowhere does not exist");

        let err = LibraryError::NotADirectory { path: PathBuf::from("song.wav") };
        assert_eq!(err.to_string(), "library base song.wav is not a directory");

        let err = LibraryError::general("base/a", io::Error::new(io::ErrorKind::Other, "boom"));
        assert_eq!(err.to_string(), "unable to read base/a: boom");
    }

    #[test]
    fn test_no_files_lists_requested_libraries() {
        let err = LibraryError::NoFilesAvailable {
            libraries: vec!["a".to_string(), "nope".to_string()],
        };
        assert_eq!(err.to_string(), r#"no files available in ["a", "nope"]"#);
    }

    #[test]
    fn test_general_keeps_io_source() {
        use std::error::Error as _;

        let err = LibraryError::general("base", io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        let source = err.source().expect("source should be kept");
        assert_eq!(source.to_string(), "denied");
    }
}
