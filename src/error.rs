use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Directory not found: {0:?}")]
    DirectoryNotFound(PathBuf),

    #[error("File not found: {0:?}")]
    FileNotFound(PathBuf),

    #[error("Not a directory: {0:?}")]
    NotADirectory(PathBuf),

    #[error("Permission denied: {0:?}")]
    PermissionDenied(PathBuf),

    #[error("Failed to write {path:?}: {source}")]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Destination already exists: {0:?}")]
    DestinationConflict(PathBuf),

    #[error("Directory traversal failed: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("TOML config file error: {0}")]
    TomlConfig(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl AppError {
    /// Classify an error raised while reading `path`.
    pub fn from_read_io(err: io::Error, path: &Path) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => AppError::DirectoryNotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => AppError::PermissionDenied(path.to_path_buf()),
            _ => AppError::Io(err),
        }
    }

    /// Classify an error raised while reading the file at `path`.
    pub fn from_file_read_io(err: io::Error, path: &Path) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => AppError::FileNotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => AppError::PermissionDenied(path.to_path_buf()),
            _ => AppError::Io(err),
        }
    }

    /// Classify an error raised while writing `path`.
    pub fn from_write_io(err: io::Error, path: &Path) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => AppError::PermissionDenied(path.to_path_buf()),
            _ => AppError::WriteFailure {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    /// Classify a traversal error, keeping the offending path when walkdir has one.
    pub fn from_walk(err: walkdir::Error) -> Self {
        let kind = err.io_error().map(io::Error::kind);
        let path = err.path().map(Path::to_path_buf);
        match (kind, path) {
            (Some(io::ErrorKind::NotFound), Some(p)) => AppError::DirectoryNotFound(p),
            (Some(io::ErrorKind::PermissionDenied), Some(p)) => AppError::PermissionDenied(p),
            _ => AppError::Walk(err),
        }
    }
}

/// Result type with default AppError
pub type Result<T, E = AppError> = std::result::Result<T, E>;
