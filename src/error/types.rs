//! Error types
//!
//! Defines the single error type reported by the file manager layer.

use std::fmt;
use std::io;

/// File manager errors
///
/// Every variant carries the resolved path the failed operation worked on.
#[derive(Debug)]
pub enum FilesystemError {
    InvalidRoot(String),
    DirectoryNotFound(String),
    DirectoryReadFailed { path: String, source: io::Error },
    FileNotFound(String),
    FileReadFailed { path: String, source: io::Error },
    FileWriteFailed { path: String, source: io::Error },
    DirectoryCreateFailed { path: String, source: io::Error },
    OutputFailed { path: String, source: io::Error },
}

impl FilesystemError {
    /// The path the failed operation was working on
    pub fn path(&self) -> &str {
        match self {
            FilesystemError::InvalidRoot(p)
            | FilesystemError::DirectoryNotFound(p)
            | FilesystemError::FileNotFound(p) => p,
            FilesystemError::DirectoryReadFailed { path, .. }
            | FilesystemError::FileReadFailed { path, .. }
            | FilesystemError::FileWriteFailed { path, .. }
            | FilesystemError::DirectoryCreateFailed { path, .. }
            | FilesystemError::OutputFailed { path, .. } => path,
        }
    }
}

impl fmt::Display for FilesystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilesystemError::InvalidRoot(p) => write!(f, "Invalid root directory: {:?}", p),
            FilesystemError::DirectoryNotFound(p) => write!(f, "Unable to find dir: {}", p),
            FilesystemError::DirectoryReadFailed { path, .. } => {
                write!(f, "Unable to read dir: {}", path)
            }
            FilesystemError::FileNotFound(p) => write!(f, "Unable to find file: {}", p),
            FilesystemError::FileReadFailed { path, .. } => write!(f, "Unable to read file: {}", path),
            FilesystemError::FileWriteFailed { path, .. } => {
                write!(f, "Unable to write file: {}", path)
            }
            FilesystemError::DirectoryCreateFailed { path, .. } => {
                write!(f, "Unable to create dir: {}", path)
            }
            FilesystemError::OutputFailed { path, .. } => write!(f, "Unable to output file: {}", path),
        }
    }
}

impl std::error::Error for FilesystemError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FilesystemError::DirectoryReadFailed { source, .. }
            | FilesystemError::FileReadFailed { source, .. }
            | FilesystemError::FileWriteFailed { source, .. }
            | FilesystemError::DirectoryCreateFailed { source, .. }
            | FilesystemError::OutputFailed { source, .. } => Some(source),
            _ => None,
        }
    }
}
