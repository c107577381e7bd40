//! File accessor
//!
//! Reads, writes and lists files below a configured root directory.

use log::{debug, info};
use std::collections::BTreeSet;
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::{FilesystemError, handlers::log_failure};
use crate::storage::filesystem::{create_directory, directory_exists, file_exists};
use crate::storage::presets::RootPreset;
use crate::storage::resolve::PathResolver;

/// File manager bound to one root directory
///
/// Every path handed to an accessor is resolved against its root first, see
/// [`PathResolver::resolve`]. The root is guaranteed to exist once the
/// accessor has been constructed.
#[derive(Debug, Clone)]
pub struct FileAccessor {
    resolver: PathResolver,
    public_path: Option<&'static str>,
}

impl FileAccessor {
    /// Create an accessor rooted at `root`, or at `./` when no root is given
    pub fn new(root: Option<&str>) -> Result<Self, FilesystemError> {
        Self::with_preset(RootPreset::Application, root)
    }

    /// Create an accessor for `preset`, optionally overriding its root
    pub fn with_preset(preset: RootPreset, root: Option<&str>) -> Result<Self, FilesystemError> {
        let root = root.unwrap_or(preset.default_root());
        if root.is_empty() {
            return Err(log_failure(FilesystemError::InvalidRoot(root.to_string())));
        }

        let accessor = Self {
            resolver: PathResolver::new(root),
            public_path: preset.public_path(),
        };
        accessor.create_dir(root)?;

        info!("Initialized {} file manager at {}", preset, root);
        Ok(accessor)
    }

    /// Accessor for the application root (`./`)
    pub fn application(root: Option<&str>) -> Result<Self, FilesystemError> {
        Self::with_preset(RootPreset::Application, root)
    }

    /// Accessor for the parent of the application root (`../`)
    pub fn admin(root: Option<&str>) -> Result<Self, FilesystemError> {
        Self::with_preset(RootPreset::Admin, root)
    }

    /// Accessor for public uploads (`./files`)
    pub fn public(root: Option<&str>) -> Result<Self, FilesystemError> {
        Self::with_preset(RootPreset::Public, root)
    }

    /// Accessor for static assets (`./static`)
    pub fn static_assets(root: Option<&str>) -> Result<Self, FilesystemError> {
        Self::with_preset(RootPreset::Static, root)
    }

    pub fn root_dir(&self) -> &str {
        self.resolver.root()
    }

    pub fn public_path(&self) -> Option<&'static str> {
        self.public_path
    }

    pub fn resolve_path(&self, path: &str) -> String {
        self.resolver.resolve(path)
    }

    /// Check whether `path` names a regular file
    pub fn is_file(&self, path: &str) -> bool {
        file_exists(Path::new(&self.resolve_path(path)))
    }

    /// Check whether `path` names a directory
    pub fn is_dir(&self, path: &str) -> bool {
        directory_exists(Path::new(&self.resolve_path(path)))
    }

    /// List the entry names of a directory, without `.` and `..`.
    /// Entries whose names are not valid UTF-8 are skipped.
    pub fn read_dir(&self, path: &str) -> Result<BTreeSet<String>, FilesystemError> {
        let dir_path = self.resolve_path(path);

        if !self.is_dir(&dir_path) {
            return Err(log_failure(FilesystemError::DirectoryNotFound(dir_path)));
        }

        let read_failed = |source: std::io::Error| {
            log_failure(FilesystemError::DirectoryReadFailed {
                path: dir_path.clone(),
                source,
            })
        };

        // std::fs::read_dir never yields the `.` and `..` entries
        let mut entries = BTreeSet::new();
        for entry in fs::read_dir(&dir_path).map_err(read_failed)? {
            let entry = entry.map_err(read_failed)?;
            match entry.file_name().into_string() {
                Ok(name) => {
                    entries.insert(name);
                }
                Err(name) => debug!("Skipping non UTF-8 entry {:?} in {}", name, dir_path),
            }
        }

        info!("Listed directory {} - {} entries", dir_path, entries.len());
        Ok(entries)
    }

    /// Read the full content of a file
    pub fn read_file(&self, path: &str) -> Result<Vec<u8>, FilesystemError> {
        let file_path = self.resolve_path(path);

        if !self.is_file(&file_path) {
            return Err(log_failure(FilesystemError::FileNotFound(file_path)));
        }

        let content = fs::read(&file_path).map_err(|source| {
            log_failure(FilesystemError::FileReadFailed {
                path: file_path.clone(),
                source,
            })
        })?;

        debug!("Read {} bytes from {}", content.len(), file_path);
        Ok(content)
    }

    /// Read a file as UTF-8 text
    pub fn read_file_to_string(&self, path: &str) -> Result<String, FilesystemError> {
        let content = self.read_file(path)?;
        String::from_utf8(content).map_err(|e| {
            log_failure(FilesystemError::FileReadFailed {
                path: self.resolve_path(path),
                source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
            })
        })
    }

    /// Copy the full content of a file into `out`
    pub fn open_file<W: Write>(&self, path: &str, out: &mut W) -> Result<(), FilesystemError> {
        let content = self.read_file(path)?;
        out.write_all(&content)
            .and_then(|_| out.flush())
            .map_err(|source| {
                log_failure(FilesystemError::OutputFailed {
                    path: self.resolve_path(path),
                    source,
                })
            })
    }

    /// Write `content` to a file, replacing anything already there.
    /// Missing parent directories are created first.
    pub fn create_file(&self, path: &str, content: impl AsRef<[u8]>) -> Result<(), FilesystemError> {
        let file_path = self.resolve_path(path);

        if let Some(parent) = Path::new(&file_path).parent() {
            if !parent.as_os_str().is_empty() {
                self.create_resolved_dir(&parent.to_string_lossy())?;
            }
        }

        let content = content.as_ref();
        fs::write(&file_path, content).map_err(|source| {
            log_failure(FilesystemError::FileWriteFailed {
                path: file_path.clone(),
                source,
            })
        })?;

        info!("Wrote {} bytes to {}", content.len(), file_path);
        Ok(())
    }

    /// Create a directory and any missing parents. Existing directories are left as they are.
    pub fn create_dir(&self, path: &str) -> Result<(), FilesystemError> {
        self.create_resolved_dir(&self.resolve_path(path))
    }

    fn create_resolved_dir(&self, dir_path: &str) -> Result<(), FilesystemError> {
        if directory_exists(Path::new(dir_path)) {
            return Ok(());
        }

        create_directory(Path::new(dir_path)).map_err(|source| {
            log_failure(FilesystemError::DirectoryCreateFailed {
                path: dir_path.to_string(),
                source,
            })
        })?;

        info!("Created directory {}", dir_path);
        Ok(())
    }
}
