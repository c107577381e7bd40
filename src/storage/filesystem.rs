//! File system operations
//!
//! Thin wrappers over `std::fs` used by the accessor.

use std::fs::DirBuilder;
use std::io::Result;
use std::path::Path;

/// Mode applied to every directory the file manager creates
pub const DIRECTORY_MODE: u32 = 0o775;

/// Create a directory and any missing parents
pub fn create_directory(path: &Path) -> Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIRECTORY_MODE);
    }

    builder.create(path)
}

/// Check if file exists
pub fn file_exists(path: &Path) -> bool {
    path.is_file()
}

/// Check if directory exists
pub fn directory_exists(path: &Path) -> bool {
    path.is_dir()
}
