//! RAX file manager
//!
//! Root-anchored file access for the web application: each accessor resolves
//! paths against its working directory and reads, writes and lists files
//! below it.

pub mod config;
pub mod error;
pub mod storage;
pub mod utils;

pub use config::FileManagerConfig;
pub use error::FilesystemError;
pub use storage::{FileAccessor, PathResolver, RootPreset};
