//! Error handlers
//!
//! Logs failures at the point they are returned to the caller.

use crate::error::types::FilesystemError;
use log::error;

/// Log a file manager error and hand it back for propagation
pub fn log_failure(err: FilesystemError) -> FilesystemError {
    match std::error::Error::source(&err) {
        Some(cause) => error!("{}: {}", err, cause),
        None => error!("{}", err),
    }
    err
}
