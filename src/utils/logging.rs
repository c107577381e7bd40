//! Logging utilities
//!
//! Sets up `env_logger` for applications embedding the file manager.

/// Setup logging, honouring `RUST_LOG`
pub fn setup_logging() {
    env_logger::init();
}

/// Setup logging unless a logger is already installed.
/// Test binaries call this from every test.
pub fn try_setup_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
