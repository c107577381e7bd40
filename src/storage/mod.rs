//! File storage
//!
//! Root-anchored file access: path resolution, presets and the accessor itself.

pub mod accessor;
pub mod filesystem;
pub mod presets;
pub mod resolve;

pub use accessor::FileAccessor;
pub use presets::RootPreset;
pub use resolve::PathResolver;
