//! Root presets
//!
//! The working directories the web application wires file managers to.

use std::fmt;

/// A named working directory configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RootPreset {
    /// Application root, `./`
    Application,
    /// Parent of the application root, `../`
    Admin,
    /// Publicly served uploads, `./files`
    Public,
    /// Static assets, `./static`
    Static,
}

impl RootPreset {
    pub const ALL: [RootPreset; 4] = [
        RootPreset::Application,
        RootPreset::Admin,
        RootPreset::Public,
        RootPreset::Static,
    ];

    /// Root directory used when no override is given
    pub fn default_root(self) -> &'static str {
        match self {
            RootPreset::Application => "./",
            RootPreset::Admin => "../",
            RootPreset::Public => "./files",
            RootPreset::Static => "./static",
        }
    }

    /// URL prefix the directory is served under, if any
    pub fn public_path(self) -> Option<&'static str> {
        match self {
            RootPreset::Public => Some("/file"),
            RootPreset::Static => Some("/static"),
            RootPreset::Application | RootPreset::Admin => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RootPreset::Application => "application",
            RootPreset::Admin => "admin",
            RootPreset::Public => "public",
            RootPreset::Static => "static",
        }
    }
}

impl fmt::Display for RootPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
