//! Configuration management for the file manager layer
//!
//! Root directories for each preset can be overridden from a TOML file and
//! from `RAX_FS_*` environment variables. Anything left unset falls back to
//! the preset default.

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::FilesystemError;
use crate::storage::{FileAccessor, RootPreset};

/// Config file read by [`FileManagerConfig::load`], relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "file-manager.toml";

/// Prefix for environment overrides, e.g. `RAX_FS_ROOTS_PUBLIC=/srv/files`
pub const ENV_PREFIX: &str = "RAX_FS";

/// Complete file manager configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct FileManagerConfig {
    #[serde(default)]
    pub roots: RootOverrides,
}

/// Per-preset root directory overrides
#[derive(Debug, Deserialize, Clone, Default)]
pub struct RootOverrides {
    /// Environment: RAX_FS_ROOTS_APPLICATION
    pub application: Option<String>,

    /// Environment: RAX_FS_ROOTS_ADMIN
    pub admin: Option<String>,

    /// Environment: RAX_FS_ROOTS_PUBLIC
    pub public: Option<String>,

    /// Environment: RAX_FS_ROOTS_STATIC
    #[serde(rename = "static")]
    pub static_files: Option<String>,
}

impl RootOverrides {
    fn get(&self, preset: RootPreset) -> Option<&str> {
        match preset {
            RootPreset::Application => self.application.as_deref(),
            RootPreset::Admin => self.admin.as_deref(),
            RootPreset::Public => self.public.as_deref(),
            RootPreset::Static => self.static_files.as_deref(),
        }
    }
}

impl FileManagerConfig {
    /// Load configuration from `file-manager.toml` with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    /// Load configuration from `path` with environment overrides.
    /// A missing file is not an error.
    pub fn load_from(path: &str) -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("_"))
            .build()?;

        let config: FileManagerConfig = settings.try_deserialize()?;
        config.validate()?;

        log::debug!("Loaded file manager configuration from {}: {:?}", path, config);
        Ok(config)
    }

    /// Effective root directory for `preset`
    pub fn root_for(&self, preset: RootPreset) -> &str {
        self.roots
            .get(preset)
            .unwrap_or_else(|| preset.default_root())
    }

    /// Build the accessor for `preset` using the configured root
    pub fn accessor(&self, preset: RootPreset) -> Result<FileAccessor, FilesystemError> {
        FileAccessor::with_preset(preset, Some(self.root_for(preset)))
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        for preset in RootPreset::ALL {
            if self.roots.get(preset).is_some_and(|root| root.trim().is_empty()) {
                return Err(config::ConfigError::Message(format!(
                    "roots.{} cannot be empty",
                    preset
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn defaults_apply_without_overrides() {
        let config = FileManagerConfig::default();
        for preset in RootPreset::ALL {
            assert_eq!(config.root_for(preset), preset.default_root());
        }
    }

    #[test]
    fn missing_file_yields_defaults() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("absent.toml");

        let config = FileManagerConfig::load_from(&path.to_string_lossy()).expect("load");
        assert_eq!(config.root_for(RootPreset::Static), "./static");
    }

    #[test]
    fn file_overrides_selected_roots() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("file-manager.toml");
        fs::write(
            &path,
            "[roots]\npublic = \"/srv/uploads\"\nstatic = \"/srv/assets\"\n",
        )
        .expect("write config");

        let config = FileManagerConfig::load_from(&path.to_string_lossy()).expect("load");
        assert_eq!(config.root_for(RootPreset::Public), "/srv/uploads");
        assert_eq!(config.root_for(RootPreset::Static), "/srv/assets");
        assert_eq!(config.root_for(RootPreset::Application), "./");
    }

    #[test]
    fn empty_roots_are_rejected() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("file-manager.toml");
        fs::write(&path, "[roots]\nadmin = \"\"\n").expect("write config");

        let err = FileManagerConfig::load_from(&path.to_string_lossy()).unwrap_err();
        assert!(err.to_string().contains("roots.admin"));
    }

    #[test]
    fn accessor_uses_the_configured_root() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let root = tmp.path().join("uploads").to_string_lossy().into_owned();
        let config = FileManagerConfig {
            roots: RootOverrides {
                public: Some(root.clone()),
                ..Default::default()
            },
        };

        let accessor = config.accessor(RootPreset::Public).expect("accessor");
        assert_eq!(accessor.root_dir(), root);
        assert_eq!(accessor.public_path(), Some("/file"));
        assert!(tmp.path().join("uploads").is_dir());
    }
}
