use crate::domain::Semver;
use crate::error::{Result, VermanError};
use crate::store::file::DEFAULT_VERSION_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming a settings file.
pub const SETTINGS_ENV: &str = "VERMAN_CONFIG";

/// Settings file looked up in the current directory.
pub const LOCAL_SETTINGS_FILE: &str = "semver.toml";

/// Tool settings for verman.
///
/// Controls where the version file lives and how versions are published to
/// git. The version itself is not stored here.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Settings {
    #[serde(default = "default_version_file")]
    pub version_file: PathBuf,

    #[serde(default)]
    pub git: GitSettings,
}

fn default_version_file() -> PathBuf {
    PathBuf::from(DEFAULT_VERSION_FILE)
}

fn default_commit_message() -> String {
    "chore(release): {version}".to_string()
}

fn default_true() -> bool {
    true
}

/// Settings for committing and tagging new versions.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GitSettings {
    /// Commit message template; `{version}` is replaced by the version.
    #[serde(default = "default_commit_message")]
    pub commit_message: String,

    /// Commit the version file and tag after writing it.
    #[serde(default = "default_true")]
    pub tag_on_sync: bool,
}

impl GitSettings {
    pub fn commit_message_for(&self, version: &Semver) -> String {
        self.commit_message
            .replace("{version}", &version.to_string())
    }
}

impl Default for GitSettings {
    fn default() -> Self {
        GitSettings {
            commit_message: default_commit_message(),
            tag_on_sync: true,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            version_file: default_version_file(),
            git: GitSettings::default(),
        }
    }
}

/// Loads settings from file or returns defaults.
///
/// Attempts to load settings in the following order:
/// 1. Custom path provided as parameter
/// 2. Path in the `VERMAN_CONFIG` environment variable
/// 3. `semver.toml` in current directory
/// 4. `verman/config.toml` in user config directory
/// 5. Default settings if no file found
///
/// # Returns
/// * `Ok(Settings)` - Loaded or default settings
/// * `Err` - If a file was named explicitly but is missing, or a file exists
///   but cannot be read or parsed
pub fn load_settings(settings_path: Option<&Path>) -> Result<Settings> {
    if let Some(path) = settings_path {
        return read_settings(path);
    }

    if let Some(path) = std::env::var_os(SETTINGS_ENV) {
        return read_settings(Path::new(&path));
    }

    let local = Path::new(LOCAL_SETTINGS_FILE);
    if local.is_file() {
        return read_settings(local);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let user = config_dir.join("verman").join("config.toml");
        if user.is_file() {
            return read_settings(&user);
        }
    }

    Ok(Settings::default())
}

fn read_settings(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path).map_err(|e| {
        VermanError::settings(format!("cannot read {}: {}", path.display(), e))
    })?;

    toml::from_str(&content)
        .map_err(|e| VermanError::settings(format!("cannot parse {}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.version_file, PathBuf::from(".version.toml"));
        assert!(settings.git.tag_on_sync);
    }

    #[test]
    fn test_commit_message_template() {
        let git = GitSettings::default();
        let message = git.commit_message_for(&Semver::parse("v1.2.0-rc.1").unwrap());
        assert_eq!(message, "chore(release): v1.2.0-rc.1");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let settings: Settings = toml::from_str("[git]\ntag_on_sync = false\n").unwrap();
        assert!(!settings.git.tag_on_sync);
        assert_eq!(settings.git.commit_message, "chore(release): {version}");
        assert_eq!(settings.version_file, PathBuf::from(".version.toml"));
    }
}
