//! Settings persistence.
//!
//! TOML file under the platform config directory
//! (`<config_dir>/plotkit/config.toml`). A missing file yields
//! defaults; a present but invalid file is an error so a typo never
//! silently reverts the user to defaults.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::Config;
use crate::error::{SettingsError, SettingsResult};

const APP_DIR: &str = "plotkit";
const CONFIG_FILE: &str = "config.toml";

/// Platform path of the persisted configuration file.
pub fn config_path() -> SettingsResult<PathBuf> {
    let base = dirs::config_dir()
        .ok_or_else(|| SettingsError::ConfigDirectory("no platform config dir".to_string()))?;
    Ok(base.join(APP_DIR).join(CONFIG_FILE))
}

/// Load settings from the default location.
pub fn load() -> SettingsResult<Config> {
    load_from(&config_path()?)
}

/// Load settings from an explicit path, defaulting when absent.
pub fn load_from(path: &Path) -> SettingsResult<Config> {
    if !path.exists() {
        debug!(path = %path.display(), "no settings file, using defaults");
        return Ok(Config::default());
    }
    let text = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&text)?;
    config.validate()?;
    Ok(config)
}

/// Save settings to the default location, creating the directory.
pub fn save(config: &Config) -> SettingsResult<()> {
    save_to(config, &config_path()?)
}

/// Save settings to an explicit path.
pub fn save_to(config: &Config, path: &Path) -> SettingsResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let text =
        toml::to_string_pretty(config).map_err(|e| SettingsError::SaveError(e.to_string()))?;
    fs::write(path, text)?;
    debug!(path = %path.display(), "settings saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.machine.host = "192.168.1.40".to_string();
        config.plot.optimize = true;

        save_to(&config, &path).unwrap();
        let loaded = load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "not = valid = toml").unwrap();
        assert!(matches!(
            load_from(&path),
            Err(SettingsError::TomlError(_))
        ));
    }

    #[test]
    fn test_invalid_values_rejected_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[plot]\nfeed_rate = 0\n").unwrap();
        assert!(matches!(load_from(&path), Err(SettingsError::Invalid(_))));
    }
}
