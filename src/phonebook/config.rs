use crate::error::{PhonebookError, Result};
use crate::store::DEFAULT_STORAGE_KEY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LOG_LEVEL: &str = "warn";
const LOG_LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

pub const KEYS: &[&str] = &["storage-key", "log-level"];

/// Configuration for the phonebook, stored in `<data_dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhonebookConfig {
    /// Key the contact list is persisted under (the data file stem)
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Default log filter when neither `PHONEBOOK_LOG` nor `--verbose` is given
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for PhonebookConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            log_level: default_log_level(),
        }
    }
}

impl PhonebookConfig {
    /// Load config from the given directory, or return defaults if not found.
    ///
    /// Values that fail validation are replaced by their defaults and logged.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let mut config = Self::read(config_dir)?;
        for problem in config.repair() {
            warn!(error = %problem, "ignoring invalid config value");
        }
        Ok(config)
    }

    /// Parse the config file as written, without checking its values.
    pub fn read<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(PhonebookError::Io)?;
        let config: PhonebookConfig =
            serde_json::from_str(&content).map_err(PhonebookError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(PhonebookError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(PhonebookError::Serialization)?;
        fs::write(config_path, content).map_err(PhonebookError::Io)?;
        Ok(())
    }

    /// Reset every invalid value to its default, returning why each was rejected.
    pub fn repair(&mut self) -> Vec<PhonebookError> {
        let mut problems = Vec::new();
        if let Err(e) = check_storage_key(&self.storage_key) {
            self.storage_key = default_storage_key();
            problems.push(e);
        }
        if let Err(e) = check_log_level(&self.log_level) {
            self.log_level = default_log_level();
            problems.push(e);
        }
        problems
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "storage-key" => Some(self.storage_key.clone()),
            "log-level" => Some(self.log_level.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "storage-key" => self.set_storage_key(value),
            "log-level" => self.set_log_level(value),
            other => Err(PhonebookError::Config(format!(
                "Unknown config key: {}",
                other
            ))),
        }
    }

    pub fn set_storage_key(&mut self, key: &str) -> Result<()> {
        self.storage_key = check_storage_key(key)?;
        Ok(())
    }

    pub fn set_log_level(&mut self, level: &str) -> Result<()> {
        self.log_level = check_log_level(level)?;
        Ok(())
    }
}

/// Storage keys become file names next to the config file, so they are
/// restricted to a safe alphabet and may not name the config file itself.
fn check_storage_key(key: &str) -> Result<String> {
    let key = key.trim();
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if !valid {
        return Err(PhonebookError::Config(format!(
            "Invalid storage key '{}': use letters, digits, '-', '_' or '.'",
            key
        )));
    }

    let stem = key.strip_suffix(".json").unwrap_or(key);
    if format!("{}.json", stem).eq_ignore_ascii_case(CONFIG_FILENAME) {
        return Err(PhonebookError::Config(format!(
            "Invalid storage key '{}': reserved for the config file",
            key
        )));
    }
    Ok(key.to_string())
}

fn check_log_level(level: &str) -> Result<String> {
    let level = level.trim().to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        return Err(PhonebookError::Config(format!(
            "Invalid log level '{}': expected one of {}",
            level,
            LOG_LEVELS.join(", ")
        )));
    }
    Ok(level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = PhonebookConfig::default();
        assert_eq!(config.storage_key, "contacts");
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = PhonebookConfig::load(dir.path()).unwrap();
        assert_eq!(config, PhonebookConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let mut config = PhonebookConfig::default();
        config.set("storage-key", "work").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = PhonebookConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.storage_key, "work");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"log_level": "debug"}"#).unwrap();

        let loaded = PhonebookConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.storage_key, "contacts");
        assert_eq!(loaded.log_level, "debug");
    }

    #[test]
    fn test_rejects_unsafe_storage_key() {
        let mut config = PhonebookConfig::default();
        assert!(config.set_storage_key("../escape").is_err());
        assert!(config.set_storage_key("").is_err());
        assert!(config.set_storage_key(".hidden").is_err());
        assert_eq!(config.storage_key, "contacts");
    }

    #[test]
    fn test_rejects_config_file_name_as_storage_key() {
        let mut config = PhonebookConfig::default();
        assert!(config.set_storage_key("config").is_err());
        assert!(config.set_storage_key("config.json").is_err());
        assert!(config.set_storage_key("CONFIG").is_err());
        assert_eq!(config.storage_key, "contacts");

        config.set_storage_key("config-backup").unwrap();
        assert_eq!(config.storage_key, "config-backup");
    }

    #[test]
    fn test_load_replaces_invalid_values_with_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{"storage_key": "../escape", "log_level": "loud"}"#,
        )
        .unwrap();

        let loaded = PhonebookConfig::load(dir.path()).unwrap();
        assert_eq!(loaded, PhonebookConfig::default());

        let mut raw = PhonebookConfig::read(dir.path()).unwrap();
        assert_eq!(raw.storage_key, "../escape");
        assert_eq!(raw.repair().len(), 2);
        assert_eq!(raw, PhonebookConfig::default());
    }

    #[test]
    fn test_load_rejects_config_file_as_storage_key() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"storage_key": "config"}"#).unwrap();

        let loaded = PhonebookConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.storage_key, "contacts");
    }

    #[test]
    fn test_log_level_is_normalized() {
        let mut config = PhonebookConfig::default();
        config.set("log-level", " DEBUG ").unwrap();
        assert_eq!(config.get("log-level"), Some("debug".to_string()));
        assert!(config.set("log-level", "loud").is_err());
    }

    #[test]
    fn test_unknown_key() {
        let mut config = PhonebookConfig::default();
        assert_eq!(config.get("colour"), None);
        assert!(matches!(
            config.set("colour", "red"),
            Err(PhonebookError::Config(_))
        ));
    }
}
