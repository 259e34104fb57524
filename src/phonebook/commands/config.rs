use crate::commands::{CmdMessage, CmdResult};
use crate::config::PhonebookConfig;
use crate::error::{PhonebookError, Result};
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = PhonebookConfig::load(config_dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = PhonebookConfig::load(config_dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = PhonebookConfig::load(config_dir)?;
            if let Err(e) = config.set(&key, &value) {
                let mut result = CmdResult::default();
                let message = match e {
                    PhonebookError::Config(message) => message,
                    other => other.to_string(),
                };
                result.add_message(CmdMessage::error(message));
                return Ok(result);
            }
            config.save(config_dir)?;
            let display_val = config.get(&key).unwrap_or(value);
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}
