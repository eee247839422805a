//! Shell preferences stored as JSON under the application directory.
//!
//! Only display and logging preferences live here; ledger data is never written to disk.

use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::errors::ConfigError;
use crate::utils::paths::{app_data_dir, config_file_in};

const TMP_SUFFIX: &str = "tmp";

/// Keys accepted by [`Config::set`], in display order.
pub const CONFIG_KEYS: [&str; 4] = [
    "screen_reader_mode",
    "high_contrast_mode",
    "quiet_mode",
    "log_filter",
];

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub screen_reader_mode: bool,
    #[serde(default)]
    pub high_contrast_mode: bool,
    #[serde(default)]
    pub quiet_mode: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

impl Config {
    /// Updates a single preference from its textual form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key.to_ascii_lowercase().as_str() {
            "screen_reader_mode" => self.screen_reader_mode = parse_flag(key, value)?,
            "high_contrast_mode" => self.high_contrast_mode = parse_flag(key, value)?,
            "quiet_mode" => self.quiet_mode = parse_flag(key, value)?,
            "log_filter" => {
                let trimmed = value.trim();
                self.log_filter = if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
                    None
                } else {
                    Some(trimmed.to_string())
                };
            }
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        Ok(())
    }

    /// `(key, value)` pairs for display.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("screen_reader_mode", on_off(self.screen_reader_mode)),
            ("high_contrast_mode", on_off(self.high_contrast_mode)),
            ("quiet_mode", on_off(self.quiet_mode)),
            (
                "log_filter",
                self.log_filter
                    .clone()
                    .unwrap_or_else(|| "(default)".to_string()),
            ),
        ]
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

fn on_off(flag: bool) -> String {
    if flag { "on" } else { "off" }.to_string()
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, ConfigError> {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, ConfigError> {
        Ok(Self {
            path: config_file_in(&base),
        })
    }

    /// Reads the preferences file, falling back to defaults when it does not exist.
    pub fn load(&self) -> Result<Config, ConfigError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_all(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_all(path: &Path, data: &str) -> Result<(), ConfigError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
