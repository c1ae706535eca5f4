use crate::core::rules::{DerivationRules, OvernightPolicy};
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

pub mod migrate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_tolerance")]
    pub tolerance_minutes: i64,
    #[serde(default = "default_absent_after")]
    pub absent_after_minutes: i64,
    #[serde(default = "default_min_block")]
    pub min_block_percent: f64,
    #[serde(default = "default_min_lateness")]
    pub min_lateness_percent: f64,
    #[serde(default = "default_short_shift")]
    pub short_shift_max_minutes: i64,
    #[serde(default = "default_medium_shift")]
    pub medium_shift_max_minutes: i64,
    #[serde(default = "default_medium_break")]
    pub medium_shift_break_minutes: i64,
    #[serde(default = "default_long_break")]
    pub long_shift_break_minutes: i64,
    #[serde(default)]
    pub overnight_policy: OvernightPolicy,
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_secs: u64,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_data_dir() -> String {
    Config::config_dir().join("data").to_string_lossy().to_string()
}
fn default_tolerance() -> i64 {
    30
}
fn default_absent_after() -> i64 {
    60
}
fn default_min_block() -> f64 {
    1.0
}
fn default_min_lateness() -> f64 {
    2.5
}
fn default_short_shift() -> i64 {
    240
}
fn default_medium_shift() -> i64 {
    420
}
fn default_medium_break() -> i64 {
    30
}
fn default_long_break() -> i64 {
    60
}
fn default_refresh_interval() -> u64 {
    60
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            tolerance_minutes: default_tolerance(),
            absent_after_minutes: default_absent_after(),
            min_block_percent: default_min_block(),
            min_lateness_percent: default_min_lateness(),
            short_shift_max_minutes: default_short_shift(),
            medium_shift_max_minutes: default_medium_shift(),
            medium_shift_break_minutes: default_medium_break(),
            long_shift_break_minutes: default_long_break(),
            overnight_policy: OvernightPolicy::default(),
            refresh_interval_secs: default_refresh_interval(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if let Ok(dir) = env::var("ROTAVIEW_HOME") {
            return PathBuf::from(dir);
        }

        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rotaview")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rotaview")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rotaview.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_yaml::from_str(&content)
                .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
        } else {
            Ok(Config::default())
        }
    }

    /// Write the default configuration and create the data directory.
    /// With `is_test` the config file is left untouched.
    pub fn init_all(data_dir: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let mut config = Config::default();
        if let Some(custom) = data_dir {
            config.data_dir = custom;
        }

        if !is_test {
            let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
            fs::write(Self::config_file(), yaml).map_err(|_| AppError::ConfigSave)?;
        }

        fs::create_dir_all(config.data_path())?;
        Ok(config)
    }

    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_dir)
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }

    pub fn rules(&self) -> DerivationRules {
        DerivationRules {
            tolerance_minutes: self.tolerance_minutes,
            absent_after_minutes: self.absent_after_minutes,
            min_block_percent: self.min_block_percent,
            min_lateness_percent: self.min_lateness_percent,
            short_shift_max_minutes: self.short_shift_max_minutes,
            medium_shift_max_minutes: self.medium_shift_max_minutes,
            medium_shift_break_minutes: self.medium_shift_break_minutes,
            long_shift_break_minutes: self.long_shift_break_minutes,
            overnight: self.overnight_policy,
        }
    }
}
